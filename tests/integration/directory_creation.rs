use archutil::dir::{
    ensure_directory, ensure_directory_with, DirectoryPrimitive, StdDirectoryPrimitive,
};
use archutil::ArchError;
use std::cell::RefCell;
use tempfile::TempDir;

fn path_str(temp_dir: &TempDir, rel: &str) -> String {
    temp_dir.path().join(rel).to_string_lossy().into_owned()
}

/// Records each attempt, then delegates to the real filesystem.
struct Recording {
    calls: RefCell<Vec<String>>,
}

impl DirectoryPrimitive for Recording {
    fn create_directory(&self, path: &str) -> Result<(), ArchError> {
        self.calls.borrow_mut().push(path.to_string());
        StdDirectoryPrimitive.create_directory(path)
    }
}

/// Refuses one directory, creating everything else for real.
struct Refusing {
    refused: String,
}

impl DirectoryPrimitive for Refusing {
    fn create_directory(&self, path: &str) -> Result<(), ArchError> {
        if path == self.refused {
            return Err(ArchError::io(
                path,
                std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            ));
        }
        StdDirectoryPrimitive.create_directory(path)
    }
}

#[test]
fn empty_path_succeeds() {
    ensure_directory("").unwrap();
}

#[test]
fn creates_all_missing_levels_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let target = path_str(&temp_dir, "a/b/c");
    let recording = Recording {
        calls: RefCell::new(Vec::new()),
    };

    ensure_directory_with(&recording, &target).unwrap();

    assert!(temp_dir.path().join("a/b/c").is_dir());
    let calls = recording.calls.borrow();
    let expected_tail = [
        path_str(&temp_dir, "a"),
        path_str(&temp_dir, "a/b"),
        path_str(&temp_dir, "a/b/c"),
    ];
    assert_eq!(calls.first(), Some(&target));
    assert_eq!(&calls[calls.len() - 3..], &expected_tail[..]);
}

#[test]
fn existing_directory_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let target = path_str(&temp_dir, "x/y");
    ensure_directory(&target).unwrap();
    ensure_directory(&target).unwrap();
    ensure_directory(&format!("{}/", target)).unwrap();
    assert!(temp_dir.path().join("x/y").is_dir());
}

#[test]
fn failure_mid_walk_keeps_created_ancestors() {
    let temp_dir = TempDir::new().unwrap();
    let refusing = Refusing {
        refused: path_str(&temp_dir, "a/b"),
    };

    let err = ensure_directory_with(&refusing, &path_str(&temp_dir, "a/b/c")).unwrap_err();

    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::PermissionDenied));
    assert!(temp_dir.path().join("a").is_dir());
    assert!(!temp_dir.path().join("a/b").exists());
    assert!(!temp_dir.path().join("a/b/c").exists());
}

#[test]
fn file_in_the_way_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("blocker"), b"file").unwrap();

    let err = ensure_directory(&path_str(&temp_dir, "blocker/child")).unwrap_err();
    assert!(err.io_kind().is_some());
}
