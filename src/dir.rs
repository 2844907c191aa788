//! Recursive directory creation
//!
//! Creates a full directory path with a single direct attempt first, then
//! falls back to creating each ancestor from the root down when that fails.

use crate::error::ArchError;
use crate::path::is_separator;
use std::path::Path;
use tracing::debug;

/// Single-directory creation primitive supplied by the host.
pub trait DirectoryPrimitive {
    /// Create one directory level. Parents are expected to exist.
    fn create_directory(&self, path: &str) -> Result<(), ArchError>;
}

impl<T: DirectoryPrimitive + ?Sized> DirectoryPrimitive for &T {
    fn create_directory(&self, path: &str) -> Result<(), ArchError> {
        (**self).create_directory(path)
    }
}

/// Primitive backed by `std::fs::create_dir`.
///
/// A directory that already exists counts as created.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDirectoryPrimitive;

impl DirectoryPrimitive for StdDirectoryPrimitive {
    fn create_directory(&self, path: &str) -> Result<(), ArchError> {
        match std::fs::create_dir(path) {
            Ok(()) => Ok(()),
            Err(e)
                if e.kind() == std::io::ErrorKind::AlreadyExists && Path::new(path).is_dir() =>
            {
                Ok(())
            }
            Err(e) => Err(ArchError::io(path, e)),
        }
    }
}

/// Ensure `path` exists as a directory on the local filesystem.
pub fn ensure_directory(path: &str) -> Result<(), ArchError> {
    ensure_directory_with(&StdDirectoryPrimitive, path)
}

/// Ensure `path` exists using `primitive` for each creation attempt.
///
/// An empty path succeeds without touching the primitive, as does one that is
/// only a single separator. One trailing separator is ignored. If the direct
/// attempt fails, prefixes ending at each separator are created in order; the
/// first failure there is returned and ancestors already created are left in
/// place. Empty prefixes (leading or repeated separators) are skipped. When no
/// prefix is left to try, the direct attempt's error is returned.
pub fn ensure_directory_with<P: DirectoryPrimitive + ?Sized>(
    primitive: &P,
    path: &str,
) -> Result<(), ArchError> {
    if path.is_empty() {
        return Ok(());
    }

    let mut current = String::new();
    current
        .try_reserve_exact(path.len())
        .map_err(|_| ArchError::Allocation {
            requested: path.len(),
        })?;
    current.push_str(path);
    if current.ends_with(is_separator) {
        current.pop();
    }
    if current.is_empty() {
        return Ok(());
    }

    let direct = match primitive.create_directory(&current) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };
    debug!(
        path = %current,
        error = %direct,
        "Direct directory creation failed, creating ancestors"
    );

    let mut boundaries: Vec<usize> = current
        .char_indices()
        .skip(1)
        .filter(|(_, c)| is_separator(*c))
        .map(|(i, _)| i)
        .collect();
    boundaries.push(current.len());

    let mut attempted = false;
    for end in boundaries {
        let prefix = &current[..end];
        if prefix.is_empty() || prefix.ends_with(is_separator) {
            continue;
        }
        debug!(prefix = %prefix, "Creating directory level");
        primitive.create_directory(prefix)?;
        attempted = true;
    }

    if attempted {
        Ok(())
    } else {
        Err(direct)
    }
}
