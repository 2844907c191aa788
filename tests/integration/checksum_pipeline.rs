use archutil::checksum::{compute_checksum, ChecksumPipeline};
use archutil::ArchError;
use tempfile::TempDir;

#[test]
fn empty_file_yields_initial_value() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.bin");
    std::fs::write(&path, b"").unwrap();

    let outcome = compute_checksum(&path);
    assert!(outcome.is_ok());
    assert_eq!(outcome.value, 0);
    assert_eq!(outcome.bytes_read, 0);
}

#[test]
fn known_contents_match_reference_value() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("check.txt");
    std::fs::write(&path, b"123456789").unwrap();

    assert_eq!(compute_checksum(&path).into_result().unwrap(), 0xCBF4_3926);
}

#[test]
fn chunk_size_does_not_change_result() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("large.bin");
    let data: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
    std::fs::write(&path, &data).unwrap();

    let expected = crc32fast::hash(&data);
    for buffer_size in [1, 7, 4096, 32767, 200_000] {
        let pipeline = ChecksumPipeline::default()
            .with_buffer_size(buffer_size)
            .unwrap();
        let outcome = pipeline.compute(&path);
        assert!(outcome.is_ok(), "buffer size {}", buffer_size);
        assert_eq!(outcome.value, expected, "buffer size {}", buffer_size);
        assert_eq!(outcome.bytes_read, data.len() as u64);
    }
}

#[test]
fn missing_file_reports_open_error_and_initial_value() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.bin");

    let outcome = compute_checksum(&path);
    assert_eq!(outcome.value, 0);
    assert_eq!(outcome.bytes_read, 0);
    match outcome.error {
        Some(ArchError::Io { path: err_path, source }) => {
            assert_eq!(err_path, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected open error, got {:?}", other),
    }
}

#[test]
fn directory_path_reports_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let outcome = compute_checksum(temp_dir.path());
    assert!(outcome.error.is_some());
    assert_eq!(outcome.value, 0);
}
