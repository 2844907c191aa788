use archutil::config::ArchConfig;
use archutil::tooling::cli::{CliContext, Commands};
use archutil::ArchError;
use tempfile::TempDir;

fn context() -> CliContext {
    CliContext::with_config(ArchConfig::default()).unwrap()
}

#[test]
fn mkdir_creates_nested_directories() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("one/two/three");

    let output = context()
        .execute(&Commands::Mkdir {
            path: target.to_string_lossy().into_owned(),
        })
        .unwrap();

    assert!(output.contains("three"));
    assert!(target.is_dir());
}

#[test]
fn checksum_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("check.txt");
    std::fs::write(&path, b"123456789").unwrap();

    let output = context()
        .execute(&Commands::Checksum {
            path: path.clone(),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("value").and_then(|v| v.as_u64()), Some(0xCBF4_3926));
    assert_eq!(parsed.get("hex").and_then(|v| v.as_str()), Some("cbf43926"));
    assert_eq!(parsed.get("bytes_read").and_then(|v| v.as_u64()), Some(9));
    assert_eq!(parsed.get("algorithm").and_then(|v| v.as_str()), Some("crc32"));
    assert!(parsed.get("error").map(|v| v.is_null()).unwrap_or(false));
}

#[test]
fn checksum_of_missing_file_still_reports_value() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.txt");

    let err = context()
        .execute(&Commands::Checksum {
            path,
            format: "text".to_string(),
        })
        .unwrap_err();

    assert_eq!(err.error.io_kind(), Some(std::io::ErrorKind::NotFound));
    let output = err.output.expect("value is reported alongside the error");
    assert!(output.starts_with("00000000"));
}

#[test]
fn checksum_rejects_unknown_format() {
    let err = context()
        .execute(&Commands::Checksum {
            path: "anything".into(),
            format: "xml".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err.error, ArchError::InvalidParameter(_)));
}

#[test]
fn config_command_prints_toml() {
    let output = context().execute(&Commands::Config).unwrap();
    let parsed: ArchConfig = toml::from_str(&output).unwrap();
    assert_eq!(parsed.io.buffer_size, 32767);
    assert_eq!(parsed.paths.max_path, 1024);
}

#[test]
fn config_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("archutil.toml");
    std::fs::write(&config_path, "[io]\nbuffer_size = 64\n\n[paths]\nmax_path = 8\n").unwrap();

    let ctx = CliContext::new(Some(config_path)).unwrap();
    assert_eq!(ctx.config().io.buffer_size, 64);
    assert_eq!(ctx.config().paths.max_path, 8);

    let err = ctx
        .execute(&Commands::Join {
            base: "abcd".to_string(),
            segment: "efgh".to_string(),
            capacity: None,
        })
        .unwrap_err();
    assert!(matches!(err.error, ArchError::CapacityExceeded { .. }));
}

#[test]
fn missing_config_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = CliContext::new(Some(temp_dir.path().join("nope.toml")));
    assert!(matches!(result, Err(ArchError::ConfigError(_))));
}
