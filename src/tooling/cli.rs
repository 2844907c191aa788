//! CLI Tooling
//!
//! Command-line interface over the utility layer: directory creation, path
//! joining, attribute classification and file checksums.

use crate::attrib;
use crate::checksum::{ChecksumOutcome, ChecksumPipeline};
use crate::config::{ArchConfig, ConfigLoader};
use crate::dir::ensure_directory;
use crate::error::ArchError;
use crate::path::PathBuffer;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

/// archutil - OS-facing utilities for archive handling
#[derive(Parser)]
#[command(name = "archutil")]
#[command(about = "Directory creation, path joining, attribute checks and file checksums")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a directory and any missing parents
    Mkdir {
        /// Directory path to create
        path: String,
    },
    /// Join a segment onto a base path
    Join {
        base: String,
        segment: String,
        /// Maximum length of the joined path in bytes (default: paths.max_path)
        #[arg(long)]
        capacity: Option<usize>,
    },
    /// Check whether an attribute word denotes a directory
    IsDir {
        /// Attribute word (decimal, 0x hex, or 0o octal)
        #[arg(value_parser = parse_u32)]
        attributes: u32,
        /// "Version made by" word; 0 means this host
        #[arg(long, default_value = "0", value_parser = parse_u16)]
        version_made_by: u16,
    },
    /// Compute the CRC-32 of a file
    Checksum {
        path: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn parse_radix(value: &str) -> Result<u64, String> {
    let value = value.trim();
    let parsed = if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else if let Some(oct) = value.strip_prefix("0o").or_else(|| value.strip_prefix("0O")) {
        u64::from_str_radix(oct, 8)
    } else {
        value.parse::<u64>()
    };
    parsed.map_err(|e| format!("invalid number '{}': {}", value, e))
}

fn parse_u32(value: &str) -> Result<u32, String> {
    let n = parse_radix(value)?;
    u32::try_from(n).map_err(|_| format!("{} does not fit in 32 bits", value))
}

fn parse_u16(value: &str) -> Result<u16, String> {
    let n = parse_radix(value)?;
    u16::try_from(n).map_err(|_| format!("{} does not fit in 16 bits", value))
}

/// Failure of a CLI command.
///
/// A checksum failure still carries the partial value so it can be reported.
#[derive(Debug)]
pub struct CommandError {
    pub error: ArchError,
    pub output: Option<String>,
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<ArchError> for CommandError {
    fn from(error: ArchError) -> Self {
        Self {
            error,
            output: None,
        }
    }
}

/// CLI context holding the loaded configuration
pub struct CliContext {
    config: ArchConfig,
    pipeline: ChecksumPipeline,
}

impl CliContext {
    /// Load configuration (file if given, then environment) and build the context.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ArchError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => ConfigLoader::load(None)?,
        };
        Self::with_config(config)
    }

    pub fn with_config(config: ArchConfig) -> Result<Self, ArchError> {
        config.validate()?;
        let pipeline = ChecksumPipeline::default().with_buffer_size(config.io.buffer_size)?;
        Ok(Self { config, pipeline })
    }

    pub fn config(&self) -> &ArchConfig {
        &self.config
    }

    /// Execute a command, returning the text to print.
    pub fn execute(&self, command: &Commands) -> Result<String, CommandError> {
        match command {
            Commands::Mkdir { path } => {
                ensure_directory(path)?;
                info!(path = %path, "Directory ensured");
                Ok(format!("Directory ready: {}", path))
            }
            Commands::Join {
                base,
                segment,
                capacity,
            } => {
                let capacity = capacity.unwrap_or(self.config.paths.max_path);
                let mut joined = PathBuffer::with_initial(base, capacity)?;
                joined.join(segment)?;
                Ok(joined.into_string())
            }
            Commands::IsDir {
                attributes,
                version_made_by,
            } => {
                let host = attrib::host_system(*version_made_by);
                let is_dir = attrib::is_directory(*attributes, *version_made_by);
                Ok(format!(
                    "{} ({} attributes {:#o})",
                    if is_dir { "directory" } else { "not a directory" },
                    host,
                    attributes
                ))
            }
            Commands::Checksum { path, format } => {
                if format != "text" && format != "json" {
                    return Err(CommandError::from(ArchError::InvalidParameter(format!(
                        "Invalid format: {} (must be 'text' or 'json')",
                        format
                    ))));
                }
                let outcome = self.pipeline.compute(path);
                info!(
                    path = %path.display(),
                    value = outcome.value,
                    bytes = outcome.bytes_read,
                    ok = outcome.is_ok(),
                    "Checksum computed"
                );
                let output = format_checksum(path, &outcome, format);
                match outcome.error {
                    Some(error) => Err(CommandError {
                        error,
                        output: Some(output),
                    }),
                    None => Ok(output),
                }
            }
            Commands::Config => toml::to_string_pretty(&self.config).map_err(|e| {
                CommandError::from(ArchError::ConfigError(format!(
                    "Failed to serialize config: {}",
                    e
                )))
            }),
        }
    }
}

fn format_checksum(path: &std::path::Path, outcome: &ChecksumOutcome, format: &str) -> String {
    let value_hex = hex::encode(outcome.value.to_be_bytes());
    if format == "json" {
        let body = json!({
            "path": path.display().to_string(),
            "algorithm": "crc32",
            "value": outcome.value,
            "hex": value_hex,
            "bytes_read": outcome.bytes_read,
            "error": outcome.error.as_ref().map(|e| e.to_string()),
        });
        body.to_string()
    } else {
        format!("{}  {}", value_hex, path.display())
    }
}
