//! Configuration
//!
//! Layered configuration for the utility layer: built-in defaults, then an
//! optional TOML file, then `ARCHUTIL_*` environment variables.

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::checksum::pipeline::DEFAULT_BUFFER_SIZE;
use crate::error::ArchError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "ARCHUTIL";

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

fn default_max_path() -> usize {
    1024
}

/// Stream I/O settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoConfig {
    /// Chunk size for checksum reads, in bytes
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

/// Path handling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Capacity of joined paths, in bytes
    #[serde(default = "default_max_path")]
    pub max_path: usize,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            max_path: default_max_path(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchConfig {
    #[serde(default)]
    pub io: IoConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ArchConfig {
    pub fn validate(&self) -> Result<(), ArchError> {
        if self.io.buffer_size == 0 {
            return Err(ArchError::ConfigError(
                "io.buffer_size must be greater than zero".to_string(),
            ));
        }
        if self.paths.max_path == 0 {
            return Err(ArchError::ConfigError(
                "paths.max_path must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
