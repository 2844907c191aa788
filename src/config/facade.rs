//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::ArchConfig;
use crate::error::ArchError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the optional file and environment.
    pub fn load(config_file: Option<&Path>) -> Result<ArchConfig, ArchError> {
        let config = MergeService::load(config_file)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file, which must exist.
    pub fn load_from_file(path: &Path) -> Result<ArchConfig, ArchError> {
        if !path.is_file() {
            return Err(ArchError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Self::load(Some(path))
    }
}
