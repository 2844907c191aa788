//! MergeService: orchestrates sources and deserializes to ArchConfig.

use crate::config::sources::{environment, file};
use crate::config::ArchConfig;
use config::{Config, ConfigError};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> config file -> environment (highest).
    pub fn load(config_file: Option<&Path>) -> Result<ArchConfig, ConfigError> {
        let builder = Config::builder().add_source(Config::try_from(&ArchConfig::default())?);
        let builder = match config_file {
            Some(path) => file::add_to_builder(builder, path)?,
            None => builder,
        };
        let builder = environment::add_to_builder(builder)?;

        builder.build()?.try_deserialize()
    }
}
