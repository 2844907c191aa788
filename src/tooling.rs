//! Tooling Layer
//!
//! Command-line access to the utility layer.

pub mod cli;

pub use cli::{Cli, CliContext, CommandError, Commands};
