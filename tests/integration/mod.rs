//! Integration tests against the real filesystem

mod checksum_pipeline;
mod cli_contracts;
mod directory_creation;
