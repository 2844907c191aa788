//! Source merging.

pub mod service;
