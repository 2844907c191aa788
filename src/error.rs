//! Error types for the archive OS utility layer.

use crate::types::HostSystem;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by path, directory, attribute and stream operations.
#[derive(Debug, Error)]
pub enum ArchError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Failed to allocate {requested} bytes")]
    Allocation { requested: usize },

    #[error("Not a directory: attributes {attributes:#o} from host {host}")]
    NotADirectory { attributes: u32, host: HostSystem },

    #[error("Path exceeds capacity: {required} bytes required, capacity is {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ArchError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArchError::Io {
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error kind, when this is a propagated I/O failure.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            ArchError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for ArchError {
    fn from(err: config::ConfigError) -> Self {
        ArchError::ConfigError(err.to_string())
    }
}

/// Reserve a zeroed buffer of `len` bytes, reporting allocation failure
/// instead of aborting.
pub(crate) fn try_alloc_buffer(len: usize) -> Result<Vec<u8>, ArchError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| ArchError::Allocation { requested: len })?;
    buf.resize(len, 0);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_kind_only_for_io_errors() {
        let err = ArchError::io(
            "a/b",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::PermissionDenied));
        assert!(err.to_string().contains("a/b"));

        let err = ArchError::InvalidParameter("capacity".to_string());
        assert_eq!(err.io_kind(), None);
    }

    #[test]
    fn test_try_alloc_buffer() {
        let buf = try_alloc_buffer(16).unwrap();
        assert_eq!(buf.len(), 16);
        assert!(buf.iter().all(|b| *b == 0));

        let err = try_alloc_buffer(usize::MAX).unwrap_err();
        assert!(matches!(err, ArchError::Allocation { .. }));
    }
}
