//! Checksums
//!
//! A checksum backend is a strategy that folds byte chunks into a running
//! 32-bit value. [`ChecksumStream`] applies it to every byte passing through a
//! stream chain, and [`ChecksumPipeline`] drives a whole file through one.

pub mod filter;
pub mod pipeline;

pub use filter::ChecksumStream;
pub use pipeline::{compute_checksum, ChecksumOutcome, ChecksumPipeline};

use std::sync::Arc;

/// Incremental 32-bit checksum strategy.
pub trait ChecksumUpdate {
    /// Value before any bytes are processed.
    fn initial(&self) -> u32 {
        0
    }

    /// Fold `bytes` into `value`.
    fn update(&self, value: u32, bytes: &[u8]) -> u32;

    fn name(&self) -> &'static str;
}

impl<T: ChecksumUpdate + ?Sized> ChecksumUpdate for &T {
    fn initial(&self) -> u32 {
        (**self).initial()
    }

    fn update(&self, value: u32, bytes: &[u8]) -> u32 {
        (**self).update(value, bytes)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: ChecksumUpdate + ?Sized> ChecksumUpdate for Arc<T> {
    fn initial(&self) -> u32 {
        (**self).initial()
    }

    fn update(&self, value: u32, bytes: &[u8]) -> u32 {
        (**self).update(value, bytes)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// CRC-32 (IEEE, as used by zip and zlib) via `crc32fast`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crc32;

impl ChecksumUpdate for Crc32 {
    fn update(&self, value: u32, bytes: &[u8]) -> u32 {
        let mut hasher = crc32fast::Hasher::new_with_initial(value);
        hasher.update(bytes);
        hasher.finalize()
    }

    fn name(&self) -> &'static str {
        "crc32"
    }
}
