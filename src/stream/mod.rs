//! Byte Streams
//!
//! Streams are composable byte sources and sinks. A base stream talks to a
//! real resource (a file, a memory buffer); a filter stream is bound to a base
//! and observes or transforms the bytes passing through it. A filter borrows
//! its base and never owns it, so the caller that opened the base also closes
//! and drops it.

pub mod memory;
pub mod os;

pub use memory::MemoryStream;
pub use os::OsStream;

use crate::error::ArchError;
use crate::types::OpenMode;
use std::path::Path;

/// Byte stream capability.
///
/// Resources are released on drop; `close` exists so callers can observe
/// close failures and reuse a stream handle.
pub trait Stream {
    /// Open the stream. Filters ignore `path` and take their bytes from
    /// their base.
    fn open(&mut self, path: Option<&Path>, mode: OpenMode) -> Result<(), ArchError>;

    fn is_open(&self) -> bool;

    /// Read up to `buf.len()` bytes. `Ok(0)` signals end of stream.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ArchError>;

    /// Write up to `buf.len()` bytes, returning how many were accepted.
    fn write(&mut self, buf: &[u8]) -> Result<usize, ArchError>;

    fn close(&mut self) -> Result<(), ArchError>;
}

impl<S: Stream + ?Sized> Stream for &mut S {
    fn open(&mut self, path: Option<&Path>, mode: OpenMode) -> Result<(), ArchError> {
        (**self).open(path, mode)
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ArchError> {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize, ArchError> {
        (**self).write(buf)
    }

    fn close(&mut self) -> Result<(), ArchError> {
        (**self).close()
    }
}

pub(crate) fn not_open(what: &str) -> ArchError {
    ArchError::Stream(format!("{} is not open", what))
}
