//! Checksum filter stream.

use super::ChecksumUpdate;
use crate::error::ArchError;
use crate::stream::{not_open, Stream};
use crate::types::OpenMode;
use std::path::Path;
use tracing::trace;

/// Pass-through filter that folds every byte it reads or writes into a
/// running checksum.
///
/// The filter borrows its base for `'a`; binding must happen before any read
/// or write. The checksum value is readable at any time, including after an
/// error and after close.
pub struct ChecksumStream<'a, U: ChecksumUpdate> {
    base: Option<&'a mut dyn Stream>,
    updater: U,
    value: u32,
    mode: Option<OpenMode>,
    total_in: u64,
    total_out: u64,
}

impl<'a, U: ChecksumUpdate> ChecksumStream<'a, U> {
    pub fn new(updater: U) -> Self {
        let value = updater.initial();
        Self {
            base: None,
            updater,
            value,
            mode: None,
            total_in: 0,
            total_out: 0,
        }
    }

    /// Bind the stream the filter pulls from and pushes to.
    pub fn set_base(&mut self, base: &'a mut dyn Stream) {
        self.base = Some(base);
    }

    /// Unbind and hand back the base stream.
    pub fn take_base(&mut self) -> Option<&'a mut dyn Stream> {
        self.base.take()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Bytes read through the filter.
    pub fn total_in(&self) -> u64 {
        self.total_in
    }

    /// Bytes written through the filter.
    pub fn total_out(&self) -> u64 {
        self.total_out
    }

    fn bound_base(&mut self) -> Result<&mut (dyn Stream + 'a), ArchError> {
        if self.mode.is_none() {
            return Err(not_open("checksum stream"));
        }
        self.base
            .as_deref_mut()
            .ok_or_else(|| ArchError::Stream("checksum stream has no base bound".to_string()))
    }
}

impl<'a, U: ChecksumUpdate> Stream for ChecksumStream<'a, U> {
    /// Reset the running value. The path is unused; bytes come from the base.
    fn open(&mut self, _path: Option<&Path>, mode: OpenMode) -> Result<(), ArchError> {
        self.value = self.updater.initial();
        self.total_in = 0;
        self.total_out = 0;
        self.mode = Some(mode);
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ArchError> {
        let read = self.bound_base()?.read(buf)?;
        if read > 0 {
            self.value = self.updater.update(self.value, &buf[..read]);
            self.total_in += read as u64;
            trace!(read, value = self.value, "Checksum chunk");
        }
        Ok(read)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize, ArchError> {
        let written = self.bound_base()?.write(buf)?;
        if written > 0 {
            self.value = self.updater.update(self.value, &buf[..written]);
            self.total_out += written as u64;
        }
        Ok(written)
    }

    /// Close the filter only. The base belongs to whoever bound it.
    fn close(&mut self) -> Result<(), ArchError> {
        self.mode = None;
        Ok(())
    }
}
