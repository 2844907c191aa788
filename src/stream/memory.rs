//! In-memory base stream.

use super::{not_open, Stream};
use crate::error::ArchError;
use crate::types::OpenMode;
use std::path::Path;

/// Stream over an owned byte buffer.
///
/// Reads consume from the current position; writes append, or replace the
/// contents when opened with `Write`/`Create`.
#[derive(Debug, Default, Clone)]
pub struct MemoryStream {
    data: Vec<u8>,
    position: usize,
    mode: Option<OpenMode>,
}

impl MemoryStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            position: 0,
            mode: None,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl Stream for MemoryStream {
    fn open(&mut self, _path: Option<&Path>, mode: OpenMode) -> Result<(), ArchError> {
        if matches!(mode, OpenMode::Write | OpenMode::Create) {
            self.data.clear();
        }
        self.position = 0;
        self.mode = Some(mode);
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ArchError> {
        if self.mode.is_none() {
            return Err(not_open("memory stream"));
        }
        let remaining = &self.data[self.position..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.position += n;
        Ok(n)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize, ArchError> {
        match self.mode {
            None => Err(not_open("memory stream")),
            Some(OpenMode::Read) => Err(ArchError::Stream(
                "memory stream opened for reading".to_string(),
            )),
            Some(_) => {
                self.data
                    .try_reserve(buf.len())
                    .map_err(|_| ArchError::Allocation {
                        requested: buf.len(),
                    })?;
                self.data.extend_from_slice(buf);
                Ok(buf.len())
            }
        }
    }

    fn close(&mut self) -> Result<(), ArchError> {
        self.mode = None;
        Ok(())
    }
}
