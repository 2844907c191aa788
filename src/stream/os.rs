//! File-backed base stream.

use super::{not_open, Stream};
use crate::error::ArchError;
use crate::types::OpenMode;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

/// Stream over a file on the local filesystem.
#[derive(Debug, Default)]
pub struct OsStream {
    file: Option<File>,
    path: Option<PathBuf>,
}

impl OsStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the currently or most recently opened file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn open_options(mode: OpenMode) -> OpenOptions {
    let mut options = OpenOptions::new();
    match mode {
        OpenMode::Read => options.read(true),
        OpenMode::Write => options.write(true).truncate(true),
        OpenMode::Append => options.append(true).create(true),
        OpenMode::Create => options.write(true).create(true).truncate(true),
    };
    options
}

/// Run `op` again for as long as it is interrupted by a signal.
fn retry_interrupted<T>(mut op: impl FnMut() -> std::io::Result<T>) -> std::io::Result<T> {
    loop {
        match op() {
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            result => return result,
        }
    }
}

impl Stream for OsStream {
    fn open(&mut self, path: Option<&Path>, mode: OpenMode) -> Result<(), ArchError> {
        let path = path.ok_or_else(|| {
            ArchError::InvalidParameter("file stream requires a path".to_string())
        })?;
        if self.file.is_some() {
            self.close()?;
        }
        self.path = Some(path.to_path_buf());
        let file = open_options(mode)
            .open(path)
            .map_err(|e| ArchError::io(path, e))?;
        self.file = Some(file);
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ArchError> {
        let file = self.file.as_mut().ok_or_else(|| not_open("file stream"))?;
        retry_interrupted(|| file.read(buf))
            .map_err(|e| ArchError::io(self.path.clone().unwrap_or_default(), e))
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize, ArchError> {
        let file = self.file.as_mut().ok_or_else(|| not_open("file stream"))?;
        retry_interrupted(|| file.write(buf))
            .map_err(|e| ArchError::io(self.path.clone().unwrap_or_default(), e))
    }

    fn close(&mut self) -> Result<(), ArchError> {
        match self.file.take() {
            Some(mut file) => file
                .flush()
                .map_err(|e| ArchError::io(self.path.clone().unwrap_or_default(), e)),
            None => Ok(()),
        }
    }
}
