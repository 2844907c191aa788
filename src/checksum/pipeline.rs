//! Whole-file checksum pipeline.

use super::{ChecksumStream, ChecksumUpdate, Crc32};
use crate::error::{try_alloc_buffer, ArchError};
use crate::stream::{OsStream, Stream};
use crate::types::OpenMode;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Read-chunk size used when none is configured.
pub const DEFAULT_BUFFER_SIZE: usize = i16::MAX as usize;

/// Checksum together with the first error hit while computing it.
///
/// `value` is always meaningful: it covers every byte read before the error,
/// and equals the backend's initial value when nothing was read.
#[derive(Debug)]
pub struct ChecksumOutcome {
    pub value: u32,
    pub bytes_read: u64,
    pub error: Option<ArchError>,
}

impl ChecksumOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<u32, ArchError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }
}

/// Drives a base stream through a [`ChecksumStream`] to compute a checksum.
#[derive(Clone)]
pub struct ChecksumPipeline {
    backend: Arc<dyn ChecksumUpdate + Send + Sync>,
    buffer_size: usize,
}

impl Default for ChecksumPipeline {
    fn default() -> Self {
        Self::new(Arc::new(Crc32))
    }
}

impl std::fmt::Debug for ChecksumPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChecksumPipeline")
            .field("backend", &self.backend.name())
            .field("buffer_size", &self.buffer_size)
            .finish()
    }
}

impl ChecksumPipeline {
    pub fn new(backend: Arc<dyn ChecksumUpdate + Send + Sync>) -> Self {
        Self {
            backend,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Set the read-chunk size. Zero is rejected.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Result<Self, ArchError> {
        if buffer_size == 0 {
            return Err(ArchError::InvalidParameter(
                "checksum buffer size must be non-zero".to_string(),
            ));
        }
        self.buffer_size = buffer_size;
        Ok(self)
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Checksum the file at `path`.
    ///
    /// The file stream and the filter are closed (in that order) and released
    /// on every path, and the value is reported even when opening or reading
    /// failed.
    pub fn compute(&self, path: &Path) -> ChecksumOutcome {
        let mut base = OsStream::new();
        let opened = base.open(Some(path), OpenMode::Read).err();
        if let Some(err) = &opened {
            debug!(path = %path.display(), error = %err, "Cannot open file for checksum");
        }
        self.run(&mut base, opened, true)
    }

    /// Checksum everything remaining in an already opened base stream.
    ///
    /// The base is left open; closing it is the caller's job.
    pub fn compute_stream(&self, base: &mut dyn Stream) -> ChecksumOutcome {
        self.run(base, None, false)
    }

    fn run(
        &self,
        base: &mut dyn Stream,
        open_error: Option<ArchError>,
        close_base: bool,
    ) -> ChecksumOutcome {
        let mut error = open_error;
        let mut filter = ChecksumStream::new(&*self.backend);
        if let Err(err) = filter.open(None, OpenMode::Read) {
            record_error(&mut error, err, "checksum stream open");
        }
        filter.set_base(base);

        if error.is_none() {
            if let Err(err) = self.drain(&mut filter) {
                error = Some(err);
            }
        }

        if let Some(base) = filter.take_base() {
            if close_base && base.is_open() {
                if let Err(err) = base.close() {
                    record_error(&mut error, err, "base stream close");
                }
            }
        }
        if let Err(err) = filter.close() {
            record_error(&mut error, err, "checksum stream close");
        }

        ChecksumOutcome {
            value: filter.value(),
            bytes_read: filter.total_in(),
            error,
        }
    }

    /// Read through the filter until end of stream or the first error.
    fn drain<U: ChecksumUpdate>(
        &self,
        filter: &mut ChecksumStream<'_, U>,
    ) -> Result<(), ArchError> {
        let mut buf = try_alloc_buffer(self.buffer_size)?;
        while filter.read(&mut buf)? > 0 {}
        Ok(())
    }
}

/// Keep the first error; later ones are only logged.
fn record_error(slot: &mut Option<ArchError>, err: ArchError, stage: &str) {
    if let Some(first) = slot.as_ref() {
        warn!(stage, error = %err, first = %first, "Additional error during checksum");
    } else {
        *slot = Some(err);
    }
}

/// Compute the CRC-32 of the file at `path` with default settings.
pub fn compute_checksum(path: &Path) -> ChecksumOutcome {
    ChecksumPipeline::default().compute(path)
}
