//! archutil: OS-facing utilities for archive handling
//!
//! Recursive directory creation, bounded path joining, host-aware attribute
//! classification, and composable byte streams with a checksum filter used to
//! compute whole-file checksums.

pub mod attrib;
pub mod checksum;
pub mod config;
pub mod dir;
pub mod error;
pub mod logging;
pub mod path;
pub mod stream;
pub mod tooling;
pub mod types;

pub use attrib::{check_directory, host_system, is_directory};
pub use checksum::{compute_checksum, ChecksumOutcome, ChecksumPipeline, ChecksumUpdate, Crc32};
pub use dir::{ensure_directory, ensure_directory_with, DirectoryPrimitive};
pub use error::ArchError;
pub use path::{join, PathBuffer};
pub use stream::Stream;
pub use types::{HostSystem, OpenMode};
