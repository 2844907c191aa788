//! Core types shared across the utility layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Windows `FILE_ATTRIBUTE_DIRECTORY`
pub const WINDOWS_ATTRIBUTE_DIRECTORY: u32 = 0x10;

/// POSIX `S_IFMT` file-type mask
pub const POSIX_FILE_TYPE_MASK: u32 = 0o170000;

/// POSIX `S_IFDIR` file type
pub const POSIX_FILE_TYPE_DIRECTORY: u32 = 0o040000;

/// Host system that produced an entry's attribute word.
///
/// The tag is the high byte of the archive's "version made by" field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostSystem {
    MsDos,
    Unix,
    WindowsNtfs,
    OsxDarwin,
    Other(u8),
}

impl HostSystem {
    pub const MSDOS_TAG: u8 = 0;
    pub const UNIX_TAG: u8 = 3;
    pub const WINDOWS_NTFS_TAG: u8 = 10;
    pub const OSX_DARWIN_TAG: u8 = 19;

    pub fn from_tag(tag: u8) -> Self {
        match tag {
            Self::MSDOS_TAG => HostSystem::MsDos,
            Self::UNIX_TAG => HostSystem::Unix,
            Self::WINDOWS_NTFS_TAG => HostSystem::WindowsNtfs,
            Self::OSX_DARWIN_TAG => HostSystem::OsxDarwin,
            other => HostSystem::Other(other),
        }
    }

    pub fn tag(self) -> u8 {
        match self {
            HostSystem::MsDos => Self::MSDOS_TAG,
            HostSystem::Unix => Self::UNIX_TAG,
            HostSystem::WindowsNtfs => Self::WINDOWS_NTFS_TAG,
            HostSystem::OsxDarwin => Self::OSX_DARWIN_TAG,
            HostSystem::Other(tag) => tag,
        }
    }

    /// Host system this crate was compiled for.
    pub const fn native() -> Self {
        if cfg!(windows) {
            HostSystem::WindowsNtfs
        } else if cfg!(target_os = "macos") {
            HostSystem::OsxDarwin
        } else {
            HostSystem::Unix
        }
    }

    /// "Version made by" word carrying this host in its high byte.
    pub fn version_made_by(self, spec_version: u8) -> u16 {
        (u16::from(self.tag()) << 8) | u16::from(spec_version)
    }
}

impl fmt::Display for HostSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostSystem::MsDos => write!(f, "ms-dos"),
            HostSystem::Unix => write!(f, "unix"),
            HostSystem::WindowsNtfs => write!(f, "windows-ntfs"),
            HostSystem::OsxDarwin => write!(f, "osx-darwin"),
            HostSystem::Other(tag) => write!(f, "unknown({})", tag),
        }
    }
}

/// Mode a stream is opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Read an existing file
    Read,
    /// Write to an existing file, truncating it
    Write,
    /// Append to a file, creating it when missing
    Append,
    /// Create or truncate a file for writing
    Create,
}
