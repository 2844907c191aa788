//! Attribute classification
//!
//! Decides whether an entry's packed attribute word denotes a directory. The
//! bit convention depends on the host system recorded in the entry's
//! "version made by" word.

use crate::error::ArchError;
use crate::types::{
    HostSystem, POSIX_FILE_TYPE_DIRECTORY, POSIX_FILE_TYPE_MASK, WINDOWS_ATTRIBUTE_DIRECTORY,
};

/// Host system encoded in `version_made_by`, or the compiled default when the
/// word is zero.
pub fn host_system(version_made_by: u16) -> HostSystem {
    if version_made_by == 0 {
        return HostSystem::native();
    }
    HostSystem::from_tag((version_made_by >> 8) as u8)
}

/// Whether `attributes` marks a directory under the host's convention.
///
/// Unrecognized hosts never classify as directories.
pub fn is_directory(attributes: u32, version_made_by: u16) -> bool {
    match host_system(version_made_by) {
        HostSystem::WindowsNtfs => {
            attributes & WINDOWS_ATTRIBUTE_DIRECTORY == WINDOWS_ATTRIBUTE_DIRECTORY
        }
        HostSystem::Unix | HostSystem::OsxDarwin => {
            attributes & POSIX_FILE_TYPE_MASK == POSIX_FILE_TYPE_DIRECTORY
        }
        HostSystem::MsDos | HostSystem::Other(_) => false,
    }
}

/// Result-returning form of [`is_directory`].
pub fn check_directory(attributes: u32, version_made_by: u16) -> Result<(), ArchError> {
    if is_directory(attributes, version_made_by) {
        Ok(())
    } else {
        Err(ArchError::NotADirectory {
            attributes,
            host: host_system(version_made_by),
        })
    }
}
