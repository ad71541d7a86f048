//! Error plumbing for the file system core.
//!
//! Internal operations bubble up `std::io::Error` the way an `ext2`-style
//! disk-layout module does for raw disk I/O, plus a handful of
//! filesystem-level conditions (capacity exhausted, name too long, not
//! found) that have no `io::ErrorKind` of their own.

use std::fmt;
use std::io;

/// A fallible outcome of a core (non-veneer) filesystem operation.
#[derive(Debug)]
pub enum SfsError {
    /// The backing device returned an I/O error.
    Io(io::Error),
    /// No free inode, directory slot, data block, or handle was available.
    OutOfSpace,
    /// The requested name or handle does not exist / is not open.
    NotFound,
    /// A name exceeded `MAX_FILENAME_BYTES`.
    NameTooLong,
    /// The file is already open under another handle.
    AlreadyOpen,
}

impl fmt::Display for SfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "device error: {e}"),
            Self::OutOfSpace => write!(f, "volume is out of space"),
            Self::NotFound => write!(f, "not found"),
            Self::NameTooLong => write!(f, "file name too long"),
            Self::AlreadyOpen => write!(f, "file is already open"),
        }
    }
}

impl std::error::Error for SfsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SfsError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Convenience alias for fallible core operations.
pub type Result<T> = std::result::Result<T, SfsError>;
