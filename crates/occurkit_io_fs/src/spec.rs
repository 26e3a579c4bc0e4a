//! File output error types.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failure to commit bytes to a destination path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteFileError {
    /// The OS refused access (read-only target, file locked by another program).
    PermissionDenied {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Any other IO failure while staging or committing the file.
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
}

impl WriteFileError {
    /// Classify an IO error raised while writing `path`.
    pub fn from_io(path: &Path, err: &io::Error) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            return Self::PermissionDenied {
                path: path.to_path_buf(),
                message: err.to_string(),
            };
        }
        Self::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Destination path of the failed write.
    pub fn path(&self) -> &Path {
        match self {
            Self::PermissionDenied { path, .. } | Self::Io { path, .. } => path,
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

impl fmt::Display for WriteFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied { path, message } => {
                write!(f, "Permission denied writing {}: {message}", path.display())
            }
            Self::Io { path, message } => {
                write!(f, "Failed to write {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for WriteFileError {}
