// src/error.rs
//! Error types for the build fixer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for build fixer operations
pub type FixResult<T> = Result<T, FixError>;

/// Failures raised while enumerating, renaming or rewriting a build directory.
#[derive(Error, Debug)]
pub enum FixError {
    /// The build directory, or one of its subdirectories, could not be walked
    #[error("cannot read build directory {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A hashed file could not be moved to its stripped name
    #[error("cannot rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file name made only of hash segments has nothing left to rename to
    #[error("cannot rename {path}: the file name is empty once the hash is removed")]
    EmptyName { path: PathBuf },

    /// An HTML file could not be read or written back
    #[error("cannot fix HTML file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FixError {
    pub(crate) fn rename_collision(from: PathBuf, to: PathBuf) -> Self {
        Self::Rename {
            from,
            to,
            source: io::Error::new(io::ErrorKind::AlreadyExists, "target already exists"),
        }
    }

    /// The path the failure is about.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Filesystem { path, .. } | Self::EmptyName { path } | Self::Io { path, .. } => path,
            Self::Rename { from, .. } => from,
        }
    }
}
