//! Error types for directory traversal.
//!
//! Every fallible walk returns [`TreeResult<T>`], an alias for
//! `Result<T, TreeError>`.

use std::io;
use std::path::{Path, PathBuf};

/// Failure while listing a directory or writing the rendered tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The directory exists but cannot be listed.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Any other I/O failure while listing `path`.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a line to the output sink failed.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

pub type TreeResult<T> = Result<T, TreeError>;

impl TreeError {
    /// Classify an I/O error raised while listing `path`.
    pub fn from_listing(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => TreeError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => TreeError::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::NotADirectory => TreeError::NotADirectory(path.to_path_buf()),
            _ => TreeError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}
