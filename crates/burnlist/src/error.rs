//! Error types for domain classification.

use std::io;
use std::path::PathBuf;

/// Result type alias for classifier operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classifier error types.
///
/// Malformed email input is never an error; every variant here describes a
/// dataset or synchronization failure that makes answers untrustworthy.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dataset file could not be read.
    #[error("Failed to read domain dataset {}: {source}", path.display())]
    DatasetRead {
        /// Path of the dataset file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The dataset contained no domains.
    #[error("Domain dataset is empty: {0}")]
    EmptyDataset(String),

    /// The domain set lock was poisoned by a panicking thread.
    #[error("Domain set lock poisoned")]
    LockPoisoned,
}

impl Error {
    /// Creates a dataset read error for the given path.
    #[must_use]
    pub fn dataset_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DatasetRead {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the error comes from the dataset rather than locking.
    #[must_use]
    pub const fn is_dataset_error(&self) -> bool {
        matches!(self, Self::DatasetRead { .. } | Self::EmptyDataset(_))
    }
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::LockPoisoned
    }
}
