use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Error type for counter persistence and worker failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("counter file {path:?} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },
    #[error("serialization failure: {0}")]
    Serialize(String),
    #[error("store worker did not reply within {0:?}")]
    Timeout(Duration),
    #[error("store worker is closed")]
    Closed,
}
