use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures a counting run can surface to its caller.
///
/// Alignment and tokenization work on bytes already in memory and never fail;
/// everything here comes from configuration checks or I/O.
#[derive(Debug, Error)]
pub enum WordCountError {
    /// Rejected before any worker is launched.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A worker could not read the bytes of its assigned range.
    #[error("failed to read {len} bytes at offset {offset}")]
    ReadFailure {
        offset: u64,
        len: usize,
        #[source]
        source: io::Error,
    },

    /// The report sink could not be opened or written. The merged table is kept.
    #[error("failed to write report to '{}'", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start worker pool")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, WordCountError>;
