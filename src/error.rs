use std::io;
use thiserror::Error;

/// Error type for pool and task operations.
#[derive(Error, Debug)]
pub enum PoolError {
    /// IO error, e.g. the OS refused to spawn a worker thread.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The underlying pool builder failed.
    #[error("Failed to build thread pool: {0}")]
    Build(String),

    /// A pool needs at least one worker.
    #[error("Thread count must be at least 1")]
    InvalidThreadCount,

    /// The pool has been shut down and no longer accepts jobs.
    #[error("Thread pool is shut down")]
    Rejected,

    /// The task was dropped before it could report a result.
    #[error("Interrupted while waiting for task result")]
    Interrupted,

    /// The task panicked while running.
    #[error("Task failed: {0}")]
    Execution(String),
}

/// Result type alias for pool operations.
pub type Result<T> = std::result::Result<T, PoolError>;
