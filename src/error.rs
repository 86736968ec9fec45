//! Error type shared by every step kernel and the C ABI layer.

use thiserror::Error;

/// Errors returned by grid construction and step operations.
///
/// Every variant maps to exactly one C status code via [`LifeError::code`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// The padded dimension `(size + 2)²` does not fit in `usize`.
    #[error("grid size {size} is too large")]
    InvalidSize { size: usize },

    /// A size arriving across the C ABI was below zero.
    #[error("grid size must not be negative, got {0}")]
    NegativeSize(i32),

    /// The buffer handed in is not exactly `(size + 2)²` cells long.
    #[error("buffer holds {actual} cells, expected {expected}")]
    BufferLength { expected: usize, actual: usize },

    /// `worker_count` must be at least 1.
    #[error("worker count must be at least 1, got {0}")]
    InvalidWorkerCount(usize),

    /// Snapshot or scratch buffer could not be allocated.
    #[error("could not allocate {cells} cells for a step buffer")]
    Allocation { cells: usize },

    /// A worker thread failed to start or to join.
    #[error("worker {worker} failed: {detail}")]
    Thread { worker: usize, detail: String },
}

impl LifeError {
    /// Status code reported across the C ABI. `0` is reserved for success
    /// and `1` for null pointers.
    pub fn code(&self) -> i32 {
        match self {
            LifeError::InvalidSize { .. } | LifeError::NegativeSize(_) => 2,
            LifeError::BufferLength { .. } => 3,
            LifeError::InvalidWorkerCount(_) => 4,
            LifeError::Allocation { .. } => 5,
            LifeError::Thread { .. } => 6,
        }
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;
