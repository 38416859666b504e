//! Error types for availability-engine operations.

use thiserror::Error;

/// Failures reported by a [`RecordStore`](crate::store::RecordStore) backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    #[error("Record store query failed on `{table}`: {message}")]
    Query { table: String, message: String },
}

#[derive(Error, Debug)]
pub enum EngineError {
    /// An upstream read failed. The run is abandoned with no partial result.
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid meeting {id}: {reason}")]
    InvalidMeeting { id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
