//! # Log Source
//!
//! Collaborator seam for reading the tail of a task container's log stream.
//! Batch-style failures surface only a generic container-exit reason at the
//! orchestration layer; the actionable error is one log line deeper, so the
//! classifier reads it back through this interface.

#[cfg(feature = "postgres")]
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

#[cfg(feature = "postgres")]
pub use postgres::PgLogSource;

/// Log source error types
#[derive(Debug, Error)]
pub enum LogSourceError {
    #[error("Log stream not found: {log_stream}")]
    StreamNotFound { log_stream: String },

    #[error("Log stream is empty: {log_stream}")]
    EmptyStream { log_stream: String },

    #[error("Log retrieval failed: {operation}: {message}")]
    Retrieval { operation: String, message: String },
}

impl LogSourceError {
    /// Create a stream not found error
    pub fn stream_not_found(log_stream: impl Into<String>) -> Self {
        Self::StreamNotFound {
            log_stream: log_stream.into(),
        }
    }

    /// Create an empty stream error
    pub fn empty_stream(log_stream: impl Into<String>) -> Self {
        Self::EmptyStream {
            log_stream: log_stream.into(),
        }
    }

    /// Create a retrieval error
    pub fn retrieval(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Retrieval {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for LogSourceError {
    fn from(err: sqlx::Error) -> Self {
        LogSourceError::retrieval("query", err.to_string())
    }
}

/// Result type alias for log source operations
pub type LogSourceResult<T> = Result<T, LogSourceError>;

/// Reader over a fixed, well-known log grouping.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Fetch the message text of the most recent event in a log stream.
    async fn get_last_event(&self, log_stream_id: &str) -> LogSourceResult<String>;
}
