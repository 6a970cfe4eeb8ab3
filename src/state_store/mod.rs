//! # State Store
//!
//! Collaborator seam for the external system of record of workflow status.
//! The storage engine and its query semantics are owned elsewhere; this crate
//! only needs the two terminal writes and the read-back used by the failure
//! notification. Writes are atomic and last-writer-wins per workflow id,
//! since only one failure handler ever runs per failed workflow instance.

pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;

use crate::models::WorkflowRecord;
use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryStateStore;
#[cfg(feature = "postgres")]
pub use postgres::PgStateStore;

/// State store error types
#[derive(Debug, Error)]
pub enum StateStoreError {
    #[error("Workflow record not found: {workflow_id}")]
    RecordNotFound { workflow_id: String },

    #[error("State store query failed: {operation}: {message}")]
    Query { operation: String, message: String },
}

impl StateStoreError {
    /// Create a record not found error
    pub fn record_not_found(workflow_id: impl Into<String>) -> Self {
        Self::RecordNotFound {
            workflow_id: workflow_id.into(),
        }
    }

    /// Create a query error
    pub fn query(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Query {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for StateStoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StateStoreError::query("query", "No rows found"),
            sqlx::Error::Database(db_err) => {
                StateStoreError::query("database", db_err.to_string())
            }
            _ => StateStoreError::query("connection", err.to_string()),
        }
    }
}

/// Result type alias for state store operations
pub type StateStoreResult<T> = Result<T, StateStoreError>;

/// External system of record for workflow status and metadata.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Record the `invalid` terminal status with the composed error string.
    async fn set_invalid(&self, workflow_id: &str, error: &str) -> StateStoreResult<()>;

    /// Record the `failed` terminal status with the composed error string.
    async fn set_failed(&self, workflow_id: &str, error: &str) -> StateStoreResult<()>;

    /// Read the authoritative current record for a workflow instance.
    async fn get_record(&self, workflow_id: &str) -> StateStoreResult<WorkflowRecord>;
}
