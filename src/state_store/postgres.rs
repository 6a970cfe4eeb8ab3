//! Postgres-backed state store adapter.
//!
//! Consumes the externally-owned `workflow_records` table through the shared
//! connection pool. Queries use the runtime API since the schema lives
//! outside this crate.

use super::{StateStore, StateStoreError, StateStoreResult};
use crate::models::WorkflowRecord;
use crate::state_machine::WorkflowStatus;
use async_trait::async_trait;
use sqlx::PgPool;

/// State store over the `workflow_records` table.
#[derive(Debug, Clone)]
pub struct PgStateStore {
    pool: PgPool,
}

impl PgStateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Last-writer-wins terminal status update for one workflow id.
    async fn set_terminal(
        &self,
        workflow_id: &str,
        status: WorkflowStatus,
        error: &str,
    ) -> StateStoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE workflow_records
            SET status = $2, last_error = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(workflow_id)
        .bind(status.to_string())
        .bind(error)
        .execute(&self.pool)
        .await
        .map_err(|e| StateStoreError::query("set_terminal", e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StateStoreError::record_not_found(workflow_id));
        }
        Ok(())
    }
}

#[async_trait]
impl StateStore for PgStateStore {
    async fn set_invalid(&self, workflow_id: &str, error: &str) -> StateStoreResult<()> {
        self.set_terminal(workflow_id, WorkflowStatus::Invalid, error)
            .await
    }

    async fn set_failed(&self, workflow_id: &str, error: &str) -> StateStoreResult<()> {
        self.set_terminal(workflow_id, WorkflowStatus::Failed, error)
            .await
    }

    async fn get_record(&self, workflow_id: &str) -> StateStoreResult<WorkflowRecord> {
        let record = sqlx::query_as::<_, WorkflowRecord>(
            r#"
            SELECT id, status, workflow, input_collections, last_error, created_at, updated_at
            FROM workflow_records
            WHERE id = $1
            "#,
        )
        .bind(workflow_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StateStoreError::query("get_record", e.to_string()))?;

        record.ok_or_else(|| StateStoreError::record_not_found(workflow_id))
    }
}
