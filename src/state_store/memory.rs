//! In-process state store adapter.
//!
//! Backs the test suite and embedded single-process deployments. Concurrent
//! handler invocations touch distinct workflow ids, so a sharded map is all
//! the coordination required.

use super::{StateStore, StateStoreError, StateStoreResult};
use crate::models::WorkflowRecord;
use crate::state_machine::WorkflowStatus;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

/// DashMap-backed state store.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    records: DashMap<String, WorkflowRecord>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record, replacing any existing one with the same id.
    pub fn insert(&self, record: WorkflowRecord) {
        self.records.insert(record.id.clone(), record);
    }

    fn set_terminal(
        &self,
        workflow_id: &str,
        status: WorkflowStatus,
        error: &str,
    ) -> StateStoreResult<()> {
        let mut record = self
            .records
            .get_mut(workflow_id)
            .ok_or_else(|| StateStoreError::record_not_found(workflow_id))?;
        record.status = status;
        record.last_error = Some(error.to_string());
        record.updated_at = Utc::now().naive_utc();
        Ok(())
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn set_invalid(&self, workflow_id: &str, error: &str) -> StateStoreResult<()> {
        self.set_terminal(workflow_id, WorkflowStatus::Invalid, error)
    }

    async fn set_failed(&self, workflow_id: &str, error: &str) -> StateStoreResult<()> {
        self.set_terminal(workflow_id, WorkflowStatus::Failed, error)
    }

    async fn get_record(&self, workflow_id: &str) -> StateStoreResult<WorkflowRecord> {
        self.records
            .get(workflow_id)
            .map(|record| record.value().clone())
            .ok_or_else(|| StateStoreError::record_not_found(workflow_id))
    }
}
