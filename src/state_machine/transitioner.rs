use super::states::WorkflowStatus;
use crate::constants::classification;
use crate::error::{Result, TerminusError};
use crate::models::ClassifiedError;
use crate::state_store::StateStore;
use std::sync::Arc;

/// Records the terminal failure status for a workflow instance.
///
/// This is the single fatal pre-commit path in the handler: a workflow whose
/// terminal state cannot be recorded must not be silently treated as handled,
/// so store failures are logged and re-raised.
pub struct StateTransitioner {
    store: Arc<dyn StateStore>,
}

impl StateTransitioner {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Write the terminal status and composed `last_error` for a workflow.
    pub async fn transition(
        &self,
        workflow_id: &str,
        classified: &ClassifiedError,
    ) -> Result<()> {
        let status = terminal_status(classified);
        let error = classified.to_string();

        tracing::info!(
            workflow_id = %workflow_id,
            status = %status,
            error = %error,
            "Recording terminal workflow status"
        );

        let result = match status {
            WorkflowStatus::Invalid => self.store.set_invalid(workflow_id, &error).await,
            _ => self.store.set_failed(workflow_id, &error).await,
        };

        result.map_err(|err| {
            tracing::error!(
                workflow_id = %workflow_id,
                status = %status,
                error = %err,
                "Failed recording terminal workflow status"
            );
            TerminusError::StateTransitionError(format!(
                "Failed marking {workflow_id} as {status}: {err}"
            ))
        })
    }
}

/// Decide the terminal status for a classified error.
///
/// `InvalidInput` is a caller/data-quality fault with distinct downstream
/// handling; every other error type is an operational/execution fault.
pub fn terminal_status(classified: &ClassifiedError) -> WorkflowStatus {
    if classified.error_type == classification::INVALID_INPUT_ERROR_TYPE {
        WorkflowStatus::Invalid
    } else {
        WorkflowStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_store::MemoryStateStore;
    use crate::test_helpers::{sample_record, FailingStateStore};

    #[test]
    fn test_terminal_status_routing() {
        let invalid = ClassifiedError::new("InvalidInput", "bad geometry");
        assert_eq!(terminal_status(&invalid), WorkflowStatus::Invalid);

        let failed = ClassifiedError::new("RuntimeError", "bad geometry");
        assert_eq!(terminal_status(&failed), WorkflowStatus::Failed);

        // Routing depends on the type alone, never the message content.
        let tricky = ClassifiedError::new("Exception", "InvalidInput");
        assert_eq!(terminal_status(&tricky), WorkflowStatus::Failed);
    }

    #[tokio::test]
    async fn test_transition_writes_invalid() {
        let store = Arc::new(MemoryStateStore::new());
        store.insert(sample_record("wf-1"));
        let transitioner = StateTransitioner::new(store.clone());

        let classified = ClassifiedError::new("InvalidInput", "bad things");
        transitioner.transition("wf-1", &classified).await.unwrap();

        let record = store.get_record("wf-1").await.unwrap();
        assert_eq!(record.status, WorkflowStatus::Invalid);
        assert_eq!(record.last_error.as_deref(), Some("InvalidInput: bad things"));
    }

    #[tokio::test]
    async fn test_transition_writes_failed() {
        let store = Arc::new(MemoryStateStore::new());
        store.insert(sample_record("wf-2"));
        let transitioner = StateTransitioner::new(store.clone());

        let classified = ClassifiedError::new("RuntimeError", "boom");
        transitioner.transition("wf-2", &classified).await.unwrap();

        let record = store.get_record("wf-2").await.unwrap();
        assert_eq!(record.status, WorkflowStatus::Failed);
        assert_eq!(record.last_error.as_deref(), Some("RuntimeError: boom"));
    }

    #[tokio::test]
    async fn test_store_failure_is_fatal() {
        let transitioner = StateTransitioner::new(Arc::new(FailingStateStore));
        let classified = ClassifiedError::new("RuntimeError", "boom");

        let err = transitioner.transition("wf-3", &classified).await.unwrap_err();
        assert!(matches!(err, TerminusError::StateTransitionError(_)));
    }

    #[tokio::test]
    async fn test_unknown_workflow_is_fatal() {
        let transitioner = StateTransitioner::new(Arc::new(MemoryStateStore::new()));
        let classified = ClassifiedError::new("RuntimeError", "boom");

        let err = transitioner.transition("missing", &classified).await.unwrap_err();
        assert!(matches!(err, TerminusError::StateTransitionError(_)));
    }
}
