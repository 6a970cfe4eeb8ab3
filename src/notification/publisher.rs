use super::transport::NotificationTransport;
use crate::error::{Result, TerminusError};
use crate::state_store::StateStore;
use std::collections::HashMap;
use std::sync::Arc;

/// Publishes the failed workflow's record after its terminal state committed.
///
/// Disabled entirely when no topic is configured. Runs strictly after the
/// state transition, so a failure here means "state recorded, notification
/// lost" - never an inconsistent state.
pub struct NotificationPublisher {
    store: Arc<dyn StateStore>,
    transport: Arc<dyn NotificationTransport>,
    topic: Option<String>,
}

impl NotificationPublisher {
    pub fn new(
        store: Arc<dyn StateStore>,
        transport: Arc<dyn NotificationTransport>,
        topic: Option<String>,
    ) -> Self {
        Self {
            store,
            transport,
            topic,
        }
    }

    /// Read back the just-updated record and publish it.
    ///
    /// The read-after-write is deliberate: the store is the source of truth,
    /// and the record it returns is the authoritative snapshot, not whatever
    /// this process happens to hold.
    pub async fn publish(&self, workflow_id: &str, composed_error: &str) -> Result<()> {
        let Some(topic) = self.topic.as_deref() else {
            tracing::debug!(
                workflow_id = %workflow_id,
                "No failure topic configured, skipping notification"
            );
            return Ok(());
        };

        let record = self.store.get_record(workflow_id).await.map_err(|err| {
            tracing::error!(
                workflow_id = %workflow_id,
                topic = %topic,
                error = %err,
                "Failed reading record back for notification"
            );
            TerminusError::NotificationError(format!("Failed publishing to {topic}: {err}"))
        })?;

        let body = serde_json::to_string(&record).map_err(|err| {
            tracing::error!(
                workflow_id = %workflow_id,
                topic = %topic,
                error = %err,
                "Failed serializing record for notification"
            );
            TerminusError::NotificationError(format!("Failed publishing to {topic}: {err}"))
        })?;

        let attributes = HashMap::from([
            (
                "input_collections".to_string(),
                record.input_collections.clone().unwrap_or_default(),
            ),
            ("workflow".to_string(), record.workflow.clone()),
            ("error".to_string(), composed_error.to_string()),
        ]);

        tracing::debug!(
            workflow_id = %workflow_id,
            topic = %topic,
            "Publishing failure notification"
        );

        self.transport
            .publish(topic, &body, attributes)
            .await
            .map_err(|err| {
                tracing::error!(
                    workflow_id = %workflow_id,
                    topic = %topic,
                    error = %err,
                    "Failed publishing failure notification"
                );
                TerminusError::NotificationError(format!("Failed publishing to {topic}: {err}"))
            })
    }
}
