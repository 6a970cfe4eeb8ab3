//! # Failure Handler
//!
//! Thin coordinator over the failure pipeline: parse the catalog out of the
//! invocation payload, classify the failure, record the terminal status, and
//! optionally publish the notification. All the real branching lives in the
//! components; this module only sequences them.

use crate::classification::ErrorExtractor;
use crate::error::Result;
use crate::models::Catalog;
use crate::notification::NotificationPublisher;
use crate::state_machine::StateTransitioner;
use serde_json::Value;

#[cfg(feature = "postgres")]
use crate::classification::LogTailResolver;
#[cfg(feature = "postgres")]
use crate::config::TerminusConfig;
#[cfg(feature = "postgres")]
use crate::logs::{LogSource, PgLogSource};
#[cfg(feature = "postgres")]
use crate::notification::BroadcastTransport;
#[cfg(feature = "postgres")]
use crate::state_store::{PgStateStore, StateStore};
#[cfg(feature = "postgres")]
use sqlx::PgPool;
#[cfg(feature = "postgres")]
use std::sync::Arc;

/// Terminal-failure handler for one workflow orchestration pipeline.
pub struct FailureHandler {
    extractor: ErrorExtractor,
    transitioner: StateTransitioner,
    publisher: NotificationPublisher,
}

impl FailureHandler {
    pub fn new(
        extractor: ErrorExtractor,
        transitioner: StateTransitioner,
        publisher: NotificationPublisher,
    ) -> Self {
        Self {
            extractor,
            transitioner,
            publisher,
        }
    }

    /// Wire the handler against Postgres-backed collaborators and the
    /// in-process notification transport.
    #[cfg(feature = "postgres")]
    pub fn from_config(config: &TerminusConfig, pool: PgPool) -> Self {
        let store: Arc<dyn StateStore> = Arc::new(PgStateStore::new(pool.clone()));
        let source: Arc<dyn LogSource> =
            Arc::new(PgLogSource::new(pool, config.log_group.clone()));
        let transport = Arc::new(BroadcastTransport::new(config.notification_capacity));

        let resolver =
            LogTailResolver::new(source).with_error_prefix(config.error_prefix.clone());

        Self::new(
            ErrorExtractor::new(resolver),
            StateTransitioner::new(store.clone()),
            NotificationPublisher::new(store, transport, config.failed_topic.clone()),
        )
    }

    /// Handle one failed workflow invocation.
    ///
    /// Returns the catalog for chaining. Classification never fails; the
    /// state transition and the notification fail loud, the latter only
    /// after the terminal state already committed.
    pub async fn handle(&self, payload: Value) -> Result<Catalog> {
        let catalog = Catalog::from_payload(payload)?;
        let failure = catalog.error.clone().unwrap_or_default();

        let classified = self.extractor.classify(&failure).await;
        let composed = classified.to_string();
        tracing::info!(
            workflow_id = %catalog.id,
            error = %composed,
            "Classified workflow failure"
        );

        self.transitioner.transition(&catalog.id, &classified).await?;
        self.publisher.publish(&catalog.id, &composed).await?;

        Ok(catalog)
    }
}
