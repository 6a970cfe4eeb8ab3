//! Collaborator doubles: canned log streams, recording and failing
//! transports, and a state store that refuses every call.

use crate::logs::{LogSource, LogSourceError, LogSourceResult};
use crate::models::WorkflowRecord;
use crate::notification::{NotificationError, NotificationTransport, PublishedNotification};
use crate::state_store::{StateStore, StateStoreError, StateStoreResult};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Log source serving canned tail lines keyed by stream id.
#[derive(Debug, Default)]
pub struct StaticLogSource {
    events: HashMap<String, String>,
}

impl StaticLogSource {
    /// A source with a single known stream.
    pub fn with_event(log_stream: impl Into<String>, message: impl Into<String>) -> Self {
        let mut events = HashMap::new();
        events.insert(log_stream.into(), message.into());
        Self { events }
    }
}

#[async_trait]
impl LogSource for StaticLogSource {
    async fn get_last_event(&self, log_stream_id: &str) -> LogSourceResult<String> {
        self.events
            .get(log_stream_id)
            .cloned()
            .ok_or_else(|| LogSourceError::stream_not_found(log_stream_id))
    }
}

/// Log source that fails every retrieval.
#[derive(Debug, Default)]
pub struct FailingLogSource;

#[async_trait]
impl LogSource for FailingLogSource {
    async fn get_last_event(&self, _log_stream_id: &str) -> LogSourceResult<String> {
        Err(LogSourceError::retrieval("get_last_event", "simulated outage"))
    }
}

/// State store that refuses every call.
#[derive(Debug, Default)]
pub struct FailingStateStore;

#[async_trait]
impl StateStore for FailingStateStore {
    async fn set_invalid(&self, _workflow_id: &str, _error: &str) -> StateStoreResult<()> {
        Err(StateStoreError::query("set_invalid", "simulated outage"))
    }

    async fn set_failed(&self, _workflow_id: &str, _error: &str) -> StateStoreResult<()> {
        Err(StateStoreError::query("set_failed", "simulated outage"))
    }

    async fn get_record(&self, _workflow_id: &str) -> StateStoreResult<WorkflowRecord> {
        Err(StateStoreError::query("get_record", "simulated outage"))
    }
}

/// Transport capturing everything published through it.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    published: Mutex<Vec<PublishedNotification>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notifications published so far.
    pub fn published(&self) -> Vec<PublishedNotification> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationTransport for RecordingTransport {
    async fn publish(
        &self,
        topic: &str,
        body: &str,
        attributes: HashMap<String, String>,
    ) -> Result<(), NotificationError> {
        self.published.lock().unwrap().push(PublishedNotification {
            message_id: Uuid::new_v4(),
            topic: topic.to_string(),
            body: body.to_string(),
            attributes,
            published_at: Utc::now(),
        });
        Ok(())
    }
}

/// Transport that fails every publish.
#[derive(Debug, Default)]
pub struct FailingTransport;

#[async_trait]
impl NotificationTransport for FailingTransport {
    async fn publish(
        &self,
        topic: &str,
        _body: &str,
        _attributes: HashMap<String, String>,
    ) -> Result<(), NotificationError> {
        Err(NotificationError::publish(topic, "simulated outage"))
    }
}
