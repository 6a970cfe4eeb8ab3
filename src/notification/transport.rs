use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Error types for notification publishing
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Notification channel is closed: {topic}")]
    ChannelClosed { topic: String },
    #[error("Publish failed: {topic}: {message}")]
    Publish { topic: String, message: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NotificationError {
    /// Create a publish error
    pub fn publish(topic: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Publish {
            topic: topic.into(),
            message: message.into(),
        }
    }
}

/// Transport seam for delivering failure notifications.
#[async_trait]
pub trait NotificationTransport: Send + Sync {
    /// Publish a message body with typed string attributes to a topic.
    async fn publish(
        &self,
        topic: &str,
        body: &str,
        attributes: HashMap<String, String>,
    ) -> Result<(), NotificationError>;
}

/// A notification that has been handed to the transport.
#[derive(Debug, Clone)]
pub struct PublishedNotification {
    pub message_id: Uuid,
    pub topic: String,
    /// JSON snapshot of the workflow record.
    pub body: String,
    pub attributes: HashMap<String, String>,
    pub published_at: chrono::DateTime<chrono::Utc>,
}

/// In-process fan-out transport for failure notifications.
#[derive(Debug, Clone)]
pub struct BroadcastTransport {
    sender: broadcast::Sender<PublishedNotification>,
}

impl BroadcastTransport {
    /// Create a new transport with the specified channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to published notifications
    pub fn subscribe(&self) -> broadcast::Receiver<PublishedNotification> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastTransport {
    fn default() -> Self {
        Self::new(crate::constants::system::DEFAULT_NOTIFICATION_CAPACITY)
    }
}

#[async_trait]
impl NotificationTransport for BroadcastTransport {
    async fn publish(
        &self,
        topic: &str,
        body: &str,
        attributes: HashMap<String, String>,
    ) -> Result<(), NotificationError> {
        let notification = PublishedNotification {
            message_id: Uuid::new_v4(),
            topic: topic.to_string(),
            body: body.to_string(),
            attributes,
            published_at: chrono::Utc::now(),
        };

        // For broadcast channels, send() returns an error if there are no
        // subscribers. That is acceptable here - the notification was
        // published even if no one is listening.
        match self.sender.send(notification) {
            Ok(_) => Ok(()),
            Err(broadcast::error::SendError(_)) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_without_subscribers_is_ok() {
        let transport = BroadcastTransport::new(8);
        assert_eq!(transport.subscriber_count(), 0);
        transport
            .publish("terminus-failed", "{}", HashMap::new())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_subscriber_receives_notification() {
        let transport = BroadcastTransport::new(8);
        let mut receiver = transport.subscribe();

        let attributes = HashMap::from([("workflow".to_string(), "ingest".to_string())]);
        transport
            .publish("terminus-failed", r#"{"id":"wf-1"}"#, attributes)
            .await
            .unwrap();

        let notification = receiver.recv().await.unwrap();
        assert_eq!(notification.topic, "terminus-failed");
        assert_eq!(notification.body, r#"{"id":"wf-1"}"#);
        assert_eq!(
            notification.attributes.get("workflow").map(String::as_str),
            Some("ingest")
        );
    }

    #[tokio::test]
    async fn test_message_ids_are_unique() {
        let transport = BroadcastTransport::new(8);
        let mut receiver = transport.subscribe();

        transport.publish("t", "a", HashMap::new()).await.unwrap();
        transport.publish("t", "b", HashMap::new()).await.unwrap();

        let first = receiver.recv().await.unwrap();
        let second = receiver.recv().await.unwrap();
        assert_ne!(first.message_id, second.message_id);
    }
}
