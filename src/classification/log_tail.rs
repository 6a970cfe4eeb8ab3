use crate::constants::{classification, sentinels};
use crate::logs::LogSource;
use std::sync::Arc;

/// Refines a generic container-exit failure into a typed error by reading
/// the last line the task container logged.
///
/// Total: any retrieval failure collapses to the fixed sentinel pair rather
/// than surfacing, since the resolver is only ever a secondary data source.
pub struct LogTailResolver {
    source: Arc<dyn LogSource>,
    error_prefix: String,
}

impl LogTailResolver {
    pub fn new(source: Arc<dyn LogSource>) -> Self {
        Self {
            source,
            error_prefix: classification::DEFAULT_ERROR_PREFIX.to_string(),
        }
    }

    /// Override the prefix stripped from typed error log lines.
    pub fn with_error_prefix(mut self, error_prefix: impl Into<String>) -> Self {
        self.error_prefix = error_prefix.into();
        self
    }

    /// Resolve a log stream's tail into a `(error_type, error_message)` pair.
    ///
    /// The tail line is expected to look like `"{prefix}{Type}:{message}"`.
    /// The split is best-effort: with no colon the whole line becomes the
    /// message and the caller-supplied default type is kept.
    pub async fn resolve(&self, default_type: &str, log_stream_id: &str) -> (String, String) {
        let message = match self.source.get_last_event(log_stream_id).await {
            Ok(message) if !message.is_empty() => message,
            Ok(_) => {
                tracing::warn!(
                    log_stream = %log_stream_id,
                    "Log stream tail is empty"
                );
                return sentinel_pair();
            }
            Err(err) => {
                tracing::warn!(
                    log_stream = %log_stream_id,
                    error = %err,
                    "Failed fetching log stream tail"
                );
                return sentinel_pair();
            }
        };

        let stripped = message.strip_prefix(&self.error_prefix).unwrap_or(&message);
        match stripped.split_once(':') {
            Some((error_type, error_message)) => {
                (error_type.to_string(), error_message.to_string())
            }
            None => (default_type.to_string(), stripped.to_string()),
        }
    }
}

fn sentinel_pair() -> (String, String) {
    (
        sentinels::EXCEPTION.to_string(),
        sentinels::LOG_LOOKUP_FAILED.to_string(),
    )
}
