use super::log_tail::LogTailResolver;
use crate::constants::{classification, sentinels};
use crate::models::{Attempt, ClassifiedError, FailureInfo, ParsedCause};
use thiserror::Error;

/// Faults hit while inspecting a batch attempt chain. Always recovered
/// locally: classification falls back to whatever was established before the
/// chain was consulted.
#[derive(Debug, Error)]
enum AttemptError {
    #[error("attempt chain is empty")]
    EmptyChain,
    #[error("last attempt has no status reason")]
    MissingStatusReason,
    #[error("last attempt has no container log stream")]
    MissingLogStream,
}

/// Normalizes a raw failure payload into a canonical [`ClassifiedError`].
///
/// Total function: no input, however malformed, makes classification fail
/// outward. The only I/O is the log-tail lookup for container-exit batch
/// failures, and that path is itself total.
pub struct ErrorExtractor {
    log_tail: LogTailResolver,
}

impl ErrorExtractor {
    pub fn new(log_tail: LogTailResolver) -> Self {
        Self { log_tail }
    }

    /// Classify a failure payload, in priority order:
    ///
    /// 1. the error-type hint, `"unknown"` when absent;
    /// 2. an explicit `errorMessage` in the decoded cause;
    /// 3. a batch attempt chain, refined through the log tail when the last
    ///    attempt died with a container exit;
    /// 4. the cause text verbatim when it is not a JSON object;
    /// 5. the `"unknown"` sentinel for everything else.
    pub async fn classify(&self, failure: &FailureInfo) -> ClassifiedError {
        let error_type = failure
            .error_type
            .clone()
            .unwrap_or_else(|| sentinels::UNKNOWN.to_string());

        let Some(cause) = failure.cause.as_deref() else {
            return ClassifiedError::new(error_type, sentinels::UNKNOWN);
        };

        match ParsedCause::parse(cause) {
            ParsedCause::RawText { text } => ClassifiedError::new(error_type, text),
            ParsedCause::DirectMessage { error_message } => {
                ClassifiedError::new(error_type, error_message)
            }
            ParsedCause::Opaque => ClassifiedError::new(error_type, sentinels::UNKNOWN),
            ParsedCause::AttemptChain { attempts } => {
                self.classify_attempts(error_type, &attempts).await
            }
        }
    }

    async fn classify_attempts(&self, error_type: String, attempts: &[Attempt]) -> ClassifiedError {
        match self.refine_from_attempts(&error_type, attempts).await {
            Ok(Some((refined_type, refined_message))) => {
                ClassifiedError::new(refined_type, refined_message)
            }
            // Last attempt did not die with a container exit; nothing finer
            // to say than the orchestration-level hint.
            Ok(None) => ClassifiedError::new(error_type, sentinels::UNKNOWN),
            Err(err) => {
                tracing::error!(error = %err, "Failed inspecting attempt chain");
                ClassifiedError::new(error_type, sentinels::UNKNOWN)
            }
        }
    }

    /// Consult the last attempt; `Ok(None)` when its status reason is not a
    /// container exit.
    async fn refine_from_attempts(
        &self,
        default_type: &str,
        attempts: &[Attempt],
    ) -> Result<Option<(String, String)>, AttemptError> {
        let last = attempts.last().ok_or(AttemptError::EmptyChain)?;
        let reason = last
            .status_reason
            .as_deref()
            .ok_or(AttemptError::MissingStatusReason)?;

        if !reason.contains(classification::CONTAINER_EXIT_REASON) {
            return Ok(None);
        }

        let log_stream = last.log_stream().ok_or(AttemptError::MissingLogStream)?;
        Ok(Some(self.log_tail.resolve(default_type, log_stream).await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{batch_cause, FailingLogSource, StaticLogSource};
    use std::sync::Arc;

    fn extractor_with_source(source: StaticLogSource) -> ErrorExtractor {
        ErrorExtractor::new(LogTailResolver::new(Arc::new(source)))
    }

    fn failure(error_type: Option<&str>, cause: Option<&str>) -> FailureInfo {
        FailureInfo {
            error_type: error_type.map(str::to_string),
            cause: cause.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_plain_text_cause_kept_verbatim() {
        let extractor = extractor_with_source(StaticLogSource::default());
        let classified = extractor
            .classify(&failure(Some("RuntimeError"), Some("something broke")))
            .await;
        assert_eq!(classified.error_type, "RuntimeError");
        assert_eq!(classified.error_message, "something broke");
    }

    #[tokio::test]
    async fn test_missing_hint_defaults_to_unknown() {
        let extractor = extractor_with_source(StaticLogSource::default());
        let classified = extractor.classify(&failure(None, Some("oops"))).await;
        assert_eq!(classified.error_type, "unknown");
        assert_eq!(classified.error_message, "oops");
    }

    #[tokio::test]
    async fn test_direct_message_cause() {
        let extractor = extractor_with_source(StaticLogSource::default());
        let classified = extractor
            .classify(&failure(
                Some("InvalidInput"),
                Some(r#"{"errorMessage": "bad things"}"#),
            ))
            .await;
        assert_eq!(classified.error_type, "InvalidInput");
        assert_eq!(classified.error_message, "bad things");
        assert_eq!(classified.to_string(), "InvalidInput: bad things");
    }

    #[tokio::test]
    async fn test_container_exit_refined_from_log_tail() {
        let source = StaticLogSource::with_event(
            "batch/default/abc123",
            "terminus.errors.BadInput:something wrong",
        );
        let extractor = extractor_with_source(source);

        let cause = batch_cause("Essential container in task exited", Some("batch/default/abc123"));
        let classified = extractor
            .classify(&failure(Some("States.TaskFailed"), Some(&cause)))
            .await;
        assert_eq!(classified.error_type, "BadInput");
        assert_eq!(classified.error_message, "something wrong");
    }

    #[tokio::test]
    async fn test_failed_log_lookup_yields_sentinel_pair() {
        let extractor = ErrorExtractor::new(LogTailResolver::new(Arc::new(FailingLogSource)));

        let cause = batch_cause("Essential container in task exited", Some("batch/default/gone"));
        let classified = extractor
            .classify(&failure(Some("States.TaskFailed"), Some(&cause)))
            .await;
        assert_eq!(classified.error_type, "Exception");
        assert_eq!(classified.error_message, "Failed getting logStream");
    }

    #[tokio::test]
    async fn test_non_container_exit_reason_keeps_hint() {
        let extractor = extractor_with_source(StaticLogSource::default());

        let cause = batch_cause("Task failed to start", Some("batch/default/abc123"));
        let classified = extractor
            .classify(&failure(Some("States.TaskFailed"), Some(&cause)))
            .await;
        assert_eq!(classified.error_type, "States.TaskFailed");
        assert_eq!(classified.error_message, "unknown");
    }

    #[tokio::test]
    async fn test_container_exit_without_log_stream_falls_back() {
        let extractor = extractor_with_source(StaticLogSource::default());

        let cause = batch_cause("Essential container in task exited", None);
        let classified = extractor
            .classify(&failure(Some("States.TaskFailed"), Some(&cause)))
            .await;
        assert_eq!(classified.error_type, "States.TaskFailed");
        assert_eq!(classified.error_message, "unknown");
    }

    #[tokio::test]
    async fn test_empty_attempt_chain_falls_back() {
        let extractor = extractor_with_source(StaticLogSource::default());
        let classified = extractor
            .classify(&failure(Some("States.TaskFailed"), Some(r#"{"Attempts": []}"#)))
            .await;
        assert_eq!(classified.error_type, "States.TaskFailed");
        assert_eq!(classified.error_message, "unknown");
    }

    #[tokio::test]
    async fn test_unrecognized_object_cause() {
        let extractor = extractor_with_source(StaticLogSource::default());
        let classified = extractor
            .classify(&failure(Some("RuntimeError"), Some(r#"{"status": "TIMED_OUT"}"#)))
            .await;
        assert_eq!(classified.error_type, "RuntimeError");
        assert_eq!(classified.error_message, "unknown");
    }

    #[tokio::test]
    async fn test_missing_cause_degrades_to_unknown() {
        let extractor = extractor_with_source(StaticLogSource::default());
        let classified = extractor.classify(&failure(Some("RuntimeError"), None)).await;
        assert_eq!(classified.error_type, "RuntimeError");
        assert_eq!(classified.error_message, "unknown");
    }

    #[tokio::test]
    async fn test_empty_cause_degrades_to_unknown() {
        // "" is not valid JSON, so it is raw text; the non-empty invariant
        // then degrades the empty message to the sentinel.
        let extractor = extractor_with_source(StaticLogSource::default());
        let classified = extractor.classify(&failure(Some("RuntimeError"), Some(""))).await;
        assert_eq!(classified.error_type, "RuntimeError");
        assert_eq!(classified.error_message, "unknown");
    }
}
