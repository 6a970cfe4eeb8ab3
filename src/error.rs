//! Crate-level error types for the Terminus failure-handling core.

use thiserror::Error;

/// Top-level error taxonomy.
///
/// Everything upstream of persisting the terminal state is swallowed and
/// degraded inside the classification layer; these variants cover the paths
/// that must fail loud: recording the terminal state, publishing the failure
/// notification, and rejecting malformed invocations or configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerminusError {
    #[error("State transition error: {0}")]
    StateTransitionError(String),
    #[error("Notification error: {0}")]
    NotificationError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub type Result<T> = std::result::Result<T, TerminusError>;
