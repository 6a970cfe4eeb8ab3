use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status vocabulary owned by the state store.
///
/// This crate only ever writes `Failed` and `Invalid`; the remaining
/// statuses are read back and carried through notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    /// Workflow instance is queued for execution
    Queued,
    /// Workflow instance is currently executing
    Processing,
    /// Workflow instance completed successfully
    Completed,
    /// Workflow instance failed with an execution error
    Failed,
    /// Workflow instance was rejected for a caller/data-quality fault
    Invalid,
    /// Workflow instance was aborted by an operator
    Aborted,
}

impl WorkflowStatus {
    /// Check if this is a terminal status (no further transitions expected)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed | Self::Invalid | Self::Aborted
        )
    }

    /// Check if this is a failure status recorded by the failure handler
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed | Self::Invalid)
    }

    /// Check if this is an active status (instance is being processed)
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Queued | Self::Processing)
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queued => write!(f, "queued"),
            Self::Processing => write!(f, "processing"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
            Self::Invalid => write!(f, "invalid"),
            Self::Aborted => write!(f, "aborted"),
        }
    }
}

impl std::str::FromStr for WorkflowStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(Self::Queued),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "invalid" => Ok(Self::Invalid),
            "aborted" => Ok(Self::Aborted),
            _ => Err(format!("Invalid workflow status: {s}")),
        }
    }
}

/// Column mapping for the state store adapters
impl TryFrom<String> for WorkflowStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
