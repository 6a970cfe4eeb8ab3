//! # System Constants
//!
//! String constants that define the classification vocabulary and the
//! operational defaults of the Terminus failure-handling core.

/// Sentinel values used when classification cannot produce a real answer.
pub mod sentinels {
    /// Fallback for an absent error-type hint and for unrecognized cause shapes.
    pub const UNKNOWN: &str = "unknown";

    /// Error type reported when the log-tail lookup itself fails.
    pub const EXCEPTION: &str = "Exception";

    /// Error message reported when the log-tail lookup itself fails.
    pub const LOG_LOOKUP_FAILED: &str = "Failed getting logStream";
}

/// Markers and defaults driving error-cause classification.
pub mod classification {
    /// Error type that routes a workflow to the `invalid` terminal status
    /// instead of `failed`. Raised by tasks rejecting their input payload.
    pub const INVALID_INPUT_ERROR_TYPE: &str = "InvalidInput";

    /// Substring of a batch attempt's status reason indicating the task
    /// container exited and the actionable error is in its log tail.
    pub const CONTAINER_EXIT_REASON: &str = "Essential container in task exited";

    /// Prefix task containers put in front of typed error log lines.
    /// Stripped before the tail line is split into `(type, message)`.
    pub const DEFAULT_ERROR_PREFIX: &str = "terminus.errors.";
}

/// Operational defaults for collaborator wiring.
pub mod system {
    /// Log grouping batch task containers write their streams under.
    pub const DEFAULT_LOG_GROUP: &str = "/terminus/batch/tasks";

    /// Default capacity of the in-process notification channel.
    pub const DEFAULT_NOTIFICATION_CAPACITY: usize = 1000;
}
