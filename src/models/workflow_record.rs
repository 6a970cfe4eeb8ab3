//! # Workflow Record Model
//!
//! The state store's record for one workflow instance, as far as this crate
//! is concerned. The store owns the record across the workflow's whole
//! lifetime; this handler only performs the final transition into a terminal
//! failure status and reads the record back for the failure notification.

use crate::state_machine::WorkflowStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One workflow instance tracked by the state store.
///
/// Maps to the `workflow_records` table:
///
/// ```sql
/// CREATE TABLE workflow_records (
///   id TEXT PRIMARY KEY,
///   status TEXT NOT NULL,
///   workflow TEXT NOT NULL,
///   input_collections TEXT,
///   last_error TEXT,
///   created_at TIMESTAMP NOT NULL DEFAULT NOW(),
///   updated_at TIMESTAMP NOT NULL DEFAULT NOW()
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkflowRecord {
    /// Workflow instance id, e.g. `"{collections}/{workflow}/{item}"`.
    pub id: String,
    #[sqlx(try_from = "String")]
    pub status: WorkflowStatus,
    /// Name of the workflow this instance executed.
    pub workflow: String,
    /// Collections the input items belong to.
    pub input_collections: Option<String>,
    /// Composed `"type: message"` string of the most recent failure.
    pub last_error: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
