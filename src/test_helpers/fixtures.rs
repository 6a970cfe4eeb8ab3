//! Record and payload builders shared across the test suites.

use crate::models::WorkflowRecord;
use crate::state_machine::WorkflowStatus;
use chrono::Utc;
use serde_json::{json, Value};

/// A workflow record mid-execution, ready to be failed.
pub fn sample_record(id: &str) -> WorkflowRecord {
    WorkflowRecord {
        id: id.to_string(),
        status: WorkflowStatus::Processing,
        workflow: "l2-processing".to_string(),
        input_collections: Some("landsat".to_string()),
        last_error: None,
        created_at: Utc::now().naive_utc(),
        updated_at: Utc::now().naive_utc(),
    }
}

/// A batch-style cause with one attempt carrying the given status reason and
/// optional container log stream.
pub fn batch_cause(status_reason: &str, log_stream: Option<&str>) -> String {
    let mut attempt = json!({"StatusReason": status_reason});
    if let Some(log_stream) = log_stream {
        attempt["Container"] = json!({"LogStreamName": log_stream});
    }
    json!({"Attempts": [attempt]}).to_string()
}

/// A full invocation payload for the given workflow id and failure block.
pub fn failure_payload(id: &str, error_type: &str, cause: &str) -> Value {
    json!({
        "id": id,
        "workflow": "l2-processing",
        "error": {"Error": error_type, "Cause": cause}
    })
}
