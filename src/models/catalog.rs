//! # Catalog Model
//!
//! The invocation payload's view of a workflow instance. The catalog itself
//! is owned by the pipeline front end; this handler only needs the instance
//! id and the failure block, and carries every other field through untouched
//! so the payload can be returned for chaining.

use crate::error::{Result, TerminusError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Workflow-instance identity extracted from an invocation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Workflow instance id, the state store key.
    pub id: String,
    /// Failure block attached by the orchestration layer. Absent when the
    /// trigger carried no error detail at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FailureInfo>,
    /// Remaining payload fields, passed through verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Catalog {
    /// Parse a catalog out of a raw invocation payload.
    pub fn from_payload(payload: Value) -> Result<Self> {
        let catalog: Catalog = serde_json::from_value(payload)
            .map_err(|e| TerminusError::ValidationError(format!("Malformed payload: {e}")))?;
        if catalog.id.is_empty() {
            return Err(TerminusError::ValidationError(
                "Payload is missing a workflow id".to_string(),
            ));
        }
        Ok(catalog)
    }
}

/// Raw failure description produced by the orchestration layer.
///
/// `cause` is untyped text that may itself be JSON-encoded; its shape is not
/// known until parsed by [`crate::models::ParsedCause::parse`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FailureInfo {
    /// Coarse error-type hint, e.g. the name of the raised error.
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// Free text, often a JSON-encoded failure detail.
    #[serde(rename = "Cause", default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_from_payload() {
        let payload = json!({
            "id": "landsat/l2-processing/scene-42",
            "error": {"Error": "InvalidInput", "Cause": "bad geometry"},
            "workflow": "l2-processing",
            "features": []
        });

        let catalog = Catalog::from_payload(payload).unwrap();
        assert_eq!(catalog.id, "landsat/l2-processing/scene-42");
        let error = catalog.error.unwrap();
        assert_eq!(error.error_type.as_deref(), Some("InvalidInput"));
        assert_eq!(error.cause.as_deref(), Some("bad geometry"));
        assert!(catalog.extra.contains_key("workflow"));
        assert!(catalog.extra.contains_key("features"));
    }

    #[test]
    fn test_catalog_without_error_block() {
        let catalog = Catalog::from_payload(json!({"id": "wf-1"})).unwrap();
        assert!(catalog.error.is_none());
    }

    #[test]
    fn test_missing_id_rejected() {
        let result = Catalog::from_payload(json!({"error": {"Error": "Oops"}}));
        assert!(matches!(result, Err(TerminusError::ValidationError(_))));

        let result = Catalog::from_payload(json!({"id": ""}));
        assert!(matches!(result, Err(TerminusError::ValidationError(_))));
    }

    #[test]
    fn test_catalog_round_trips_extra_fields() {
        let payload = json!({"id": "wf-1", "workflow": "ingest", "priority": 3});
        let catalog = Catalog::from_payload(payload.clone()).unwrap();
        let back = serde_json::to_value(&catalog).unwrap();
        assert_eq!(back, payload);
    }
}
