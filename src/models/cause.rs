//! # Failure Cause Model
//!
//! The failure payload's `Cause` field arrives as free text whose shape is
//! unknown until parsed: some producers attach an explicit error message,
//! batch executions attach their retry history, and everything else is
//! opaque text. [`ParsedCause::parse`] decodes it into an explicit union in
//! priority order instead of feeling out the shape with nested fallbacks,
//! and [`ClassifiedError`] is the canonical result of classification.

use crate::constants::sentinels;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Decoded shape of a failure payload's cause text.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedCause {
    /// Decoded cause carries an explicit `errorMessage` field.
    DirectMessage { error_message: String },
    /// Batch-execution retry history; only the last attempt is consulted.
    AttemptChain { attempts: Vec<Attempt> },
    /// Cause is not decodable as a JSON object; used verbatim as the message.
    RawText { text: String },
    /// Cause decoded as a JSON object of no known shape.
    Opaque,
}

impl ParsedCause {
    /// Decode a cause string, total over arbitrary input.
    ///
    /// Scalars, arrays, and `null` are raw text: producers that JSON-encode
    /// structured detail always send an object, so anything else is a plain
    /// message that merely happened to be valid JSON.
    pub fn parse(cause: &str) -> Self {
        let value: Value = match serde_json::from_str(cause) {
            Ok(value) => value,
            Err(_) => {
                return Self::RawText {
                    text: cause.to_string(),
                }
            }
        };

        let Value::Object(fields) = value else {
            return Self::RawText {
                text: cause.to_string(),
            };
        };

        if let Some(message) = fields.get("errorMessage") {
            let error_message = match message.as_str() {
                Some(text) => text.to_string(),
                None => message.to_string(),
            };
            return Self::DirectMessage { error_message };
        }

        if let Some(attempts) = fields.get("Attempts") {
            let attempts: Vec<Attempt> =
                serde_json::from_value(attempts.clone()).unwrap_or_default();
            return Self::AttemptChain { attempts };
        }

        Self::Opaque
    }
}

/// One entry of a batch execution's retry history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    #[serde(rename = "StatusReason", default, skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,
    #[serde(rename = "Container", default, skip_serializing_if = "Option::is_none")]
    pub container: Option<AttemptContainer>,
}

impl Attempt {
    /// Log stream written by this attempt's task container, if recorded.
    pub fn log_stream(&self) -> Option<&str> {
        self.container
            .as_ref()
            .and_then(|container| container.log_stream_name.as_deref())
    }
}

/// Container details of a batch attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttemptContainer {
    #[serde(rename = "LogStreamName", default, skip_serializing_if = "Option::is_none")]
    pub log_stream_name: Option<String>,
}

/// Canonical `(error_type, error_message)` pair produced by classification.
///
/// Both fields are always non-empty; empty inputs degrade to the `"unknown"`
/// sentinel rather than propagating a fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedError {
    pub error_type: String,
    pub error_message: String,
}

impl ClassifiedError {
    pub fn new(error_type: impl Into<String>, error_message: impl Into<String>) -> Self {
        let mut error_type = error_type.into();
        let mut error_message = error_message.into();
        if error_type.is_empty() {
            error_type = sentinels::UNKNOWN.to_string();
        }
        if error_message.is_empty() {
            error_message = sentinels::UNKNOWN.to_string();
        }
        Self {
            error_type,
            error_message,
        }
    }
}

/// The persisted display form, `"{error_type}: {error_message}"`.
impl fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type, self.error_message)
    }
}
