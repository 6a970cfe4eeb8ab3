//! # Data Models
//!
//! Payload and record types flowing through the failure handler:
//!
//! - [`Catalog`] - workflow-instance identity parsed from the invocation payload
//! - [`FailureInfo`] - the raw failure block attached to the payload
//! - [`ParsedCause`] / [`ClassifiedError`] - cause decoding and its canonical output
//! - [`WorkflowRecord`] - the state store's record as read and written here

pub mod catalog;
pub mod cause;
pub mod workflow_record;

pub use catalog::{Catalog, FailureInfo};
pub use cause::{Attempt, AttemptContainer, ClassifiedError, ParsedCause};
pub use workflow_record::WorkflowRecord;
