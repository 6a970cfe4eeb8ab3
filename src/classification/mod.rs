//! # Error Classification
//!
//! The core of the failure handler: normalizing a heterogeneous failure
//! payload into a canonical [`crate::models::ClassifiedError`]. Both
//! components are total functions; anything that goes wrong in here degrades
//! to sentinel values instead of propagating.

pub mod extractor;
pub mod log_tail;

pub use extractor::ErrorExtractor;
pub use log_tail::LogTailResolver;
