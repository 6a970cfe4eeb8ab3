//! # Test Helpers
//!
//! Shared doubles and fixtures for exercising the failure pipeline without
//! live collaborators, plus the sqlx migrator for database-backed suites.

pub mod collaborators;
pub mod fixtures;

pub use collaborators::{
    FailingLogSource, FailingStateStore, FailingTransport, RecordingTransport, StaticLogSource,
};
pub use fixtures::{batch_cause, failure_payload, sample_record};

/// Migrator for suites running against a disposable Postgres database.
#[cfg(feature = "postgres")]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
