//! # Terminus Core
//!
//! Rust core for terminal failure handling in the Terminus workflow
//! orchestration pipeline.
//!
//! ## Overview
//!
//! When a pipeline execution fails, the orchestration layer hands this crate
//! a loosely-structured failure description. The handler normalizes it into
//! a canonical `(error_type, error_message)` pair, records a terminal state
//! for the workflow instance exactly once, and optionally publishes a
//! failure notification.
//!
//! ## Architecture
//!
//! The core is the classification layer: failure causes arrive in several
//! incompatible shapes (an explicit error message, a batch retry history
//! whose actionable error is one log line deeper, or plain text), and every
//! one of them must classify without failing. Everything downstream of
//! classification fails loud: a workflow whose terminal state cannot be
//! recorded is never silently treated as handled.
//!
//! ## Module Organization
//!
//! - [`models`] - payload, cause, and record types
//! - [`classification`] - error extraction and log-tail resolution (the core)
//! - [`state_machine`] - status vocabulary and the terminal transition
//! - [`state_store`] - state-store seam with Postgres and in-memory adapters
//! - [`logs`] - log-source seam with a Postgres adapter
//! - [`notification`] - post-commit failure notification
//! - [`handler`] - the thin coordinator
//! - [`config`] - runtime configuration
//! - [`error`] - structured error handling
//! - [`logging`] - tracing setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use serde_json::json;
//! use sqlx::PgPool;
//! use terminus_core::config::TerminusConfig;
//! use terminus_core::handler::FailureHandler;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TerminusConfig::from_env()?;
//! let pool = PgPool::connect(&config.database_url).await?;
//! let handler = FailureHandler::from_config(&config, pool);
//!
//! let catalog = handler
//!     .handle(json!({
//!         "id": "landsat/l2-processing/scene-42",
//!         "error": {"Error": "InvalidInput", "Cause": "bad geometry"}
//!     }))
//!     .await?;
//! println!("recorded terminal state for {}", catalog.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! One invocation is a single logical thread of execution; collaborator
//! calls are awaited sequentially with no internal parallelism. Concurrent
//! invocations for distinct workflow ids share only the stateless
//! collaborator clients.

pub mod classification;
pub mod config;
pub mod constants;
pub mod error;
pub mod handler;
pub mod logging;
pub mod logs;
pub mod models;
pub mod notification;
pub mod state_machine;
pub mod state_store;
pub mod test_helpers;

pub use classification::{ErrorExtractor, LogTailResolver};
pub use config::TerminusConfig;
pub use error::{Result, TerminusError};
pub use handler::FailureHandler;
pub use models::{Catalog, ClassifiedError, FailureInfo, ParsedCause, WorkflowRecord};
pub use notification::{BroadcastTransport, NotificationPublisher};
pub use state_machine::{StateTransitioner, WorkflowStatus};
pub use state_store::MemoryStateStore;
