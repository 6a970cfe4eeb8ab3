//! # Failure Notification
//!
//! Optional post-commit publishing of the failed workflow's record. The
//! transport mechanics live behind [`NotificationTransport`]; only the
//! message contract is fixed: the full record snapshot as the body, with
//! `input_collections` / `workflow` / `error` string attributes.

pub mod publisher;
pub mod transport;

pub use publisher::NotificationPublisher;
pub use transport::{BroadcastTransport, NotificationError, NotificationTransport, PublishedNotification};
