//! Postgres-backed log source adapter.
//!
//! Batch task containers append their log lines to the externally-owned
//! `task_log_events` table; the tail of a stream is the newest row for its
//! `(log_group, log_stream)` pair.

use super::{LogSource, LogSourceError, LogSourceResult};
use async_trait::async_trait;
use sqlx::PgPool;

/// Log source over the `task_log_events` table, scoped to one log group.
#[derive(Debug, Clone)]
pub struct PgLogSource {
    pool: PgPool,
    log_group: String,
}

impl PgLogSource {
    pub fn new(pool: PgPool, log_group: impl Into<String>) -> Self {
        Self {
            pool,
            log_group: log_group.into(),
        }
    }
}

#[async_trait]
impl LogSource for PgLogSource {
    async fn get_last_event(&self, log_stream_id: &str) -> LogSourceResult<String> {
        let row: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT message
            FROM task_log_events
            WHERE log_group = $1 AND log_stream = $2
            ORDER BY event_time DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(&self.log_group)
        .bind(log_stream_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| LogSourceError::retrieval("get_last_event", e.to_string()))?;

        row.map(|(message,)| message)
            .ok_or_else(|| LogSourceError::stream_not_found(log_stream_id))
    }
}
