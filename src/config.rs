use crate::constants::{classification, system};
use crate::error::{Result, TerminusError};

/// Runtime configuration for the failure-handling core.
///
/// The notification topic is the one behavioral switch: when `None`, the
/// publish step is skipped entirely and the handler finishes after the state
/// transition.
#[derive(Debug, Clone)]
pub struct TerminusConfig {
    pub database_url: String,
    /// Topic the failure notification is published to. `None` disables publishing.
    pub failed_topic: Option<String>,
    /// Log grouping the log-tail resolver reads batch task streams from.
    pub log_group: String,
    /// Prefix stripped from typed error log lines before splitting.
    pub error_prefix: String,
    /// Capacity of the in-process notification channel.
    pub notification_capacity: usize,
}

impl Default for TerminusConfig {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost/terminus_development".to_string(),
            failed_topic: None,
            log_group: system::DEFAULT_LOG_GROUP.to_string(),
            error_prefix: classification::DEFAULT_ERROR_PREFIX.to_string(),
            notification_capacity: system::DEFAULT_NOTIFICATION_CAPACITY,
        }
    }
}

impl TerminusConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(db_url) = std::env::var("TERMINUS_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            config.database_url = db_url;
        }

        if let Ok(topic) = std::env::var("TERMINUS_FAILED_TOPIC") {
            if !topic.is_empty() {
                config.failed_topic = Some(topic);
            }
        }

        if let Ok(log_group) = std::env::var("TERMINUS_LOG_GROUP") {
            config.log_group = log_group;
        }

        if let Ok(prefix) = std::env::var("TERMINUS_ERROR_PREFIX") {
            config.error_prefix = prefix;
        }

        if let Ok(capacity) = std::env::var("TERMINUS_NOTIFICATION_CAPACITY") {
            config.notification_capacity = capacity.parse().map_err(|e| {
                TerminusError::ConfigurationError(format!("Invalid notification_capacity: {e}"))
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TerminusConfig::default();
        assert!(config.failed_topic.is_none());
        assert_eq!(config.log_group, system::DEFAULT_LOG_GROUP);
        assert_eq!(config.notification_capacity, 1000);
    }

    // One test for all env-derived settings: the variables are process-wide
    // and the test runner is parallel.
    #[test]
    fn test_from_env() {
        std::env::set_var("TERMINUS_FAILED_TOPIC", "terminus-failed");
        std::env::set_var("TERMINUS_LOG_GROUP", "/other/group");
        let config = TerminusConfig::from_env().unwrap();
        assert_eq!(config.failed_topic.as_deref(), Some("terminus-failed"));
        assert_eq!(config.log_group, "/other/group");

        std::env::set_var("TERMINUS_NOTIFICATION_CAPACITY", "not-a-number");
        let result = TerminusConfig::from_env();
        assert!(matches!(result, Err(TerminusError::ConfigurationError(_))));

        std::env::remove_var("TERMINUS_FAILED_TOPIC");
        std::env::remove_var("TERMINUS_LOG_GROUP");
        std::env::remove_var("TERMINUS_NOTIFICATION_CAPACITY");
    }
}
