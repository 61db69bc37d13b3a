use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::CoreError;

/// Runtime settings for a dashboard session.
///
/// Every field has a default, so an empty config source is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the JSON API (e.g., "http://127.0.0.1:8080/api").
    pub api_base: String,

    /// Fetch `/portfolio/{profile}` instead of `/portfolio` when set.
    pub profile: Option<String>,

    /// Seconds between scheduled portfolio polls.
    pub poll_interval_secs: u64,

    /// Transport timeout for each HTTP request, in seconds.
    pub request_timeout_secs: u64,

    /// Minimum time a loading placeholder stays visible, in milliseconds.
    pub placeholder_min_display_ms: u64,

    /// Log filter directive (e.g., "info", "trade_tracker_core=debug").
    pub log_level: String,

    /// Deliver new-trade notifications.
    pub notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:8080/api".to_string(),
            profile: None,
            poll_interval_secs: 300,
            request_timeout_secs: 30,
            placeholder_min_display_ms: 300,
            log_level: "info".to_string(),
            notifications: true,
        }
    }
}

impl Settings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn placeholder_min_display(&self) -> Duration {
        Duration::from_millis(self.placeholder_min_display_ms)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.api_base.trim().is_empty() {
            return Err(CoreError::Validation("api_base must not be empty".into()));
        }
        if self.poll_interval_secs == 0 {
            return Err(CoreError::Validation(
                "poll_interval_secs must be greater than zero".into(),
            ));
        }
        if let Some(profile) = &self.profile {
            if profile.trim().is_empty() || profile.contains('/') {
                return Err(CoreError::Validation(format!(
                    "Invalid profile id '{profile}'"
                )));
            }
        }
        Ok(())
    }
}
