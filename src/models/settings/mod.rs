// Settings module
// User-editable application settings, persisted as TOML

use serde::{Deserialize, Serialize};

/// Application settings.
///
/// Loaded from the platform config directory at startup; missing fields fall
/// back to their defaults so old config files keep working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Base URL of the events endpoint, e.g. `https://example.com/api/events`.
    pub feed_url: String,
    /// Optional locale forwarded to the API as a query parameter.
    pub locale: Option<String>,
    /// Events per page requested from the feed.
    pub page_size: u32,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            feed_url: "https://localhost:8080/api/events".to_string(),
            locale: None,
            page_size: 12,
            request_timeout_secs: 20,
        }
    }
}

impl AppSettings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.feed_url.trim().is_empty() {
            return Err("Feed URL cannot be empty".to_string());
        }

        if !self.feed_url.starts_with("http://") && !self.feed_url.starts_with("https://") {
            return Err("Feed URL must start with http:// or https://".to_string());
        }

        if self.page_size == 0 {
            return Err("Page size must be at least 1".to_string());
        }

        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be at least 1 second".to_string());
        }

        Ok(())
    }
}
