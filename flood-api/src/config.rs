//! Server configuration loaded from environment variables

use std::time::Duration;

use flood_sources::{JPS_FEED_URL, NEWSDATA_BASE_URL};
use tracing::info;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct FloodConfig {
    /// NewsData.io API key; `None` serves mock news
    pub newsdata_key: Option<String>,
    pub newsdata_base_url: String,
    pub jps_feed_url: String,
    /// Ceiling for building one feed
    pub request_timeout: Duration,
    pub port: u16,
}

impl Default for FloodConfig {
    fn default() -> Self {
        Self {
            newsdata_key: None,
            newsdata_base_url: NEWSDATA_BASE_URL.to_string(),
            jps_feed_url: JPS_FEED_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            port: DEFAULT_PORT,
        }
    }
}

impl FloodConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unset, empty or unparsable
    /// values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let config = Self {
            newsdata_key: get("NEWSDATA_KEY"),
            newsdata_base_url: get("NEWSDATA_BASE_URL").unwrap_or(defaults.newsdata_base_url),
            jps_feed_url: get("JPS_FEED_URL").unwrap_or(defaults.jps_feed_url),
            request_timeout: get("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            port: get("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
        };

        config.log_summary();
        config
    }

    fn log_summary(&self) {
        if self.newsdata_key.is_some() {
            info!("NewsData API key found in environment");
        } else {
            info!("No NewsData API key found - news will use mock articles");
        }
        info!(
            "Sources: news={}, jps={}, timeout={}s",
            self.newsdata_base_url,
            self.jps_feed_url,
            self.request_timeout.as_secs()
        );
    }
}
