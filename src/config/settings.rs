//! Configuration settings
//!
//! Settings can come from a TOML file, from environment variables, or from
//! code. Every section has defaults so a partial file is always valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Longest accepted credential lifetime (one year)
pub const MAX_CACHE_MINUTES: u64 = 525_600;

// Helper functions for serde defaults
fn default_true() -> bool {
    true
}

fn default_cache_minutes() -> u64 {
    60
}

fn default_base_url() -> String {
    "https://howlongtobeat.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36".to_string()
}

fn default_navigation_timeout() -> u64 {
    30
}

fn default_settle_millis() -> u64 {
    2000
}

fn default_landing_query() -> String {
    "mario".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration settings for the HLTB client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Client behaviour
    #[serde(default)]
    pub client: ClientSettings,
    /// Target site
    #[serde(default)]
    pub site: SiteSettings,
    /// Headless browser used for credential extraction
    #[serde(default)]
    pub browser: BrowserSettings,
    /// Network configuration
    #[serde(default)]
    pub network: NetworkSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Client-level options exposed to library callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// How long an extracted credential stays valid, in minutes
    #[serde(default = "default_cache_minutes")]
    pub cache_minutes: u64,
    /// When false, duration lookups short-circuit to `None`
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Target site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Site root, used both for the API and for the observed landing page
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// User agent for API requests and the browser session
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Headless browser configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// Run Chrome without a window
    #[serde(default = "default_true")]
    pub headless: bool,
    /// Explicit Chrome/Chromium binary, auto-detected when unset
    #[serde(default)]
    pub chrome_path: Option<PathBuf>,
    /// Upper bound for the landing page navigation, in seconds
    #[serde(default = "default_navigation_timeout")]
    pub navigation_timeout_secs: u64,
    /// Extra wait after navigation for trailing API calls, in milliseconds
    #[serde(default = "default_settle_millis")]
    pub settle_millis: u64,
    /// Search term placed in the landing page URL
    #[serde(default = "default_landing_query")]
    pub landing_query: String,
}

/// Network and proxy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// HTTPS proxy URL
    #[serde(default)]
    pub https_proxy: Option<String>,
    /// HTTP proxy URL
    #[serde(default)]
    pub http_proxy: Option<String>,
    /// All protocols proxy URL
    #[serde(default)]
    pub all_proxy: Option<String>,
    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            cache_minutes: default_cache_minutes(),
            enabled: default_true(),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: default_true(),
            chrome_path: None,
            navigation_timeout_secs: default_navigation_timeout(),
            settle_millis: default_settle_millis(),
            landing_query: default_landing_query(),
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            https_proxy: None,
            http_proxy: None,
            all_proxy: None,
            connect_timeout: default_connect_timeout(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
        }
    }
}

impl BrowserSettings {
    /// Navigation timeout as a [`Duration`]
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    /// Settle window as a [`Duration`]
    pub fn settle_window(&self) -> Duration {
        Duration::from_millis(self.settle_millis)
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables on top of the defaults
    pub fn from_env() -> crate::Result<Self> {
        Self::default().merge_with_env()
    }

    /// Load settings from configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::config("file", &format!("Failed to read config file: {}", e))
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| {
            crate::Error::config("file", &format!("Failed to parse config file: {}", e))
        })?;

        Ok(settings)
    }

    /// Apply environment variable overrides; unset variables leave values untouched
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Ok(minutes) = std::env::var("HLTB_CACHE_MINUTES") {
            self.client.cache_minutes = minutes.parse().map_err(|e| {
                crate::Error::config(
                    "HLTB_CACHE_MINUTES",
                    &format!("Invalid cache minutes: {}", e),
                )
            })?;
        }

        if let Ok(enabled) = std::env::var("HLTB_ENABLED") {
            self.client.enabled = parse_bool("HLTB_ENABLED", &enabled)?;
        }

        if let Ok(base_url) = std::env::var("HLTB_BASE_URL") {
            self.site.base_url = base_url;
        }

        if let Ok(user_agent) = std::env::var("HLTB_USER_AGENT") {
            self.site.user_agent = user_agent;
        }

        if let Ok(headless) = std::env::var("HLTB_HEADLESS") {
            self.browser.headless = parse_bool("HLTB_HEADLESS", &headless)?;
        }

        if let Ok(path) = std::env::var("HLTB_CHROME_PATH") {
            self.browser.chrome_path = Some(PathBuf::from(path));
        }

        if let Ok(timeout) = std::env::var("HLTB_NAVIGATION_TIMEOUT") {
            self.browser.navigation_timeout_secs = timeout.parse().map_err(|e| {
                crate::Error::config(
                    "HLTB_NAVIGATION_TIMEOUT",
                    &format!("Invalid timeout: {}", e),
                )
            })?;
        }

        if let Ok(settle) = std::env::var("HLTB_SETTLE_MILLIS") {
            self.browser.settle_millis = settle.parse().map_err(|e| {
                crate::Error::config(
                    "HLTB_SETTLE_MILLIS",
                    &format!("Invalid settle window: {}", e),
                )
            })?;
        }

        if let Ok(query) = std::env::var("HLTB_LANDING_QUERY") {
            self.browser.landing_query = query;
        }

        if let Ok(timeout) = std::env::var("HLTB_REQUEST_TIMEOUT") {
            self.network.request_timeout = timeout.parse().map_err(|e| {
                crate::Error::config(
                    "HLTB_REQUEST_TIMEOUT",
                    &format!("Invalid timeout: {}", e),
                )
            })?;
        }

        // Proxy variables always override when present
        if let Ok(proxy) = std::env::var("HTTPS_PROXY") {
            self.network.https_proxy = Some(proxy);
        }
        if let Ok(proxy) = std::env::var("HTTP_PROXY") {
            self.network.http_proxy = Some(proxy);
        }
        if let Ok(proxy) = std::env::var("ALL_PROXY") {
            self.network.all_proxy = Some(proxy);
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(verbose) = std::env::var("VERBOSE") {
            self.logging.verbose = verbose.parse().unwrap_or(false);
        }

        Ok(self)
    }

    /// Get effective proxy URL based on priority
    pub fn get_proxy_url(&self) -> Option<String> {
        self.network
            .https_proxy
            .as_ref()
            .or(self.network.http_proxy.as_ref())
            .or(self.network.all_proxy.as_ref())
            .cloned()
    }

    /// Credential lifetime as a chrono duration
    pub fn cache_ttl(&self) -> crate::Result<chrono::TimeDelta> {
        i64::try_from(self.client.cache_minutes)
            .ok()
            .and_then(chrono::TimeDelta::try_minutes)
            .ok_or_else(|| {
                crate::Error::config(
                    "cache_minutes",
                    &format!("Cache lifetime out of range: {}", self.client.cache_minutes),
                )
            })
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        if self.client.cache_minutes == 0 {
            return Err(crate::Error::config(
                "cache_minutes",
                "Invalid cache lifetime: cannot be 0",
            ));
        }

        if self.client.cache_minutes > MAX_CACHE_MINUTES {
            return Err(crate::Error::config(
                "cache_minutes",
                &format!(
                    "Invalid cache lifetime: {} exceeds {} minutes",
                    self.client.cache_minutes, MAX_CACHE_MINUTES
                ),
            ));
        }

        if let Err(e) = url::Url::parse(&self.site.base_url) {
            return Err(crate::Error::config(
                "base_url",
                &format!("Invalid base URL '{}': {}", self.site.base_url, e),
            ));
        }

        if self.browser.navigation_timeout_secs == 0 {
            return Err(crate::Error::config(
                "navigation_timeout_secs",
                "Invalid navigation timeout: cannot be 0",
            ));
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(crate::Error::config(
                    "log_level",
                    &format!("Invalid log level: {}", self.logging.level),
                ));
            }
        }

        for (name, proxy_url) in [
            ("https_proxy", &self.network.https_proxy),
            ("http_proxy", &self.network.http_proxy),
            ("all_proxy", &self.network.all_proxy),
        ]
        .iter()
        {
            if let Some(url_str) = proxy_url
                && let Err(e) = url::Url::parse(url_str)
            {
                return Err(crate::Error::config(
                    *name,
                    &format!("Invalid proxy URL '{}': {}", url_str, e),
                ));
            }
        }

        Ok(())
    }
}

fn parse_bool(field: &str, value: &str) -> crate::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(crate::Error::config(
            field,
            &format!("Invalid boolean: {}", other),
        )),
    }
}
