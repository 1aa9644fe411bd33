//! Network observation capability
//!
//! Credential extraction rides along with the site's own JavaScript: a
//! browser loads the landing page and every request the page issues is
//! inspected on its way out. [`NetworkObserver`] abstracts that browser so
//! the rest of the client can be tested with a scripted fake.

use crate::{Result, client::extractor::ArtifactHarvester, types::CapturedArtifacts};
use headless_chrome::browser::tab::{RequestInterceptor, RequestPausedDecision};
use headless_chrome::browser::transport::{SessionId, Transport};
use headless_chrome::protocol::cdp::Fetch::events::RequestPausedEvent;
use headless_chrome::{Browser, LaunchOptions};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Options for one capture pass
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    /// Upper bound for the page navigation
    pub navigation_timeout: Duration,
    /// Extra wait after navigation for trailing requests
    pub settle: Duration,
    /// User agent presented by the browser
    pub user_agent: Option<String>,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            navigation_timeout: Duration::from_secs(30),
            settle: Duration::from_secs(2),
            user_agent: None,
        }
    }
}

/// Loads a page and reports the credential artifacts its requests carried
#[async_trait::async_trait]
pub trait NetworkObserver: Send + Sync {
    /// Observe the requests issued while `page_url` loads.
    ///
    /// Finding nothing is not an error; only infrastructure failures are.
    async fn capture(
        &self,
        page_url: &str,
        options: &CaptureOptions,
    ) -> Result<CapturedArtifacts>;

    /// Release long-lived resources. Must be idempotent.
    async fn shutdown(&self) {}
}

/// [`NetworkObserver`] backed by a local Chrome/Chromium via CDP
///
/// Each capture launches its own browser, which is dropped (and the process
/// killed) before `capture` returns, whatever the outcome.
#[derive(Debug, Clone)]
pub struct ChromeObserver {
    /// Explicit browser binary; auto-detected when `None`
    chrome_path: Option<PathBuf>,
    /// Run without a window
    headless: bool,
    /// Value for Chrome's `--proxy-server`
    proxy_server: Option<String>,
}

impl ChromeObserver {
    /// Create a headless observer using the auto-detected browser
    pub fn new() -> Self {
        Self {
            chrome_path: None,
            headless: true,
            proxy_server: None,
        }
    }

    /// Build from configuration settings
    pub fn from_settings(settings: &crate::Settings) -> Self {
        Self {
            chrome_path: settings.browser.chrome_path.clone(),
            headless: settings.browser.headless,
            proxy_server: settings.get_proxy_url(),
        }
    }

    /// Use a specific Chrome binary
    pub fn with_chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Toggle headless mode
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Route browser traffic through a proxy
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy_server = Some(proxy.into());
        self
    }

    /// Blocking body of a capture pass; runs on the blocking thread pool
    fn capture_blocking(
        &self,
        page_url: &str,
        options: &CaptureOptions,
    ) -> Result<CapturedArtifacts> {
        let launch_options = LaunchOptions::default_builder()
            .headless(self.headless)
            .path(self.chrome_path.clone())
            .proxy_server(self.proxy_server.as_deref())
            .idle_browser_timeout(options.navigation_timeout + options.settle * 2)
            .build()
            .map_err(|e| crate::Error::browser("launch_options", &e.to_string()))?;

        // Owned here so it is dropped on every return path below
        let browser = Browser::new(launch_options)
            .map_err(|e| crate::Error::browser("launch", &e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| crate::Error::browser("new_tab", &e.to_string()))?;
        tab.set_default_timeout(options.navigation_timeout);

        if let Some(user_agent) = &options.user_agent {
            tab.set_user_agent(user_agent, None, None)
                .map_err(|e| crate::Error::browser("user_agent", &e.to_string()))?;
        }

        let harvester = Arc::new(Mutex::new(ArtifactHarvester::new()));
        tab.enable_fetch(None, None)
            .map_err(|e| crate::Error::browser("enable_fetch", &e.to_string()))?;
        tab.enable_request_interception(Arc::new(HarvestingInterceptor {
            harvester: Arc::clone(&harvester),
        }))
        .map_err(|e| crate::Error::browser("request_interception", &e.to_string()))?;

        tracing::debug!("Navigating to {}", page_url);
        tab.navigate_to(page_url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| {
                let message = e.to_string();
                if message.to_lowercase().contains("timed out") {
                    crate::Error::timeout("navigation", options.navigation_timeout.as_secs())
                } else {
                    crate::Error::browser("navigate", &message)
                }
            })?;

        std::thread::sleep(options.settle);

        let captured = harvester
            .lock()
            .map(|harvester| harvester.artifacts())
            .map_err(|_| crate::Error::internal("artifact harvester lock poisoned"))?;

        drop(tab);
        drop(browser);

        Ok(captured)
    }
}

impl Default for ChromeObserver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl NetworkObserver for ChromeObserver {
    async fn capture(
        &self,
        page_url: &str,
        options: &CaptureOptions,
    ) -> Result<CapturedArtifacts> {
        let observer = self.clone();
        let page_url = page_url.to_string();
        let options = options.clone();

        tokio::task::spawn_blocking(move || observer.capture_blocking(&page_url, &options))
            .await
            .map_err(|e| crate::Error::internal(format!("browser task failed: {}", e)))?
    }
}

/// Feeds every paused request into the harvester and lets it continue untouched
struct HarvestingInterceptor {
    harvester: Arc<Mutex<ArtifactHarvester>>,
}

impl HarvestingInterceptor {
    fn harvest(&self, event: &RequestPausedEvent) -> RequestPausedDecision {
        let request = &event.params.request;
        let headers = header_map(serde_json::to_value(&request.headers).ok());

        if let Ok(mut harvester) = self.harvester.lock() {
            harvester.observe(&request.url, &headers);
        }

        RequestPausedDecision::Continue(None)
    }
}

impl RequestInterceptor for HarvestingInterceptor {
    fn intercept(
        &self,
        _transport: Arc<Transport>,
        _session_id: SessionId,
        event: RequestPausedEvent,
    ) -> RequestPausedDecision {
        self.harvest(&event)
    }
}

/// Flatten CDP's header object into a string map
fn header_map(headers: Option<serde_json::Value>) -> HashMap<String, String> {
    match headers {
        Some(serde_json::Value::Object(map)) => map
            .into_iter()
            .filter_map(|(name, value)| value.as_str().map(|v| (name, v.to_string())))
            .collect(),
        _ => HashMap::new(),
    }
}
