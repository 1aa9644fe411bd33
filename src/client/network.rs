//! HTTP client configuration and proxy support

use crate::{Result, Settings};
use reqwest::{Client, Proxy};
use std::time::Duration;

/// Proxy options for the API client
#[derive(Debug, Clone, Default)]
pub struct ProxySpec {
    /// Proxy URL
    pub proxy_url: Option<String>,
}

impl ProxySpec {
    /// Create new proxy specification
    pub fn new() -> Self {
        Self::default()
    }

    /// Proxy selected from settings (HTTPS, then HTTP, then ALL)
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            proxy_url: settings.get_proxy_url(),
        }
    }

    /// Set proxy URL
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }
}

/// Build the reqwest client used for API calls
pub fn build_http_client(settings: &Settings, proxy_spec: &ProxySpec) -> Result<Client> {
    let mut client_builder = Client::builder()
        .user_agent(settings.site.user_agent.as_str())
        .connect_timeout(Duration::from_secs(settings.network.connect_timeout))
        .timeout(Duration::from_secs(settings.network.request_timeout));

    // Proxy environment variables are already folded into Settings
    match &proxy_spec.proxy_url {
        Some(proxy_url) => {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                crate::Error::config("proxy", &format!("Invalid proxy URL '{}': {}", proxy_url, e))
            })?;
            client_builder = client_builder.proxy(proxy);
        }
        None => client_builder = client_builder.no_proxy(),
    }

    client_builder.build().map_err(|e| {
        crate::Error::network(format!("Failed to create HTTP client: {}", e))
    })
}
