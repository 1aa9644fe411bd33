//! Credential extraction
//!
//! [`ArtifactHarvester`] recognises the two credential carriers among
//! observed requests:
//!
//! - `POST /api/locate/{key}` where `key` is a hex segment of 16+ chars
//! - `POST /api/search` with an `x-auth-token` header
//!
//! [`CredentialExtractor`] drives a [`NetworkObserver`] against the landing
//! page and returns whatever the harvester saw.

use crate::{
    Result, Settings,
    client::observer::{CaptureOptions, NetworkObserver},
    types::CapturedArtifacts,
};
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

/// Header carrying the bearer token on `/api/search`
pub const AUTH_HEADER: &str = "x-auth-token";

/// Minimum length of a hex path segment accepted as a search key
pub const MIN_SEARCH_KEY_LEN: usize = 16;

/// Collects credential artifacts from a stream of observed requests.
///
/// Later observations overwrite earlier ones.
#[derive(Debug, Default)]
pub struct ArtifactHarvester {
    search_key: Option<String>,
    auth_token: Option<String>,
    observed: usize,
}

impl ArtifactHarvester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect one outgoing request
    pub fn observe(&mut self, url: &str, headers: &HashMap<String, String>) {
        self.observed += 1;

        let Ok(parsed) = Url::parse(url) else {
            return;
        };

        if let Some(key) = locate_key(&parsed) {
            tracing::debug!("Observed locate request carrying a search key");
            self.search_key = Some(key);
        }

        if is_search_path(&parsed)
            && let Some(token) = headers
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(AUTH_HEADER))
                .map(|(_, value)| value.trim())
                .filter(|value| !value.is_empty())
        {
            tracing::debug!("Observed search request carrying an auth token");
            self.auth_token = Some(token.to_string());
        }
    }

    /// Number of requests seen so far
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Snapshot of what has been captured
    pub fn artifacts(&self) -> CapturedArtifacts {
        CapturedArtifacts::new(self.search_key.clone(), self.auth_token.clone())
    }
}

/// `/api/locate/{hex}` -> `hex`
fn locate_key(url: &Url) -> Option<String> {
    let mut segments = url.path_segments()?;
    while let Some(segment) = segments.next() {
        if segment == "api" && segments.next() == Some("locate") {
            let key = segments.next()?;
            if key.len() >= MIN_SEARCH_KEY_LEN && key.chars().all(|c| c.is_ascii_hexdigit()) {
                return Some(key.to_string());
            }
            return None;
        }
    }
    None
}

/// Path is exactly `/api/search` (trailing slash tolerated)
fn is_search_path(url: &Url) -> bool {
    url.path().trim_end_matches('/') == "/api/search"
}

/// Runs capture passes against the site's landing page
#[derive(Debug)]
pub struct CredentialExtractor<O: NetworkObserver> {
    observer: Arc<O>,
    page_url: String,
    options: CaptureOptions,
}

impl<O: NetworkObserver> CredentialExtractor<O> {
    /// Create an extractor from settings
    pub fn new(settings: &Settings, observer: Arc<O>) -> Result<Self> {
        Ok(Self {
            observer,
            page_url: landing_page_url(&settings.site.base_url, &settings.browser.landing_query)?,
            options: CaptureOptions {
                navigation_timeout: settings.browser.navigation_timeout(),
                settle: settings.browser.settle_window(),
                user_agent: Some(settings.site.user_agent.clone()),
            },
        })
    }

    /// Page observed during extraction
    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// The underlying observer
    pub fn observer(&self) -> &Arc<O> {
        &self.observer
    }

    /// One extraction pass. Returns empty artifacts when nothing was seen.
    pub async fn extract(&self) -> Result<CapturedArtifacts> {
        tracing::info!("Extracting HLTB credentials from {}", self.page_url);

        let captured = self.observer.capture(&self.page_url, &self.options).await?;

        tracing::info!(
            "Extraction finished: search key {}, auth token {}",
            if captured.search_key.is_some() { "captured" } else { "missing" },
            if captured.auth_token.is_some() { "captured" } else { "missing" },
        );

        Ok(captured)
    }
}

/// `{base}/?q={landing_query}`
pub fn landing_page_url(base_url: &str, landing_query: &str) -> Result<String> {
    let mut url = Url::parse(base_url)?.join("/")?;
    url.query_pairs_mut().append_pair("q", landing_query);
    Ok(url.to_string())
}
