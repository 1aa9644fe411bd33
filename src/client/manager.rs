//! # HLTB client
//!
//! [`HltbClientGeneric`] ties the credential cache, the two search endpoints
//! and the duration resolver together.
//!
//! ## Search flow
//!
//! 1. Get credentials from the cache (extracting through the browser if needed)
//! 2. Try the locate endpoint with the search key
//! 3. On a 404, invalidate, extract once more and retry locate once
//! 4. Otherwise fall back to the search endpoint with the auth token
//!
//! ## Examples
//!
//! ```no_run
//! use hltb_client::{HltbClient, Settings};
//!
//! # tokio_test::block_on(async {
//! let client = HltbClient::new(Settings::default())?;
//!
//! if let Some(record) = client.get_game_duration("Hollow Knight").await {
//!     println!("Main story: {:?}", record.main_story.and_then(HltbClient::format_duration));
//! }
//!
//! client.destroy().await;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! # });
//! ```

use crate::{
    Result,
    client::{
        api::HltbApi,
        cache::CredentialCache,
        extractor::CredentialExtractor,
        network::{ProxySpec, build_http_client},
        observer::{ChromeObserver, NetworkObserver},
        resolver,
    },
    config::Settings,
    error::format_error_for_logging,
    types::{CredentialPair, DurationRecord, SearchRequest, SearchResult},
    utils::duration,
};
use chrono::Utc;
use std::sync::Arc;

/// Convenience type alias for the client driving a real Chrome
pub type HltbClient = HltbClientGeneric<ChromeObserver>;

/// HowLongToBeat client, generic over the browser used for extraction
#[derive(Debug)]
pub struct HltbClientGeneric<O: NetworkObserver = ChromeObserver> {
    settings: Arc<Settings>,
    api: HltbApi,
    cache: CredentialCache<O>,
}

impl HltbClientGeneric<ChromeObserver> {
    /// Creates a client that extracts credentials with a local Chrome.
    ///
    /// No browser is launched until the first lookup.
    pub fn new(settings: Settings) -> Result<Self> {
        let observer = ChromeObserver::from_settings(&settings);
        Self::with_observer(settings, observer)
    }
}

impl<O: NetworkObserver> HltbClientGeneric<O> {
    /// Creates a client with a custom [`NetworkObserver`]
    pub fn with_observer(settings: Settings, observer: O) -> Result<Self> {
        settings.validate()?;

        let http_client = build_http_client(&settings, &ProxySpec::from_settings(&settings))?;
        let api = HltbApi::new(http_client, settings.site.base_url.as_str());
        let extractor = CredentialExtractor::new(&settings, Arc::new(observer))?;
        let cache = CredentialCache::new(extractor, settings.cache_ttl()?);

        Ok(Self {
            settings: Arc::new(settings),
            api,
            cache,
        })
    }

    /// Search HLTB and return the raw result list.
    ///
    /// Uses the locate endpoint when a search key is available and falls
    /// back to the token-authenticated search endpoint. At most one forced
    /// re-extraction happens per call.
    pub async fn search_game(&self, game_name: &str) -> Result<Vec<SearchResult>> {
        let request = SearchRequest::for_game(game_name);
        let credentials = self.cache.get_valid_credentials().await?;

        let now = Utc::now();
        let mut auth_token = credentials.valid_auth_token(now).map(str::to_string);
        let mut primary_error = None;

        if let Some(search_key) = credentials.valid_search_key(now) {
            match self.api.locate(search_key, &request).await {
                Ok(results) => return Ok(results),
                Err(e) if e.is_stale_credential() => {
                    tracing::warn!("HLTB search key rejected, re-extracting credentials");
                    match self.refresh_after_stale().await {
                        Ok(fresh) => {
                            let now = Utc::now();
                            if let Some(token) = fresh.valid_auth_token(now) {
                                auth_token = Some(token.to_string());
                            }

                            match fresh.valid_search_key(now) {
                                Some(new_key) => match self.api.locate(new_key, &request).await {
                                    Ok(results) => return Ok(results),
                                    Err(retry_error) => {
                                        tracing::warn!(
                                            "Locate retry failed: {}",
                                            format_error_for_logging(&retry_error)
                                        );
                                        primary_error = Some(retry_error);
                                    }
                                },
                                None => {
                                    tracing::warn!("Re-extraction captured no search key");
                                    primary_error = Some(e);
                                }
                            }
                        }
                        Err(refresh_error) => {
                            tracing::warn!(
                                "Forced re-extraction failed: {}",
                                format_error_for_logging(&refresh_error)
                            );
                            primary_error = Some(e);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("Locate failed: {}", format_error_for_logging(&e));
                    primary_error = Some(e);
                }
            }
        }

        if let Some(token) = auth_token {
            tracing::debug!("Using search endpoint fallback");
            return self.api.search(&token, &request).await;
        }

        match primary_error {
            Some(e) => Err(e),
            None => Err(crate::Error::no_methods_available(
                "no valid search key or auth token after extraction",
            )),
        }
    }

    /// Look up the completion times of `game_name`.
    ///
    /// Never fails: errors are logged and reported as `None`, as are
    /// missing matches and games without submitted times.
    pub async fn get_game_duration(&self, game_name: &str) -> Option<DurationRecord> {
        if !self.settings.client.enabled {
            tracing::debug!("HLTB lookups disabled, skipping {:?}", game_name);
            return None;
        }

        match self.search_game(game_name).await {
            Ok(results) => resolver::resolve(game_name, &results),
            Err(e) => {
                tracing::warn!(
                    "HLTB lookup for {:?} failed: {}",
                    game_name,
                    format_error_for_logging(&e)
                );
                None
            }
        }
    }

    /// Render hours as `"12h 30m"`
    pub fn format_duration(hours: f64) -> Option<String> {
        duration::format_duration(hours)
    }

    /// Convert seconds to hours rounded to two decimals
    pub fn seconds_to_hours(seconds: f64) -> Option<f64> {
        duration::seconds_to_hours(seconds)
    }

    /// Drop cached credentials and release the observer. Safe to call twice.
    pub async fn destroy(&self) {
        self.cache.invalidate().await;
        self.cache.extractor().observer().shutdown().await;
        tracing::debug!("HLTB client destroyed");
    }

    /// Current credential state, without triggering extraction
    pub async fn credential_status(&self) -> CredentialPair {
        self.cache.snapshot().await
    }

    /// Number of extraction passes run so far
    pub fn extraction_count(&self) -> usize {
        self.cache.extraction_count()
    }

    /// The credential cache
    pub fn cache(&self) -> &CredentialCache<O> {
        &self.cache
    }

    /// Settings this client was built with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    async fn refresh_after_stale(&self) -> Result<CredentialPair> {
        self.cache.invalidate().await;
        self.cache.get_valid_credentials().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{client::observer::CaptureOptions, types::CapturedArtifacts};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct FixedObserver {
        artifacts: CapturedArtifacts,
        shutdowns: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl NetworkObserver for FixedObserver {
        async fn capture(
            &self,
            _page_url: &str,
            _options: &CaptureOptions,
        ) -> Result<CapturedArtifacts> {
            Ok(self.artifacts.clone())
        }

        async fn shutdown(&self) {
            self.shutdowns.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let mut settings = Settings::default();
        settings.client.cache_minutes = 0;
        assert!(
            HltbClientGeneric::with_observer(settings.clone(), FixedObserver::default()).is_err()
        );

        settings.client.cache_minutes = 1_000_000_000_000;
        assert!(HltbClientGeneric::with_observer(settings, FixedObserver::default()).is_err());
    }

    #[test]
    fn test_static_helpers() {
        assert_eq!(HltbClient::seconds_to_hours(9996.0), Some(2.78));
        assert_eq!(HltbClient::format_duration(12.5).as_deref(), Some("12h 30m"));
        assert_eq!(HltbClient::format_duration(0.0), None);
    }

    #[tokio::test]
    async fn test_disabled_client_skips_network() {
        let mut settings = Settings::default();
        settings.client.enabled = false;
        let client = HltbClientGeneric::with_observer(settings, FixedObserver::default()).unwrap();

        assert_eq!(client.get_game_duration("Celeste").await, None);
        assert_eq!(client.extraction_count(), 0);
    }

    #[tokio::test]
    async fn test_no_credentials_is_error() {
        let client =
            HltbClientGeneric::with_observer(Settings::default(), FixedObserver::default())
                .unwrap();

        let err = client.search_game("Celeste").await.unwrap_err();
        assert!(matches!(err, crate::Error::NoCredentials { .. }));
        assert_eq!(client.get_game_duration("Celeste").await, None);
    }

    #[tokio::test]
    async fn test_destroy_is_idempotent() {
        let client =
            HltbClientGeneric::with_observer(Settings::default(), FixedObserver::default())
                .unwrap();
        let now = Utc::now();
        client
            .cache()
            .store(CredentialPair::new().with_auth_token("tok", now + chrono::Duration::hours(1)))
            .await;

        client.destroy().await;
        client.destroy().await;

        assert_eq!(client.credential_status().await, CredentialPair::default());
        assert_eq!(
            client
                .cache()
                .extractor()
                .observer()
                .shutdowns
                .load(Ordering::SeqCst),
            2
        );
    }
}
