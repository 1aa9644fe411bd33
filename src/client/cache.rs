//! Credential cache
//!
//! Holds the [`CredentialPair`] of one client and refreshes it through the
//! [`CredentialExtractor`] when either half is missing or expired.
//!
//! The pair sits behind a single async mutex that stays locked for the whole
//! extraction, so concurrent callers wait for one browser launch instead of
//! starting their own.

use crate::{
    Result,
    client::{extractor::CredentialExtractor, observer::NetworkObserver},
    types::CredentialPair,
};
use chrono::{Duration, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// In-memory cache of the two HLTB credentials
#[derive(Debug)]
pub struct CredentialCache<O: NetworkObserver> {
    extractor: CredentialExtractor<O>,
    ttl: Duration,
    state: Mutex<CredentialPair>,
    extractions: AtomicUsize,
}

impl<O: NetworkObserver> CredentialCache<O> {
    /// Create an empty cache; `ttl` applies to every newly captured artifact
    pub fn new(extractor: CredentialExtractor<O>, ttl: Duration) -> Self {
        Self {
            extractor,
            ttl,
            state: Mutex::new(CredentialPair::new()),
            extractions: AtomicUsize::new(0),
        }
    }

    /// Return credentials, extracting once if either half is not currently valid.
    ///
    /// Fails with [`crate::Error::NoCredentials`] when, after extraction,
    /// neither artifact has ever been captured.
    pub async fn get_valid_credentials(&self) -> Result<CredentialPair> {
        let mut state = self.state.lock().await;

        if state.is_fully_valid(Utc::now()) {
            tracing::debug!("Cached HLTB credentials still fresh");
            return Ok(state.clone());
        }

        self.extractions.fetch_add(1, Ordering::SeqCst);
        let captured = self.extractor.extract().await?;
        let expiry = Utc::now().checked_add_signed(self.ttl).ok_or_else(|| {
            crate::Error::config("cache_minutes", "Credential expiry out of range")
        })?;
        state.absorb(captured, expiry);

        if !state.has_any() {
            return Err(crate::Error::no_credentials(self.extractor.page_url()));
        }

        Ok(state.clone())
    }

    /// Forget both artifacts so the next lookup re-extracts
    pub async fn invalidate(&self) {
        self.state.lock().await.clear();
        tracing::info!("HLTB credentials invalidated");
    }

    /// Copy of the current pair without triggering extraction
    pub async fn snapshot(&self) -> CredentialPair {
        self.state.lock().await.clone()
    }

    /// Replace the cached pair, e.g. with credentials kept from an earlier run
    pub async fn store(&self, credentials: CredentialPair) {
        *self.state.lock().await = credentials;
    }

    /// Number of extraction passes started by this cache
    pub fn extraction_count(&self) -> usize {
        self.extractions.load(Ordering::SeqCst)
    }

    /// The extractor used for refreshes
    pub fn extractor(&self) -> &CredentialExtractor<O> {
        &self.extractor
    }
}
