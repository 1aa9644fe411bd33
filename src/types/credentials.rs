//! Credential state
//!
//! HLTB accepts two unrelated credentials: a hexadecimal key embedded in the
//! `/api/locate/{key}` path and a bearer token sent in the `x-auth-token`
//! header of `/api/search`. Each one carries its own expiry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Artifacts harvested by a single extraction pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedArtifacts {
    /// Path-embedded search key
    #[serde(rename = "searchKey")]
    pub search_key: Option<String>,
    /// Header-embedded auth token
    #[serde(rename = "authToken")]
    pub auth_token: Option<String>,
}

impl CapturedArtifacts {
    /// Create from optional parts
    pub fn new(search_key: Option<String>, auth_token: Option<String>) -> Self {
        Self {
            search_key,
            auth_token,
        }
    }

    /// Nothing was captured
    pub fn is_empty(&self) -> bool {
        self.search_key.is_none() && self.auth_token.is_none()
    }

    /// Number of artifacts captured (0, 1 or 2)
    pub fn count(&self) -> usize {
        usize::from(self.search_key.is_some()) + usize::from(self.auth_token.is_some())
    }

    /// Copy with token values shortened for display
    pub fn redacted(&self) -> Self {
        Self {
            search_key: self.search_key.as_deref().map(redact),
            auth_token: self.auth_token.as_deref().map(redact),
        }
    }
}

/// Cached credentials with independent expiries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPair {
    /// Path token for the locate endpoint
    #[serde(rename = "searchKey")]
    pub search_key: Option<String>,
    /// Expiry of `search_key`
    #[serde(rename = "searchKeyExpiry")]
    pub search_key_expiry: Option<DateTime<Utc>>,
    /// Bearer token for the search endpoint
    #[serde(rename = "authToken")]
    pub auth_token: Option<String>,
    /// Expiry of `auth_token`
    #[serde(rename = "authTokenExpiry")]
    pub auth_token_expiry: Option<DateTime<Utc>>,
}

impl CredentialPair {
    /// Create an empty pair
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search key and its expiry
    pub fn with_search_key(mut self, key: impl Into<String>, expiry: DateTime<Utc>) -> Self {
        self.search_key = Some(key.into());
        self.search_key_expiry = Some(expiry);
        self
    }

    /// Set the auth token and its expiry
    pub fn with_auth_token(mut self, token: impl Into<String>, expiry: DateTime<Utc>) -> Self {
        self.auth_token = Some(token.into());
        self.auth_token_expiry = Some(expiry);
        self
    }

    /// The search key, if present and not yet expired at `now`
    pub fn valid_search_key(&self, now: DateTime<Utc>) -> Option<&str> {
        fresh(self.search_key.as_deref(), self.search_key_expiry, now)
    }

    /// The auth token, if present and not yet expired at `now`
    pub fn valid_auth_token(&self, now: DateTime<Utc>) -> Option<&str> {
        fresh(self.auth_token.as_deref(), self.auth_token_expiry, now)
    }

    /// Both halves are usable at `now`
    pub fn is_fully_valid(&self, now: DateTime<Utc>) -> bool {
        self.valid_search_key(now).is_some() && self.valid_auth_token(now).is_some()
    }

    /// At least one artifact is stored, regardless of expiry
    pub fn has_any(&self) -> bool {
        self.search_key.is_some() || self.auth_token.is_some()
    }

    /// Merge a fresh extraction, stamping each captured artifact with `expiry`.
    ///
    /// Artifacts missing from `captured` keep their previous value and expiry.
    pub fn absorb(&mut self, captured: CapturedArtifacts, expiry: DateTime<Utc>) {
        if let Some(key) = captured.search_key {
            self.search_key = Some(key);
            self.search_key_expiry = Some(expiry);
        }
        if let Some(token) = captured.auth_token {
            self.auth_token = Some(token);
            self.auth_token_expiry = Some(expiry);
        }
    }

    /// Forget both artifacts and both expiries
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Usable iff present and `now < expiry`
fn fresh(value: Option<&str>, expiry: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<&str> {
    match (value, expiry) {
        (Some(value), Some(expiry)) if now < expiry => Some(value),
        _ => None,
    }
}

fn redact(value: &str) -> String {
    let prefix: String = value.chars().take(6).collect();
    format!("{}…", prefix)
}
