//! HLTB search endpoints
//!
//! Two request schemes return the same data:
//! - primary: `POST {base}/api/locate/{search_key}`
//! - fallback: `POST {base}/api/search` with `x-auth-token: {auth_token}`

use crate::{
    Result,
    client::extractor::AUTH_HEADER,
    types::{SearchRequest, SearchResponse, SearchResult},
};
use reqwest::{Client, StatusCode};

/// Longest response body kept in [`crate::Error::Api`]
const MAX_ERROR_BODY: usize = 512;

/// HTTP client for the HLTB search API
#[derive(Debug, Clone)]
pub struct HltbApi {
    client: Client,
    base_url: String,
}

impl HltbApi {
    /// Create an API client against `base_url` (e.g. `https://howlongtobeat.com`)
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Site root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Primary scheme. A 404 means the key was rejected and maps to
    /// [`crate::Error::StaleCredential`].
    pub async fn locate(
        &self,
        search_key: &str,
        request: &SearchRequest,
    ) -> Result<Vec<SearchResult>> {
        let endpoint = format!("/api/locate/{}", search_key);
        tracing::debug!("POST {} ({} terms)", endpoint, request.search_terms.len());

        let response = self
            .client
            .post(format!("{}{}", self.base_url, endpoint))
            .header("Content-Type", "application/json")
            .header("Referer", format!("{}/", self.base_url))
            .json(request)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(crate::Error::stale_credential(
                "/api/locate",
                StatusCode::NOT_FOUND.as_u16(),
            ));
        }

        Self::read_results("/api/locate", response).await
    }

    /// Fallback scheme using the bearer token header
    pub async fn search(
        &self,
        auth_token: &str,
        request: &SearchRequest,
    ) -> Result<Vec<SearchResult>> {
        tracing::debug!("POST /api/search ({} terms)", request.search_terms.len());

        let response = self
            .client
            .post(format!("{}/api/search", self.base_url))
            .header("Content-Type", "application/json")
            .header("Referer", format!("{}/", self.base_url))
            .header(AUTH_HEADER, auth_token)
            .json(request)
            .send()
            .await?;

        Self::read_results("/api/search", response).await
    }

    async fn read_results(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<Vec<SearchResult>> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .ok()
                .filter(|body| !body.is_empty())
                .map(|body| body.chars().take(MAX_ERROR_BODY).collect());
            tracing::warn!("HLTB {} returned {}", endpoint, status);
            return Err(crate::Error::api(endpoint, status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&bytes)?;
        tracing::debug!("HLTB {} returned {} results", endpoint, parsed.data.len());
        Ok(parsed.data)
    }
}
