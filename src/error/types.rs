//! Error types for the HLTB client
//!
//! Separates credential problems, transport problems and remote API
//! failures so callers of the low-level search can tell them apart.

use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No credential artifact could ever be captured from the site
    #[error("No credentials obtainable from {site}")]
    NoCredentials {
        /// Page that was observed
        site: String,
    },

    /// Neither the locate nor the search endpoint had a usable credential
    #[error("No search methods available: {reason}")]
    NoMethodsAvailable {
        /// What was missing or what failed last
        reason: String,
    },

    /// The remote side rejected the path token (HTTP 404 on locate)
    #[error("Credential rejected by {endpoint} (HTTP {status})")]
    StaleCredential {
        /// Endpoint that rejected the credential
        endpoint: String,
        /// HTTP status returned
        status: u16,
    },

    /// Non-success response from the remote API
    #[error("API request to {endpoint} failed with status {status}")]
    Api {
        /// Endpoint that was called
        endpoint: String,
        /// HTTP status returned
        status: u16,
        /// Response body, truncated
        body: Option<String>,
    },

    /// Headless browser failures while observing the site
    #[error("Browser error during {stage}: {message}")]
    Browser {
        /// Step of the browsing session that failed
        stage: String,
        /// Error message from the browser layer
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The configuration field that has an error
        field: String,
        /// Error message describing the issue
        message: String,
    },

    /// Network/connection errors
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// Timeout errors
    #[error("Operation timed out after {duration_secs} seconds: {operation}")]
    Timeout {
        /// The operation that timed out
        operation: String,
        /// Duration in seconds before timing out
        duration_secs: u64,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal issue
        message: String,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a no-credentials error for the observed page
    pub fn no_credentials<S: Into<String>>(site: S) -> Self {
        Self::NoCredentials { site: site.into() }
    }

    /// Create a no-methods-available error
    pub fn no_methods_available<S: Into<String>>(reason: S) -> Self {
        Self::NoMethodsAvailable {
            reason: reason.into(),
        }
    }

    /// Create a stale credential error
    pub fn stale_credential<S: Into<String>>(endpoint: S, status: u16) -> Self {
        Self::StaleCredential {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Create an API error
    pub fn api<S: Into<String>>(endpoint: S, status: u16, body: Option<String>) -> Self {
        Self::Api {
            endpoint: endpoint.into(),
            status,
            body,
        }
    }

    /// Create a browser error
    pub fn browser<S: Into<String>>(stage: S, message: S) -> Self {
        Self::Browser {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(field: S, message: S) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout<S: Into<String>>(operation: S, duration_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration_secs,
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True when the locate endpoint rejected the path token
    pub fn is_stale_credential(&self) -> bool {
        matches!(self, Error::StaleCredential { .. })
    }

    /// True for failures caused by missing credentials rather than transport
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            Error::NoCredentials { .. }
                | Error::NoMethodsAvailable { .. }
                | Error::StaleCredential { .. }
        )
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network { .. } => true,
            Error::Timeout { .. } => true,
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::Api { status, .. } => *status == 429 || *status >= 500,
            Error::StaleCredential { .. } => true,
            _ => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Http(..) => "http",
            Error::Json(..) => "json",
            Error::Toml(..) => "toml",
            Error::Url(..) => "url",
            Error::Io(..) => "io",
            Error::NoCredentials { .. } => "credentials",
            Error::NoMethodsAvailable { .. } => "credentials",
            Error::StaleCredential { .. } => "stale_credential",
            Error::Api { .. } => "api",
            Error::Browser { .. } => "browser",
            Error::Config { .. } => "config",
            Error::Network { .. } => "network",
            Error::Timeout { .. } => "timeout",
            Error::Internal { .. } => "internal",
        }
    }
}
