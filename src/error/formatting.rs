//! Error formatting utilities
//!
//! Human-readable and structured renderings of [`Error`], used by the CLI
//! and by the client's warning logs.

use crate::Error;
use std::error::Error as StdError;

/// Format error for display, including nested causes
pub fn format_error(error: &Error) -> String {
    let formatted = match error {
        Error::Api {
            endpoint,
            status,
            body,
        } => match body {
            Some(body) if !body.is_empty() => {
                format!("HLTB API {} returned {}: {}", endpoint, status, body)
            }
            _ => format!("HLTB API {} returned {}", endpoint, status),
        },

        Error::StaleCredential { endpoint, .. } => {
            format!("Search key rejected by {} (stale credential)", endpoint)
        }

        Error::Browser { stage, message } => {
            format!("Browser session failed at {}: {}", stage, message)
        }

        Error::Network { message } => format!("Network error: {}", message),

        Error::Timeout {
            operation,
            duration_secs,
        } => {
            format!(
                "Operation '{}' timed out after {} seconds",
                operation, duration_secs
            )
        }

        _ => error.to_string(),
    };

    let mut result = formatted;
    let mut source = error.source();

    while let Some(cause) = source {
        if !result.contains(&cause.to_string()) {
            result = format!("{} (caused by {})", result, cause);
        }
        source = cause.source();
    }

    result
}

/// Format error for logging with structured data
pub fn format_error_for_logging(error: &Error) -> serde_json::Value {
    let mut log_data = serde_json::json!({
        "message": format_error(error),
        "category": error.category(),
        "retryable": error.is_retryable(),
    });

    match error {
        Error::Api {
            endpoint, status, ..
        }
        | Error::StaleCredential { endpoint, status } => {
            log_data["endpoint"] = serde_json::Value::String(endpoint.clone());
            log_data["status"] = serde_json::Value::Number((*status).into());
        }
        Error::Browser { stage, .. } => {
            log_data["stage"] = serde_json::Value::String(stage.clone());
        }
        Error::Timeout { duration_secs, .. } => {
            log_data["timeout_duration"] = serde_json::Value::Number((*duration_secs).into());
        }
        _ => {}
    }

    log_data
}
