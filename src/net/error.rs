//! Typed failures for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx responses are kept distinct so callers can
//! show the server's own message (FastAPI `detail`) when one is present.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, pulling the `detail` message out of `body` if it has one.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, detail: extract_detail(body) }
    }

    /// HTTP status for [`ApiError::Status`], `None` for every other kind.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short message suitable for inline form feedback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            Self::Status { status, detail: None } => format!("Request failed ({status})."),
            Self::Network(_) | Self::Unavailable => "Could not reach the server.".to_owned(),
            Self::Encode(_) | Self::Decode(_) => "Unexpected response from the server.".to_owned(),
        }
    }
}

/// FastAPI reports errors as `{"detail": "..."}` or, for validation errors,
/// `{"detail": [{"msg": "...", ...}, ...]}`.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_owned()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    }
}
