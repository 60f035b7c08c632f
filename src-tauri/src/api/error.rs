//! API Errors
//!
//! Failures of the remote API and their mapping onto the gateway error the
//! frontend sees.

use serde::Deserialize;
use storefront_core::GatewayError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    /// Connection, TLS, timeout and other transport failures
    Request(reqwest::Error),
    /// Non-success HTTP status with the server's message
    Status(u16, String),
    /// Body did not match the expected JSON shape
    Decode(serde_json::Error),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Request(e) => write!(f, "Request failed: {}", e),
            ApiError::Status(code, msg) => write!(f, "HTTP {}: {}", code, msg),
            ApiError::Decode(e) => write!(f, "Invalid response body: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Request(error)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Decode(error)
    }
}

impl From<ApiError> for GatewayError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Request(e) => GatewayError::Transport(e.to_string()),
            ApiError::Status(code, message) => GatewayError::Status { code, message },
            ApiError::Decode(e) => GatewayError::Decode(e.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Server message from an error body, falling back to the raw text
pub fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| body.trim().to_string())
}
