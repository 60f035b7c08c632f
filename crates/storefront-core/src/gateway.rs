//! Gateway Traits
//!
//! Capabilities the screens consume. The frontend implements them over Tauri
//! IPC; tests substitute in-memory doubles.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::product::{Product, Session};

/// Catalog data source
///
/// Futures are not `Send`: everything runs on the single UI thread.
#[async_trait(?Send)]
pub trait CatalogGateway {
    /// Fetch the whole product list in backend order
    async fn list_products(&self) -> Result<Vec<Product>, GatewayError>;

    /// Fetch one product; `Ok(None)` when the backend returns an empty detail
    async fn get_product(&self, id: u32) -> Result<Option<Product>, GatewayError>;
}

/// Authentication endpoint
#[async_trait(?Send)]
pub trait AuthGateway {
    async fn login(&self, username: &str, password: &str) -> Result<Session, GatewayError>;
}

/// Answers "is a session currently established?"
pub trait SessionCheck {
    fn has_session(&self) -> bool;
}

/// Gateway-level errors
///
/// Serializable so the backend can hand it across IPC unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum GatewayError {
    /// Request never produced a response (IPC or network failure)
    Transport(String),
    /// Backend answered with a non-success status
    Status { code: u16, message: String },
    /// Response body did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Transport(msg) => write!(f, "Transport error: {}", msg),
            GatewayError::Status { code, message } => write!(f, "HTTP {}: {}", code, message),
            GatewayError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}
