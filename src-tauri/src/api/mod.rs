//! Remote API Layer
//!
//! Defines the abstract interface to the remote catalog/auth service and its
//! HTTP implementation.

mod config;
mod error;
mod client;

pub use config::ApiConfig;
pub use error::ApiResult;
pub use client::DummyJsonClient;

use async_trait::async_trait;
use storefront_core::{Product, Session};

/// Remote catalog/auth service
///
/// All operations are async and may fail; callers decide how to degrade.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Exchange credentials for a session
    async fn login(&self, username: &str, password: &str) -> ApiResult<Session>;

    /// List products in backend order
    async fn list_products(&self) -> ApiResult<Vec<Product>>;

    /// Fetch one product; `None` when the service answers with an empty body
    async fn get_product(&self, id: u32) -> ApiResult<Option<Product>>;
}
