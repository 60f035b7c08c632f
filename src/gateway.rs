//! Tauri Gateway
//!
//! Backend Gateway capabilities implemented over the command wrappers.

use async_trait::async_trait;
use storefront_core::{AuthGateway, CatalogGateway, GatewayError, Product, Session};

use crate::commands;

/// Stateless handle to the Tauri backend
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriGateway;

#[async_trait(?Send)]
impl CatalogGateway for TauriGateway {
    async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
        commands::list_products().await
    }

    async fn get_product(&self, id: u32) -> Result<Option<Product>, GatewayError> {
        commands::get_product(id).await
    }
}

#[async_trait(?Send)]
impl AuthGateway for TauriGateway {
    async fn login(&self, username: &str, password: &str) -> Result<Session, GatewayError> {
        commands::login(username, password).await
    }
}
