//! Tauri Commands for the Product Catalog
//!
//! Exposes product listing and detail lookup to the frontend via Tauri IPC.

use tauri::State;
use storefront_core::{GatewayError, Product};

use crate::AppState;

/// List all products in backend order
#[tauri::command]
pub async fn list_products(state: State<'_, AppState>) -> Result<Vec<Product>, GatewayError> {
    match state.api.list_products().await {
        Ok(products) => {
            tracing::debug!(count = products.len(), "listed products");
            Ok(products)
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to list products");
            Err(e.into())
        }
    }
}

/// Get product detail by ID (None when the service returns an empty body)
#[tauri::command]
pub async fn get_product(
    state: State<'_, AppState>,
    id: u32,
) -> Result<Option<Product>, GatewayError> {
    state.api.get_product(id).await.map_err(|e| {
        tracing::error!(id, error = %e, "failed to get product");
        GatewayError::from(e)
    })
}
