//! Tauri Commands for Authentication
//!
//! Exposes the login endpoint to the frontend via Tauri IPC.

use tauri::State;
use storefront_core::{GatewayError, Session};

use crate::AppState;

/// Exchange credentials for a session
#[tauri::command]
pub async fn login(
    state: State<'_, AppState>,
    username: String,
    password: String,
) -> Result<Session, GatewayError> {
    tracing::info!(%username, "login requested");
    state.api.login(&username, &password).await.map_err(|e| {
        tracing::warn!(%username, error = %e, "login failed");
        GatewayError::from(e)
    })
}
