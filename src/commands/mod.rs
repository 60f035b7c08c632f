//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod auth;
mod products;

use serde::de::DeserializeOwned;
use storefront_core::GatewayError;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Invoke a command and decode its reply.
///
/// Backend commands reject with a serialized `GatewayError`; anything else
/// thrown by the IPC layer becomes `Transport`.
async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, GatewayError> {
    match invoke(cmd, args).await {
        Ok(value) => serde_wasm_bindgen::from_value(value)
            .map_err(|e| GatewayError::Decode(format!("{}: {}", cmd, e))),
        Err(err) => Err(serde_wasm_bindgen::from_value::<GatewayError>(err.clone())
            .unwrap_or_else(|_| {
                GatewayError::Transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
            })),
    }
}

fn to_args<T: serde::Serialize>(args: &T) -> Result<JsValue, GatewayError> {
    serde_wasm_bindgen::to_value(args).map_err(|e| GatewayError::Transport(e.to_string()))
}

// Re-export all public items
pub use auth::*;
pub use products::*;
