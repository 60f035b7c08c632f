//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to the remote API.

mod auth_cmd;
mod product_cmd;

pub use auth_cmd::*;
pub use product_cmd::*;
