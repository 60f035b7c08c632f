//! Storefront Backend
//!
//! Layered architecture:
//! - api: Remote catalog/auth service abstraction and its HTTP client
//! - commands: Tauri command handlers

use std::sync::Arc;

use tauri::Manager;
use tracing_subscriber::EnvFilter;

mod api;
mod commands;

use api::{ApiConfig, DummyJsonClient, ProductApi};

/// Application state shared across commands
pub struct AppState {
    pub api: Arc<dyn ProductApi>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront_lib=debug,storefront_core=debug"));
    // try_init: a second call (tests, re-entry) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_logging();

    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let config = ApiConfig::from_env();
            tracing::info!(
                base_url = %config.base_url,
                session_ttl_mins = ?config.session_ttl_mins,
                list_limit = ?config.list_limit,
                "using catalog API"
            );
            let client = DummyJsonClient::new(config)?;

            app.manage(AppState {
                api: Arc::new(client),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::login,
            commands::list_products,
            commands::get_product,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
