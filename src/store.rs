//! Application State Store
//!
//! Uses Leptos reactive_stores for the app shell, and a signal-backed
//! `CatalogStore` for the catalog view-model.

use leptos::prelude::*;
use reactive_stores::Store;
use storefront_core::{CatalogState, CatalogStore, Session};

/// Top-level screens
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Login,
    Products,
}

impl Page {
    /// Landing page for the given session check result
    pub fn initial(has_session: bool) -> Self {
        if has_session {
            Page::Products
        } else {
            Page::Login
        }
    }
}

/// App shell state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Currently shown screen
    pub page: Page,
    /// Signed-in user, when known from this run's login
    pub username: Option<String>,
}

impl AppState {
    pub fn new(has_session: bool) -> Self {
        Self {
            page: Page::initial(has_session),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_page(store: &AppStore) -> Page {
    store.page().get()
}

pub fn store_username(store: &AppStore) -> Option<String> {
    store.username().get()
}

/// Record a successful login and show the catalog
pub fn store_sign_in(store: &AppStore, session: &Session) {
    *store.username().write() = Some(session.username.clone());
    *store.page().write() = Page::Products;
}

/// Forget the user and return to the login screen
pub fn store_sign_out(store: &AppStore) {
    *store.username().write() = None;
    *store.page().write() = Page::Login;
}

/// Catalog state held in a signal owned by the catalog view
#[derive(Clone, Copy)]
pub struct SignalStore(RwSignal<CatalogState>);

impl SignalStore {
    pub fn new(signal: RwSignal<CatalogState>) -> Self {
        Self(signal)
    }
}

impl CatalogStore for SignalStore {
    fn update<F: FnOnce(&mut CatalogState)>(&self, f: F) {
        // Disposed once the catalog view unmounts; late responses are dropped
        if self.0.try_update(f).is_none() {
            log::debug!("[STORE] Catalog view gone, dropping late update");
        }
    }
}
