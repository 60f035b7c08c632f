//! Storefront Frontend App
//!
//! Shell switching between the login screen and the catalog.

use leptos::prelude::*;
use reactive_stores::Store;
use storefront_core::SessionCheck;

use crate::components::{CatalogPage, LoginForm};
use crate::session::LocalStorageSession;
use crate::store::{store_page, AppState, Page};

#[component]
pub fn App() -> impl IntoView {
    // Session check gates the landing page
    let has_session = LocalStorageSession.has_session();
    log::debug!("[APP] Starting, session present: {}", has_session);

    let store = Store::new(AppState::new(has_session));
    provide_context(store);

    view! {
        <div class="app-layout">
            {move || match store_page(&store) {
                Page::Login => view! { <LoginForm /> }.into_any(),
                Page::Products => view! { <CatalogPage /> }.into_any(),
            }}
        </div>
    }
}
