//! Catalog Page
//!
//! Header with the signed-in user and logout, above the products table.

use leptos::prelude::*;

use crate::components::ProductsTable;
use crate::session::LocalStorageSession;
use crate::store::{store_sign_out, store_username, use_app_store};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let store = use_app_store();

    let logout = move |_| {
        LocalStorageSession.clear();
        store_sign_out(&store);
    };

    view! {
        <div class="catalog-page">
            <header class="catalog-header">
                <h1>"Products"</h1>
                <div class="catalog-user">
                    {move || store_username(&store).map(|name| view! { <span class="username">{name}</span> })}
                    <button class="logout-btn" on:click=logout>"Log out"</button>
                </div>
            </header>
            <ProductsTable />
        </div>
    }
}
