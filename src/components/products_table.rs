//! Products Table Component
//!
//! Catalog table bound to the catalog view-model, plus its detail overlay.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::{project_row, CatalogState, CatalogViewModel, Cell, Column, Product};

use crate::components::{DiscountCell, ProductDetailModal};
use crate::gateway::TauriGateway;
use crate::store::SignalStore;

/// One table row, cells from the column projection
#[component]
fn ProductRow(product: Product, #[prop(into)] on_view: Callback<u32>) -> impl IntoView {
    view! {
        <tr class="product-row">
            {project_row(&product)
                .into_iter()
                .map(|(column, cell)| view! { <td class=column_class(column)>{render_cell(cell, on_view)}</td> })
                .collect_view()}
        </tr>
    }
}

fn column_class(column: Column) -> &'static str {
    match column {
        Column::Description => "cell cell-description",
        Column::DiscountPercentage => "cell cell-discount",
        Column::Actions => "cell cell-actions",
        _ => "cell",
    }
}

fn render_cell(cell: Cell, on_view: Callback<u32>) -> AnyView {
    match cell {
        Cell::Text(text) => view! { {text} }.into_any(),
        Cell::Discount { value, tier } => view! { <DiscountCell value=value tier=tier /> }.into_any(),
        Cell::Action { product_id } => view! {
            <button class="view-btn" on:click=move |_| on_view.run(product_id)>
                "View Reviews"
            </button>
        }
        .into_any(),
    }
}

/// Product table with detail overlay
#[component]
pub fn ProductsTable() -> impl IntoView {
    let catalog = RwSignal::new(CatalogState::new());
    let vm = CatalogViewModel::new(TauriGateway, SignalStore::new(catalog));

    // Load products on mount
    Effect::new(move |_| {
        spawn_local(async move {
            vm.initialize().await;
        });
    });

    let rows = move || catalog.with(|state| state.items.clone());
    let open_detail = move |id: u32| {
        spawn_local(async move {
            vm.open_detail(id).await;
        });
    };

    view! {
        <div class="table-container">
            <table class="products-table">
                <thead>
                    <tr>
                        {Column::ALL
                            .iter()
                            .map(|column| view! { <th>{column.header()}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|product| product.id
                        children=move |product| view! { <ProductRow product=product on_view=open_detail /> }
                    />
                </tbody>
            </table>
        </div>

        <ProductDetailModal catalog=catalog on_close=Callback::new(move |_: ()| vm.close_detail()) />
    }
}
