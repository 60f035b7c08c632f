//! Product Detail Modal
//!
//! Overlay showing one product's detail until dismissed.

use leptos::prelude::*;
use storefront_core::{detail_fields, detail_title, CatalogState};

#[component]
pub fn ProductDetailModal(
    catalog: RwSignal<CatalogState>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let is_open = move || catalog.with(|state| state.overlay_open);
    let title = move || catalog.with(|state| detail_title(state.detail.as_ref()));
    let fields = move || catalog.with(|state| detail_fields(state.detail.as_ref()));

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="modal-header">
                        <h2 class="modal-title">{title}</h2>
                        <button class="close-btn" aria-label="Close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>
                    <div class="modal-content">
                        {move || fields()
                            .into_iter()
                            .map(|(label, value)| {
                                if label == "Title" {
                                    view! {
                                        <h6 class="detail-title">
                                            <span class="detail-label">{label}":"</span>
                                            <span class="detail-value">{value}</span>
                                        </h6>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <p class="detail-field">
                                            <span class="detail-label">{label}":"</span>
                                            <span class="detail-value">{value}</span>
                                        </p>
                                    }
                                    .into_any()
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
