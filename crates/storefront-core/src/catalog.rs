//! Catalog View-Model
//!
//! Owns the product list and the detail overlay, and drives the two catalog
//! requests. Fetch failures never escape: they are logged and the state
//! degrades to empty (list) or unchanged (detail).

use std::cell::RefCell;
use std::rc::Rc;

use crate::gateway::CatalogGateway;
use crate::product::Product;

/// Overlay behavior switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Open the overlay even when the detail request returns nothing
    pub open_on_empty_detail: bool,
    /// Drop detail responses overtaken by a newer `open_detail` or a close.
    /// Off means the last response to arrive wins.
    pub fence_detail_requests: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            open_on_empty_detail: true,
            fence_detail_requests: false,
        }
    }
}

/// Derived overlay phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Closed,
    /// A detail request is in flight; not rendered
    Loading,
    Open,
}

/// Catalog screen state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    /// Backend order, replaced wholesale on each fetch
    pub items: Vec<Product>,
    /// Selected product detail (None = no selection)
    pub detail: Option<Product>,
    pub overlay_open: bool,
    initialized: bool,
    pending_details: u32,
    detail_ticket: u64,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> OverlayPhase {
        if self.overlay_open {
            OverlayPhase::Open
        } else if self.pending_details > 0 {
            OverlayPhase::Loading
        } else {
            OverlayPhase::Closed
        }
    }

    /// Detail requests still awaiting a response
    pub fn pending_details(&self) -> u32 {
        self.pending_details
    }

    /// Returns true the first time only
    pub fn mark_initialized(&mut self) -> bool {
        !std::mem::replace(&mut self.initialized, true)
    }

    pub fn replace_items(&mut self, items: Vec<Product>) {
        self.items = items;
    }

    /// Register an outgoing detail request and return its ticket
    pub fn begin_detail(&mut self) -> u64 {
        self.pending_details += 1;
        self.detail_ticket += 1;
        self.detail_ticket
    }

    /// Apply a detail response. Returns false when the response was discarded.
    pub fn resolve_detail(&mut self, ticket: u64, detail: Option<Product>, options: CatalogOptions) -> bool {
        self.pending_details = self.pending_details.saturating_sub(1);

        if options.fence_detail_requests && ticket != self.detail_ticket {
            return false;
        }
        if detail.is_none() && !options.open_on_empty_detail {
            return false;
        }

        self.detail = detail;
        self.overlay_open = true;
        true
    }

    /// A detail request failed: nothing visible changes
    pub fn abandon_detail(&mut self) {
        self.pending_details = self.pending_details.saturating_sub(1);
    }

    /// Hide the overlay and forget the selection. The product list is untouched.
    pub fn close_detail(&mut self) {
        self.overlay_open = false;
        self.detail = None;
        // invalidates in-flight tickets when fencing is on
        self.detail_ticket += 1;
    }
}

/// Somewhere the catalog state lives
///
/// Implementations whose owner is gone must ignore updates.
pub trait CatalogStore {
    fn update<F: FnOnce(&mut CatalogState)>(&self, f: F);
}

impl CatalogStore for Rc<RefCell<CatalogState>> {
    fn update<F: FnOnce(&mut CatalogState)>(&self, f: F) {
        f(&mut self.borrow_mut());
    }
}

/// Drives catalog requests against a gateway and writes results into a store
#[derive(Debug, Clone, Copy)]
pub struct CatalogViewModel<G, S> {
    gateway: G,
    store: S,
    options: CatalogOptions,
}

impl<G: CatalogGateway, S: CatalogStore> CatalogViewModel<G, S> {
    pub fn new(gateway: G, store: S) -> Self {
        Self {
            gateway,
            store,
            options: CatalogOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CatalogOptions) -> Self {
        self.options = options;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn options(&self) -> CatalogOptions {
        self.options
    }

    /// Mount hook: loads the list the first time, no-op afterwards
    pub async fn initialize(&self) {
        let mut first = false;
        self.store.update(|state| first = state.mark_initialized());
        if first {
            self.load_list().await;
        } else {
            log::debug!("[CATALOG] Already initialized, skipping list load");
        }
    }

    pub async fn load_list(&self) {
        let items = match self.gateway.list_products().await {
            Ok(items) => {
                log::debug!("[CATALOG] Loaded {} products", items.len());
                items
            }
            Err(e) => {
                log::error!("[CATALOG] Failed to load products: {}", e);
                Vec::new()
            }
        };
        self.store.update(move |state| state.replace_items(items));
    }

    pub async fn open_detail(&self, id: u32) {
        let mut ticket = 0;
        self.store.update(|state| ticket = state.begin_detail());

        match self.gateway.get_product(id).await {
            Ok(detail) => {
                if detail.is_none() {
                    log::warn!("[CATALOG] Product {} returned an empty detail", id);
                }
                let options = self.options;
                self.store.update(move |state| {
                    if !state.resolve_detail(ticket, detail, options) {
                        log::debug!("[CATALOG] Discarded detail response for product {}", id);
                    }
                });
            }
            Err(e) => {
                log::error!("[CATALOG] Failed to load product {}: {}", id, e);
                self.store.update(CatalogState::abandon_detail);
            }
        }
    }

    pub fn close_detail(&self) {
        self.store.update(CatalogState::close_detail);
    }
}
