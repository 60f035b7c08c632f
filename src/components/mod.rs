//! UI Components
//!
//! Leptos components for the login and catalog screens.

mod login_form;
mod catalog_page;
mod products_table;
mod discount_cell;
mod product_detail_modal;

pub use login_form::LoginForm;
pub use catalog_page::CatalogPage;
pub use products_table::ProductsTable;
pub use discount_cell::DiscountCell;
pub use product_detail_modal::ProductDetailModal;
