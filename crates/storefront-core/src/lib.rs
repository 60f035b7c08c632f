//! Storefront Core
//!
//! Platform-neutral pieces shared by the frontend and the backend:
//! - product: catalog and session models (wire format of the remote API)
//! - gateway: the capabilities the screens consume (catalog, auth, session)
//! - catalog: the product table view-model and its detail overlay
//! - columns: pure cell projection for the product table
//! - login: credential validation and the login flow

mod product;
mod gateway;
mod catalog;
mod columns;
mod login;

#[cfg(test)]
mod tests;

pub use product::{Product, Session, decode_detail};
pub use gateway::{AuthGateway, CatalogGateway, GatewayError, SessionCheck};
pub use catalog::{CatalogOptions, CatalogState, CatalogStore, CatalogViewModel, OverlayPhase};
pub use columns::{
    Cell, Column, DiscountTier, detail_fields, detail_title, discount_tier, join_tags,
    project_row, truncate_description, DESCRIPTION_LIMIT,
};
pub use login::{
    validate, Credentials, FieldErrors, LoginFlow, LoginOutcome, INVALID_CREDENTIALS,
    PASSWORD_REQUIRED, USERNAME_REQUIRED,
};
