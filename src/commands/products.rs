//! Product Commands
//!
//! Frontend bindings for catalog backend commands.

use serde::Serialize;
use storefront_core::{GatewayError, Product};
use wasm_bindgen::JsValue;

use super::{call, to_args};

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

pub async fn list_products() -> Result<Vec<Product>, GatewayError> {
    call("list_products", JsValue::NULL).await
}

pub async fn get_product(id: u32) -> Result<Option<Product>, GatewayError> {
    let js_args = to_args(&IdArgs { id })?;
    call("get_product", js_args).await
}
