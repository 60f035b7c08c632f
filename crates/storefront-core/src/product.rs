//! Catalog Models
//!
//! Data structures matching the remote catalog/auth API.

use serde::{Deserialize, Serialize};

/// One catalog entry (matches backend JSON)
///
/// Missing fields decode as blank values, so a sparse record still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the backend
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    /// 0..=100, drives the discount tier
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u32,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// Auth payload returned on a successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: u32,
    pub username: String,
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Decode a product detail response.
///
/// The detail endpoint may answer with an empty object; that is "no product",
/// not an error. Any other object is a product, however sparse.
pub fn decode_detail(value: serde_json::Value) -> Result<Option<Product>, serde_json::Error> {
    match &value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(map) if map.is_empty() => Ok(None),
        _ => serde_json::from_value(value).map(Some),
    }
}
