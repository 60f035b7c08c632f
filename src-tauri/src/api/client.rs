//! DummyJSON Client
//!
//! `ProductApi` over HTTPS with reqwest.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use storefront_core::{decode_detail, Product, Session};

use super::config::ApiConfig;
use super::error::{parse_error_message, ApiError, ApiResult};
use super::ProductApi;

/// List envelope returned by `GET /products`; paging fields are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_in_mins: Option<u32>,
}

#[derive(Debug)]
pub struct DummyJsonClient {
    http: Client,
    config: ApiConfig,
}

impl DummyJsonClient {
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    fn list_url(&self) -> String {
        let url = self.config.endpoint("products");
        match self.config.list_limit {
            Some(limit) => format!("{}?limit={}", url, limit),
            None => url,
        }
    }

    fn detail_url(&self, id: u32) -> String {
        self.config.endpoint(&format!("products/{}", id))
    }

    /// Send and return the body of a successful response
    async fn send(&self, request: RequestBuilder) -> ApiResult<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16(), parse_error_message(&body)));
        }
        Ok(body)
    }
}

#[async_trait]
impl ProductApi for DummyJsonClient {
    async fn login(&self, username: &str, password: &str) -> ApiResult<Session> {
        let body = LoginBody {
            username,
            password,
            expires_in_mins: self.config.session_ttl_mins,
        };
        let request = self.http.post(self.config.endpoint("auth/login")).json(&body);
        let text = self.send(request).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn list_products(&self) -> ApiResult<Vec<Product>> {
        let text = self.send(self.http.get(self.list_url())).await?;
        parse_product_page(&text).map(|page| page.products)
    }

    async fn get_product(&self, id: u32) -> ApiResult<Option<Product>> {
        let text = self.send(self.http.get(self.detail_url(id))).await?;
        parse_product_detail(&text)
    }
}

pub(crate) fn parse_product_page(body: &str) -> ApiResult<ProductPage> {
    Ok(serde_json::from_str(body)?)
}

pub(crate) fn parse_product_detail(body: &str) -> ApiResult<Option<Product>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    Ok(decode_detail(value)?)
}
