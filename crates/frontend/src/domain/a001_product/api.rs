//! Fetch adapters for the catalog endpoints.
//!
//! One attempt per call, no retry, no timeout beyond the transport's own;
//! the caller decides what to show and whether to offer a retry.

use contracts::domain::a001_product::{Product, ProductId};
use gloo_net::http::Request;

use crate::shared::api::{decode, FetchError};
use crate::shared::api_utils::api_url;

async fn get_text(url: &str) -> Result<(bool, u16, String), FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    Ok((ok, status, body))
}

/// Fetch the full product catalog
pub async fn fetch_products() -> Result<Vec<Product>, FetchError> {
    let (ok, status, body) = get_text(&api_url("/api/products")).await?;
    decode::decode_products(ok, status, &body)
}

/// Fetch a single product with vendor contact details
pub async fn fetch_product(id: ProductId) -> Result<Product, FetchError> {
    let (ok, status, body) = get_text(&api_url(&format!("/api/products/{id}"))).await?;
    decode::decode_product(ok, status, &body)
}

/// Fetch the distinct category names for the filter sidebar
pub async fn fetch_categories() -> Result<Vec<String>, FetchError> {
    let (ok, status, body) = get_text(&api_url("/api/categories")).await?;
    decode::decode_categories(ok, status, &body)
}
