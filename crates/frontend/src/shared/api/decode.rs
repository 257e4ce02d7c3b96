//! Pure status/body decoding for the fetch adapters.
//!
//! The adapters hand the HTTP status and raw body over to these functions,
//! which keeps the whole failure taxonomy testable without a browser.

use contracts::domain::a001_product::{
    CategoryListResponse, Product, ProductDetailResponse, ProductListResponse,
};
use contracts::usecases::u101_identify_part::IdentificationResult;

use super::error::FetchError;

pub fn decode_products(ok: bool, status: u16, body: &str) -> Result<Vec<Product>, FetchError> {
    if !ok {
        return Err(FetchError::BadStatus(status));
    }
    let resp: ProductListResponse =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedBody(e.to_string()))?;
    if !resp.success {
        return Err(FetchError::MalformedBody(
            "server reported failure".to_string(),
        ));
    }
    Ok(resp.products)
}

pub fn decode_product(ok: bool, status: u16, body: &str) -> Result<Product, FetchError> {
    if !ok {
        return Err(FetchError::BadStatus(status));
    }
    let resp: ProductDetailResponse =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedBody(e.to_string()))?;
    match resp.product {
        Some(product) if resp.success => Ok(product),
        _ => Err(FetchError::MalformedBody(
            "server reported failure".to_string(),
        )),
    }
}

pub fn decode_categories(ok: bool, status: u16, body: &str) -> Result<Vec<String>, FetchError> {
    if !ok {
        return Err(FetchError::BadStatus(status));
    }
    let resp: CategoryListResponse =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedBody(e.to_string()))?;
    if !resp.success {
        return Err(FetchError::MalformedBody(
            "server reported failure".to_string(),
        ));
    }
    Ok(resp.categories)
}

/// Identification keeps its `success` flag inside the result: the page
/// renders the failure state itself, so only transport and schema problems
/// become errors here.
pub fn decode_identification(
    ok: bool,
    status: u16,
    body: &str,
) -> Result<IdentificationResult, FetchError> {
    if !ok {
        return Err(FetchError::BadStatus(status));
    }
    serde_json::from_str(body).map_err(|e| FetchError::MalformedBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_500_is_bad_status() {
        let err = decode_products(false, 500, "Internal Server Error").unwrap_err();
        assert_eq!(err, FetchError::BadStatus(500));
    }

    #[test]
    fn invalid_json_is_malformed_body() {
        let err = decode_products(true, 200, "<html>not json</html>").unwrap_err();
        assert!(matches!(err, FetchError::MalformedBody(_)));
    }

    #[test]
    fn success_false_envelope_is_malformed_body() {
        let err = decode_products(true, 200, r#"{"success": false, "products": []}"#).unwrap_err();
        assert!(matches!(err, FetchError::MalformedBody(_)));
    }

    #[test]
    fn valid_catalog_decodes() {
        let body = r#"{
            "success": true,
            "count": 1,
            "products": [{
                "id": 1,
                "name": "5mm Red LED",
                "description": "Super bright",
                "category": "LED",
                "manufacturer": "Everlight",
                "price": 50.0,
                "stock": 800,
                "image_url": null,
                "vendor": {"name": "Techshop BD", "rating": 4.8, "location": "Dhaka"}
            }]
        }"#;
        let products = decode_products(true, 200, body).expect("decodes");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].category, "LED");
    }

    #[test]
    fn categories_decode() {
        let body = r#"{"success": true, "categories": ["LED", "relay"]}"#;
        let categories = decode_categories(true, 200, body).expect("decodes");
        assert_eq!(categories, vec!["LED".to_string(), "relay".to_string()]);
    }

    #[test]
    fn missing_product_detail_is_malformed_body() {
        let err = decode_product(true, 200, r#"{"success": true, "product": null}"#).unwrap_err();
        assert!(matches!(err, FetchError::MalformedBody(_)));
    }

    #[test]
    fn identification_keeps_server_side_failure() {
        let result = decode_identification(true, 200, r#"{"success": false}"#).expect("decodes");
        assert!(!result.success);
    }

    #[test]
    fn identification_bad_status() {
        let err = decode_identification(false, 503, "").unwrap_err();
        assert_eq!(err, FetchError::BadStatus(503));
    }
}
