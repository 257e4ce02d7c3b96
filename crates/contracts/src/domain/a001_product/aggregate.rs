use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Marketplace product identifier (integer key assigned by the catalog API).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Product
// ============================================================================

/// Vendor record embedded in a product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVendor {
    pub name: String,
    /// Vendor rating in [0, 5].
    pub rating: f64,
    #[serde(default)]
    pub location: String,
    /// Contact email; only the detail endpoint includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A catalog product as returned by `GET /api/products`.
///
/// Immutable once received; the catalog state only ever replaces the whole
/// list, it never patches a product in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub manufacturer: String,
    /// Unit price, non-negative.
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    pub vendor: ProductVendor,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Present in the backing store but omitted by the list endpoint.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub success: bool,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetailResponse {
    pub success: bool,
    pub product: Option<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub success: bool,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_without_created_at() {
        let json = r#"{
            "id": 7,
            "name": "555 Timer IC NE555P",
            "description": "Precision timing circuit",
            "category": "Integrated-micro-circuit",
            "manufacturer": "Texas Instruments",
            "price": 15.0,
            "stock": 400,
            "image_url": null,
            "vendor": {"name": "Techshop BD", "rating": 4.8, "location": "Dhaka, Bangladesh"}
        }"#;
        let product: Product = serde_json::from_str(json).expect("valid product");
        assert_eq!(product.id, ProductId(7));
        assert_eq!(product.vendor.name, "Techshop BD");
        assert!(product.created_at.is_none());
        assert!(product.vendor.email.is_none());
    }

    #[test]
    fn list_envelope_deserializes() {
        let json = r#"{"success": true, "count": 0, "products": []}"#;
        let resp: ProductListResponse = serde_json::from_str(json).expect("valid envelope");
        assert!(resp.success);
        assert!(resp.products.is_empty());
    }
}
