use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response of `POST /api/identify-part`.
///
/// Every section is optional with a default: the identification service
/// fills in whatever its model produced and the page renders only the
/// sections that arrived. Produced once per request, consumed for rendering,
/// then discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentificationResult {
    pub success: bool,
    #[serde(default)]
    pub part: Option<IdentifiedPart>,
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    #[serde(default)]
    pub applications: Vec<String>,
    #[serde(default)]
    pub vendors: Vec<VendorOffer>,
    #[serde(default)]
    pub pricing: Option<PricingInfo>,
    /// Model name reported by the service, e.g. "EfficientNet-B0".
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifiedPart {
    pub name: String,
    /// Model confidence in percent, [0, 100].
    pub confidence: f64,
    #[serde(default)]
    pub category: String,
    /// Raw class label the model detected, e.g. "junction-transistor".
    #[serde(default)]
    pub detected_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorOffer {
    pub name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInfo {
    pub estimated_range: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "BDT".to_string()
}

/// Turns a specification key like `operating_voltage` into "operating
/// voltage" for display.
pub fn prettify_spec_key(key: &str) -> String {
    key.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shape produced by the identification service.
    const SAMPLE: &str = r#"{
        "success": true,
        "part": {
            "name": "Junction Transistor",
            "category": "Electronic Component",
            "confidence": 97.42,
            "detected_type": "junction-transistor"
        },
        "specifications": {"Type": "Electronic Component", "package_type": "TO-92"},
        "applications": ["Various electronic applications"],
        "pricing": {"estimated_range": "100-5000 BDT", "currency": "BDT"},
        "vendors": [
            {"name": "Electronics BD", "location": "Dhaka", "rating": 4.7},
            {"name": "Component House", "location": "Chittagong", "rating": 4.5}
        ],
        "method": "EfficientNet-B0",
        "note": "AI Confidence: 97.4%"
    }"#;

    #[test]
    fn full_payload_deserializes() {
        let result: IdentificationResult = serde_json::from_str(SAMPLE).expect("valid payload");
        assert!(result.success);
        let part = result.part.expect("part present");
        assert_eq!(part.name, "Junction Transistor");
        assert!((part.confidence - 97.42).abs() < f64::EPSILON);
        assert_eq!(result.vendors.len(), 2);
        assert_eq!(result.pricing.unwrap().currency, "BDT");
        assert_eq!(result.method.as_deref(), Some("EfficientNet-B0"));
    }

    #[test]
    fn sparse_payload_deserializes() {
        let result: IdentificationResult =
            serde_json::from_str(r#"{"success": false}"#).expect("valid payload");
        assert!(!result.success);
        assert!(result.part.is_none());
        assert!(result.specifications.is_empty());
        assert!(result.vendors.is_empty());
    }

    #[test]
    fn spec_keys_prettified() {
        assert_eq!(prettify_spec_key("package_type"), "package type");
        assert_eq!(prettify_spec_key("Type"), "Type");
    }
}
