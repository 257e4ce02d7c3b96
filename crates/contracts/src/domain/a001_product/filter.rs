use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::aggregate::Product;

/// Current filter selection for the marketplace grid.
///
/// Category checkboxes and the free-text search box both write into one
/// criteria value, so a change to either recomputes the filtered view with
/// both predicates applied (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Selected category names; empty set means no category restriction.
    pub categories: BTreeSet<String>,
    /// Case-insensitive substring matched against name, description,
    /// category and manufacturer; empty means no text restriction.
    pub search_term: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.search_term.is_empty()
    }

    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    pub fn active_count(&self) -> usize {
        self.categories.len() + usize::from(!self.search_term.is_empty())
    }
}

/// Applies `criteria` to `products`, preserving input order.
///
/// Never returns a product that is not in the input; an empty criteria
/// returns the input unchanged.
pub fn apply(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|p| matches_categories(p, criteria) && matches_search(p, criteria))
        .cloned()
        .collect()
}

/// Category predicate: any selected category matches by bidirectional
/// substring, so abbreviated checkbox labels ("capacitor") still match the
/// catalog's full names ("Electrolytic-capacitor") and vice versa.
fn matches_categories(product: &Product, criteria: &FilterCriteria) -> bool {
    if criteria.categories.is_empty() {
        return true;
    }
    criteria
        .categories
        .iter()
        .any(|cat| product.category.contains(cat.as_str()) || cat.contains(&product.category))
}

fn matches_search(product: &Product, criteria: &FilterCriteria) -> bool {
    if criteria.search_term.is_empty() {
        return true;
    }
    let term = criteria.search_term.to_lowercase();
    product.name.to_lowercase().contains(&term)
        || product.description.to_lowercase().contains(&term)
        || product.category.to_lowercase().contains(&term)
        || product.manufacturer.to_lowercase().contains(&term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::{ProductId, ProductVendor};

    fn product(id: i64, name: &str, category: &str) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            description: format!("{name} description"),
            category: category.to_string(),
            manufacturer: name.split(' ').next().unwrap_or_default().to_string(),
            price: 100.0,
            stock: 25,
            vendor: ProductVendor {
                name: "Techshop BD".to_string(),
                rating: 4.8,
                location: "Dhaka, Bangladesh".to_string(),
                email: None,
            },
            image_url: None,
            created_at: None,
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, "Siemens PLC", "Automation"),
            product(2, "Bosch Sensor", "Sensors"),
            product(3, "Electrolytic Capacitor 1000uF", "Electrolytic-capacitor"),
        ]
    }

    #[test]
    fn empty_criteria_is_identity() {
        let products = sample_catalog();
        let result = apply(&products, &FilterCriteria::default());
        assert_eq!(result, products);
    }

    #[test]
    fn result_is_ordered_subset() {
        let products = sample_catalog();
        let criteria = FilterCriteria {
            search_term: "s".to_string(),
            ..Default::default()
        };
        let result = apply(&products, &criteria);
        let mut last_idx = 0;
        for item in &result {
            let idx = products.iter().position(|p| p == item).expect("subset");
            assert!(idx >= last_idx, "order preserved");
            last_idx = idx;
        }
    }

    #[test]
    fn search_is_case_insensitive_over_four_fields() {
        let products = sample_catalog();
        let criteria = FilterCriteria {
            search_term: "bosch".to_string(),
            ..Default::default()
        };
        let result = apply(&products, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Bosch Sensor");

        // Matches manufacturer and category too.
        for term in ["siemens", "sensors"] {
            let criteria = FilterCriteria {
                search_term: term.to_string(),
                ..Default::default()
            };
            assert_eq!(apply(&products, &criteria).len(), 1, "term {term}");
        }
    }

    #[test]
    fn category_match_is_bidirectional_substring() {
        let products = sample_catalog();

        // Abbreviated selection matches the longer catalog category.
        let mut criteria = FilterCriteria::default();
        criteria.categories.insert("capacitor".to_string());
        let result = apply(&products, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, "Electrolytic-capacitor");

        // Longer selection matches the shorter catalog category.
        let mut criteria = FilterCriteria::default();
        criteria.categories.insert("Sensors and Probes".to_string());
        let result = apply(&products, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, "Sensors");
    }

    #[test]
    fn category_and_search_compose_with_and() {
        let products = sample_catalog();
        let mut criteria = FilterCriteria {
            search_term: "capacitor".to_string(),
            ..Default::default()
        };
        criteria.categories.insert("Sensors".to_string());
        // No product is both a sensor and a capacitor.
        assert!(apply(&products, &criteria).is_empty());
    }

    #[test]
    fn active_count_totals_categories_and_search() {
        let mut criteria = FilterCriteria::default();
        assert_eq!(criteria.active_count(), 0);

        criteria.toggle_category("LED");
        criteria.toggle_category("Sensors");
        criteria.search_term = "bosch".to_string();
        assert_eq!(criteria.active_count(), 3);

        criteria.search_term.clear();
        assert_eq!(criteria.active_count(), 2);
    }

    #[test]
    fn toggle_category_round_trips() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_category("LED");
        assert!(criteria.categories.contains("LED"));
        assert_eq!(criteria.active_count(), 1);
        criteria.toggle_category("LED");
        assert!(criteria.is_empty());
    }
}
