use contracts::domain::a001_product::{filter, FilterCriteria, Product};
use leptos::prelude::*;

/// Grid layout toggle for the marketplace page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Catalog state for one page session.
///
/// Owns the full product list; the filtered view is derived on demand and
/// is always a subset of `all` consistent with `criteria`. The list is only
/// ever replaced wholesale, never patched.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    all: Vec<Product>,
    pub criteria: FilterCriteria,
    pub categories: Vec<String>,
    pub view_mode: ViewMode,
    pub is_loading: bool,
    pub is_loaded: bool,
    pub error: Option<String>,
}

impl CatalogState {
    /// The catalog is fetched once per session; retry only after a failure.
    pub fn needs_load(&self) -> bool {
        !self.is_loaded && !self.is_loading
    }

    pub fn begin_load(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, products: Vec<Product>, categories: Vec<String>) {
        self.all = products;
        self.categories = categories;
        self.is_loading = false;
        self.is_loaded = true;
        self.error = None;
    }

    pub fn fail_load(&mut self, error: String) {
        self.all = Vec::new();
        self.is_loading = false;
        self.is_loaded = false;
        self.error = Some(error);
    }

    /// Cached catalog; empty before the load completes.
    pub fn all(&self) -> &[Product] {
        &self.all
    }

    /// Current filtered view, derived from the cached list and criteria.
    pub fn filtered(&self) -> Vec<Product> {
        filter::apply(&self.all, &self.criteria)
    }

    pub fn set_search_term(&mut self, term: String) {
        self.criteria.search_term = term;
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.criteria.toggle_category(category);
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }
}

pub fn create_state() -> RwSignal<CatalogState> {
    RwSignal::new(CatalogState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::{ProductId, ProductVendor};

    fn product(id: i64, name: &str, category: &str) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            manufacturer: String::new(),
            price: 10.0,
            stock: 100,
            vendor: ProductVendor {
                name: "Circuit Valley".to_string(),
                rating: 4.6,
                location: "Chittagong, Bangladesh".to_string(),
                email: None,
            },
            image_url: None,
            created_at: None,
        }
    }

    #[test]
    fn load_lifecycle() {
        let mut state = CatalogState::default();
        assert!(state.needs_load());
        assert!(state.all().is_empty());

        state.begin_load();
        assert!(!state.needs_load());

        state.finish_load(vec![product(1, "Relay", "relay")], vec!["relay".to_string()]);
        assert!(state.is_loaded);
        assert_eq!(state.all().len(), 1);
        assert!(!state.needs_load());
    }

    #[test]
    fn failed_load_allows_retry() {
        let mut state = CatalogState::default();
        state.begin_load();
        state.fail_load("Network error".to_string());
        assert!(state.needs_load());
        assert_eq!(state.error.as_deref(), Some("Network error"));
    }

    #[test]
    fn filtered_is_subset_consistent_with_criteria() {
        let mut state = CatalogState::default();
        state.finish_load(
            vec![
                product(1, "5mm Red LED", "LED"),
                product(2, "SPDT Relay", "relay"),
            ],
            vec!["LED".to_string(), "relay".to_string()],
        );

        assert_eq!(state.filtered().len(), 2);

        state.toggle_category("LED");
        let filtered = state.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].category, "LED");

        state.set_search_term("relay".to_string());
        // AND composition: LED category but relay text -> nothing.
        assert!(state.filtered().is_empty());

        state.clear_filters();
        assert_eq!(state.filtered().len(), 2);
    }
}
