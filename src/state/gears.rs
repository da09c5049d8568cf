use crate::model::{Product, Review, NO_DESCRIPTION, NO_REVIEWS_YET, NO_SPECS_GEARS};
use crate::services::listing::{Filterable, Listing};
use crate::state::marketplace::PRODUCT_FILTERS;
use crate::state::AppResult;
use crate::store::FixtureStore;

pub const NO_GEARS: &str = "No gears found matching your criteria.";

/// Gear catalogue: the retail products with reviews attached.
pub struct GearsState {
    store: FixtureStore,
    pub listing: Listing,
    search: String,
    pub show_review_modal: bool,
}

impl GearsState {
    pub fn new(store: FixtureStore, deep_link: Option<&str>, search: &str) -> Self {
        let mut listing = Listing::new(PRODUCT_FILTERS);
        if let Some(id) = deep_link {
            listing.select_in(&store.products, id);
        }
        let mut state = Self {
            store,
            listing,
            search: String::new(),
            show_review_modal: false,
        };
        state.set_search(search);
        state
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// A non-empty search drops back to the list.
    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
        if !query.is_empty() {
            self.listing.clear_selection();
        }
    }

    pub fn set_filter(&mut self, name: &str) -> AppResult<()> {
        self.listing.filter.set(name).map(|_| ())
    }

    pub fn products(&self) -> Vec<Product> {
        let needle = self.search.to_lowercase();
        let filter = &self.listing.filter;
        self.store
            .products
            .filter(|p| filter.accepts(p) && (needle.is_empty() || p.matches_text(&needle)))
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.products().is_empty().then_some(NO_GEARS)
    }

    pub fn open_product(&mut self, id: &str) -> bool {
        self.show_review_modal = false;
        self.listing.select_in(&self.store.products, id)
    }

    pub fn back_to_list(&mut self) {
        self.listing.clear_selection();
        self.show_review_modal = false;
    }

    pub fn selected_product(&self) -> Option<Product> {
        self.listing.selected(&self.store.products)
    }

    /// Reviews filed under the same category as the open product.
    pub fn product_reviews(&self) -> Vec<Review> {
        match self.selected_product() {
            Some(product) => self
                .store
                .reviews
                .filter(|r| r.category.as_str() == product.category),
            None => Vec::new(),
        }
    }

    pub fn reviews_placeholder(&self) -> Option<&'static str> {
        (self.selected_product().is_some() && self.product_reviews().is_empty())
            .then_some(NO_REVIEWS_YET)
    }

    pub fn description(product: &Product) -> &str {
        product.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }

    pub fn spec_lines(product: &Product) -> Vec<String> {
        match &product.specs {
            Some(specs) if !specs.is_empty() => specs
                .iter()
                .map(|s| format!("{}: {}", s.label, s.value))
                .collect(),
            _ => vec![NO_SPECS_GEARS.to_string()],
        }
    }

    pub fn toggle_review_modal(&mut self) -> bool {
        self.show_review_modal = self.selected_product().is_some() && !self.show_review_modal;
        self.show_review_modal
    }
}
