use crate::model::{Product, User, NO_SPECS_MARKET};
use crate::services::listing::{Listing, ALL};
use crate::state::AppResult;
use crate::store::{FixtureStore, Repository};

pub const PRODUCT_FILTERS: &[&str] = &[ALL, "Headphones", "Amplifiers", "DAC/Amp", "Cables"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketMode {
    Retail,
    PreOwned,
}

pub struct MarketplaceState {
    store: FixtureStore,
    pub mode: MarketMode,
    pub listing: Listing,
}

impl MarketplaceState {
    /// A deep link may point into either catalogue.
    pub fn new(store: FixtureStore, deep_link: Option<&str>) -> Self {
        let mut listing = Listing::new(PRODUCT_FILTERS);
        if let Some(product) = deep_link.and_then(|id| store.find_product(id)) {
            listing.select_id(product.id);
        }
        Self {
            store,
            mode: MarketMode::Retail,
            listing,
        }
    }

    pub fn set_mode(&mut self, mode: MarketMode) {
        self.mode = mode;
    }

    pub fn set_filter(&mut self, name: &str) -> AppResult<()> {
        self.listing.filter.set(name).map(|_| ())
    }

    pub fn products(&self) -> Vec<Product> {
        let source = match self.mode {
            MarketMode::Retail => &self.store.products,
            MarketMode::PreOwned => &self.store.preowned,
        };
        self.listing.filter.apply(source.list())
    }

    pub fn open_product(&mut self, id: &str) -> bool {
        match self.store.find_product(id) {
            Some(product) => {
                self.listing.select_id(product.id);
                true
            }
            None => false,
        }
    }

    pub fn back_to_list(&mut self) {
        self.listing.clear_selection();
    }

    pub fn selected_product(&self) -> Option<Product> {
        self.listing
            .selected_id()
            .and_then(|id| self.store.find_product(id))
    }

    pub fn seller(&self, product: &Product) -> Option<User> {
        product.seller.as_deref().and_then(|id| self.store.users.get(id))
    }

    /// Spec lines for the detail view, or the placeholder.
    pub fn spec_lines(product: &Product) -> Vec<String> {
        match &product.specs {
            Some(specs) if !specs.is_empty() => specs
                .iter()
                .map(|s| format!("{}: {}", s.label, s.value))
                .collect(),
            _ => vec![NO_SPECS_MARKET.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSet;

    fn market(deep_link: Option<&str>) -> MarketplaceState {
        MarketplaceState::new(FixtureStore::new(FixtureSet::builtin().unwrap()), deep_link)
    }

    #[test]
    fn deep_link_reaches_preowned_listings() {
        let m = market(Some("po1"));
        let p = m.selected_product().unwrap();
        assert_eq!(p.name, "Focal Clear Mg");
        assert_eq!(m.seller(&p).unwrap().id, "u3");
    }

    #[test]
    fn mode_switches_catalogue() {
        let mut m = market(None);
        assert_eq!(m.products().len(), 4);
        m.set_mode(MarketMode::PreOwned);
        m.set_filter("Amplifiers").unwrap();
        let names: Vec<_> = m.products().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Burson Soloist 3X"]);
    }

    #[test]
    fn missing_specs_use_placeholder() {
        let m = market(Some("p4"));
        let p = m.selected_product().unwrap();
        assert_eq!(MarketplaceState::spec_lines(&p), vec![NO_SPECS_MARKET.to_string()]);
        let m = market(Some("p1"));
        let p = m.selected_product().unwrap();
        assert_eq!(MarketplaceState::spec_lines(&p)[0], "Driver: Dynamic");
    }

    #[test]
    fn unknown_link_shows_list() {
        let mut m = market(Some("nope"));
        assert!(m.selected_product().is_none());
        assert!(!m.open_product("nope"));
    }
}
