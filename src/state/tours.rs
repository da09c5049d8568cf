use tracing::info;

use crate::model::{Tour, TourImpression, TourStatus, User, NO_IMPRESSIONS};
use crate::services::listing::{CategoryFilter, ALL};
use crate::state::{AppError, AppResult};
use crate::store::{FixtureStore, RepoError, Repository};

pub const REGION_FILTERS: &[&str] = &[ALL, "North America", "Europe", "Asia"];
pub const TOUR_SLOTS: u32 = 20;
pub const APPLY_TOAST_TITLE: &str = "Application Received!";
pub const APPLY_TOAST_BODY: &str = "You are now registered for the tour lottery.";

pub struct ToursState {
    store: FixtureStore,
    pub region: CategoryFilter,
    /// Tour whose details panel is open.
    pub expanded: Option<String>,
}

impl ToursState {
    pub fn new(store: FixtureStore) -> Self {
        Self {
            store,
            region: CategoryFilter::new(REGION_FILTERS),
            expanded: None,
        }
    }

    pub fn set_region(&mut self, name: &str) -> AppResult<()> {
        self.region.set(name).map(|_| ())
    }

    pub fn tours(&self) -> Vec<Tour> {
        self.region.apply(self.store.tours.list())
    }

    /// Open the details of `id`, or close them if they are already open.
    pub fn toggle_details(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    /// Register for a tour lottery. Only open tours accept applications.
    pub fn apply(&self, id: &str) -> AppResult<Tour> {
        let tour = self
            .store
            .tours
            .get(id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;
        if tour.status != TourStatus::Open {
            return Err(AppError::Validation(format!("{} is {}", tour.title, tour.status)));
        }
        info!(tour = %tour.id, "applied to tour");
        Ok(tour)
    }

    /// Product page the tour links to, if any.
    pub fn linked_product(&self, id: &str) -> Option<String> {
        self.store.tours.get(id).and_then(|t| t.product_id)
    }

    pub fn host(&self, tour: &Tour) -> Option<User> {
        self.store.users.get(&tour.host)
    }

    pub fn impressions(&self, id: &str) -> Vec<TourImpression> {
        self.store.tours.get(id).map(|t| t.impressions).unwrap_or_default()
    }

    pub fn impressions_placeholder(&self, id: &str) -> Option<&'static str> {
        self.impressions(id).is_empty().then_some(NO_IMPRESSIONS)
    }

    pub fn slots_label(tour: &Tour) -> String {
        format!("{} / {}", tour.participants, TOUR_SLOTS)
    }
}
