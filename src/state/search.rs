use crate::services::{SearchOutcome, SearchService};
use crate::store::FixtureStore;

/// Search results screen. The outcome is computed once per query.
pub struct SearchState {
    pub query: String,
    pub outcome: SearchOutcome,
}

impl SearchState {
    pub fn new(store: &FixtureStore, query: &str) -> Self {
        Self {
            query: query.to_string(),
            outcome: SearchService::run(store, query),
        }
    }
}
