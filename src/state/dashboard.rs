use crate::model::{DmConversation, Review, Thread};
use crate::store::{FixtureStore, Repository};

const LATEST_REVIEWS: usize = 2;
const RECENT_THREADS: usize = 4;

/// Landing page: a read-only digest of the other screens.
pub struct DashboardState {
    store: FixtureStore,
}

impl DashboardState {
    pub fn new(store: FixtureStore) -> Self {
        Self { store }
    }

    pub fn greeting(&self) -> String {
        match self.store.current_user() {
            Some(user) => format!("Welcome back, {}", user.first_name()),
            None => "Welcome back".to_string(),
        }
    }

    pub fn latest_reviews(&self) -> Vec<Review> {
        self.store.reviews.list().into_iter().take(LATEST_REVIEWS).collect()
    }

    /// Public threads only.
    pub fn recent_threads(&self) -> Vec<Thread> {
        self.store
            .threads
            .filter(|t| !t.is_private)
            .into_iter()
            .take(RECENT_THREADS)
            .collect()
    }

    pub fn conversations(&self) -> Vec<DmConversation> {
        self.store.conversations.list()
    }

    pub fn username(&self, id: &str) -> String {
        self.store.username(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_contents() {
        let d = DashboardState::new(FixtureStore::new(crate::fixtures::FixtureSet::builtin().unwrap()));
        assert_eq!(d.greeting(), "Welcome back, Pulkit");
        assert_eq!(d.latest_reviews().len(), 2);
        let ids: Vec<_> = d.recent_threads().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3", "t4"]);
        assert_eq!(d.conversations().len(), 2);
    }
}
