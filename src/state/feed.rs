use tracing::debug;

use crate::model::FeedItem;
use crate::state::AppResult;
use crate::store::{FixtureStore, Repository};

/// The bell menu in the top bar. It sits outside the screens, so it stays
/// open or closed across navigation.
pub struct FeedState {
    store: FixtureStore,
    pub open: bool,
}

impl FeedState {
    pub fn new(store: FixtureStore) -> Self {
        Self { store, open: false }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn items(&self) -> Vec<FeedItem> {
        self.store.notifications.list()
    }

    pub fn unread_count(&self) -> usize {
        self.store.notifications.filter(|n| n.unread).len()
    }

    /// Clear every unread flag. Returns how many entries changed.
    pub fn mark_all_read(&self) -> AppResult<usize> {
        let unread = self.store.notifications.filter(|n| n.unread);
        for item in &unread {
            self.store.notifications.modify(&item.id, |n| n.unread = false)?;
        }
        debug!(count = unread.len(), "feed marked read");
        Ok(unread.len())
    }
}
