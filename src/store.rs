// src/store.rs
// In-memory repository behind every screen. Collections keep insertion order
// and are shared by handle, so a write made on one screen is visible on the
// next one for the rest of the session.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::model::{DmConversation, Entity, FeedItem, Product, Review, Tour, Thread, User};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RepoError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Read/write access to one kind of entity.
///
/// `upsert` is the only write path: it replaces the record with the same id
/// in place, or appends it when the id is new.
pub trait Repository<T: Entity> {
    fn get(&self, id: &str) -> Option<T>;
    fn list(&self) -> Vec<T>;
    fn upsert(&self, item: T) -> T;

    /// Apply `f` to a copy of the stored record and write it back.
    fn modify<F>(&self, id: &str, f: F) -> RepoResult<T>
    where
        F: FnOnce(&mut T),
    {
        let mut item = self.get(id).ok_or_else(|| RepoError::NotFound(id.to_string()))?;
        f(&mut item);
        if item.id() != id {
            return Err(RepoError::Conflict(format!("id changed from {} to {}", id, item.id())));
        }
        Ok(self.upsert(item))
    }
}

/// A shared, insertion-ordered collection.
#[derive(Debug)]
pub struct Collection<T> {
    name: &'static str,
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new(name: &'static str, items: Vec<T>) -> Self {
        Self {
            name,
            items: Arc::new(RwLock::new(items)),
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the record in insertion order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .position(|item| item.id() == id)
    }

    /// Records matching `pred`, in insertion order, without cloning the rest.
    pub fn filter<P>(&self, mut pred: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|item| pred(item))
            .cloned()
            .collect()
    }
}

impl<T: Entity> Repository<T> for Collection<T> {
    fn get(&self, id: &str) -> Option<T> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    fn list(&self) -> Vec<T> {
        self.items.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn upsert(&self, item: T) -> T {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        match items.iter().position(|existing| existing.id() == item.id()) {
            Some(idx) => {
                debug!(collection = self.name, id = item.id(), "replacing record");
                items[idx] = item.clone();
            }
            None => {
                debug!(collection = self.name, id = item.id(), "appending record");
                items.push(item.clone());
            }
        }
        item
    }
}

/// Every collection the portal reads from. Cloning shares the data.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    pub users: Collection<User>,
    pub threads: Collection<Thread>,
    pub products: Collection<Product>,
    pub preowned: Collection<Product>,
    pub reviews: Collection<Review>,
    pub conversations: Collection<DmConversation>,
    pub tours: Collection<Tour>,
    pub notifications: Collection<FeedItem>,
    current_user_id: String,
}

impl FixtureStore {
    pub fn new(seed: crate::fixtures::FixtureSet) -> Self {
        let current_user_id = seed.users.first().map(|u| u.id.clone()).unwrap_or_default();
        Self {
            users: Collection::new("users", seed.users),
            threads: Collection::new("threads", seed.threads),
            products: Collection::new("products", seed.products),
            preowned: Collection::new("preowned", seed.preowned),
            reviews: Collection::new("reviews", seed.reviews),
            conversations: Collection::new("conversations", seed.conversations),
            tours: Collection::new("tours", seed.tours),
            notifications: Collection::new("notifications", seed.notifications),
            current_user_id,
        }
    }

    /// The local viewer: always the first seeded user.
    pub fn current_user(&self) -> Option<User> {
        self.users.get(&self.current_user_id)
    }

    pub fn current_user_id(&self) -> &str {
        &self.current_user_id
    }

    /// Resolve a user reference, falling back to a placeholder name.
    pub fn username(&self, id: &str) -> String {
        self.users
            .get(id)
            .map(|u| u.username)
            .unwrap_or_else(|| "Unknown user".to_string())
    }

    /// Looks a product up in the retail catalogue first, then the pre-owned listings.
    pub fn find_product(&self, id: &str) -> Option<Product> {
        self.products.get(id).or_else(|| self.preowned.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSet;

    fn store() -> FixtureStore {
        FixtureStore::new(FixtureSet::builtin().unwrap())
    }

    #[test]
    fn upsert_replaces_in_place_and_keeps_order() {
        let s = store();
        let mut t3 = s.threads.get("t3").unwrap();
        let before = s.threads.position("t3");
        t3.title = "Edited".into();
        s.threads.upsert(t3);
        assert_eq!(s.threads.position("t3"), before);
        assert_eq!(s.threads.get("t3").unwrap().title, "Edited");
    }

    #[test]
    fn upsert_appends_unknown_ids() {
        let s = store();
        let n = s.threads.len();
        let mut t = s.threads.get("t2").unwrap();
        t.id = "t99".into();
        s.threads.upsert(t);
        assert_eq!(s.threads.len(), n + 1);
        assert_eq!(s.threads.position("t99"), Some(n));
    }

    #[test]
    fn clones_share_writes() {
        let s = store();
        let other = s.clone();
        s.conversations
            .modify("dm2", |dm| dm.unread_count = 7)
            .unwrap();
        assert_eq!(other.conversations.get("dm2").unwrap().unread_count, 7);
    }

    #[test]
    fn modify_missing_is_not_found() {
        let s = store();
        let err = s.tours.modify("nope", |_| {}).unwrap_err();
        assert_eq!(err, RepoError::NotFound("nope".into()));
    }

    #[test]
    fn modify_rejects_id_changes() {
        let s = store();
        let err = s.reviews.modify("r1", |r| r.id = "r100".into()).unwrap_err();
        assert!(matches!(err, RepoError::Conflict(_)));
        assert!(s.reviews.get("r100").is_none());
    }

    #[test]
    fn current_user_is_first_seeded_user() {
        let s = store();
        assert_eq!(s.current_user().unwrap().id, "u1");
        assert_eq!(s.username("missing"), "Unknown user");
    }

    #[test]
    fn find_product_spans_both_catalogues() {
        let s = store();
        assert_eq!(s.find_product("p2").unwrap().brand, "Focal");
        assert_eq!(s.find_product("po2").unwrap().brand, "Burson");
        assert!(s.find_product("zz").is_none());
    }
}
