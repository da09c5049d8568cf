// src/fixtures.rs
// Seed data for the store. The built-in set is compiled in; prefs can point at
// a replacement file with the same shape.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::{DmConversation, FeedItem, Product, Review, Tour, Thread, User};
use crate::state::{AppError, AppResult};

const BUILTIN_FIXTURES: &str = include_str!("../data/fixtures.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureSet {
    pub users: Vec<User>,
    #[serde(default)]
    pub threads: Vec<Thread>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub preowned: Vec<Product>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub conversations: Vec<DmConversation>,
    #[serde(default)]
    pub tours: Vec<Tour>,
    #[serde(default)]
    pub notifications: Vec<FeedItem>,
}

impl FixtureSet {
    pub fn builtin() -> AppResult<Self> {
        Self::from_json(BUILTIN_FIXTURES)
    }

    pub fn from_json(data: &str) -> AppResult<Self> {
        let set: FixtureSet =
            serde_json::from_str(data).map_err(|e| AppError::Fixture(e.to_string()))?;
        if set.users.is_empty() {
            return Err(AppError::Fixture("at least one user is required".to_string()));
        }
        Ok(set)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let data = fs::read_to_string(path)?;
        let set = Self::from_json(&data)?;
        info!(path = %path.display(), users = set.users.len(), "loaded fixtures");
        Ok(set)
    }

    /// The configured fixture file if one is set, otherwise the built-in data.
    pub fn from_prefs(prefs: &crate::global_prefs::PortalPrefs) -> AppResult<Self> {
        match &prefs.fixtures_path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_set_is_complete() {
        let set = FixtureSet::builtin().unwrap();
        assert_eq!(set.users.len(), 12);
        assert_eq!(set.threads.len(), 5);
        assert_eq!(set.products.len(), 4);
        assert_eq!(set.preowned.len(), 2);
        assert_eq!(set.reviews.len(), 4);
        assert_eq!(set.conversations.len(), 2);
        assert_eq!(set.tours.len(), 2);
        assert_eq!(set.notifications.len(), 3);
        assert_eq!(set.users[0].id, "u1");
    }

    #[test]
    fn empty_user_list_is_rejected() {
        let err = FixtureSet::from_json(r#"{"users": []}"#).unwrap_err();
        assert!(matches!(err, AppError::Fixture(_)));
    }

    #[test]
    fn malformed_json_is_a_fixture_error() {
        assert!(matches!(FixtureSet::from_json("{"), Err(AppError::Fixture(_))));
    }

    #[test]
    fn loads_a_replacement_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"users":[{{"id":"me","username":"Solo Listener","avatar":""}}]}}"#
        )
        .unwrap();
        let set = FixtureSet::load(file.path()).unwrap();
        assert_eq!(set.users[0].username, "Solo Listener");
        assert!(set.threads.is_empty());
    }
}
