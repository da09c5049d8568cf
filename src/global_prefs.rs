// src/global_prefs.rs
// Portal preferences (not user-specific). Read once at startup from a JSON file;
// everything has a default so the file is optional.
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PortalPrefs {
    /// Length of the simulated loading phase after every navigation.
    pub loading_delay_ms: u64,
    /// How long a toast stays up before it dismisses itself.
    pub toast_ms: u64,
    pub forum_page_size: usize,
    /// Interval of the driver's tick.
    pub tick_ms: u64,
    /// Reviews shown per category before a section is expanded.
    pub reviews_collapsed_limit: usize,
    /// Reset a conversation's unread counter when it is opened.
    pub clear_unread_on_open: bool,
    pub fixtures_path: Option<PathBuf>,
}

impl Default for PortalPrefs {
    fn default() -> Self {
        Self {
            loading_delay_ms: 300,
            toast_ms: 3000,
            forum_page_size: 8,
            tick_ms: 50,
            reviews_collapsed_limit: 4,
            clear_unread_on_open: false,
            fixtures_path: None,
        }
    }
}

impl PortalPrefs {
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("AUDIOGEEKS_PREFS") {
            return PathBuf::from(path);
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".audiogeeks_prefs.json")
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                debug!("No prefs at {}: {}. Using defaults.", path.display(), e);
                return Self::default();
            }
        };
        match serde_json::from_str(&data) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("Failed to parse prefs {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }
}

static GLOBAL_PREFS: OnceCell<RwLock<PortalPrefs>> = OnceCell::new();

/// Load prefs from disk into the process-wide slot. Later calls are no-ops.
pub fn init_global_prefs() {
    GLOBAL_PREFS.get_or_init(|| RwLock::new(PortalPrefs::load()));
}

/// Snapshot of the process-wide prefs; defaults if they were never initialised.
pub fn global_prefs() -> PortalPrefs {
    GLOBAL_PREFS
        .get()
        .map(|lock| match lock.read() {
            Ok(prefs) => prefs.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PortalPrefs::load_from(&dir.path().join("absent.json"));
        assert_eq!(prefs, PortalPrefs::default());
        assert_eq!(prefs.forum_page_size, 8);
        assert_eq!(prefs.loading_delay_ms, 300);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"toast_ms": 10, "clear_unread_on_open": true}}"#).unwrap();
        let prefs = PortalPrefs::load_from(file.path());
        assert_eq!(prefs.toast_ms, 10);
        assert!(prefs.clear_unread_on_open);
        assert_eq!(prefs.forum_page_size, 8);
    }

    #[test]
    fn garbage_file_gives_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert_eq!(PortalPrefs::load_from(file.path()), PortalPrefs::default());
    }
}
