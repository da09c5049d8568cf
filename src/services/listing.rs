// src/services/listing.rs
// Building blocks shared by the list screens: a category filter over a closed
// list, an id-based selection, and the optional capabilities (pages, likes,
// reply quoting) that only some screens carry.

use std::collections::HashSet;

use crate::model::{Entity, Product, Review, Tour, Thread, User};
use crate::state::{AppError, AppResult};
use crate::store::Repository;

/// Sentinel filter value that disables filtering.
pub const ALL: &str = "All";

/// An item a list screen can filter.
pub trait Filterable {
    fn category(&self) -> &str;

    /// Exact match against a concrete (non-`All`) filter value.
    fn matches_category(&self, filter: &str) -> bool {
        self.category() == filter
    }

    /// Case-insensitive substring match; `needle` is already lower-cased.
    fn matches_text(&self, needle: &str) -> bool;
}

fn contains_lower(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Filterable for Product {
    fn category(&self) -> &str {
        &self.category
    }

    fn matches_text(&self, needle: &str) -> bool {
        contains_lower(&self.name, needle) || contains_lower(&self.brand, needle)
    }
}

/// Forum rooms: `Rooms` lists private threads, a category lists public ones.
pub const ROOMS: &str = "Rooms";

impl Filterable for Thread {
    fn category(&self) -> &str {
        &self.category
    }

    fn matches_category(&self, filter: &str) -> bool {
        if filter == ROOMS {
            self.is_private
        } else {
            self.category == filter && !self.is_private
        }
    }

    fn matches_text(&self, needle: &str) -> bool {
        contains_lower(&self.title, needle)
            || self.tags.iter().any(|tag| contains_lower(tag, needle))
            || contains_lower(&self.category, needle)
    }
}

impl Filterable for Tour {
    fn category(&self) -> &str {
        self.region.as_str()
    }

    fn matches_text(&self, needle: &str) -> bool {
        contains_lower(&self.title, needle) || contains_lower(&self.equipment_name, needle)
    }
}

impl Filterable for Review {
    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn matches_text(&self, needle: &str) -> bool {
        contains_lower(&self.title, needle) || contains_lower(&self.product_name, needle)
    }
}

impl Filterable for User {
    fn category(&self) -> &str {
        self.badge.map(|b| b.as_str()).unwrap_or("")
    }

    fn matches_text(&self, needle: &str) -> bool {
        contains_lower(&self.username, needle)
            || self.bio.as_deref().map(|bio| contains_lower(bio, needle)).unwrap_or(false)
    }
}

/// Active value out of a closed list of filter names (first entry is `All`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    allowed: &'static [&'static str],
    active: &'static str,
}

impl CategoryFilter {
    pub fn new(allowed: &'static [&'static str]) -> Self {
        Self { allowed, active: ALL }
    }

    pub fn allowed(&self) -> &'static [&'static str] {
        self.allowed
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn is_all(&self) -> bool {
        self.active == ALL
    }

    /// Switch to `name`. Returns whether the active value changed.
    pub fn set(&mut self, name: &str) -> AppResult<bool> {
        let found = self
            .allowed
            .iter()
            .copied()
            .find(|allowed| *allowed == name)
            .ok_or_else(|| AppError::UnknownFilter(name.to_string()))?;
        let changed = found != self.active;
        self.active = found;
        Ok(changed)
    }

    pub fn accepts<T: Filterable>(&self, item: &T) -> bool {
        self.is_all() || item.matches_category(self.active)
    }

    pub fn apply<T: Filterable>(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().filter(|item| self.accepts(item)).collect()
    }
}

/// Filter plus the id of the entity opened in detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub filter: CategoryFilter,
    selected: Option<String>,
}

impl Listing {
    pub fn new(allowed: &'static [&'static str]) -> Self {
        Self {
            filter: CategoryFilter::new(allowed),
            selected: None,
        }
    }

    /// Select `id` if the repository has it; a miss leaves the list view up.
    pub fn select_in<T, R>(&mut self, repo: &R, id: &str) -> bool
    where
        T: Entity,
        R: Repository<T>,
    {
        match repo.get(id) {
            Some(item) => {
                self.selected = Some(item.id().to_string());
                true
            }
            None => {
                tracing::debug!(id, "deep link did not resolve, showing list");
                false
            }
        }
    }

    /// Select without checking; for ids that were just written.
    pub fn select_id(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected<T, R>(&self, repo: &R) -> Option<T>
    where
        T: Entity,
        R: Repository<T>,
    {
        self.selected.as_deref().and_then(|id| repo.get(id))
    }
}

/// 1-based page cursor with a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.page_count(total)
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Clamped into `1..=page_count`.
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, self.page_count(total));
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

/// Screens with a paged list.
pub trait Paginate {
    fn pager(&self) -> &Pager;
    fn pager_mut(&mut self) -> &mut Pager;
    /// Number of items in the filtered list being paged.
    fn total_items(&self) -> usize;

    fn next_page(&mut self) -> bool {
        let total = self.total_items();
        if !self.pager().has_next(total) {
            return false;
        }
        let next = self.pager().page() + 1;
        self.pager_mut().go_to(next, total);
        true
    }

    fn prev_page(&mut self) -> bool {
        if !self.pager().has_prev() {
            return false;
        }
        let prev = self.pager().page() - 1;
        let total = self.total_items();
        self.pager_mut().go_to(prev, total);
        true
    }
}

/// Session-local set of liked ids. Never written to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeSet(HashSet<String>);

impl LikeSet {
    /// Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.0.remove(id) {
            false
        } else {
            self.0.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub trait Likes {
    fn likes(&self) -> &LikeSet;
    fn likes_mut(&mut self) -> &mut LikeSet;

    fn toggle_like(&mut self, id: &str) -> bool {
        self.likes_mut().toggle(id)
    }

    fn is_liked(&self, id: &str) -> bool {
        self.likes().contains(id)
    }
}

/// A compose box. Quote blocks sit at the front; typed text follows them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub text: String,
    pub focused: bool,
    /// Length of the leading quoted part of `text`.
    quoted_len: usize,
}

impl Draft {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// End of the quoted prefix; zero if `text` was rewritten underneath it.
    fn quoted_end(&self) -> usize {
        if self.text.is_char_boundary(self.quoted_len) {
            self.quoted_len
        } else {
            0
        }
    }

    /// Replace the typed part, keeping any quote blocks in front of it.
    pub fn write(&mut self, typed: &str) {
        let end = self.quoted_end();
        self.quoted_len = end;
        self.text.truncate(end);
        self.text.push_str(typed);
        self.focused = true;
    }

    /// Add a quote block after the existing quotes; typed text stays last.
    pub fn push_quote(&mut self, block: &str) {
        let end = self.quoted_end();
        self.text.insert_str(end, block);
        self.quoted_len = end + block.len();
        self.focused = true;
    }

    /// Hand back the text and empty the box.
    pub fn take(&mut self) -> String {
        self.quoted_len = 0;
        std::mem::take(&mut self.text)
    }
}

/// Screens whose messages can be quoted into the compose box.
pub trait Quoting {
    fn draft_mut(&mut self) -> &mut Draft;

    fn quote(&mut self, author: &str, content: &str) {
        let block = crate::services::ChatService::quote_block(author, content);
        self.draft_mut().push_quote(&block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSet;
    use crate::store::FixtureStore;

    const FILTERS: &[&str] = &[ALL, "Headphones", "Amplifiers", "DAC/Amp", "Cables"];

    fn store() -> FixtureStore {
        FixtureStore::new(FixtureSet::builtin().unwrap())
    }

    #[test]
    fn unknown_filter_is_rejected_and_state_kept() {
        let mut f = CategoryFilter::new(FILTERS);
        f.set("Headphones").unwrap();
        let err = f.set("Turntables").unwrap_err();
        assert!(matches!(err, AppError::UnknownFilter(_)));
        assert_eq!(f.active(), "Headphones");
    }

    #[test]
    fn known_but_empty_category_filters_to_nothing() {
        let mut f = CategoryFilter::new(FILTERS);
        f.set("Cables").unwrap();
        assert!(f.apply(store().products.list()).is_empty());
    }

    #[test]
    fn rooms_filter_selects_private_threads_only() {
        let s = store();
        assert!(s.threads.list().iter().all(|t| {
            t.matches_category(ROOMS) == t.is_private
        }));
        let admin = s.threads.get("admin-room").unwrap();
        assert!(!admin.matches_category("Private"));
    }

    #[test]
    fn listing_falls_back_on_unknown_id() {
        let s = store();
        let mut l = Listing::new(FILTERS);
        assert!(!l.select_in(&s.products, "nope"));
        assert!(l.selected_id().is_none());
        assert!(l.select_in(&s.products, "p3"));
        assert_eq!(l.selected(&s.products).unwrap().name, "Cayin HA-300");
    }

    #[test]
    fn pager_bounds() {
        let items: Vec<u32> = (0..9).collect();
        let mut p = Pager::new(8);
        assert_eq!(p.page_count(9), 2);
        assert_eq!(p.slice(&items).len(), 8);
        assert!(!p.has_prev());
        p.go_to(2, 9);
        assert_eq!(p.slice(&items), &[8]);
        assert!(!p.has_next(9));
        p.go_to(50, 9);
        assert_eq!(p.page(), 2);
        assert_eq!(Pager::new(8).page_count(0), 1);
    }

    #[test]
    fn typing_after_a_quote_keeps_it() {
        let mut draft = Draft::default();
        draft.write("first try");
        draft.push_quote("> @Pulkit wrote: \"hi\"\n\n");
        assert_eq!(draft.text, "> @Pulkit wrote: \"hi\"\n\nfirst try");
        draft.write("agreed");
        draft.write("agreed, fully");
        assert_eq!(draft.text, "> @Pulkit wrote: \"hi\"\n\nagreed, fully");
        assert_eq!(draft.take(), "> @Pulkit wrote: \"hi\"\n\nagreed, fully");
        draft.write("fresh");
        draft.write("fresher");
        assert_eq!(draft.text, "fresher");
    }

    #[test]
    fn like_toggle_round_trips() {
        let mut likes = LikeSet::default();
        assert!(likes.toggle("m1"));
        assert!(!likes.toggle("m1"));
        assert!(likes.is_empty());
    }
}
