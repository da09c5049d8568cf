use crate::model::{Product, Thread, User};
use crate::services::listing::Filterable;
use crate::store::{FixtureStore, Repository};

pub const SEARCH_PROMPT: &str = "Start typing to search Audio Geeks";
pub const NO_RESULTS: &str = "No results found";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub users: Vec<User>,
    pub threads: Vec<Thread>,
    /// Shown in the Gears section.
    pub products: Vec<Product>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.threads.is_empty() && self.products.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Nothing typed yet.
    Prompt,
    NoResults,
    Found(SearchResults),
}

impl SearchOutcome {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SearchOutcome::Prompt => Some(SEARCH_PROMPT),
            SearchOutcome::NoResults => Some(NO_RESULTS),
            SearchOutcome::Found(_) => None,
        }
    }
}

pub struct SearchService;

impl SearchService {
    /// Independent substring match over users, threads and the retail catalogue.
    /// No ranking and no de-duplication; each list keeps store order.
    pub fn run(store: &FixtureStore, query: &str) -> SearchOutcome {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchOutcome::Prompt;
        }
        let results = SearchResults {
            users: matching(store.users.list(), &needle),
            threads: matching(store.threads.list(), &needle),
            products: matching(store.products.list(), &needle),
        };
        tracing::debug!(
            query = needle.as_str(),
            users = results.users.len(),
            threads = results.threads.len(),
            products = results.products.len(),
            "search"
        );
        if results.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Found(results)
        }
    }
}

fn matching<T: Filterable>(items: Vec<T>, needle: &str) -> Vec<T> {
    items.into_iter().filter(|item| item.matches_text(needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSet;

    fn store() -> FixtureStore {
        FixtureStore::new(FixtureSet::builtin().unwrap())
    }

    #[test]
    fn empty_query_prompts() {
        assert_eq!(SearchService::run(&store(), ""), SearchOutcome::Prompt);
        assert_eq!(SearchService::run(&store(), "   "), SearchOutcome::Prompt);
        assert_eq!(SearchOutcome::Prompt.message(), Some(SEARCH_PROMPT));
    }

    #[test]
    fn unmatched_query_reports_no_results() {
        let out = SearchService::run(&store(), "zzzz-not-here");
        assert_eq!(out, SearchOutcome::NoResults);
        assert_eq!(out.message(), Some(NO_RESULTS));
    }

    #[test]
    fn brand_match_lands_in_products() {
        let SearchOutcome::Found(r) = SearchService::run(&store(), "Focal") else {
            panic!("expected results");
        };
        assert_eq!(r.products.len(), 1);
        assert_eq!(r.products[0].id, "p2");
        // Thread title mentions Focal too; pre-owned listings are not searched.
        assert_eq!(r.threads.len(), 1);
        assert!(r.users.is_empty());
    }

    #[test]
    fn matches_bio_tags_and_category_case_insensitively() {
        let SearchOutcome::Found(r) = SearchService::run(&store(), "AMPS") else {
            panic!("expected results");
        };
        assert_eq!(r.users.len(), 1);
        assert_eq!(r.users[0].id, "u2");

        let SearchOutcome::Found(r) = SearchService::run(&store(), "gallery") else {
            panic!("expected results");
        };
        assert_eq!(r.threads[0].id, "t4");
    }
}
