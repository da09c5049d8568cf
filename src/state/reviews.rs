use crate::model::{Review, ReviewCategory, NO_FULL_CONTENT};
use crate::services::listing::Listing;
use crate::store::FixtureStore;

/// One category block of the reviews page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSection {
    pub category: ReviewCategory,
    pub reviews: Vec<Review>,
    pub total: usize,
    pub expanded: bool,
}

impl ReviewSection {
    pub fn has_more(&self) -> bool {
        self.total > self.reviews.len()
    }
}

pub struct ReviewsState {
    store: FixtureStore,
    pub listing: Listing,
    pub expanded_section: Option<ReviewCategory>,
    collapsed_limit: usize,
}

impl ReviewsState {
    pub fn new(store: FixtureStore, deep_link: Option<&str>, collapsed_limit: usize) -> Self {
        // Reviews are browsed by section rather than filtered, so the filter
        // list only carries the sentinel.
        let mut listing = Listing::new(&[crate::services::ALL]);
        if let Some(id) = deep_link {
            listing.select_in(&store.reviews, id);
        }
        Self {
            store,
            listing,
            expanded_section: None,
            collapsed_limit,
        }
    }

    pub fn sections(&self) -> Vec<ReviewSection> {
        ReviewCategory::ALL
            .into_iter()
            .map(|category| {
                let all = self.store.reviews.filter(|r| r.category == category);
                let expanded = self.expanded_section == Some(category);
                let total = all.len();
                let reviews = if expanded {
                    all
                } else {
                    all.into_iter().take(self.collapsed_limit).collect()
                };
                ReviewSection {
                    category,
                    reviews,
                    total,
                    expanded,
                }
            })
            .collect()
    }

    /// Expand `category`, collapsing any other; toggles off when already expanded.
    pub fn toggle_section(&mut self, category: ReviewCategory) {
        self.expanded_section = if self.expanded_section == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    pub fn open_review(&mut self, id: &str) -> bool {
        self.listing.select_in(&self.store.reviews, id)
    }

    pub fn back_to_list(&mut self) {
        self.listing.clear_selection();
    }

    pub fn selected_review(&self) -> Option<Review> {
        self.listing.selected(&self.store.reviews)
    }

    pub fn full_content(review: &Review) -> &str {
        review.full_content.as_deref().unwrap_or(NO_FULL_CONTENT)
    }

    pub fn author_name(&self, review: &Review) -> String {
        self.store.username(&review.author)
    }
}
