pub mod chat;
pub mod contact;
pub mod dashboard;
pub mod feed;
pub mod forum;
pub mod gears;
pub mod marketplace;
pub mod notification;
pub mod profile;
pub mod reviews;
pub mod search;
pub mod tours;
pub mod ui;

pub use chat::ChatState;
pub use contact::ContactState;
pub use dashboard::DashboardState;
pub use feed::FeedState;
pub use forum::{ForumState, NewThreadDraft};
pub use gears::GearsState;
pub use marketplace::{MarketMode, MarketplaceState};
pub use notification::{NotificationState, Toast};
pub use profile::{ProfileCard, ProfileOverlay, ProfileState};
pub use reviews::{ReviewSection, ReviewsState};
pub use search::SearchState;
pub use tours::ToursState;
pub use ui::{UiState, View};

use crate::store::RepoError;

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Repo(#[from] RepoError),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
    #[error("Fixture error: {0}")]
    Fixture(String),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
