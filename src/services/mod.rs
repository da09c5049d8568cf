pub mod chat;
pub mod contact;
pub mod forum;
pub mod listing;
pub mod search;

pub use chat::{ChatService, QuotedReply};
pub use contact::{ContactForm, ContactService};
pub use forum::ForumService;
pub use listing::{CategoryFilter, Draft, Filterable, LikeSet, Likes, Listing, Pager, Paginate, Quoting, ALL};
pub use search::{SearchOutcome, SearchResults, SearchService, NO_RESULTS, SEARCH_PROMPT};
