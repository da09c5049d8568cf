use tracing::info;

use crate::model::{Post, Thread, NO_PUBLIC_POSTS};
use crate::services::listing::{Draft, LikeSet, Likes, Listing, Pager, Paginate, Quoting, ALL, ROOMS};
use crate::services::ForumService;
use crate::state::{AppError, AppResult};
use crate::store::{FixtureStore, Repository};

pub const FORUM_FILTERS: &[&str] = &[ALL, ROOMS, "Headphones", "Amplifiers", "IEMs", "Source Gear"];
pub const NO_THREADS: &str = "No threads found in this category.";

/// Fields of the "new discussion" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThreadDraft {
    pub title: String,
    pub category: String,
    pub content: String,
}

impl Default for NewThreadDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: crate::services::forum::THREAD_CATEGORIES[0].to_string(),
            content: String::new(),
        }
    }
}

/// State management for forum functionality
pub struct ForumState {
    store: FixtureStore,
    pub listing: Listing,
    pager: Pager,
    likes: LikeSet,
    pub reply: Draft,
    /// `Some` while the creation form is open.
    pub creating: Option<NewThreadDraft>,
}

impl ForumState {
    pub fn new(store: FixtureStore, page_size: usize, deep_link: Option<&str>) -> Self {
        let mut listing = Listing::new(FORUM_FILTERS);
        if let Some(id) = deep_link {
            listing.select_in(&store.threads, id);
        }
        Self {
            store,
            listing,
            pager: Pager::new(page_size),
            likes: LikeSet::default(),
            reply: Draft::default(),
            creating: None,
        }
    }

    /// Threads passing the active filter, in store order.
    pub fn threads(&self) -> Vec<Thread> {
        let filter = &self.listing.filter;
        self.store.threads.filter(|t| filter.accepts(t))
    }

    /// The current page of `threads()`.
    pub fn page_threads(&self) -> Vec<Thread> {
        let all = self.threads();
        self.pager.slice(&all).to_vec()
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.threads().is_empty().then_some(NO_THREADS)
    }

    /// Switch category; always lands on page 1.
    pub fn set_filter(&mut self, name: &str) -> AppResult<()> {
        self.listing.filter.set(name)?;
        self.pager.reset();
        Ok(())
    }

    pub fn go_to_page(&mut self, page: usize) {
        let total = self.total_items();
        self.pager.go_to(page, total);
    }

    /// A miss keeps the current thread and its reply draft.
    pub fn open_thread(&mut self, id: &str) -> bool {
        let found = self.listing.select_in(&self.store.threads, id);
        if found {
            self.reply = Draft::default();
        }
        found
    }

    pub fn back_to_list(&mut self) {
        self.listing.clear_selection();
        self.reply = Draft::default();
    }

    pub fn current_thread(&self) -> Option<Thread> {
        self.listing.selected(&self.store.threads)
    }

    /// Placeholder for an open thread without posts.
    pub fn posts_placeholder(&self) -> Option<&'static str> {
        self.current_thread()
            .filter(|t| t.posts.is_empty())
            .map(|_| NO_PUBLIC_POSTS)
    }

    /// Quote a post of the open thread into the reply box.
    pub fn quote_post(&mut self, post_id: &str) -> bool {
        let Some(post) = self
            .current_thread()
            .and_then(|t| t.posts.into_iter().find(|p| p.id == post_id))
        else {
            return false;
        };
        let author = self.store.username(&post.author);
        self.quote(&author, &post.content);
        true
    }

    /// Post the reply box to the open thread. Blank drafts are ignored.
    pub fn post_reply(&mut self) -> AppResult<Option<Post>> {
        if self.reply.is_blank() {
            return Ok(None);
        }
        let Some(thread_id) = self.listing.selected_id().map(str::to_string) else {
            return Ok(None);
        };
        let post = ForumService::reply(self.store.current_user_id(), self.reply.take());
        let appended = post.clone();
        let thread = self
            .store
            .threads
            .modify(&thread_id, move |t| ForumService::append_reply(t, appended))?;
        info!(thread = %thread.id, replies = thread.replies, "reply posted");
        Ok(Some(post))
    }

    pub fn start_creating(&mut self) {
        self.creating = Some(NewThreadDraft::default());
    }

    pub fn cancel_creating(&mut self) {
        self.creating = None;
    }

    /// Publish the creation form and open the new thread.
    pub fn submit_new_thread(&mut self) -> AppResult<Thread> {
        let draft = self
            .creating
            .as_ref()
            .ok_or_else(|| AppError::Validation("No thread is being created.".to_string()))?;
        let thread = ForumService::new_thread(
            self.store.current_user_id(),
            &draft.title,
            &draft.category,
            draft.content.clone(),
        )?;
        let thread = self.store.threads.upsert(thread);
        info!(thread = %thread.id, category = %thread.category, "thread created");
        self.creating = None;
        self.listing.select_id(thread.id.clone());
        Ok(thread)
    }
}

impl Paginate for ForumState {
    fn pager(&self) -> &Pager {
        &self.pager
    }

    fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    fn total_items(&self) -> usize {
        self.threads().len()
    }
}

impl Likes for ForumState {
    fn likes(&self) -> &LikeSet {
        &self.likes
    }

    fn likes_mut(&mut self) -> &mut LikeSet {
        &mut self.likes
    }
}

impl Quoting for ForumState {
    fn draft_mut(&mut self) -> &mut Draft {
        &mut self.reply
    }
}
