use crate::model::{Post, Thread};
use crate::state::{AppError, AppResult};
use crate::time_format::{self, JUST_NOW};

/// Categories a new thread may be filed under.
pub const THREAD_CATEGORIES: &[&str] = &["Headphones", "Amplifiers", "IEMs", "Source Gear"];

/// Forum business rules: building posts and threads.
pub struct ForumService;

impl ForumService {
    pub fn reply(author: &str, content: String) -> Post {
        Post {
            id: time_format::synthetic_id("post"),
            author: author.to_string(),
            content,
            timestamp: JUST_NOW.to_string(),
            images: Vec::new(),
        }
    }

    /// Append a post; the reply counter moves with it.
    pub fn append_reply(thread: &mut Thread, post: Post) {
        thread.posts.push(post);
        thread.replies = thread.replies.saturating_add(1);
        thread.last_activity = JUST_NOW.to_string();
    }

    pub fn validate_new_thread(title: &str, category: &str, content: &str) -> AppResult<()> {
        if title.trim().is_empty() {
            return Err(AppError::Validation("Thread title cannot be empty.".to_string()));
        }
        if content.trim().is_empty() {
            return Err(AppError::Validation("Thread content cannot be empty.".to_string()));
        }
        if !THREAD_CATEGORIES.contains(&category) {
            return Err(AppError::UnknownFilter(category.to_string()));
        }
        Ok(())
    }

    /// A fresh public thread whose opening post is `content`.
    pub fn new_thread(author: &str, title: &str, category: &str, content: String) -> AppResult<Thread> {
        Self::validate_new_thread(title, category, &content)?;
        Ok(Thread {
            id: time_format::synthetic_id("thread"),
            title: title.trim().to_string(),
            author: author.to_string(),
            replies: 0,
            views: 0,
            category: category.to_string(),
            last_activity: JUST_NOW.to_string(),
            tags: Vec::new(),
            is_pinned: false,
            is_private: false,
            is_admin: false,
            posts: vec![Self::reply(author, content)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_counter_saturates() {
        let mut thread = Thread {
            id: "t-max".into(),
            title: "Counted out".into(),
            author: "u2".into(),
            replies: u32::MAX,
            views: 0,
            category: "IEMs".into(),
            last_activity: "1d ago".into(),
            tags: vec![],
            is_pinned: false,
            is_private: false,
            is_admin: false,
            posts: vec![],
        };
        ForumService::append_reply(&mut thread, ForumService::reply("u1", "one more".into()));
        assert_eq!(thread.replies, u32::MAX);
        assert_eq!(thread.posts.len(), 1);
    }

    #[test]
    fn new_thread_rejects_blank_fields() {
        let err = ForumService::new_thread("u1", "  ", "IEMs", "body".into()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let err = ForumService::new_thread("u1", "Title", "IEMs", " \n".into()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn new_thread_rejects_rooms_and_unknown_categories() {
        assert!(ForumService::new_thread("u1", "T", "Rooms", "c".into()).is_err());
        assert!(ForumService::new_thread("u1", "T", "Vinyl", "c".into()).is_err());
    }

    #[test]
    fn new_thread_opens_with_one_post() {
        let t = ForumService::new_thread("u1", " ZMF Bokeh ", "Headphones", "First!".into()).unwrap();
        assert_eq!(t.title, "ZMF Bokeh");
        assert_eq!(t.posts.len(), 1);
        assert_eq!(t.posts[0].author, "u1");
        assert_eq!(t.replies, 0);
    }

    #[test]
    fn append_reply_moves_counter() {
        let mut t = ForumService::new_thread("u1", "T", "IEMs", "c".into()).unwrap();
        ForumService::append_reply(&mut t, ForumService::reply("u2", "+1".into()));
        assert_eq!(t.replies, 1);
        assert_eq!(t.posts.len(), 2);
    }
}
