use tracing::{debug, info};

use crate::model::{ChatMessage, DmConversation, User};
use crate::services::listing::{Draft, LikeSet, Likes, Quoting};
use crate::services::ChatService;
use crate::state::AppResult;
use crate::store::{FixtureStore, RepoError, Repository};

/// State management for direct messages
pub struct ChatState {
    store: FixtureStore,
    pub active_dm_id: Option<String>,
    pub draft: Draft,
    likes: LikeSet,
    pub show_compose: bool,
    clear_unread_on_open: bool,
}

impl ChatState {
    /// Opens on the first conversation, if there is one.
    pub fn new(store: FixtureStore, clear_unread_on_open: bool) -> Self {
        let first = store.conversations.list().into_iter().next().map(|dm| dm.id);
        let mut state = Self {
            store,
            active_dm_id: None,
            draft: Draft::default(),
            likes: LikeSet::default(),
            show_compose: false,
            clear_unread_on_open,
        };
        if let Some(id) = first {
            state.mark_open(&id);
        }
        state
    }

    pub fn conversations(&self) -> Vec<DmConversation> {
        self.store.conversations.list()
    }

    pub fn active_conversation(&self) -> Option<DmConversation> {
        self.active_dm_id
            .as_deref()
            .and_then(|id| self.store.conversations.get(id))
    }

    pub fn counterpart(&self, conversation: &DmConversation) -> Option<User> {
        self.store.users.get(&conversation.user)
    }

    /// Switch conversations. Unknown ids leave the current one active.
    pub fn select_conversation(&mut self, id: &str) -> bool {
        if self.store.conversations.get(id).is_none() {
            debug!(id, "no such conversation");
            return false;
        }
        self.mark_open(id);
        true
    }

    fn mark_open(&mut self, id: &str) {
        self.active_dm_id = Some(id.to_string());
        if self.clear_unread_on_open {
            // The id was just looked up, a miss here only means nothing to clear.
            let _ = self.store.conversations.modify(id, |dm| dm.unread_count = 0);
        }
    }

    /// Send the draft to the active conversation. Blank drafts are ignored.
    pub fn send_message(&mut self) -> AppResult<Option<ChatMessage>> {
        if self.draft.is_blank() {
            return Ok(None);
        }
        let Some(id) = self.active_dm_id.clone() else {
            return Ok(None);
        };
        let message = ChatService::outgoing_message(self.store.current_user_id(), self.draft.take());
        let sent = message.clone();
        self.store
            .conversations
            .modify(&id, move |dm| ChatService::append_outgoing(dm, sent))?;
        info!(conversation = %id, message = %message.id, "message sent");
        Ok(Some(message))
    }

    /// Quote a message of the active conversation into the draft.
    pub fn quote_message(&mut self, message_id: &str) -> bool {
        let Some(message) = self
            .active_conversation()
            .and_then(|dm| dm.messages.into_iter().find(|m| m.id == message_id))
        else {
            return false;
        };
        let author = self.store.username(&message.sender);
        self.quote(&author, &message.content);
        true
    }

    pub fn open_compose(&mut self) {
        self.show_compose = true;
    }

    pub fn close_compose(&mut self) {
        self.show_compose = false;
    }

    /// Everyone the viewer can start a conversation with.
    pub fn compose_candidates(&self) -> Vec<User> {
        let me = self.store.current_user_id();
        self.store.users.filter(|u| u.id != me)
    }

    /// Open the conversation with `user_id`, creating it on first contact.
    pub fn start_conversation(&mut self, user_id: &str) -> AppResult<DmConversation> {
        if user_id == self.store.current_user_id() || self.store.users.get(user_id).is_none() {
            return Err(RepoError::NotFound(user_id.to_string()).into());
        }
        let existing = self
            .store
            .conversations
            .filter(|dm| dm.user == user_id)
            .into_iter()
            .next();
        let conversation = match existing {
            Some(dm) => dm,
            None => {
                let dm = self.store.conversations.upsert(ChatService::new_conversation(user_id));
                info!(conversation = %dm.id, user = user_id, "conversation started");
                dm
            }
        };
        self.show_compose = false;
        self.mark_open(&conversation.id);
        Ok(conversation)
    }
}

impl Likes for ChatState {
    fn likes(&self) -> &LikeSet {
        &self.likes
    }

    fn likes_mut(&mut self) -> &mut LikeSet {
        &mut self.likes
    }
}

impl Quoting for ChatState {
    fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }
}
