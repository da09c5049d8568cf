use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{ChatMessage, DmConversation};
use crate::time_format::{self, JUST_NOW};

static QUOTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)^> @(?P<author>[^\n]+?) wrote: "(?P<quoted>.*?)"\n\n"#)
        .expect("quote pattern is valid")
});

/// A quoted reply found at the start of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedReply<'a> {
    pub author: &'a str,
    pub quoted: &'a str,
    pub body: &'a str,
}

/// Business logic for chat functionality
pub struct ChatService;

impl ChatService {
    /// Blockquote inserted into a compose box when replying to a message.
    pub fn quote_block(author: &str, content: &str) -> String {
        format!("> @{} wrote: \"{}\"\n\n", author, content)
    }

    /// Split a leading quote block off `content`, if there is one.
    pub fn parse_quote(content: &str) -> Option<QuotedReply<'_>> {
        let caps = QUOTE_RE.captures(content)?;
        let whole = caps.get(0)?;
        Some(QuotedReply {
            author: caps.name("author")?.as_str(),
            quoted: caps.name("quoted")?.as_str(),
            body: &content[whole.end()..],
        })
    }

    pub fn outgoing_message(sender: &str, content: String) -> ChatMessage {
        ChatMessage {
            id: time_format::synthetic_id("msg"),
            sender: sender.to_string(),
            content,
            timestamp: time_format::message_time_now(),
            is_me: true,
        }
    }

    /// Append `message` and refresh the preview fields in one step.
    pub fn append_outgoing(conversation: &mut DmConversation, message: ChatMessage) {
        conversation.last_message = format!("You: {}", message.content);
        conversation.timestamp = JUST_NOW.to_string();
        conversation.messages.push(message);
    }

    pub fn new_conversation(counterpart: &str) -> DmConversation {
        DmConversation {
            id: time_format::synthetic_id("dm"),
            user: counterpart.to_string(),
            last_message: String::new(),
            timestamp: JUST_NOW.to_string(),
            unread_count: 0,
            messages: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_block_parses_back() {
        let text = format!("{}Sounds good", ChatService::quote_block("Sandeep Agarwal", "Hey Pulkit!"));
        let q = ChatService::parse_quote(&text).unwrap();
        assert_eq!(q.author, "Sandeep Agarwal");
        assert_eq!(q.quoted, "Hey Pulkit!");
        assert_eq!(q.body, "Sounds good");
    }

    #[test]
    fn multi_line_quote_parses() {
        let text = format!("{}Same here", ChatService::quote_block("TubeMaster", "Line one\nLine two"));
        let q = ChatService::parse_quote(&text).unwrap();
        assert_eq!(q.quoted, "Line one\nLine two");
        assert_eq!(q.body, "Same here");
    }

    #[test]
    fn plain_text_has_no_quote() {
        assert!(ChatService::parse_quote("> not a reply").is_none());
        assert!(ChatService::parse_quote("hello").is_none());
    }

    #[test]
    fn append_updates_preview() {
        let mut dm = ChatService::new_conversation("u5");
        let msg = ChatService::outgoing_message("u1", "Listening now".into());
        ChatService::append_outgoing(&mut dm, msg);
        assert_eq!(dm.last_message, "You: Listening now");
        assert_eq!(dm.timestamp, JUST_NOW);
        assert_eq!(dm.messages.len(), 1);
        assert!(dm.messages[0].is_me);
    }
}
