use tracing::debug;

use crate::app::{App, Screen};
use crate::handlers::{unsupported, Command};
use crate::services::listing::Likes;
use crate::state::{AppResult, View};
use crate::store::RepoError;

/// Direct messages: switching conversations, composing and sending.
pub fn handle_chat_command(cmd: Command, app: &mut App) -> AppResult<()> {
    let Screen::Chat(chat) = &mut app.screen else {
        return Err(unsupported(&cmd, app.ui.view));
    };
    match cmd {
        Command::Open(id) => {
            if !chat.select_conversation(&id) {
                return Err(RepoError::NotFound(id).into());
            }
        }
        Command::Type(text) => chat.draft.write(&text),
        Command::Send => {
            if chat.send_message()?.is_none() {
                debug!("nothing to send");
            }
        }
        Command::Like(message_id) => {
            let liked = chat.toggle_like(&message_id);
            debug!(message = %message_id, liked, "like toggled");
        }
        Command::Quote(message_id) => {
            if !chat.quote_message(&message_id) {
                return Err(RepoError::NotFound(message_id).into());
            }
        }
        Command::New => chat.open_compose(),
        Command::Cancel | Command::Back => chat.close_compose(),
        Command::Message(user_id) => {
            chat.start_conversation(&user_id)?;
        }
        other => return Err(unsupported(&other, View::Chat)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Screen};
    use crate::global_prefs::PortalPrefs;
    use crate::handlers::handle_line;
    use crate::store::Repository;

    fn chat_app() -> App {
        let prefs = PortalPrefs {
            loading_delay_ms: 0,
            ..PortalPrefs::default()
        };
        let mut app = App::new(prefs).unwrap();
        handle_line("go chat", &mut app);
        app
    }

    #[test]
    fn typed_message_is_sent() {
        let mut app = chat_app();
        handle_line("type See you at the meet", &mut app);
        handle_line("send", &mut app);
        let dm = app.store.conversations.get("dm1").unwrap();
        assert_eq!(dm.last_message, "You: See you at the meet");
        assert!(dm.messages.last().unwrap().is_me);
    }

    #[test]
    fn typed_message_follows_the_quote() {
        let mut app = chat_app();
        handle_line("quote m1", &mut app);
        handle_line("type sure", &mut app);
        handle_line("send", &mut app);
        let dm = app.store.conversations.get("dm1").unwrap();
        let sent = &dm.messages.last().unwrap().content;
        assert!(sent.starts_with("> @"));
        assert!(sent.ends_with("\n\nsure"));
    }

    #[test]
    fn compose_starts_new_conversation() {
        let mut app = chat_app();
        let before = app.store.conversations.len();
        handle_line("new", &mut app);
        handle_line("dm u9", &mut app);
        assert_eq!(app.store.conversations.len(), before + 1);
        let Screen::Chat(chat) = &app.screen else { panic!("chat expected") };
        assert!(!chat.show_compose);
        assert_eq!(chat.active_conversation().unwrap().user, "u9");
    }

    #[test]
    fn dm_to_self_is_rejected() {
        let mut app = chat_app();
        handle_line("dm u1", &mut app);
        assert_eq!(app.notifications.current.as_ref().unwrap().title, "Error");
    }
}
