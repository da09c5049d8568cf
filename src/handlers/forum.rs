use tracing::debug;

use crate::app::{App, Screen};
use crate::handlers::{unsupported, Command, PageMove};
use crate::services::listing::{Likes, Paginate};
use crate::state::{AppError, AppResult, View};
use crate::store::RepoError;

/// Forum input: list browsing, the open thread and the creation form.
pub fn handle_forum_command(cmd: Command, app: &mut App) -> AppResult<()> {
    let Screen::Forum(forum) = &mut app.screen else {
        return Err(unsupported(&cmd, app.ui.view));
    };

    if let Some(draft) = forum.creating.as_mut() {
        match cmd {
            Command::Set { field, value } => {
                match field.as_str() {
                    "title" => draft.title = value,
                    "category" => draft.category = value,
                    "content" => draft.content = value,
                    other => return Err(AppError::Validation(format!("no field '{}' on a new thread", other))),
                }
                return Ok(());
            }
            Command::Submit => {
                forum.submit_new_thread()?;
                return Ok(());
            }
            Command::Cancel | Command::Back => {
                forum.cancel_creating();
                return Ok(());
            }
            _ => {}
        }
    }

    match cmd {
        Command::Open(id) => {
            if !forum.open_thread(&id) {
                return Err(RepoError::NotFound(id).into());
            }
        }
        Command::Back => forum.back_to_list(),
        Command::Filter(name) => forum.set_filter(&name)?,
        Command::Page(step) => match step {
            PageMove::Next => {
                forum.next_page();
            }
            PageMove::Prev => {
                forum.prev_page();
            }
            PageMove::To(n) => forum.go_to_page(n),
        },
        Command::New => forum.start_creating(),
        Command::Type(text) if forum.current_thread().is_some() => forum.reply.write(&text),
        Command::Send => {
            if forum.post_reply()?.is_none() {
                debug!("nothing to post");
            }
        }
        Command::Like(post_id) => {
            let liked = forum.toggle_like(&post_id);
            debug!(post = %post_id, liked, "like toggled");
        }
        Command::Quote(post_id) => {
            if !forum.quote_post(&post_id) {
                return Err(RepoError::NotFound(post_id).into());
            }
        }
        other => return Err(unsupported(&other, View::Forum)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Screen};
    use crate::global_prefs::PortalPrefs;
    use crate::handlers::handle_line;
    use crate::store::Repository;

    fn forum_app() -> App {
        let prefs = PortalPrefs {
            loading_delay_ms: 0,
            ..PortalPrefs::default()
        };
        let mut app = App::new(prefs).unwrap();
        handle_line("go forum t1", &mut app);
        app
    }

    #[test]
    fn reply_through_commands() {
        let mut app = forum_app();
        let before = app.store.threads.get("t1").unwrap();
        handle_line("quote p1", &mut app);
        handle_line("send", &mut app);
        let after = app.store.threads.get("t1").unwrap();
        assert_eq!(after.replies, before.replies + 1);
        assert!(after.posts.last().unwrap().content.starts_with("> @"));
        assert!(app.notifications.current.is_none());
    }

    #[test]
    fn typed_reply_follows_the_quote() {
        let mut app = forum_app();
        handle_line("quote p1", &mut app);
        handle_line("type I agree", &mut app);
        handle_line("send", &mut app);
        let content = app.store.threads.get("t1").unwrap().posts.last().unwrap().content.clone();
        assert!(content.starts_with("> @"));
        assert!(content.ends_with("\n\nI agree"));
    }

    #[test]
    fn create_thread_through_form() {
        let mut app = forum_app();
        handle_line("back", &mut app);
        handle_line("new", &mut app);
        handle_line("set title Burn-in myths", &mut app);
        handle_line("set category IEMs", &mut app);
        handle_line("submit", &mut app);
        assert_eq!(app.notifications.current.as_ref().unwrap().title, "Error");
        handle_line("set content Does it matter?", &mut app);
        handle_line("submit", &mut app);
        let Screen::Forum(forum) = &app.screen else { panic!("forum expected") };
        let thread = forum.current_thread().unwrap();
        assert_eq!(thread.title, "Burn-in myths");
        assert_eq!(thread.author, "u1");
    }

    #[test]
    fn unknown_filter_reports_error() {
        let mut app = forum_app();
        handle_line("filter Turntables", &mut app);
        assert_eq!(app.notifications.current.as_ref().unwrap().title, "Error");
    }
}
