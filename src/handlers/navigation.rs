use crate::app::App;
use crate::handlers::{unsupported, Command, HELP};
use crate::state::{AppResult, View};
use crate::store::{RepoError, Repository};

/// Commands that work on every screen, loading or not.
pub fn handle_navigation(cmd: Command, app: &mut App) -> AppResult<()> {
    match cmd {
        Command::Go { view, param } => app.change_view(view, param),
        Command::Search(query) => app.search(&query),
        Command::Profile(None) => app.show_profile(None),
        Command::Profile(Some(id)) => {
            let user = app.store.users.get(&id).ok_or(RepoError::NotFound(id))?;
            app.show_profile(Some(user));
        }
        Command::Close => app.close_profile(),
        Command::Bell => app.feed.toggle(),
        Command::MarkRead => {
            app.feed.mark_all_read()?;
        }
        Command::Help => app.set_notification("Help", HELP, None),
        Command::Quit => app.ui.quit(),
        other => return Err(unsupported(&other, app.screen.view())),
    }
    Ok(())
}

/// Dashboard and search results only link out to other screens.
pub fn handle_digest_command(cmd: Command, app: &mut App) -> AppResult<()> {
    match cmd {
        Command::Open(id) => open_anything(&id, app),
        other => Err(unsupported(&other, app.screen.view())),
    }
}

/// Follow a link by id: users open the profile overlay, everything else
/// navigates to the screen that owns the entity.
fn open_anything(id: &str, app: &mut App) -> AppResult<()> {
    let store = &app.store;
    if let Some(user) = store.users.get(id) {
        app.show_profile(Some(user));
        return Ok(());
    }
    let view = if store.threads.get(id).is_some() {
        View::Forum
    } else if store.products.get(id).is_some() {
        View::Gears
    } else if store.preowned.get(id).is_some() {
        View::Marketplace
    } else if store.reviews.get(id).is_some() {
        View::Reviews
    } else if store.conversations.get(id).is_some() {
        View::Chat
    } else if store.tours.get(id).is_some() {
        View::Tours
    } else {
        return Err(RepoError::NotFound(id.to_string()).into());
    };
    app.change_view(view, Some(id.to_string()));
    Ok(())
}
