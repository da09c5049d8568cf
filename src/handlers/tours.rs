use crate::app::{App, Screen};
use crate::handlers::{unsupported, Command};
use crate::state::{AppResult, View};
use crate::store::RepoError;

/// Tours: region filter, details panels, lottery applications and the
/// jump to a tour's product page.
pub fn handle_tours_command(cmd: Command, app: &mut App) -> AppResult<()> {
    let Screen::Tours(tours) = &mut app.screen else {
        return Err(unsupported(&cmd, app.ui.view));
    };
    match cmd {
        Command::Filter(region) => tours.set_region(&region)?,
        Command::Details(id) | Command::Open(id) => tours.toggle_details(&id),
        Command::Apply(id) => app.apply_to_tour(&id)?,
        Command::Product(id) => {
            let product = tours.linked_product(&id).ok_or(RepoError::NotFound(id))?;
            app.change_view(View::Marketplace, Some(product));
        }
        other => return Err(unsupported(&other, View::Tours)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Screen};
    use crate::global_prefs::PortalPrefs;
    use crate::handlers::handle_line;
    use crate::state::tours::APPLY_TOAST_TITLE;
    use crate::state::View;

    fn tours_app() -> App {
        let prefs = PortalPrefs {
            loading_delay_ms: 0,
            ..PortalPrefs::default()
        };
        let mut app = App::new(prefs).unwrap();
        handle_line("go tours", &mut app);
        app
    }

    #[test]
    fn apply_shows_toast() {
        let mut app = tours_app();
        handle_line("apply tr2", &mut app);
        assert_eq!(app.notifications.current.as_ref().unwrap().title, APPLY_TOAST_TITLE);
    }

    #[test]
    fn apply_to_running_tour_fails() {
        let mut app = tours_app();
        handle_line("apply tr1", &mut app);
        assert_eq!(app.notifications.current.as_ref().unwrap().title, "Error");
    }

    #[test]
    fn product_link_navigates_to_marketplace() {
        let mut app = tours_app();
        handle_line("product tr1", &mut app);
        assert_eq!(app.ui.view, View::Marketplace);
        let Screen::Marketplace(market) = &app.screen else { panic!("marketplace expected") };
        assert_eq!(market.selected_product().unwrap().id, "p1");
    }

    #[test]
    fn details_toggle_by_command() {
        let mut app = tours_app();
        handle_line("details tr1", &mut app);
        let Screen::Tours(tours) = &app.screen else { panic!("tours expected") };
        assert!(tours.is_expanded("tr1"));
    }
}
