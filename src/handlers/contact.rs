use crate::app::{App, Screen};
use crate::handlers::{unsupported, Command};
use crate::state::contact::CONTACT_THANKS;
use crate::state::{AppError, AppResult, View};

pub fn handle_contact_command(cmd: Command, app: &mut App) -> AppResult<()> {
    let Screen::Contact(contact) = &mut app.screen else {
        return Err(unsupported(&cmd, app.ui.view));
    };
    match cmd {
        Command::Set { field, value } => {
            let form = &mut contact.form;
            match field.as_str() {
                "name" => form.name = value,
                "email" => form.email = value,
                "subject" => form.subject = value,
                "message" => form.message = value,
                other => return Err(AppError::Validation(format!("no field '{}' on the contact form", other))),
            }
        }
        Command::Submit => {
            contact.submit()?;
            app.set_notification("Message Sent", CONTACT_THANKS, None);
        }
        Command::New | Command::Cancel => contact.reset(),
        other => return Err(unsupported(&other, View::Contact)),
    }
    Ok(())
}
