use tracing::info;

use crate::services::{ContactForm, ContactService};
use crate::state::AppResult;

pub const CONTACT_THANKS: &str = "Thank you for contacting Audio Geeks. Our administration team will get back to you shortly.";

#[derive(Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub submitted: bool,
}

impl ContactState {
    pub fn submit(&mut self) -> AppResult<()> {
        ContactService::validate(&self.form)?;
        info!(subject = %self.form.subject, "contact form submitted");
        self.submitted = true;
        Ok(())
    }

    /// "Send another message": a blank form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_form_stays_unsubmitted() {
        let mut c = ContactState::default();
        assert!(c.submit().is_err());
        assert!(!c.submitted);
    }

    #[test]
    fn submit_then_reset() {
        let mut c = ContactState::default();
        c.form.name = "Jo".into();
        c.form.email = "jo@example.org".into();
        c.form.message = "Hi".into();
        c.submit().unwrap();
        assert!(c.submitted);
        c.reset();
        assert!(!c.submitted);
        assert!(c.form.name.is_empty());
    }
}
