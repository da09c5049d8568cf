use once_cell::sync::Lazy;
use regex::Regex;

use crate::state::{AppError, AppResult};

pub const SUBJECTS: &[&str] = &[
    "General Inquiry",
    "Account Issue",
    "Report a User/Post",
    "Marketplace Dispute",
    "Advertising",
];

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: SUBJECTS[0].to_string(),
            message: String::new(),
        }
    }
}

pub struct ContactService;

impl ContactService {
    pub fn validate(form: &ContactForm) -> AppResult<()> {
        if form.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        if !EMAIL_RE.is_match(form.email.trim()) {
            return Err(AppError::Validation("A valid email is required".to_string()));
        }
        if !SUBJECTS.contains(&form.subject.as_str()) {
            return Err(AppError::Validation(format!("Unknown subject '{}'", form.subject)));
        }
        if form.message.trim().is_empty() {
            return Err(AppError::Validation("Message is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ezra".into(),
            email: "ezra@example.com".into(),
            subject: "Advertising".into(),
            message: "Banner rates?".into(),
        }
    }

    #[test]
    fn filled_form_passes() {
        assert!(ContactService::validate(&filled()).is_ok());
    }

    #[test]
    fn each_required_field_is_checked() {
        let mut f = filled();
        f.name = " ".into();
        assert!(ContactService::validate(&f).is_err());

        let mut f = filled();
        f.email = "ezra.example.com".into();
        assert!(ContactService::validate(&f).is_err());

        let mut f = filled();
        f.subject = "Spam".into();
        assert!(ContactService::validate(&f).is_err());

        let mut f = filled();
        f.message.clear();
        assert!(ContactService::validate(&f).is_err());
    }
}
