//! Contact form with client-side validation
//!
//! Mirrors the published site's behavior: all fields required, the e-mail
//! must look like an address, and a successful submit clears the fields and
//! shows a confirmation for a few seconds. Nothing is sent anywhere.

use egui::{RichText, TextEdit, Ui};
use tracing::debug;

use crate::i18n::ContactStrings;
use crate::theme;

const SUCCESS_NOTE_SECS: f64 = 5.0;

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

/// Per-field validation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Validate the three form fields. Pure; rendering maps errors to the
/// translated strings.
pub fn validate(name: &str, email: &str, message: &str) -> ValidationResult {
    let email = email.trim();
    ValidationResult {
        name: name.trim().is_empty().then_some(FieldError::Required),
        email: if email.is_empty() {
            Some(FieldError::Required)
        } else if !is_valid_email(email) {
            Some(FieldError::InvalidEmail)
        } else {
            None
        },
        message: message.trim().is_empty().then_some(FieldError::Required),
    }
}

/// Shape check only: something before the @, a domain with a dot, no
/// whitespace and no second @ anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Contact form state and rendering
#[derive(Debug, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    errors: ValidationResult,
    submitted_at: Option<f64>,
}

impl ContactForm {
    /// Render the form. `now` is the frame time in seconds, used to expire
    /// the success note.
    pub fn show(&mut self, ui: &mut Ui, strings: &ContactStrings, now: f64) {
        ui.label(RichText::new(strings.form_title).heading().color(theme::TEXT_PRIMARY));
        ui.add_space(8.0);

        ui.label(strings.form_name);
        ui.add(
            TextEdit::singleline(&mut self.name)
                .hint_text(strings.form_name_placeholder)
                .desired_width(f32::INFINITY),
        );
        if let Some(error) = self.errors.name {
            ui.label(RichText::new(error_text(error, strings)).color(theme::ERROR).small());
        }
        ui.add_space(6.0);

        ui.label(strings.form_email);
        ui.add(
            TextEdit::singleline(&mut self.email)
                .hint_text(strings.form_email_placeholder)
                .desired_width(f32::INFINITY),
        );
        if let Some(error) = self.errors.email {
            ui.label(RichText::new(error_text(error, strings)).color(theme::ERROR).small());
        }
        ui.add_space(6.0);

        ui.label(strings.form_message);
        ui.add(
            TextEdit::multiline(&mut self.message)
                .hint_text(strings.form_message_placeholder)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        if let Some(error) = self.errors.message {
            ui.label(RichText::new(error_text(error, strings)).color(theme::ERROR).small());
        }
        ui.add_space(10.0);

        if ui
            .add(egui::Button::new(RichText::new(strings.form_submit).color(egui::Color32::WHITE)).fill(theme::ACCENT))
            .clicked()
        {
            self.submit(now);
        }

        if self.success_note_visible(now) {
            ui.add_space(6.0);
            ui.label(RichText::new(strings.form_success).color(theme::SUCCESS));
        }
    }

    /// Validate; on success clear all fields and start the success note
    pub fn submit(&mut self, now: f64) {
        self.errors = validate(&self.name, &self.email, &self.message);
        if self.errors.is_ok() {
            debug!("contact form validated, clearing fields");
            self.name.clear();
            self.email.clear();
            self.message.clear();
            self.submitted_at = Some(now);
        } else {
            self.submitted_at = None;
        }
    }

    pub fn success_note_visible(&self, now: f64) -> bool {
        self.submitted_at
            .is_some_and(|at| now - at < SUCCESS_NOTE_SECS)
    }

    #[cfg(test)]
    fn fill(&mut self, name: &str, email: &str, message: &str) {
        self.name = name.to_string();
        self.email = email.to_string();
        self.message = message.to_string();
    }
}

fn error_text(error: FieldError, strings: &ContactStrings) -> &'static str {
    match error {
        FieldError::Required => strings.form_required,
        FieldError::InvalidEmail => strings.form_email_invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_required() {
        let result = validate("", "  ", "");
        assert_eq!(result.name, Some(FieldError::Required));
        assert_eq!(result.email, Some(FieldError::Required));
        assert_eq!(result.message, Some(FieldError::Required));
        assert!(!result.is_ok());
    }

    #[test]
    fn test_email_shape_check() {
        assert!(is_valid_email("maria@example.com"));
        assert!(is_valid_email("m.gwangwa@gemeinde.de"));
        assert!(is_valid_email("a@b.c.d"));

        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("trailing-dot@example."));
        assert!(!is_valid_email("no-dot@example"));
        assert!(!is_valid_email("dot-first@.com"));
    }

    #[test]
    fn test_invalid_email_is_flagged_distinctly() {
        let result = validate("Maria", "not-an-address", "Hello");
        assert_eq!(result.email, Some(FieldError::InvalidEmail));
        assert!(result.name.is_none());
        assert!(result.message.is_none());
    }

    #[test]
    fn test_submit_clears_fields_on_success() {
        let mut form = ContactForm::default();
        form.fill("Maria", "maria@example.com", "Hello there");

        form.submit(10.0);

        assert!(form.errors.is_ok());
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
        assert!(form.success_note_visible(12.0));
        assert!(!form.success_note_visible(16.0));
    }

    #[test]
    fn test_failed_submit_keeps_fields() {
        let mut form = ContactForm::default();
        form.fill("Maria", "broken", "Hello");

        form.submit(10.0);

        assert_eq!(form.errors.email, Some(FieldError::InvalidEmail));
        assert_eq!(form.name, "Maria");
        assert!(!form.success_note_visible(10.0));
    }
}
