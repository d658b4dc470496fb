//! Contact form validation and the submission integration point.
//!
//! There is no backend. An accepted message is handed to a [`MessageSink`];
//! the default [`LogSink`] only records it. Plugging a real delivery path in
//! means implementing the trait, nothing else changes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PortfolioError, PortfolioResult, ValidationError};

/// Shown after an accepted submission.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// Loose `local@domain.tld` check. Accepts many technically invalid
/// addresses; only whitespace and extra `@` are ruled out.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Field values read from the form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check the form. Emptiness is tested before the email pattern, so a
    /// form with an empty field never reports `InvalidEmail`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ValidationError::MissingField);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// Equivalent of a form reset.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Destination for accepted contact messages.
pub trait MessageSink {
    fn deliver(&self, form: &ContactForm) -> PortfolioResult<()>;
}

/// Sink that records the message in the log and reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl MessageSink for LogSink {
    fn deliver(&self, form: &ContactForm) -> PortfolioResult<()> {
        tracing::info!(
            name = %form.name,
            email = %form.email,
            chars = form.message.chars().count(),
            "Contact message accepted (no backend configured)"
        );
        Ok(())
    }
}

/// Validate and deliver. On success the caller should clear the form.
pub fn submit<S: MessageSink + ?Sized>(form: &ContactForm, sink: &S) -> PortfolioResult<()> {
    if let Err(e) = form.validate() {
        tracing::debug!(reason = ?e, "Contact form rejected");
        return Err(PortfolioError::Validation(e));
    }
    sink.deliver(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingSink(Cell<usize>);

    impl MessageSink for CountingSink {
        fn deliver(&self, _form: &ContactForm) -> PortfolioResult<()> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("weird!#$@x.y"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email(" a@b.c"));
    }

    #[test]
    fn test_missing_field_checked_first() {
        let form = ContactForm::new("A", "", "hi");
        assert_eq!(form.validate(), Err(ValidationError::MissingField));

        let form = ContactForm::new("", "not-an-email", "hi");
        assert_eq!(form.validate(), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_invalid_email_reported() {
        let form = ContactForm::new("A", "not-an-email", "hi");
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_whitespace_only_counts_as_filled() {
        let form = ContactForm::new(" ", "a@b.co", " ");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_submit_skips_sink_on_rejection() {
        let sink = CountingSink(Cell::new(0));
        let result = submit(&ContactForm::new("A", "a@b", "hi"), &sink);
        assert!(matches!(
            result,
            Err(PortfolioError::Validation(ValidationError::InvalidEmail))
        ));
        assert_eq!(sink.0.get(), 0);

        submit(&ContactForm::new("A", "a@b.co", "hi"), &sink).unwrap();
        assert_eq!(sink.0.get(), 1);
    }

    #[test]
    fn test_clear() {
        let mut form = ContactForm::new("A", "a@b.co", "hi");
        form.clear();
        assert!(form.is_blank());
    }
}
