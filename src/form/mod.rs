//! Field validation and inline error display shared by the feedback form and
//! the add-song dialog.

pub mod feedback;
pub mod field;

use lazy_static::lazy_static;
use regex::Regex;

pub use feedback::{FeedbackField, FeedbackForm};
pub use field::{FieldState, TextField};

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const EMAIL_REQUIRED: &str = "Email address is required";
pub const FEEDBACK_MISSING: &str = "Please provide your feedback";
pub const FEEDBACK_REQUIRED: &str = "Feedback is required";

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
}

/// Permissive `local@domain.tld` shape check, not RFC 5322.
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Border style token of the input paired with an error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderToken {
    #[default]
    Default,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSlot {
    message: String,
    border: BorderToken,
}

impl ErrorSlot {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn border(&self) -> BorderToken {
        self.border
    }

    pub fn is_shown(&self) -> bool {
        !self.message.is_empty()
    }
}

pub fn show_error(slot: &mut ErrorSlot, message: impl Into<String>) {
    slot.message = message.into();
    slot.border = BorderToken::Error;
}

pub fn clear_error(slot: &mut ErrorSlot) {
    slot.message.clear();
    slot.border = BorderToken::Default;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_address() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("first.last+tag@mail.example.org"));
    }

    #[test]
    fn rejects_without_at_or_dot_after_at() {
        for input in ["", "plain", "a.b.com", "a@bcom", "a.b@com", "a@b.", "@b.com", "a@.com"] {
            assert!(!validate_email(input), "{input:?} should be rejected");
        }
    }

    #[test]
    fn rejects_whitespace_and_double_at() {
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@b@c.com"));
        assert!(!validate_email(" a@b.com"));
    }

    #[test]
    fn show_then_clear_error() {
        let mut slot = ErrorSlot::default();
        show_error(&mut slot, INVALID_EMAIL);
        assert_eq!(slot.message(), INVALID_EMAIL);
        assert_eq!(slot.border(), BorderToken::Error);

        clear_error(&mut slot);
        assert!(!slot.is_shown());
        assert_eq!(slot.border(), BorderToken::Default);
    }

    #[test]
    fn show_error_replaces_previous_message() {
        let mut slot = ErrorSlot::default();
        show_error(&mut slot, EMAIL_REQUIRED);
        show_error(&mut slot, INVALID_EMAIL);
        assert_eq!(slot.message(), INVALID_EMAIL);
    }
}
