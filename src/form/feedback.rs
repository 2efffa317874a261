use tracing::debug;

use super::{
    EMAIL_REQUIRED, FEEDBACK_MISSING, FEEDBACK_REQUIRED, INVALID_EMAIL, TextField, clear_error,
    show_error, validate_email,
};

pub const CONFIRMATION: &str = "Thank you for your feedback! Your message has been received.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackField {
    Email,
    Feedback,
}

impl FeedbackField {
    pub fn next(self) -> Option<Self> {
        match self {
            FeedbackField::Email => Some(FeedbackField::Feedback),
            FeedbackField::Feedback => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            FeedbackField::Email => None,
            FeedbackField::Feedback => Some(FeedbackField::Email),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

/// Email + free-text feedback. Nothing submitted leaves the process.
#[derive(Debug, Clone)]
pub struct FeedbackForm {
    pub email: TextField,
    pub feedback: TextField,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self {
            email: TextField::new(),
            feedback: TextField::multiline(),
        }
    }
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_mut(&mut self, field: FeedbackField) -> &mut TextField {
        match field {
            FeedbackField::Email => &mut self.email,
            FeedbackField::Feedback => &mut self.feedback,
        }
    }

    /// Focus left `field`. An empty email is not an error at this stage.
    pub fn blur(&mut self, field: FeedbackField) {
        match field {
            FeedbackField::Email => {
                self.email.touch();
                let email = self.email.trimmed();
                if !email.is_empty() && !validate_email(email) {
                    show_error(&mut self.email.error, INVALID_EMAIL);
                } else {
                    clear_error(&mut self.email.error);
                }
            }
            FeedbackField::Feedback => {
                self.feedback.touch();
                if self.feedback.trimmed().is_empty() {
                    show_error(&mut self.feedback.error, FEEDBACK_MISSING);
                } else {
                    clear_error(&mut self.feedback.error);
                }
            }
        }
    }

    /// Called after every edit of `field`. Only a shown email error is
    /// re-checked live.
    pub fn input(&mut self, field: FeedbackField) {
        if field == FeedbackField::Email
            && self.email.error.is_shown()
            && validate_email(self.email.trimmed())
        {
            clear_error(&mut self.email.error);
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        clear_error(&mut self.email.error);
        clear_error(&mut self.feedback.error);
        self.email.touch();
        self.feedback.touch();

        let mut valid = true;

        let email = self.email.trimmed();
        if email.is_empty() {
            show_error(&mut self.email.error, EMAIL_REQUIRED);
            valid = false;
        } else if !validate_email(email) {
            show_error(&mut self.email.error, INVALID_EMAIL);
            valid = false;
        }

        if self.feedback.trimmed().is_empty() {
            show_error(&mut self.feedback.error, FEEDBACK_REQUIRED);
            valid = false;
        }

        if !valid {
            return SubmitOutcome::Rejected;
        }

        debug!(
            email_len = self.email.trimmed().len(),
            feedback_len = self.feedback.trimmed().len(),
            "Feedback accepted"
        );
        self.reset();
        SubmitOutcome::Accepted
    }

    pub fn reset(&mut self) {
        self.email.reset();
        self.feedback.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldState;

    fn form(email: &str, feedback: &str) -> FeedbackForm {
        let mut form = FeedbackForm::new();
        form.email.set_value(email);
        form.feedback.set_value(feedback);
        form
    }

    #[test]
    fn blur_on_empty_email_is_not_an_error() {
        let mut form = form("   ", "");
        form.blur(FeedbackField::Email);
        assert!(!form.email.error.is_shown());
        assert_eq!(form.email.state(), FieldState::TouchedValid);
    }

    #[test]
    fn blur_on_bad_email_shows_error() {
        let mut form = form("nope", "");
        form.blur(FeedbackField::Email);
        assert_eq!(form.email.error.message(), INVALID_EMAIL);
        assert_eq!(form.email.state(), FieldState::TouchedInvalid);
    }

    #[test]
    fn blur_on_empty_feedback_shows_error() {
        let mut form = form("", "  \n ");
        form.blur(FeedbackField::Feedback);
        assert_eq!(form.feedback.error.message(), FEEDBACK_MISSING);

        form.feedback.set_value("great site");
        form.blur(FeedbackField::Feedback);
        assert!(!form.feedback.error.is_shown());
    }

    #[test]
    fn input_clears_email_error_once_valid() {
        let mut form = form("a@b", "");
        form.blur(FeedbackField::Email);
        assert!(form.email.error.is_shown());

        form.email.insert_str(".co");
        form.input(FeedbackField::Email);
        assert!(!form.email.error.is_shown());
    }

    #[test]
    fn input_keeps_email_error_while_invalid() {
        let mut form = form("a", "");
        form.blur(FeedbackField::Email);
        form.email.insert('@');
        form.input(FeedbackField::Email);
        assert_eq!(form.email.error.message(), INVALID_EMAIL);
    }

    #[test]
    fn input_does_not_revalidate_feedback() {
        let mut form = form("", "");
        form.blur(FeedbackField::Feedback);
        form.feedback.insert('x');
        form.input(FeedbackField::Feedback);
        assert_eq!(form.feedback.error.message(), FEEDBACK_MISSING);
    }

    #[test]
    fn submit_with_empty_email_shows_only_email_required() {
        let mut form = form("", "Love the playlist");
        assert_eq!(form.submit(), SubmitOutcome::Rejected);

        assert_eq!(form.email.error.message(), EMAIL_REQUIRED);
        assert!(!form.feedback.error.is_shown());
        assert_eq!(form.feedback.value(), "Love the playlist");
    }

    #[test]
    fn submit_reports_both_errors() {
        let mut form = form("bad@", "   ");
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(form.email.error.message(), INVALID_EMAIL);
        assert_eq!(form.feedback.error.message(), FEEDBACK_REQUIRED);
    }

    #[test]
    fn accepted_submit_resets_everything() {
        let mut form = form(" me@example.com ", "Nice");
        form.blur(FeedbackField::Feedback);
        assert_eq!(form.submit(), SubmitOutcome::Accepted);

        assert_eq!(form.email.value(), "");
        assert_eq!(form.feedback.value(), "");
        assert_eq!(form.email.state(), FieldState::Untouched);
        assert_eq!(form.feedback.state(), FieldState::Untouched);
    }
}
