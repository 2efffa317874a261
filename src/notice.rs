#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

/// A confirmation stays until the user dismisses it; a toast is removed by
/// a deferred expiry carrying its id.
#[derive(Debug, Default)]
pub struct Notices {
    confirmation: Option<Notice>,
    toast: Option<Notice>,
    next_id: u64,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_notice(&mut self, text: impl Into<String>) -> Notice {
        self.next_id += 1;
        Notice {
            id: self.next_id,
            text: text.into(),
        }
    }

    pub fn confirm(&mut self, text: impl Into<String>) {
        self.confirmation = Some(self.next_notice(text));
    }

    /// Shows `text` as the current toast, replacing any older one. The caller
    /// schedules [`Notices::expire`] with the returned id.
    pub fn toast(&mut self, text: impl Into<String>) -> u64 {
        let notice = self.next_notice(text);
        let id = notice.id;
        self.toast = Some(notice);
        id
    }

    /// Removes the toast if it is still the one identified by `id`.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.id == id) {
            self.toast = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss_confirmation(&mut self) -> bool {
        self.confirmation.take().is_some()
    }

    pub fn confirmation(&self) -> Option<&Notice> {
        self.confirmation.as_ref()
    }

    pub fn current_toast(&self) -> Option<&Notice> {
        self.toast.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_by_id() {
        let mut notices = Notices::new();
        let id = notices.toast("Song added");
        assert_eq!(notices.current_toast().map(|t| t.text.as_str()), Some("Song added"));

        assert!(notices.expire(id));
        assert!(notices.current_toast().is_none());
        assert!(!notices.expire(id));
    }

    #[test]
    fn stale_expiry_keeps_newer_toast() {
        let mut notices = Notices::new();
        let first = notices.toast("one");
        let second = notices.toast("two");

        assert!(!notices.expire(first));
        assert_eq!(notices.current_toast().map(|t| t.id), Some(second));
    }

    #[test]
    fn confirmation_is_dismissed_explicitly() {
        let mut notices = Notices::new();
        notices.confirm("Thanks!");
        assert!(notices.confirmation().is_some());
        assert!(notices.dismiss_confirmation());
        assert!(!notices.dismiss_confirmation());
    }
}
