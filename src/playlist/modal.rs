use tracing::{info, warn};

use super::{PlaylistStore, SongEntry, validate_iframe};
use crate::form::{TextField, clear_error, show_error};

pub const EMBED_REQUIRED: &str = "Spotify embed code is required";
pub const EMBED_INVALID: &str = "Please enter a valid Spotify iframe embed code";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_INCORRECT: &str = "Incorrect password";
pub const SAVE_FAILED: &str = "Could not save the song, try again";
pub const SONG_ADDED: &str = "✨ Song added successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalField {
    #[default]
    Embed,
    Password,
}

impl ModalField {
    pub fn toggled(self) -> Self {
        match self {
            ModalField::Embed => ModalField::Password,
            ModalField::Password => ModalField::Embed,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ModalSubmit {
    /// The modal was closed; nothing to do.
    Ignored,
    /// Validation or storage failed; errors are shown in the modal.
    Rejected,
    /// The song was stored and the modal closed. Carries the new list.
    Added(Vec<SongEntry>),
}

/// Add-song dialog. Insertion is gated by the embed shape and a shared
/// secret, which is friction only: it is compared in plain text.
pub struct PlaylistModal {
    state: ModalState,
    secret: String,
    pub focus: ModalField,
    pub embed: TextField,
    pub password: TextField,
}

impl PlaylistModal {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            state: ModalState::Closed,
            secret: secret.into(),
            focus: ModalField::Embed,
            embed: TextField::new(),
            password: TextField::masked(),
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn open(&mut self) {
        self.state = ModalState::Open;
        self.focus = ModalField::Embed;
    }

    /// Hides the dialog and resets both fields and their errors.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        self.focus = ModalField::Embed;
        self.embed.reset();
        self.password.reset();
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            ModalField::Embed => &mut self.embed,
            ModalField::Password => &mut self.password,
        }
    }

    pub fn submit(&mut self, store: &PlaylistStore) -> ModalSubmit {
        if !self.is_open() {
            return ModalSubmit::Ignored;
        }

        clear_error(&mut self.embed.error);
        clear_error(&mut self.password.error);

        let mut valid = true;

        let embed = self.embed.trimmed().to_string();
        if embed.is_empty() {
            show_error(&mut self.embed.error, EMBED_REQUIRED);
            valid = false;
        } else if !validate_iframe(&embed) {
            show_error(&mut self.embed.error, EMBED_INVALID);
            valid = false;
        }

        let password = self.password.trimmed();
        if password.is_empty() {
            show_error(&mut self.password.error, PASSWORD_REQUIRED);
            valid = false;
        } else if password != self.secret {
            show_error(&mut self.password.error, PASSWORD_INCORRECT);
            valid = false;
        }

        if !valid {
            info!("Rejected add-song submission");
            return ModalSubmit::Rejected;
        }

        match store.add(&embed) {
            Ok(songs) => {
                self.close();
                ModalSubmit::Added(songs)
            }
            Err(e) => {
                warn!("Failed to add song: {}", e);
                show_error(&mut self.embed.error, SAVE_FAILED);
                ModalSubmit::Rejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore, StorageError};

    const SECRET: &str = "open-sesame";
    const EMBED: &str = r#"<iframe src="https://open.spotify.com/embed/track/123"></iframe>"#;

    fn setup() -> (PlaylistModal, PlaylistStore) {
        let store = PlaylistStore::new(Arc::new(MemoryStore::new()));
        let mut modal = PlaylistModal::new(SECRET);
        modal.open();
        (modal, store)
    }

    #[test]
    fn correct_secret_adds_and_closes() {
        let (mut modal, store) = setup();
        modal.embed.set_value(EMBED);
        modal.password.set_value(SECRET);

        let outcome = modal.submit(&store);

        let songs = store.load();
        assert_eq!(outcome, ModalSubmit::Added(songs.clone()));
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].iframe, EMBED);
        assert!(!modal.is_open());
        assert_eq!(modal.embed.value(), "");
        assert_eq!(modal.password.value(), "");
    }

    #[test]
    fn wrong_secret_leaves_store_unchanged() {
        let (mut modal, store) = setup();
        modal.embed.set_value(EMBED);
        modal.password.set_value("guess");

        assert_eq!(modal.submit(&store), ModalSubmit::Rejected);
        assert!(store.load().is_empty());
        assert!(modal.is_open());
        assert_eq!(modal.password.error.message(), PASSWORD_INCORRECT);
        assert!(!modal.embed.error.is_shown());
    }

    #[test]
    fn both_errors_show_together() {
        let (mut modal, store) = setup();
        modal.embed.set_value(r#"<iframe src="https://evil.example.com"></iframe>"#);

        assert_eq!(modal.submit(&store), ModalSubmit::Rejected);
        assert_eq!(modal.embed.error.message(), EMBED_INVALID);
        assert_eq!(modal.password.error.message(), PASSWORD_REQUIRED);
    }

    #[test]
    fn empty_embed_is_required() {
        let (mut modal, store) = setup();
        modal.password.set_value(SECRET);
        assert_eq!(modal.submit(&store), ModalSubmit::Rejected);
        assert_eq!(modal.embed.error.message(), EMBED_REQUIRED);
        assert!(!modal.password.error.is_shown());
    }

    #[test]
    fn errors_clear_on_next_valid_submit() {
        let (mut modal, store) = setup();
        modal.embed.set_value(EMBED);
        modal.password.set_value("nope");
        modal.submit(&store);
        assert!(modal.password.error.is_shown());

        modal.password.set_value(SECRET);
        assert!(matches!(modal.submit(&store), ModalSubmit::Added(_)));
        assert!(!modal.password.error.is_shown());
    }

    #[test]
    fn submit_while_closed_is_ignored() {
        let store = PlaylistStore::new(Arc::new(MemoryStore::new()));
        let mut modal = PlaylistModal::new(SECRET);
        modal.embed.set_value(EMBED);
        modal.password.set_value(SECRET);
        assert_eq!(modal.submit(&store), ModalSubmit::Ignored);
        assert!(store.load().is_empty());
    }

    #[test]
    fn close_resets_fields_and_errors() {
        let (mut modal, store) = setup();
        modal.embed.set_value("junk");
        modal.focus = ModalField::Password;
        modal.submit(&store);

        modal.close();
        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(modal.focus, ModalField::Embed);
        assert_eq!(modal.embed.value(), "");
        assert!(!modal.embed.error.is_shown());
        assert!(!modal.password.error.is_shown());
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("read-only")))
        }
    }

    #[test]
    fn storage_failure_keeps_modal_open() {
        let store = PlaylistStore::new(Arc::new(ReadOnlyStore));
        let mut modal = PlaylistModal::new(SECRET);
        modal.open();
        modal.embed.set_value(EMBED);
        modal.password.set_value(SECRET);

        assert_eq!(modal.submit(&store), ModalSubmit::Rejected);
        assert!(modal.is_open());
        assert_eq!(modal.embed.error.message(), SAVE_FAILED);
    }
}
