//! User-editable list of Spotify embeds persisted under [`PLAYLIST_KEY`].

pub mod embed;
pub mod error;
pub mod modal;
pub mod store;
pub mod view;

pub use embed::{EmbedKind, SpotifyEmbed, validate_iframe};
pub use error::PlaylistError;
pub use modal::{ModalField, ModalState, ModalSubmit, PlaylistModal};
pub use store::{PlaylistStore, SongEntry};
pub use view::{PlaylistRender, PlaylistView, SongItem, render};

pub const PLAYLIST_KEY: &str = "playlist-songs";
