use tracing::warn;

use super::{PlaylistStore, SongEntry, SpotifyEmbed};

pub const EMPTY_PLAYLIST: &str = "No songs added yet. Press \"a\" to add a song!";
pub const CONFIRM_REMOVE: &str = "Are you sure you want to remove this song?";
pub const UNRECOGNISED_EMBED: &str = "Unrecognised embed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongItem {
    /// Position in the list; the identifier removal is keyed on.
    pub index: usize,
    pub label: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistRender {
    Empty(&'static str),
    Items(Vec<SongItem>),
}

/// Builds the display model from trusted templates. Stored markup only ever
/// contributes a parsed kind and id.
pub fn render(songs: &[SongEntry]) -> PlaylistRender {
    if songs.is_empty() {
        return PlaylistRender::Empty(EMPTY_PLAYLIST);
    }

    PlaylistRender::Items(
        songs
            .iter()
            .enumerate()
            .map(|(index, song)| match SpotifyEmbed::parse(&song.iframe) {
                Some(embed) => SongItem {
                    index,
                    label: embed.label(),
                    link: Some(embed.open_url()),
                },
                None => SongItem {
                    index,
                    label: UNRECOGNISED_EMBED.to_string(),
                    link: None,
                },
            })
            .collect(),
    )
}

/// What the playlist section shows: the last loaded list, the selected row
/// and a removal awaiting confirmation.
#[derive(Debug, Clone, Default)]
pub struct PlaylistView {
    songs: Vec<SongEntry>,
    selected: usize,
    pending_removal: Option<usize>,
}

impl PlaylistView {
    pub fn new(songs: Vec<SongEntry>) -> Self {
        Self {
            songs,
            ..Self::default()
        }
    }

    pub fn songs(&self) -> &[SongEntry] {
        &self.songs
    }

    pub fn render(&self) -> PlaylistRender {
        render(&self.songs)
    }

    /// Replaces the list, keeping the selection in bounds.
    pub fn refresh(&mut self, songs: Vec<SongEntry>) {
        self.songs = songs;
        self.selected = self.selected.min(self.songs.len().saturating_sub(1));
        self.pending_removal = None;
    }

    pub fn selected(&self) -> Option<usize> {
        (!self.songs.is_empty()).then_some(self.selected)
    }

    /// Selects the entry at `index` if it exists.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.songs.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.songs.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn pending_removal(&self) -> Option<usize> {
        self.pending_removal
    }

    pub fn request_removal(&mut self, index: usize) {
        if index < self.songs.len() {
            self.pending_removal = Some(index);
        }
    }

    pub fn cancel_removal(&mut self) {
        self.pending_removal = None;
    }

    /// Removes the entry awaiting confirmation. Returns whether the list
    /// changed.
    pub fn confirm_removal(&mut self, store: &PlaylistStore) -> bool {
        let Some(index) = self.pending_removal.take() else {
            return false;
        };

        match store.remove(index) {
            Ok(songs) => {
                self.refresh(songs);
                true
            }
            Err(e) => {
                warn!("Failed to remove song {}: {}", index, e);
                self.refresh(store.load());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStore;

    fn song(iframe: &str) -> SongEntry {
        SongEntry {
            iframe: iframe.to_string(),
            id: 1,
        }
    }

    fn store_with(n: usize) -> PlaylistStore {
        let store = PlaylistStore::new(Arc::new(MemoryStore::new()));
        for i in 0..n {
            store
                .add(&format!(
                    r#"<iframe src="https://open.spotify.com/embed/track/t{i}"></iframe>"#
                ))
                .unwrap();
        }
        store
    }

    #[test]
    fn empty_list_shows_placeholder() {
        assert_eq!(render(&[]), PlaylistRender::Empty(EMPTY_PLAYLIST));
    }

    #[test]
    fn items_are_indexed_by_position() {
        let songs = vec![
            song(r#"<iframe src="https://open.spotify.com/embed/track/a"></iframe>"#),
            song(r#"<iframe src="https://open.spotify.com/embed/playlist/b"></iframe>"#),
        ];
        let PlaylistRender::Items(items) = render(&songs) else {
            panic!("expected items");
        };
        assert_eq!(items[0].index, 0);
        assert_eq!(items[1].index, 1);
        assert_eq!(items[1].label, "♪ Spotify playlist · b");
        assert_eq!(items[1].link.as_deref(), Some("https://open.spotify.com/playlist/b"));
    }

    #[test]
    fn corrupted_markup_is_never_shown() {
        let songs = vec![song(r#"<script>alert(1)</script>"#)];
        let PlaylistRender::Items(items) = render(&songs) else {
            panic!("expected items");
        };
        assert_eq!(items[0].label, UNRECOGNISED_EMBED);
        assert_eq!(items[0].link, None);
    }

    #[test]
    fn removal_needs_confirmation() {
        let store = store_with(3);
        let mut view = PlaylistView::new(store.load());
        let third = view.songs()[2].clone();

        view.request_removal(1);
        assert_eq!(view.pending_removal(), Some(1));
        view.cancel_removal();
        assert!(!view.confirm_removal(&store));
        assert_eq!(store.load().len(), 3);

        view.request_removal(1);
        assert!(view.confirm_removal(&store));
        assert_eq!(view.songs().len(), 2);
        assert_eq!(view.songs()[1], third);
        assert_eq!(store.load(), view.songs());
    }

    #[test]
    fn out_of_range_request_is_ignored() {
        let store = store_with(1);
        let mut view = PlaylistView::new(store.load());
        view.request_removal(5);
        assert_eq!(view.pending_removal(), None);
    }

    #[test]
    fn stale_index_resyncs_from_store() {
        let store = store_with(2);
        let mut view = PlaylistView::new(store.load());
        view.request_removal(1);

        store.remove(1).unwrap();
        store.remove(0).unwrap();

        assert!(!view.confirm_removal(&store));
        assert!(view.songs().is_empty());
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let store = store_with(2);
        let mut view = PlaylistView::new(store.load());
        view.select_previous();
        assert_eq!(view.selected(), Some(0));
        view.select_next();
        view.select_next();
        assert_eq!(view.selected(), Some(1));

        view.request_removal(1);
        view.confirm_removal(&store);
        assert_eq!(view.selected(), Some(0));
    }

    #[test]
    fn select_by_position_is_bounded() {
        let store = store_with(2);
        let mut view = PlaylistView::new(store.load());
        assert!(view.select(1));
        assert_eq!(view.selected(), Some(1));
        assert!(!view.select(2));
        assert_eq!(view.selected(), Some(1));
    }
}
