use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{PLAYLIST_KEY, PlaylistError};
use crate::storage::SharedStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongEntry {
    pub iframe: String,
    /// Creation time, milliseconds since the Unix epoch.
    #[serde(default)]
    pub id: u64,
}

/// Ordered list of embeds persisted as one JSON array. Every mutation
/// rewrites the whole list.
pub struct PlaylistStore {
    store: SharedStore,
}

impl PlaylistStore {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Missing, unreadable or corrupt data all load as an empty list. Inside
    /// a well-formed array, entries that do not decode are skipped.
    pub fn load(&self) -> Vec<SongEntry> {
        let raw = match self.store.get(PLAYLIST_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read playlist: {}", e);
                return Vec::new();
            }
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                warn!("Discarding corrupt playlist data: {}", e);
                return Vec::new();
            }
        };

        values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                serde_json::from_value(value)
                    .map_err(|e| warn!("Skipping playlist entry {}: {}", index, e))
                    .ok()
            })
            .collect()
    }

    pub fn save(&self, songs: &[SongEntry]) -> Result<(), PlaylistError> {
        let raw = serde_json::to_string(songs)?;
        self.store.set(PLAYLIST_KEY, &raw)?;
        Ok(())
    }

    pub fn add(&self, iframe: &str) -> Result<Vec<SongEntry>, PlaylistError> {
        let mut songs = self.load();
        songs.push(SongEntry {
            iframe: iframe.trim().to_string(),
            id: now_millis(),
        });
        self.save(&songs)?;
        info!("Added song, playlist now has {} entries", songs.len());
        Ok(songs)
    }

    pub fn remove(&self, index: usize) -> Result<Vec<SongEntry>, PlaylistError> {
        let mut songs = self.load();
        if index >= songs.len() {
            return Err(PlaylistError::IndexOutOfRange {
                index,
                len: songs.len(),
            });
        }
        songs.remove(index);
        self.save(&songs)?;
        info!("Removed song {}, playlist now has {} entries", index, songs.len());
        Ok(songs)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::{FileStore, KeyValueStore, MemoryStore};

    fn iframe(id: &str) -> String {
        format!(r#"<iframe src="https://open.spotify.com/embed/track/{id}"></iframe>"#)
    }

    fn store_with(songs: &[&str]) -> (PlaylistStore, MemoryStore) {
        let memory = MemoryStore::new();
        let store = PlaylistStore::new(Arc::new(memory.clone()));
        for id in songs {
            store.add(&iframe(id)).unwrap();
        }
        (store, memory)
    }

    #[test]
    fn empty_when_absent() {
        let (store, _) = store_with(&[]);
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_data_loads_as_empty() {
        let memory = MemoryStore::new().with_entry(PLAYLIST_KEY, "{not json");
        let store = PlaylistStore::new(Arc::new(memory));
        assert!(store.load().is_empty());
    }

    #[test]
    fn add_appends_and_persists() {
        let (store, memory) = store_with(&["1", "2"]);
        let before = store.load().len();

        let markup = format!("  {}  ", iframe("3"));
        store.add(&markup).unwrap();

        let songs = store.load();
        assert_eq!(songs.len(), before + 1);
        assert_eq!(songs.last().unwrap().iframe, markup.trim());

        let raw = memory.get(PLAYLIST_KEY).unwrap().unwrap();
        assert!(raw.starts_with("[{\"iframe\":"));
    }

    #[test]
    fn ids_are_creation_timestamps() {
        let (store, _) = store_with(&["1"]);
        let id = store.load()[0].id;
        assert!(id > 1_600_000_000_000);
        assert!(id <= now_millis());
    }

    #[test]
    fn remove_preserves_order() {
        let (store, _) = store_with(&["a", "b", "c"]);
        let before = store.load();

        store.remove(1).unwrap();

        let after = store.load();
        assert_eq!(after.len(), before.len() - 1);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[2]);
    }

    #[test]
    fn remove_out_of_range_leaves_list_untouched() {
        let (store, _) = store_with(&["a"]);
        let err = store.remove(3).unwrap_err();
        assert!(matches!(err, PlaylistError::IndexOutOfRange { index: 3, len: 1 }));
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn undecodable_entries_are_skipped() {
        let raw = r#"[{"iframe":"a"},{"iframe":"b","id":"soon"},{"iframe":"c","id":3},7]"#;
        let store = PlaylistStore::new(Arc::new(MemoryStore::new().with_entry(PLAYLIST_KEY, raw)));

        let songs = store.load();
        assert_eq!(
            songs,
            vec![
                SongEntry { iframe: "a".into(), id: 0 },
                SongEntry { iframe: "c".into(), id: 3 },
            ]
        );
    }

    #[test]
    fn failed_add_leaves_list_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("data");
        let file = FileStore::open(parent.join("storage.json")).unwrap();
        let store = PlaylistStore::new(Arc::new(file));
        store.add(&iframe("1")).unwrap();

        std::fs::remove_dir_all(&parent).unwrap();
        std::fs::write(&parent, "").unwrap();

        assert!(store.add(&iframe("2")).is_err());
        assert!(store.add(&iframe("2")).is_err());
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn reads_legacy_layout() {
        let raw = r#"[{"iframe":"<iframe src=\"https://open.spotify.com/embed/track/1\"></iframe>","id":1700000000000}]"#;
        let store = PlaylistStore::new(Arc::new(MemoryStore::new().with_entry(PLAYLIST_KEY, raw)));
        let songs = store.load();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].id, 1_700_000_000_000);
    }
}
