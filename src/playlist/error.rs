use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("No song at position {index} (playlist has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Playlist storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Playlist encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}
