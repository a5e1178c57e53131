use serde::{Deserialize, Serialize};

use crate::library::models::Song;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Favorite {
    pub id: String,
    pub song_id: String,
    pub liked_at: i64,
}

/// A favorite resolved to its song, for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteSong {
    pub song: Song,
    pub liked_at: i64,
}
