use serde::{Deserialize, Serialize};

use crate::library::models::Song;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    // Song ids in playlist order; references into the library, not copies.
    #[serde(default)]
    pub song_ids: Vec<String>,
    #[serde(default)]
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistDetails {
    pub playlist: Playlist,
    pub songs: Vec<Song>,
}
