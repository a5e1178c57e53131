//! JSON persistence for the library state.
//!
//! The whole state travels as one document: songs, playlists and
//! favorites together. Managers never touch the disk themselves; the
//! shell snapshots the store and decides when to save.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::AppError;
use crate::store::LibraryState;

const APP_DIR: &str = "mixtape";
const STATE_FILE: &str = "library.json";

/// Default location of the state file, under the platform data dir.
pub fn default_state_path() -> Result<PathBuf, AppError> {
    let base = dirs::data_dir()
        .ok_or_else(|| AppError::FileSystem("no platform data directory".to_string()))?;
    Ok(base.join(APP_DIR).join(STATE_FILE))
}

/// Save the state as pretty-printed JSON, creating parent directories
/// as needed.
pub fn save_state(state: &LibraryState, path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;

    log::debug!("Library state saved to {:?}", path);
    Ok(())
}

/// Load previously saved state. A missing file just means a first run
/// and yields an empty state.
pub fn load_state(path: &Path) -> Result<LibraryState, AppError> {
    if !path.exists() {
        log::info!("No saved data at {:?} (normal on first run)", path);
        return Ok(LibraryState::default());
    }

    let json = fs::read_to_string(path)?;
    let state = serde_json::from_str(&json)?;
    Ok(state)
}

/// Like [`load_state`], but an unreadable or corrupt file degrades to
/// an empty state so the application can still start.
pub fn load_state_or_default(path: &Path) -> LibraryState {
    match load_state(path) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("Failed to load saved state: {}, starting empty", e);
            LibraryState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::models::{NewSong, SongSource};
    use crate::library::LibraryManager;
    use crate::playlist::PlaylistManager;
    use crate::store::MusicStore;

    fn populated_store() -> MusicStore {
        let store = MusicStore::new();
        let library = LibraryManager::new(store.clone());
        let playlists = PlaylistManager::new(store.clone());

        let song = library
            .add_song(NewSong {
                title: "Karma Police".to_string(),
                artist: "Radiohead".to_string(),
                genre: "rock".to_string(),
                mood: "sad".to_string(),
                album: Some("OK Computer".to_string()),
            })
            .unwrap();
        let playlist = playlists.create_playlist("Gloomy").unwrap();
        playlists.add_song_entry(&playlist.id, &song.id).unwrap();

        store
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("library.json");

        let store = populated_store();
        save_state(&store.snapshot(), &path).unwrap();

        let loaded = load_state(&path).unwrap();
        assert_eq!(loaded.songs.len(), 1);
        assert_eq!(loaded.songs[0].title, "Karma Police");
        assert_eq!(loaded.playlists.len(), 1);
        assert_eq!(loaded.playlists[0].song_ids, vec![loaded.songs[0].id.clone()]);
    }

    #[test]
    fn test_load_missing_file_is_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let state = load_state(&dir.path().join("absent.json")).unwrap();
        assert!(state.songs.is_empty());
        assert!(state.playlists.is_empty());
    }

    #[test]
    fn test_load_tolerates_legacy_data() {
        // Older saves: no favorites section, songs without source or
        // created_at.
        let json = r#"{
            "songs": [
                { "id": "s1", "title": "Wait", "artist": "M83",
                  "genre": "electronic", "mood": "calm" }
            ],
            "playlists": []
        }"#;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, json).unwrap();

        let state = load_state(&path).unwrap();
        assert_eq!(state.songs[0].source, SongSource::User);
        assert_eq!(state.songs[0].created_at, 0);
        assert_eq!(state.songs[0].album, None);
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_corrupt_file_degrades_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, "not json {").unwrap();

        assert!(load_state(&path).is_err());

        let state = load_state_or_default(&path);
        assert!(state.songs.is_empty());
    }
}
