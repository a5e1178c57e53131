use chrono::Utc;
use uuid::Uuid;

use super::models::{Playlist, PlaylistDetails};
use crate::errors::AppError;
use crate::library::models::Song;
use crate::store::MusicStore;

pub struct PlaylistManager {
    store: MusicStore,
}

impl PlaylistManager {
    pub fn new(store: MusicStore) -> Self {
        Self { store }
    }

    pub fn create_playlist(&self, name: &str) -> Result<Playlist, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput("playlist name is required".to_string()));
        }

        let playlist = Playlist {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            song_ids: Vec::new(),
            created_at: Utc::now().timestamp(),
        };

        self.store.write().playlists.push(playlist.clone());
        log::debug!("Playlist created: {}", playlist.name);

        Ok(playlist)
    }

    /// Deleting an unknown playlist is a no-op.
    pub fn delete_playlist(&self, playlist_id: &str) {
        self.store.write().playlists.retain(|p| p.id != playlist_id);
        log::debug!("Playlist deleted: {}", playlist_id);
    }

    pub fn get_playlists(&self) -> Vec<Playlist> {
        self.store.read().playlists.clone()
    }

    pub fn get_playlist(&self, playlist_id: &str) -> Option<Playlist> {
        self.store
            .read()
            .playlists
            .iter()
            .find(|p| p.id == playlist_id)
            .cloned()
    }

    pub fn add_song_entry(&self, playlist_id: &str, song_id: &str) -> Result<(), AppError> {
        let mut state = self.store.write();

        if !state.songs.iter().any(|s| s.id == song_id) {
            return Err(AppError::SongNotFound(song_id.to_string()));
        }

        let playlist = state
            .playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .ok_or_else(|| AppError::PlaylistNotFound(playlist_id.to_string()))?;

        if playlist.song_ids.iter().any(|id| id == song_id) {
            log::debug!("Song already in playlist, nothing to do");
            return Ok(());
        }

        playlist.song_ids.push(song_id.to_string());
        Ok(())
    }

    pub fn remove_song_entry(&self, playlist_id: &str, song_id: &str) -> Result<(), AppError> {
        let mut state = self.store.write();

        let playlist = state
            .playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .ok_or_else(|| AppError::PlaylistNotFound(playlist_id.to_string()))?;

        playlist.song_ids.retain(|id| id != song_id);
        Ok(())
    }

    /// Resolve a playlist's members to full songs, in playlist order.
    /// Ids that no longer resolve are skipped; an unknown playlist
    /// yields an empty list.
    pub fn get_playlist_songs(&self, playlist_id: &str) -> Vec<Song> {
        let state = self.store.read();

        let Some(playlist) = state.playlists.iter().find(|p| p.id == playlist_id) else {
            return Vec::new();
        };

        playlist
            .song_ids
            .iter()
            .filter_map(|id| state.songs.iter().find(|s| &s.id == id))
            .cloned()
            .collect()
    }

    pub fn get_playlist_details(&self, playlist_id: &str) -> Result<PlaylistDetails, AppError> {
        let playlist = self
            .get_playlist(playlist_id)
            .ok_or_else(|| AppError::PlaylistNotFound(playlist_id.to_string()))?;
        let songs = self.get_playlist_songs(playlist_id);

        Ok(PlaylistDetails { playlist, songs })
    }

    pub fn playlists_containing_song(&self, song_id: &str) -> Vec<String> {
        self.store
            .read()
            .playlists
            .iter()
            .filter(|p| p.song_ids.iter().any(|id| id == song_id))
            .map(|p| p.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::models::{NewSong, SongSource};
    use crate::library::LibraryManager;
    use crate::store::LibraryState;

    fn setup() -> (MusicStore, LibraryManager, PlaylistManager) {
        let store = MusicStore::new();
        (
            store.clone(),
            LibraryManager::new(store.clone()),
            PlaylistManager::new(store),
        )
    }

    fn draft(title: &str, artist: &str) -> NewSong {
        NewSong {
            title: title.to_string(),
            artist: artist.to_string(),
            genre: "rock".to_string(),
            mood: "happy".to_string(),
            album: None,
        }
    }

    #[test]
    fn test_create_playlist_requires_name() {
        let (_, _, playlists) = setup();

        assert!(matches!(
            playlists.create_playlist("   "),
            Err(AppError::InvalidInput(_))
        ));

        let playlist = playlists.create_playlist("  Road Trip  ").unwrap();
        assert_eq!(playlist.name, "Road Trip");
        assert!(playlist.song_ids.is_empty());
    }

    #[test]
    fn test_add_song_entry_preserves_order_and_ignores_duplicates() {
        let (_, library, playlists) = setup();

        let a = library.add_song(draft("A", "X")).unwrap();
        let b = library.add_song(draft("B", "Y")).unwrap();
        let playlist = playlists.create_playlist("Mix").unwrap();

        playlists.add_song_entry(&playlist.id, &a.id).unwrap();
        playlists.add_song_entry(&playlist.id, &b.id).unwrap();
        // Adding again is a no-op, not an error.
        playlists.add_song_entry(&playlist.id, &a.id).unwrap();

        let current = playlists.get_playlist(&playlist.id).unwrap();
        assert_eq!(current.song_ids, vec![a.id.clone(), b.id.clone()]);
    }

    #[test]
    fn test_add_song_entry_unknown_ids() {
        let (_, library, playlists) = setup();

        let song = library.add_song(draft("A", "X")).unwrap();
        let playlist = playlists.create_playlist("Mix").unwrap();

        assert!(matches!(
            playlists.add_song_entry(&playlist.id, "nope"),
            Err(AppError::SongNotFound(_))
        ));
        assert!(matches!(
            playlists.add_song_entry("nope", &song.id),
            Err(AppError::PlaylistNotFound(_))
        ));
    }

    #[test]
    fn test_remove_song_entry() {
        let (_, library, playlists) = setup();

        let song = library.add_song(draft("A", "X")).unwrap();
        let playlist = playlists.create_playlist("Mix").unwrap();
        playlists.add_song_entry(&playlist.id, &song.id).unwrap();

        playlists.remove_song_entry(&playlist.id, &song.id).unwrap();
        assert!(playlists.get_playlist(&playlist.id).unwrap().song_ids.is_empty());

        assert!(matches!(
            playlists.remove_song_entry("nope", &song.id),
            Err(AppError::PlaylistNotFound(_))
        ));
    }

    #[test]
    fn test_get_playlist_songs_skips_dangling_references() {
        let song = Song {
            id: "s1".to_string(),
            title: "A".to_string(),
            artist: "X".to_string(),
            genre: "rock".to_string(),
            mood: "happy".to_string(),
            album: None,
            source: SongSource::User,
            created_at: 0,
        };
        let playlist = Playlist {
            id: "p1".to_string(),
            name: "Mix".to_string(),
            song_ids: vec!["ghost".to_string(), "s1".to_string()],
            created_at: 0,
        };
        let store = MusicStore::hydrate(LibraryState {
            songs: vec![song],
            playlists: vec![playlist],
            favorites: Vec::new(),
        });

        let playlists = PlaylistManager::new(store);
        let songs = playlists.get_playlist_songs("p1");
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].id, "s1");

        assert!(playlists.get_playlist_songs("unknown").is_empty());
    }

    #[test]
    fn test_get_playlist_details() {
        let (_, library, playlists) = setup();

        let song = library.add_song(draft("A", "X")).unwrap();
        let playlist = playlists.create_playlist("Mix").unwrap();
        playlists.add_song_entry(&playlist.id, &song.id).unwrap();

        let details = playlists.get_playlist_details(&playlist.id).unwrap();
        assert_eq!(details.playlist.id, playlist.id);
        assert_eq!(details.songs.len(), 1);

        assert!(matches!(
            playlists.get_playlist_details("nope"),
            Err(AppError::PlaylistNotFound(_))
        ));
    }

    #[test]
    fn test_playlists_containing_song() {
        let (_, library, playlists) = setup();

        let song = library.add_song(draft("A", "X")).unwrap();
        let first = playlists.create_playlist("One").unwrap();
        let second = playlists.create_playlist("Two").unwrap();
        playlists.create_playlist("Empty").unwrap();

        playlists.add_song_entry(&first.id, &song.id).unwrap();
        playlists.add_song_entry(&second.id, &song.id).unwrap();

        let containing = playlists.playlists_containing_song(&song.id);
        assert_eq!(containing, vec![first.id, second.id]);
    }
}
