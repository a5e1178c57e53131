pub mod models;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::store::MusicStore;
use models::{Favorite, FavoriteSong};

pub struct FavoritesManager {
    store: MusicStore,
}

impl FavoritesManager {
    pub fn new(store: MusicStore) -> Self {
        Self { store }
    }

    /// Mark a song as a favorite. Favoriting a song twice is a no-op.
    pub fn add_favorite(&self, song_id: &str) -> Result<(), AppError> {
        let mut state = self.store.write();

        if !state.songs.iter().any(|s| s.id == song_id) {
            return Err(AppError::SongNotFound(song_id.to_string()));
        }
        if state.favorites.iter().any(|f| f.song_id == song_id) {
            return Ok(());
        }

        state.favorites.push(Favorite {
            id: Uuid::new_v4().to_string(),
            song_id: song_id.to_string(),
            liked_at: Utc::now().timestamp(),
        });

        Ok(())
    }

    /// Removing a favorite that does not exist is a no-op.
    pub fn remove_favorite(&self, song_id: &str) {
        self.store.write().favorites.retain(|f| f.song_id != song_id);
    }

    pub fn is_favorited(&self, song_id: &str) -> bool {
        self.store.read().favorites.iter().any(|f| f.song_id == song_id)
    }

    /// All favorites, most recently liked first.
    pub fn get_favorites(&self) -> Vec<Favorite> {
        let mut favorites = self.store.read().favorites.clone();
        favorites.sort_by(|a, b| b.liked_at.cmp(&a.liked_at));
        favorites
    }

    /// Favorites resolved to songs, most recently liked first.
    /// Favorites whose song is gone are skipped.
    pub fn get_favorites_with_songs(&self) -> Vec<FavoriteSong> {
        let state = self.store.read();

        let mut resolved: Vec<FavoriteSong> = state
            .favorites
            .iter()
            .filter_map(|f| {
                state
                    .songs
                    .iter()
                    .find(|s| s.id == f.song_id)
                    .map(|song| FavoriteSong {
                        song: song.clone(),
                        liked_at: f.liked_at,
                    })
            })
            .collect();

        resolved.sort_by(|a, b| b.liked_at.cmp(&a.liked_at));
        resolved
    }

    /// Filter favorites by a case-insensitive text query over title and
    /// artist, optionally restricted to one genre.
    pub fn search_favorites(&self, query: &str, genre: Option<&str>) -> Vec<FavoriteSong> {
        let q = query.to_lowercase();

        self.get_favorites_with_songs()
            .into_iter()
            .filter(|fav| {
                let matches_text = fav.song.title.to_lowercase().contains(&q)
                    || fav.song.artist.to_lowercase().contains(&q);
                let matches_genre = genre.map(|g| fav.song.genre == g).unwrap_or(true);
                matches_text && matches_genre
            })
            .collect()
    }
}
