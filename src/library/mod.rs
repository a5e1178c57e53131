//! The song library: add, remove, look up and search songs, plus the
//! bundled sample-catalog import.

pub mod models;

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::store::MusicStore;
use models::{NewSong, SampleImportReport, Song, SongCounts, SongSource};

/// Bundled sample catalog, embedded at compile time.
const SAMPLE_SONGS_JSON: &str = include_str!("sample_songs.json");

/// One raw entry from the sample catalog. Everything is optional so a
/// single malformed entry can be skipped instead of failing the import.
#[derive(Deserialize)]
struct SampleEntry {
    title: Option<String>,
    artist: Option<String>,
    genre: Option<String>,
    mood: Option<String>,
    #[serde(default)]
    album: Option<String>,
}

pub struct LibraryManager {
    store: MusicStore,
}

impl LibraryManager {
    pub fn new(store: MusicStore) -> Self {
        Self { store }
    }

    /// Add a user-provided song.
    pub fn add_song(&self, song: NewSong) -> Result<Song, AppError> {
        self.add_song_from(song, SongSource::User)
    }

    /// Add a song with an explicit source tag.
    ///
    /// Title, artist, genre and mood must be non-empty after trimming.
    /// A blank album is stored as `None`.
    pub fn add_song_from(&self, song: NewSong, source: SongSource) -> Result<Song, AppError> {
        let title = song.title.trim();
        let artist = song.artist.trim();
        let genre = song.genre.trim();
        let mood = song.mood.trim();

        if title.is_empty() || artist.is_empty() || genre.is_empty() || mood.is_empty() {
            return Err(AppError::InvalidInput(
                "title, artist, genre and mood are required".to_string(),
            ));
        }

        let album = song
            .album
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);

        let song = Song {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            genre: genre.to_string(),
            mood: mood.to_string(),
            album,
            source,
            created_at: Utc::now().timestamp(),
        };

        self.store.write().songs.push(song.clone());
        log::debug!("Song added ({}): {}", source, song.title);

        Ok(song)
    }

    /// Remove a song and scrub its id from every playlist and from
    /// favorites. Removing an unknown id is a no-op.
    pub fn remove_song(&self, song_id: &str) {
        let mut state = self.store.write();
        state.songs.retain(|s| s.id != song_id);
        for playlist in &mut state.playlists {
            playlist.song_ids.retain(|id| id != song_id);
        }
        state.favorites.retain(|f| f.song_id != song_id);
        log::debug!("Song removed: {}", song_id);
    }

    /// All songs, in insertion order (oldest first).
    pub fn get_all_songs(&self) -> Vec<Song> {
        self.store.read().songs.clone()
    }

    pub fn get_song(&self, song_id: &str) -> Option<Song> {
        self.store.read().songs.iter().find(|s| s.id == song_id).cloned()
    }

    pub fn get_songs_by_source(&self, source: SongSource) -> Vec<Song> {
        self.store
            .read()
            .songs
            .iter()
            .filter(|s| s.source == source)
            .cloned()
            .collect()
    }

    pub fn song_counts(&self) -> SongCounts {
        let state = self.store.read();
        let user = state.songs.iter().filter(|s| s.source == SongSource::User).count();
        SongCounts {
            user,
            sample: state.songs.len() - user,
            total: state.songs.len(),
        }
    }

    /// Case-insensitive substring search over title, artist and album.
    pub fn search_songs(&self, query: &str) -> Vec<Song> {
        let q = query.to_lowercase();
        self.store
            .read()
            .songs
            .iter()
            .filter(|s| {
                s.title.to_lowercase().contains(&q)
                    || s.artist.to_lowercase().contains(&q)
                    || s.album
                        .as_deref()
                        .map(|a| a.to_lowercase().contains(&q))
                        .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    /// Import the bundled sample catalog.
    ///
    /// Entries missing required fields are skipped, as are songs already
    /// in the library (matched by case-insensitive title + artist). If
    /// sample songs were imported before, nothing is added.
    pub fn import_sample_songs(&self) -> Result<SampleImportReport, AppError> {
        let existing_samples = self.get_songs_by_source(SongSource::Sample).len();
        if existing_samples > 0 {
            log::info!("{} sample songs already loaded, skipping import", existing_samples);
            return Ok(SampleImportReport { added: 0, skipped: 0 });
        }

        let entries: Vec<SampleEntry> = serde_json::from_str(SAMPLE_SONGS_JSON)?;

        let mut added = 0;
        let mut skipped = 0;

        for entry in entries {
            let (Some(title), Some(artist), Some(genre), Some(mood)) =
                (entry.title, entry.artist, entry.genre, entry.mood)
            else {
                log::warn!("Skipping sample entry with missing required fields");
                skipped += 1;
                continue;
            };

            let duplicate = {
                let state = self.store.read();
                state.songs.iter().any(|s| {
                    s.title.to_lowercase() == title.to_lowercase()
                        && s.artist.to_lowercase() == artist.to_lowercase()
                })
            };
            if duplicate {
                skipped += 1;
                continue;
            }

            let draft = NewSong {
                title,
                artist,
                genre,
                mood,
                album: entry.album,
            };
            match self.add_song_from(draft, SongSource::Sample) {
                Ok(_) => added += 1,
                Err(e) => {
                    log::warn!("Skipping sample entry: {}", e);
                    skipped += 1;
                }
            }
        }

        log::info!("Sample import complete: {} added, {} skipped", added, skipped);
        Ok(SampleImportReport { added, skipped })
    }
}
