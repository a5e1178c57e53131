//! Data types for the recommendation engine.

use serde::Serialize;
use std::collections::HashMap;

use crate::library::models::Song;

/// Pairwise similarity between two songs: the additive score and a
/// human-readable explanation of what matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Similarity {
    pub score: u32,
    pub reason: String,
}

/// A recommended song with the score that ranked it.
///
/// Built fresh on every engine call and handed straight to the caller;
/// never cached or persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub song: Song,
    pub score: u32,
    pub reason: String,
}

/// Aggregate attribute profile of a set of songs.
///
/// Occurrence counts are tracked per value, but scoring only consults
/// presence.
#[derive(Debug, Clone, Default)]
pub struct TraitProfile {
    pub genres: HashMap<String, usize>,
    pub moods: HashMap<String, usize>,
    pub artists: HashMap<String, usize>,
}

impl TraitProfile {
    pub fn from_songs(songs: &[Song]) -> Self {
        let mut profile = TraitProfile::default();
        for song in songs {
            *profile.genres.entry(song.genre.clone()).or_insert(0) += 1;
            *profile.moods.entry(song.mood.clone()).or_insert(0) += 1;
            *profile.artists.entry(song.artist.clone()).or_insert(0) += 1;
        }
        profile
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.contains_key(genre)
    }

    pub fn has_mood(&self, mood: &str) -> bool {
        self.moods.contains_key(mood)
    }

    pub fn has_artist(&self, artist: &str) -> bool {
        self.artists.contains_key(artist)
    }
}
