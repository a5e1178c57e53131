//! Playlist-affinity recommendations.
//!
//! Rather than comparing songs pairwise, candidates are scored against
//! the aggregate attribute profile of an existing playlist: which
//! genres, moods and artists appear in it at all. Note there is no
//! album term in this path, unlike pairwise similarity.

use std::collections::HashSet;

use crate::library::models::Song;
use crate::recommendations::types::{Recommendation, TraitProfile};

const GENRE_WEIGHT: u32 = 2;
const MOOD_WEIGHT: u32 = 2;
const ARTIST_WEIGHT: u32 = 3;

/// Reason used when nothing matched; zero-score candidates are dropped
/// before formatting, so this rarely surfaces.
const FALLBACK_REASON: &str = "Might fit this playlist";

/// Score one candidate against a playlist's trait profile.
///
/// Lookups are exact (case-sensitive) against the values that appear
/// in the playlist.
pub fn score_against_profile(song: &Song, profile: &TraitProfile) -> u32 {
    let mut score = 0;

    if profile.has_genre(&song.genre) {
        score += GENRE_WEIGHT;
    }
    if profile.has_mood(&song.mood) {
        score += MOOD_WEIGHT;
    }
    if profile.has_artist(&song.artist) {
        score += ARTIST_WEIGHT;
    }

    score
}

fn profile_reason(song: &Song, profile: &TraitProfile) -> String {
    let mut reasons: Vec<&str> = Vec::new();

    if profile.has_genre(&song.genre) {
        reasons.push("matches genre");
    }
    if profile.has_mood(&song.mood) {
        reasons.push("matches mood");
    }
    if profile.has_artist(&song.artist) {
        reasons.push("same artist");
    }

    if reasons.is_empty() {
        FALLBACK_REASON.to_string()
    } else {
        format!("Good fit: {}", reasons.join(", "))
    }
}

/// Recommend songs that would fit an existing playlist.
///
/// Candidates are the songs in `all_songs` that are not already members
/// of the playlist; each is scored against the playlist's aggregated
/// traits. Zero-score candidates are dropped, the rest are sorted by
/// descending score (stable) and capped at `limit`. An empty playlist,
/// or a playlist that already contains every song, yields nothing.
pub fn recommend_for_playlist(
    all_songs: &[Song],
    playlist_songs: &[Song],
    limit: usize,
) -> Vec<Recommendation> {
    if playlist_songs.is_empty() {
        return Vec::new();
    }

    let member_ids: HashSet<&str> = playlist_songs.iter().map(|s| s.id.as_str()).collect();
    let profile = TraitProfile::from_songs(playlist_songs);

    let mut recommendations: Vec<Recommendation> = all_songs
        .iter()
        .filter(|song| !member_ids.contains(song.id.as_str()))
        .filter_map(|song| {
            let score = score_against_profile(song, &profile);
            (score > 0).then(|| Recommendation {
                song: song.clone(),
                score,
                reason: profile_reason(song, &profile),
            })
        })
        .collect();

    recommendations.sort_by(|a, b| b.score.cmp(&a.score));
    recommendations.truncate(limit);
    recommendations
}
