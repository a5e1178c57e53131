//! Seed-based recommendations over the song library.
//!
//! The most recently added songs act as seeds; every other song is
//! scored against each seed on shared attributes (artist, genre, mood,
//! album), then the results are deduplicated, ranked and capped.
//!
//! Everything here is pure computation over the slices it is given:
//! no caching, no I/O, no state between calls.

use std::collections::HashSet;

use crate::library::models::Song;
use crate::recommendations::types::{Recommendation, Similarity};

/// How many of the most recently added songs seed a run.
const SEED_COUNT: usize = 3;

/// Default cap on returned recommendations.
pub const DEFAULT_LIMIT: usize = 5;

const ARTIST_WEIGHT: u32 = 3;
const GENRE_WEIGHT: u32 = 2;
const MOOD_WEIGHT: u32 = 2;
const ALBUM_WEIGHT: u32 = 2;

/// Reason used when no attribute matched. Zero-score pairs are filtered
/// out before they reach a caller, so this rarely surfaces.
const FALLBACK_REASON: &str = "Similar to your library";

/// Score how similar two songs are.
///
/// Weights are additive: same artist (case-insensitive) counts 3, same
/// genre and same mood count 2 each, and a shared album counts 2 when
/// both songs actually have one (case-insensitive). Callers are expected
/// not to compare a song with itself.
pub fn similarity(a: &Song, b: &Song) -> Similarity {
    let mut score = 0;
    let mut reasons: Vec<&str> = Vec::new();

    if a.artist.to_lowercase() == b.artist.to_lowercase() {
        score += ARTIST_WEIGHT;
        reasons.push("same artist");
    }

    if a.genre == b.genre {
        score += GENRE_WEIGHT;
        reasons.push("same genre");
    }

    if a.mood == b.mood {
        score += MOOD_WEIGHT;
        reasons.push("same mood");
    }

    if let (Some(album_a), Some(album_b)) = (nonempty_album(a), nonempty_album(b)) {
        if album_a.to_lowercase() == album_b.to_lowercase() {
            score += ALBUM_WEIGHT;
            reasons.push("same album");
        }
    }

    let reason = if reasons.is_empty() {
        FALLBACK_REASON.to_string()
    } else {
        format!("Similar: {}", reasons.join(", "))
    };

    Similarity { score, reason }
}

fn nonempty_album(song: &Song) -> Option<&str> {
    song.album.as_deref().filter(|a| !a.is_empty())
}

/// Songs similar to `seed`, excluding the seed itself and zero-score
/// pairs. Library order is preserved.
fn find_similar(seed: &Song, library: &[Song]) -> Vec<Recommendation> {
    library
        .iter()
        .filter(|song| song.id != seed.id)
        .filter_map(|song| {
            let Similarity { score, reason } = similarity(seed, song);
            (score > 0).then(|| Recommendation {
                song: song.clone(),
                score,
                reason,
            })
        })
        .collect()
}

/// Recommend songs from `library`, seeded by its most recently added
/// entries (the slice is taken to be in insertion order).
///
/// A library with fewer than two songs yields nothing. Each song is
/// recommended at most once: the first seed to match it wins, even if a
/// later seed would score it higher. Results are sorted by descending
/// score (stable, so ties keep seed-then-candidate order) and capped at
/// `limit`.
pub fn recommend(library: &[Song], limit: usize) -> Vec<Recommendation> {
    if library.len() < 2 {
        return Vec::new();
    }

    let seeds = &library[library.len().saturating_sub(SEED_COUNT)..];

    let mut recommendations: Vec<Recommendation> = Vec::new();
    let mut recommended_ids: HashSet<String> = HashSet::new();

    for seed in seeds {
        for result in find_similar(seed, library) {
            if recommended_ids.insert(result.song.id.clone()) {
                recommendations.push(result);
            }
        }
    }

    recommendations.sort_by(|a, b| b.score.cmp(&a.score));
    recommendations.truncate(limit);
    recommendations
}
