//! Recommendation engine for the playlist manager.
//!
//! Two strategies:
//! 1. Library recommendations: seed on the most recently added songs
//!    and score everything else pairwise against them.
//! 2. Playlist affinity: aggregate a playlist's genres, moods and
//!    artists and score outside songs against that profile.
//!
//! Both are stateless and side-effect free; callers pass the relevant
//! song collections in explicitly.

pub mod affinity;
pub mod engine;
pub mod types;

pub use affinity::recommend_for_playlist;
pub use engine::{recommend, similarity, DEFAULT_LIMIT};
pub use types::{Recommendation, Similarity, TraitProfile};
