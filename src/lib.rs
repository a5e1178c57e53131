//! Core of a music playlist manager: a song library, named playlists,
//! song favorites, JSON persistence and a recommendation engine.
//!
//! The rendering/controller shell lives elsewhere; it reads collections
//! out of the managers, feeds them to the recommendation functions and
//! displays the results. Everything here is synchronous and in-memory,
//! with persistence as an explicit snapshot/save step.

pub mod errors;
pub mod favorites;
pub mod library;
pub mod playlist;
pub mod recommendations;
pub mod storage;
pub mod store;

pub use errors::AppError;
pub use favorites::FavoritesManager;
pub use library::LibraryManager;
pub use playlist::PlaylistManager;
pub use recommendations::{recommend, recommend_for_playlist, similarity};
pub use store::{LibraryState, MusicStore};
