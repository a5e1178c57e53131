//! Shared in-memory state for the song library.
//!
//! `MusicStore` is a cheap-to-clone handle passed into each manager,
//! the same way a database pool would be. Several independent stores
//! can coexist in one process; nothing here is global.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::favorites::models::Favorite;
use crate::library::models::Song;
use crate::playlist::models::Playlist;

/// Everything the application persists, as one unit.
///
/// Field-level `#[serde(default)]` keeps older saved files loadable
/// when a section is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryState {
    #[serde(default)]
    pub songs: Vec<Song>,
    #[serde(default)]
    pub playlists: Vec<Playlist>,
    #[serde(default)]
    pub favorites: Vec<Favorite>,
}

/// Shared handle over [`LibraryState`].
#[derive(Clone, Default)]
pub struct MusicStore {
    inner: Arc<RwLock<LibraryState>>,
}

impl MusicStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with previously saved state.
    pub fn hydrate(state: LibraryState) -> Self {
        log::info!(
            "Library state loaded: {} songs, {} playlists, {} favorites",
            state.songs.len(),
            state.playlists.len(),
            state.favorites.len()
        );
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Clone out the current state, e.g. for saving to disk.
    pub fn snapshot(&self) -> LibraryState {
        self.inner.read().clone()
    }

    /// Replace the current state wholesale.
    pub fn replace(&self, state: LibraryState) {
        *self.inner.write() = state;
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, LibraryState> {
        self.inner.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, LibraryState> {
        self.inner.write()
    }
}
