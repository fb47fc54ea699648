//! The songs still to be played, drawn without replacement.

use crate::rng::IndexSource;
use crate::types::Song;
use std::fmt;

/// Songs waiting to be drawn.
///
/// Without an index source the pool always draws its first song.
#[derive(Default)]
pub struct SongPool {
    songs: Vec<Song>,
    picker: Option<Box<dyn IndexSource>>,
}

impl SongPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_picker(picker: impl IndexSource + 'static) -> Self {
        Self {
            songs: Vec::new(),
            picker: Some(Box::new(picker)),
        }
    }

    /// Build a pool from loaded songs, skipping duplicates
    pub fn from_songs(songs: impl IntoIterator<Item = Song>) -> Self {
        let mut pool = Self::new();
        pool.add_all(songs);
        pool
    }

    /// Replace (or clear) the index source
    pub fn set_picker(&mut self, picker: Option<Box<dyn IndexSource>>) {
        self.picker = picker;
    }

    /// Add a song. Returns false if an equal song is already in the pool.
    pub fn add(&mut self, song: Song) -> bool {
        if self.songs.contains(&song) {
            tracing::debug!("Song already in pool: {}", song);
            return false;
        }
        self.songs.push(song);
        true
    }

    /// Add several songs, returning how many were actually added
    pub fn add_all(&mut self, songs: impl IntoIterator<Item = Song>) -> usize {
        songs
            .into_iter()
            .map(|s| self.add(s))
            .filter(|added| *added)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn count(&self) -> usize {
        self.songs.len()
    }

    /// Remove and return a song chosen by the index source
    pub fn draw(&mut self) -> Option<Song> {
        let count = self.songs.len();
        if count == 0 {
            return None;
        }
        let index = match self.picker.as_mut() {
            Some(picker) => picker.next_index(count),
            None => 0,
        };
        if index >= count {
            tracing::warn!(
                "Index source returned {} for {} songs, drawing the last one",
                index,
                count
            );
        }
        Some(self.songs.remove(index.min(count - 1)))
    }
}

impl fmt::Debug for SongPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SongPool")
            .field("songs", &self.songs)
            .field("random", &self.picker.is_some())
            .finish()
    }
}
