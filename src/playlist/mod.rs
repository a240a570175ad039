//! Per-session playlist state.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::Track;

#[derive(Clone, Debug, Serialize)]
pub struct PlaylistEntry {
    #[serde(flatten)]
    pub track: Track,
    pub added_at: DateTime<Utc>,
}

/// An ordered track list, deduplicated by track id.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Playlist {
    tracks: Vec<PlaylistEntry>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the track unless its id is already present. Returns whether
    /// it was added.
    pub fn add(&mut self, track: Track) -> bool {
        if self.contains(&track.id) {
            return false;
        }
        self.tracks.push(PlaylistEntry {
            track,
            added_at: Utc::now(),
        });
        true
    }

    /// Removes the track with the given id. Returns whether it was present.
    pub fn remove(&mut self, track_id: &str) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|entry| entry.track.id != track_id);
        self.tracks.len() != before
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.tracks.iter().any(|entry| entry.track.id == track_id)
    }

    pub fn tracks(&self) -> &[PlaylistEntry] {
        &self.tracks
    }

    /// Primary artist names in playlist order, deduplicated.
    pub fn artist_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for entry in &self.tracks {
            if let Some(artist) = entry.track.primary_artist() {
                if !names.iter().any(|n| n == &artist.name) {
                    names.push(artist.name.clone());
                }
            }
        }
        names
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
