//! Stub external services and canned data for end-to-end tests
//!
//! The app talks to two external collaborators through traits; the test
//! server wires in these stubs instead of the reqwest-backed clients, the
//! same way unit-level route tests would.

use super::constants::*;
use async_trait::async_trait;
use tunescout_discovery_server::catalog::{
    AlbumRef, CatalogError, Image, Track, TrackArtist, TrackCatalog,
};
use tunescout_discovery_server::metadata::{BoundValue, MetadataSource, PropertyBinding};

/// Builds a catalog track with a single credited artist.
pub fn test_track(id: &str, title: &str, artist_id: &str, artist_name: &str) -> Track {
    Track {
        id: id.to_owned(),
        name: title.to_owned(),
        artists: vec![TrackArtist {
            id: artist_id.to_owned(),
            name: artist_name.to_owned(),
        }],
        album: AlbumRef {
            name: format!("{} Album", artist_name),
            images: vec![Image {
                url: format!("https://images.test/{}.jpg", id),
                width: Some(300),
                height: Some(300),
            }],
        },
        preview_url: Some(format!("https://preview.test/{}", id)),
    }
}

/// A track by a distinct bulk artist; the stub metadata source hands every
/// bulk artist the same "rock" genre binding.
pub fn bulk_track(index: usize) -> Track {
    test_track(
        &format!("bulk-track-{:02}", index),
        &format!("Bulk Track {}", index),
        &format!("bulk-artist-{:02}", index),
        &format!("{} Artist {}", BULK_ARTIST_MARKER, index),
    )
}

pub fn canned_tracks() -> Vec<Track> {
    vec![
        test_track(TRACK_1_ID, TRACK_1_TITLE, ARTIST_1_ID, ARTIST_1_NAME),
        test_track(TRACK_2_ID, TRACK_2_TITLE, ARTIST_1_ID, ARTIST_1_NAME),
        test_track(TRACK_4_ID, TRACK_4_TITLE, ARTIST_2_ID, ARTIST_2_NAME),
        test_track(TRACK_5_ID, TRACK_5_TITLE, ARTIST_UNKNOWN_ID, ARTIST_UNKNOWN_NAME),
    ]
}

/// Stub track catalog backed by the canned track list.
pub struct StubTrackCatalog {
    tracks: Vec<Track>,
}

impl StubTrackCatalog {
    pub fn new() -> Self {
        Self {
            tracks: canned_tracks(),
        }
    }
}

#[async_trait]
impl TrackCatalog for StubTrackCatalog {
    async fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<Track>, CatalogError> {
        if query == FAILING_SEARCH_QUERY {
            return Err(CatalogError::SearchStatus(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }

        if let Some(artist_name) = query.strip_prefix("artist:") {
            return Ok(self
                .tracks
                .iter()
                .filter(|t| {
                    t.artists
                        .first()
                        .map(|a| a.name == artist_name)
                        .unwrap_or(false)
                })
                .take(limit)
                .cloned()
                .collect());
        }

        let needle = query.to_lowercase();
        Ok(self
            .tracks
            .iter()
            .filter(|t| {
                t.name.to_lowercase().contains(&needle)
                    || t.artists
                        .iter()
                        .any(|a| a.name.to_lowercase().contains(&needle))
            })
            .take(limit)
            .cloned()
            .collect())
    }
}

fn genre(value: &str) -> PropertyBinding {
    PropertyBinding {
        genre: Some(BoundValue::new(value)),
        ..Default::default()
    }
}

/// Stub metadata source with per-artist canned bindings. Unknown artists
/// get the empty sequence, exactly like a degraded lookup.
pub struct StubMetadataSource;

#[async_trait]
impl MetadataSource for StubMetadataSource {
    async fn artist_bindings(&self, artist_name: &str) -> Vec<PropertyBinding> {
        match artist_name {
            ARTIST_1_NAME => vec![
                genre("rock"),
                PropertyBinding {
                    instrument: Some(BoundValue::new("guitar")),
                    ..Default::default()
                },
                PropertyBinding {
                    influence: Some(BoundValue::new("Elder Band")),
                    ..Default::default()
                },
                PropertyBinding {
                    nationality: Some(BoundValue::new("United Kingdom")),
                    abstract_text: Some(BoundValue::new("A band formed for testing.")),
                    ..Default::default()
                },
            ],
            ARTIST_2_NAME => vec![genre("rock"), genre("jazz")],
            name if name.contains(BULK_ARTIST_MARKER) => vec![genre("rock")],
            _ => vec![],
        }
    }
}
