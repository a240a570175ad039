mod client;
mod track;

pub use client::{
    CatalogClient, CatalogError, TrackCatalog, DEFAULT_API_BASE, DEFAULT_TOKEN_ENDPOINT,
};
pub use track::{AlbumRef, Image, Track, TrackArtist};

#[cfg(feature = "mock")]
pub use client::MockTrackCatalog;
