//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When stub data changes (artist names, canned track ids, etc.),
//! update only this file.

// ============================================================================
// Stub Catalog Artists
// ============================================================================

/// Artist with stub metadata: genre "rock", instrument "guitar", plus
/// nationality/biography attributes. One genre + one instrument scores 3.0.
pub const ARTIST_1_NAME: &str = "The Test Band";
pub const ARTIST_1_ID: &str = "artist-1";

/// Artist with stub metadata: genres "rock" and "jazz". Two genres score 4.0.
pub const ARTIST_2_NAME: &str = "Jazz Ensemble";
pub const ARTIST_2_ID: &str = "artist-2";

/// Artist the stub metadata source knows nothing about.
pub const ARTIST_UNKNOWN_NAME: &str = "Unknown Artist";
pub const ARTIST_UNKNOWN_ID: &str = "artist-unknown";

/// Any artist name containing this marker gets a single "rock" genre
/// binding from the stub metadata source. Used for bulk candidates.
pub const BULK_ARTIST_MARKER: &str = "Common";

// ============================================================================
// Stub Catalog Tracks
// ============================================================================

/// "Opening Track" by The Test Band
pub const TRACK_1_ID: &str = "track-1";
pub const TRACK_1_TITLE: &str = "Opening Track";

/// "Middle Track" by The Test Band
pub const TRACK_2_ID: &str = "track-2";
pub const TRACK_2_TITLE: &str = "Middle Track";

/// "Smooth Jazz" by Jazz Ensemble
pub const TRACK_4_ID: &str = "track-4";
pub const TRACK_4_TITLE: &str = "Smooth Jazz";

/// "Mystery Song" by Unknown Artist
pub const TRACK_5_ID: &str = "track-5";
pub const TRACK_5_TITLE: &str = "Mystery Song";

/// A search query the stub catalog answers with an error, to exercise the
/// degrade-to-empty path.
pub const FAILING_SEARCH_QUERY: &str = "boom";

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
