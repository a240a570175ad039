//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all discovery-server endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;
use tunescout_discovery_server::catalog::Track;

/// HTTP test client with cookie-based session management
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    /// Creates a new client without a session
    ///
    /// Use this for testing the session requirement itself.
    /// For most tests, use `with_session()` instead.
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .cookie_store(true) // Automatically handle session cookies
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// Creates a client with a fresh session already established
    ///
    /// This is the most common way to create a test client.
    ///
    /// # Panics
    ///
    /// Panics if session creation fails (indicates test infrastructure
    /// problem).
    pub async fn with_session(base_url: String) -> Self {
        let client = Self::new(base_url);

        let response = client.create_session().await;
        assert_eq!(
            response.status(),
            reqwest::StatusCode::CREATED,
            "Test session creation failed: {:?}",
            response.text().await
        );

        client
    }

    // ========================================================================
    // Session Endpoints
    // ========================================================================

    /// POST /v1/session
    pub async fn create_session(&self) -> Response {
        self.client
            .post(format!("{}/v1/session", self.base_url))
            .send()
            .await
            .expect("Failed to send create session request")
    }

    /// GET /
    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Failed to send home request")
    }

    // ========================================================================
    // Search Endpoints
    // ========================================================================

    /// POST /v1/search
    pub async fn search(&self, query: &str) -> Response {
        self.client
            .post(format!("{}/v1/search", self.base_url))
            .json(&json!({ "query": query }))
            .send()
            .await
            .expect("Failed to send search request")
    }

    /// POST /v1/search with an explicit limit
    pub async fn search_with_limit(&self, query: &str, limit: usize) -> Response {
        self.client
            .post(format!("{}/v1/search", self.base_url))
            .json(&json!({ "query": query, "limit": limit }))
            .send()
            .await
            .expect("Failed to send search request")
    }

    // ========================================================================
    // Playlist Endpoints
    // ========================================================================

    /// GET /v1/playlist
    pub async fn get_playlist(&self) -> Response {
        self.client
            .get(format!("{}/v1/playlist", self.base_url))
            .send()
            .await
            .expect("Failed to send get playlist request")
    }

    /// POST /v1/playlist/tracks
    pub async fn add_track(&self, track: &Track) -> Response {
        self.client
            .post(format!("{}/v1/playlist/tracks", self.base_url))
            .json(&json!({ "track": track }))
            .send()
            .await
            .expect("Failed to send add track request")
    }

    /// DELETE /v1/playlist/tracks/{track_id}
    pub async fn remove_track(&self, track_id: &str) -> Response {
        self.client
            .delete(format!(
                "{}/v1/playlist/tracks/{}",
                self.base_url, track_id
            ))
            .send()
            .await
            .expect("Failed to send remove track request")
    }

    // ========================================================================
    // Discovery Endpoints
    // ========================================================================

    /// GET /v1/recommendations
    pub async fn get_recommendations(&self) -> Response {
        self.client
            .get(format!("{}/v1/recommendations", self.base_url))
            .send()
            .await
            .expect("Failed to send recommendations request")
    }

    /// GET /v1/metadata/{artist_name}
    pub async fn get_artist_metadata(&self, artist_name: &str) -> Response {
        self.client
            .get(format!(
                "{}/v1/metadata/{}",
                self.base_url,
                urlencoding::encode(artist_name)
            ))
            .send()
            .await
            .expect("Failed to send metadata request")
    }
}
