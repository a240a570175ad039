//! HTTP client for the external track catalog service.
//!
//! Authenticates with the client-credentials flow and caches the access
//! token until shortly before expiry.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::Deserialize;
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use super::track::Track;

pub const DEFAULT_API_BASE: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://accounts.spotify.com/api/token";

/// Tokens are refreshed this long before their reported expiry.
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("token request failed with status {0}")]
    TokenStatus(reqwest::StatusCode),
    #[error("search failed with status {0}")]
    SearchStatus(reqwest::StatusCode),
}

/// A searchable source of catalog tracks.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait::async_trait]
pub trait TrackCatalog: Send + Sync {
    async fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<Track>, CatalogError>;
}

#[derive(Clone)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        Utc::now() < self.expires_at
    }
}

pub struct CatalogClient {
    client: reqwest::Client,
    api_base: String,
    token_endpoint: String,
    client_id: String,
    client_secret: String,
    token_cache: Mutex<Option<CachedToken>>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Deserialize)]
struct SearchResponse {
    tracks: Option<TrackPage>,
}

#[derive(Deserialize)]
struct TrackPage {
    #[serde(default)]
    items: Vec<Track>,
}

impl CatalogClient {
    pub fn new(
        api_base: &str,
        token_endpoint: &str,
        client_id: &str,
        client_secret: &str,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            token_endpoint: token_endpoint.to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            token_cache: Mutex::new(None),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns a valid access token, fetching a fresh one if the cached
    /// token is missing or about to expire.
    async fn access_token(&self) -> Result<String, CatalogError> {
        {
            let cache = self.token_cache.lock().unwrap();
            if let Some(token) = cache.as_ref().filter(|t| t.is_fresh()) {
                return Ok(token.value.clone());
            }
        }

        debug!("Fetching new catalog access token");
        let response = self
            .client
            .post(&self.token_endpoint)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::TokenStatus(response.status()));
        }

        let body: TokenResponse = response.json().await?;
        let token = CachedToken {
            value: body.access_token,
            expires_at: Utc::now()
                + ChronoDuration::seconds((body.expires_in - TOKEN_EXPIRY_MARGIN_SECS).max(0)),
        };

        let value = token.value.clone();
        *self.token_cache.lock().unwrap() = Some(token);
        Ok(value)
    }
}

#[async_trait::async_trait]
impl TrackCatalog for CatalogClient {
    async fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<Track>, CatalogError> {
        let token = self.access_token().await?;

        let url = format!(
            "{}/search?q={}&type=track&limit={}",
            self.api_base,
            urlencoding::encode(query),
            limit
        );

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::SearchStatus(response.status()));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.tracks.map(|page| page.items).unwrap_or_default())
    }
}
