//! MusicBrainz client used as the metadata knowledge source.
//!
//! Rate limited to 1 request per second per MusicBrainz API policy.

use serde::Deserialize;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::{BoundValue, MetadataSource, PropertyBinding};

pub const MUSICBRAINZ_API_BASE: &str = "https://musicbrainz.org/ws/2";
const RATE_LIMIT_INTERVAL: Duration = Duration::from_millis(1100); // slightly over 1s for safety

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("metadata lookup failed with status {0}")]
    Status(reqwest::StatusCode),
}

pub struct MusicBrainzClient {
    client: reqwest::Client,
    api_base: String,
    last_request: Mutex<Instant>,
}

#[derive(Deserialize)]
struct ArtistSearchResponse {
    artists: Option<Vec<MbArtistHit>>,
}

#[derive(Deserialize)]
struct MbArtistHit {
    id: String,
}

#[derive(Deserialize)]
struct MbArea {
    name: Option<String>,
}

#[derive(Deserialize)]
struct MbLifeSpan {
    begin: Option<String>,
}

#[derive(Deserialize)]
struct MbGenre {
    name: String,
}

#[derive(Deserialize)]
struct MbRelArtist {
    name: Option<String>,
}

#[derive(Deserialize)]
struct MbInstrument {
    name: Option<String>,
}

#[derive(Deserialize)]
struct MbRelation {
    #[serde(rename = "type")]
    rel_type: Option<String>,
    artist: Option<MbRelArtist>,
    instrument: Option<MbInstrument>,
}

#[derive(Deserialize)]
struct ArtistLookup {
    name: String,
    #[serde(rename = "type")]
    artist_type: Option<String>,
    #[serde(default)]
    genres: Vec<MbGenre>,
    #[serde(default)]
    relations: Vec<MbRelation>,
    area: Option<MbArea>,
    #[serde(rename = "begin-area", alias = "begin_area")]
    begin_area: Option<MbArea>,
    #[serde(rename = "life-span", alias = "life_span")]
    life_span: Option<MbLifeSpan>,
}

impl MusicBrainzClient {
    pub fn new(user_agent: &str, api_base: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            last_request: Mutex::new(Instant::now() - RATE_LIMIT_INTERVAL),
        })
    }

    async fn rate_limit(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();
        if elapsed < RATE_LIMIT_INTERVAL {
            tokio::time::sleep(RATE_LIMIT_INTERVAL - elapsed).await;
        }
        *last = Instant::now();
    }

    /// Look up the MusicBrainz artist id for a display name. The first
    /// search hit wins; no hits is not an error.
    async fn search_artist_id(&self, artist_name: &str) -> Result<Option<String>, MetadataError> {
        self.rate_limit().await;

        let url = format!(
            "{}/artist/?query={}&fmt=json&limit=1",
            self.api_base,
            urlencoding::encode(artist_name)
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            if response.status().as_u16() == 503 {
                // Rate limited upstream - treat as no result and retry later
                return Ok(None);
            }
            return Err(MetadataError::Status(response.status()));
        }

        let body: ArtistSearchResponse = response.json().await?;
        Ok(body
            .artists
            .and_then(|artists| artists.into_iter().next())
            .map(|artist| artist.id))
    }

    /// Fetch the artist's genres and artist/instrument relations.
    async fn lookup_artist(&self, mbid: &str) -> Result<ArtistLookup, MetadataError> {
        self.rate_limit().await;

        let url = format!(
            "{}/artist/{}?inc=genres+artist-rels+instrument-rels&fmt=json",
            self.api_base, mbid
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(MetadataError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    async fn fetch_bindings(&self, artist_name: &str) -> Result<Vec<PropertyBinding>, MetadataError> {
        let Some(mbid) = self.search_artist_id(artist_name).await? else {
            debug!("No MusicBrainz match for artist {:?}", artist_name);
            return Ok(vec![]);
        };

        let details = self.lookup_artist(&mbid).await?;
        Ok(bindings_from_lookup(details))
    }
}

/// Transforms a MusicBrainz artist lookup into the property-binding shape
/// the ingestion layer consumes.
fn bindings_from_lookup(details: ArtistLookup) -> Vec<PropertyBinding> {
    let mut bindings = Vec::new();

    for genre in &details.genres {
        bindings.push(PropertyBinding {
            genre: Some(BoundValue::new(&genre.name)),
            ..Default::default()
        });
    }

    for relation in &details.relations {
        match relation.rel_type.as_deref() {
            Some("instrument") => {
                if let Some(name) = relation.instrument.as_ref().and_then(|i| i.name.clone()) {
                    bindings.push(PropertyBinding {
                        instrument: Some(BoundValue::new(name)),
                        ..Default::default()
                    });
                }
            }
            Some("influenced by") => {
                if let Some(name) = relation.artist.as_ref().and_then(|a| a.name.clone()) {
                    bindings.push(PropertyBinding {
                        influence: Some(BoundValue::new(name)),
                        ..Default::default()
                    });
                }
            }
            Some("collaboration") => {
                if let Some(name) = relation.artist.as_ref().and_then(|a| a.name.clone()) {
                    bindings.push(PropertyBinding {
                        associated_act: Some(BoundValue::new(name)),
                        ..Default::default()
                    });
                }
            }
            _ => {}
        }
    }

    if let Some(name) = details.area.as_ref().and_then(|a| a.name.clone()) {
        bindings.push(PropertyBinding {
            nationality: Some(BoundValue::new(name)),
            ..Default::default()
        });
    }

    if let Some(name) = details.begin_area.as_ref().and_then(|a| a.name.clone()) {
        bindings.push(PropertyBinding {
            birth_place: Some(BoundValue::new(name)),
            ..Default::default()
        });
    }

    if let Some(begin) = details.life_span.as_ref().and_then(|l| l.begin.clone()) {
        bindings.push(PropertyBinding {
            birth_date: Some(BoundValue::new(begin)),
            ..Default::default()
        });
    }

    bindings.push(PropertyBinding {
        abstract_text: Some(BoundValue::new(synthesize_abstract(&details))),
        ..Default::default()
    });

    bindings
}

fn synthesize_abstract(details: &ArtistLookup) -> String {
    let mut text = format!(
        "{} is a musical artist ({})",
        details.name,
        details.artist_type.as_deref().unwrap_or("person")
    );

    if let Some(begin) = details.life_span.as_ref().and_then(|l| l.begin.as_deref()) {
        text.push_str(&format!(", active since {}", begin));
    }
    text.push('.');

    if !details.genres.is_empty() {
        let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
        text.push_str(&format!(
            " Known for work in the genres {}.",
            genres.join(", ")
        ));
    }

    text
}

#[async_trait::async_trait]
impl MetadataSource for MusicBrainzClient {
    /// Property bindings for the artist. Any failure along the way is
    /// logged and degraded to an empty sequence — callers never see
    /// transport errors.
    async fn artist_bindings(&self, artist_name: &str) -> Vec<PropertyBinding> {
        match self.fetch_bindings(artist_name).await {
            Ok(bindings) => {
                debug!(
                    "Fetched {} metadata bindings for artist {:?}",
                    bindings.len(),
                    artist_name
                );
                bindings
            }
            Err(e) => {
                warn!("Metadata lookup failed for {:?}: {}", artist_name, e);
                vec![]
            }
        }
    }
}
