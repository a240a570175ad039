//! Metadata knowledge source: property bindings and the MusicBrainz client.
//!
//! A metadata query result is a sequence of [`PropertyBinding`]s, each one
//! a sparse row of property/value pairs for an artist. Failed or empty
//! lookups surface as an empty binding sequence; transport errors never
//! cross this module's boundary.

mod musicbrainz;

pub use musicbrainz::{MetadataError, MusicBrainzClient, MUSICBRAINZ_API_BASE};

use serde::{Deserialize, Serialize};

/// A single bound value. The inner value can itself be absent in
/// partially-populated results.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundValue {
    pub value: Option<String>,
}

impl BoundValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

/// One row of a metadata query result: every property is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyBinding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub influence: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar_artist: Option<BoundValue>,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_years: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_act: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alma_mater: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_label: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_of: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub former_band_member: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_start: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_end: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notable_work: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residence: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub influenced: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborator: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writer: Option<BoundValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composer: Option<BoundValue>,
}

/// Unwraps a bound property down to its text, if both layers are present.
pub(crate) fn bound_text(property: &Option<BoundValue>) -> Option<&str> {
    property.as_ref()?.value.as_deref()
}

/// A source of artist metadata bindings.
///
/// Implementations swallow their own transport errors: a failed lookup is
/// indistinguishable from an artist with no known metadata.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataSource: Send + Sync {
    async fn artist_bindings(&self, artist_name: &str) -> Vec<PropertyBinding>;
}
