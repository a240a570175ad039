use serde::{Deserialize, Serialize};

/// The closed set of fact categories contributing to recommendation scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactCategory {
    Genre,
    Influence,
    Style,
    Instrument,
    SimilarArtist,
}

impl FactCategory {
    /// Score contribution of one matched value in this category.
    pub fn weight(&self) -> f64 {
        match self {
            FactCategory::Genre | FactCategory::SimilarArtist => 2.0,
            FactCategory::Influence | FactCategory::Style => 1.5,
            FactCategory::Instrument => 1.0,
        }
    }

    /// Label used in human-readable matching-factor notes.
    pub fn label(&self) -> &'static str {
        match self {
            FactCategory::Genre => "Genre",
            FactCategory::Influence => "Influence",
            FactCategory::Style => "Style",
            FactCategory::Instrument => "Instrument",
            FactCategory::SimilarArtist => "Similar artist",
        }
    }
}

/// Free-form attribute record attached to a subject.
///
/// All fields are optional; records merge field-by-field with "last
/// non-absent value wins", so a partial write never clears fields it
/// doesn't mention.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtistAttributes {
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_years: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_acts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alma_mater: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub former_band_member: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notable_work: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar_artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub influenced: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composer: Option<String>,
}

fn merge_field(dst: &mut Option<String>, src: Option<String>) {
    if src.is_some() {
        *dst = src;
    }
}

impl ArtistAttributes {
    /// Merges `other` into `self`, field by field. Set fields in `other`
    /// overwrite; absent fields leave the existing values intact.
    pub fn merge(&mut self, other: ArtistAttributes) {
        merge_field(&mut self.biography, other.biography);
        merge_field(&mut self.birth_place, other.birth_place);
        merge_field(&mut self.active_years, other.active_years);
        merge_field(&mut self.associated_acts, other.associated_acts);
        merge_field(&mut self.awards, other.awards);
        merge_field(&mut self.occupation, other.occupation);
        merge_field(&mut self.nationality, other.nationality);
        merge_field(&mut self.description, other.description);
        merge_field(&mut self.period, other.period);
        merge_field(&mut self.movement, other.movement);
        merge_field(&mut self.education, other.education);
        merge_field(&mut self.alma_mater, other.alma_mater);
        merge_field(&mut self.record_label, other.record_label);
        merge_field(&mut self.member_of, other.member_of);
        merge_field(&mut self.former_band_member, other.former_band_member);
        merge_field(&mut self.background, other.background);
        merge_field(&mut self.career_start, other.career_start);
        merge_field(&mut self.career_end, other.career_end);
        merge_field(&mut self.notable_work, other.notable_work);
        merge_field(&mut self.residence, other.residence);
        merge_field(&mut self.similar_artist, other.similar_artist);
        merge_field(&mut self.influenced, other.influenced);
        merge_field(&mut self.collaborator, other.collaborator);
        merge_field(&mut self.producer, other.producer);
        merge_field(&mut self.writer, other.writer);
        merge_field(&mut self.composer, other.composer);
    }

    pub fn is_empty(&self) -> bool {
        *self == ArtistAttributes::default()
    }
}
