//! Converts metadata query results into fact vault writes.

use crate::metadata::{bound_text, PropertyBinding};

use super::fact::{ArtistAttributes, FactCategory};
use super::fact_vault::FactVault;

/// Applies one metadata query result to the vault for `subject`.
///
/// Each binding contributes at most one fact per recognized category plus
/// a partial attribute record. Absent properties are skipped; an empty
/// binding sequence leaves the vault untouched. This never fails — upstream
/// fetch errors have already been degraded to an empty sequence.
pub fn ingest_bindings(vault: &mut FactVault, subject: &str, bindings: &[PropertyBinding]) {
    for binding in bindings {
        if let Some(genre) = bound_text(&binding.genre) {
            vault.add_fact(FactCategory::Genre, subject, genre);
        }
        if let Some(influence) = bound_text(&binding.influence) {
            vault.add_fact(FactCategory::Influence, subject, influence);
        }
        if let Some(style) = bound_text(&binding.style) {
            vault.add_fact(FactCategory::Style, subject, style);
        }
        if let Some(instrument) = bound_text(&binding.instrument) {
            vault.add_fact(FactCategory::Instrument, subject, instrument);
        }
        if let Some(similar) = bound_text(&binding.similar_artist) {
            vault.add_fact(FactCategory::SimilarArtist, subject, similar);
        }

        let attrs = attributes_from_binding(binding);
        if !attrs.is_empty() {
            vault.merge_attributes(subject, attrs);
        }
    }
}

fn owned_text(property: &Option<crate::metadata::BoundValue>) -> Option<String> {
    bound_text(property).map(str::to_owned)
}

fn attributes_from_binding(binding: &PropertyBinding) -> ArtistAttributes {
    ArtistAttributes {
        biography: owned_text(&binding.abstract_text),
        birth_place: owned_text(&binding.birth_place),
        active_years: owned_text(&binding.active_years),
        associated_acts: owned_text(&binding.associated_act),
        awards: owned_text(&binding.award),
        occupation: owned_text(&binding.occupation),
        nationality: owned_text(&binding.nationality),
        description: owned_text(&binding.description),
        period: owned_text(&binding.period),
        movement: owned_text(&binding.movement),
        education: owned_text(&binding.education),
        alma_mater: owned_text(&binding.alma_mater),
        record_label: owned_text(&binding.record_label),
        member_of: owned_text(&binding.member_of),
        former_band_member: owned_text(&binding.former_band_member),
        background: owned_text(&binding.background),
        career_start: owned_text(&binding.career_start),
        career_end: owned_text(&binding.career_end),
        notable_work: owned_text(&binding.notable_work),
        residence: owned_text(&binding.residence),
        similar_artist: owned_text(&binding.similar_artist),
        influenced: owned_text(&binding.influenced),
        collaborator: owned_text(&binding.collaborator),
        producer: owned_text(&binding.producer),
        writer: owned_text(&binding.writer),
        composer: owned_text(&binding.composer),
    }
}
