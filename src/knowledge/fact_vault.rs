//! Accumulating store of metadata facts for one discovery session.

use std::collections::{BTreeMap, BTreeSet};

use super::fact::{ArtistAttributes, FactCategory};

/// Repository of typed facts keyed by subject id, grouped by category,
/// plus one free-form attribute record per subject.
///
/// The vault only grows: there is no retraction, and removing a track
/// from the playlist does not remove the facts it contributed. Ordered
/// collections keep iteration deterministic, which the recommender
/// relies on for reproducible ranking.
#[derive(Clone, Debug, Default)]
pub struct FactVault {
    facts: BTreeMap<FactCategory, BTreeMap<String, BTreeSet<String>>>,
    attributes: BTreeMap<String, ArtistAttributes>,
}

impl FactVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fact. Values are deduplicated per (category, subject):
    /// re-adding an existing value is a no-op.
    pub fn add_fact(&mut self, category: FactCategory, subject: &str, value: impl Into<String>) {
        self.facts
            .entry(category)
            .or_default()
            .entry(subject.to_owned())
            .or_default()
            .insert(value.into());
    }

    /// Merges a partial attribute record into the subject's record, with
    /// "last non-absent value wins" per field.
    pub fn merge_attributes(&mut self, subject: &str, partial: ArtistAttributes) {
        self.attributes
            .entry(subject.to_owned())
            .or_default()
            .merge(partial);
    }

    /// Values recorded for `category` under `subject`.
    pub fn values_for(&self, category: FactCategory, subject: &str) -> Option<&BTreeSet<String>> {
        self.facts.get(&category)?.get(subject)
    }

    /// Union across every subject of all values recorded for `category`.
    /// This is the comparison vocabulary for scoring.
    pub fn all_values(&self, category: FactCategory) -> BTreeSet<&str> {
        self.facts
            .get(&category)
            .into_iter()
            .flat_map(|by_subject| by_subject.values())
            .flat_map(|values| values.iter())
            .map(String::as_str)
            .collect()
    }

    /// Subjects with at least one genre fact, in ascending id order.
    /// This is the candidate universe for recommendation generation.
    pub fn subjects_with_facts(&self) -> Vec<&str> {
        self.facts
            .get(&FactCategory::Genre)
            .into_iter()
            .flat_map(|by_subject| by_subject.keys())
            .map(String::as_str)
            .collect()
    }

    /// The merged attribute record for `subject`, default-empty if no
    /// attributes were ever written.
    pub fn attributes(&self, subject: &str) -> ArtistAttributes {
        self.attributes.get(subject).cloned().unwrap_or_default()
    }

    /// Total number of distinct (category, subject, value) facts.
    pub fn fact_count(&self) -> usize {
        self.facts
            .values()
            .flat_map(|by_subject| by_subject.values())
            .map(|values| values.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty() && self.attributes.is_empty()
    }
}
