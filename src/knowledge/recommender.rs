//! Weighted overlap scoring of fact vault subjects.

use serde::Serialize;
use tracing::debug;

use super::fact::{ArtistAttributes, FactCategory};
use super::fact_vault::FactVault;

/// Ranked recommendation lists are capped at this many entries.
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Match provenance for one recommendation candidate.
#[derive(Clone, Debug, Default, Serialize)]
pub struct MatchDetails {
    pub genres: Vec<String>,
    pub influences: Vec<String>,
    pub styles: Vec<String>,
    pub instruments: Vec<String>,
    pub similar_artists: Vec<String>,
    pub matching_factors: Vec<String>,
    pub artist_info: ArtistAttributes,
}

impl MatchDetails {
    fn factor_count(&self) -> usize {
        self.matching_factors.len()
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Recommendation {
    pub id: String,
    pub score: f64,
    pub match_details: MatchDetails,
    pub name: String,
    pub description: String,
    pub artist_info: ArtistAttributes,
}

/// Scores every candidate subject against the vault's global category
/// vocabularies and returns the top matches, score-descending.
///
/// The candidate universe is every subject with at least one genre fact,
/// and the comparison vocabulary is the union of all values ever recorded
/// per category — including values contributed by the candidate itself.
/// Equal scores keep ascending subject-id order (the walk order, preserved
/// by the stable sort). Deterministic for a fixed vault snapshot.
///
/// `playlist_artists` is the presentation layer's view of the playlist; it
/// is logged for provenance but does not constrain scoring.
pub fn generate_recommendations(
    vault: &FactVault,
    playlist_artists: &[String],
) -> Vec<Recommendation> {
    debug!(
        "Generating recommendations; playlist artists: {:?}, known facts: {}",
        playlist_artists,
        vault.fact_count()
    );

    let genre_vocab = vault.all_values(FactCategory::Genre);
    let influence_vocab = vault.all_values(FactCategory::Influence);
    let style_vocab = vault.all_values(FactCategory::Style);
    let instrument_vocab = vault.all_values(FactCategory::Instrument);
    let similar_vocab = vault.all_values(FactCategory::SimilarArtist);

    let mut recommendations = Vec::new();

    for subject in vault.subjects_with_facts() {
        let mut score = 0.0;
        let mut details = MatchDetails {
            artist_info: vault.attributes(subject),
            ..Default::default()
        };

        if let Some(genres) = vault.values_for(FactCategory::Genre, subject) {
            for genre in genres {
                if genre_vocab.contains(genre.as_str()) {
                    score += FactCategory::Genre.weight();
                    details.genres.push(genre.clone());
                    details
                        .matching_factors
                        .push(format!("{}: {}", FactCategory::Genre.label(), genre));
                }
            }
        }

        if let Some(influences) = vault.values_for(FactCategory::Influence, subject) {
            for influence in influences {
                if influence_vocab.contains(influence.as_str()) {
                    score += FactCategory::Influence.weight();
                    details.influences.push(influence.clone());
                    details
                        .matching_factors
                        .push(format!("{}: {}", FactCategory::Influence.label(), influence));
                }
            }
        }

        if let Some(styles) = vault.values_for(FactCategory::Style, subject) {
            for style in styles {
                if style_vocab.contains(style.as_str()) {
                    score += FactCategory::Style.weight();
                    details.styles.push(style.clone());
                    details
                        .matching_factors
                        .push(format!("{}: {}", FactCategory::Style.label(), style));
                }
            }
        }

        if let Some(instruments) = vault.values_for(FactCategory::Instrument, subject) {
            for instrument in instruments {
                if instrument_vocab.contains(instrument.as_str()) {
                    score += FactCategory::Instrument.weight();
                    details.instruments.push(instrument.clone());
                    details.matching_factors.push(format!(
                        "{}: {}",
                        FactCategory::Instrument.label(),
                        instrument
                    ));
                }
            }
        }

        if let Some(similars) = vault.values_for(FactCategory::SimilarArtist, subject) {
            for similar in similars {
                if similar_vocab.contains(similar.as_str()) {
                    score += FactCategory::SimilarArtist.weight();
                    details.similar_artists.push(similar.clone());
                    details.matching_factors.push(format!(
                        "{}: {}",
                        FactCategory::SimilarArtist.label(),
                        similar
                    ));
                }
            }
        }

        if score > 0.0 {
            let name = format!(
                "Recommendation based on {} shared factors",
                details.factor_count()
            );
            let description = format!(
                "Matched on {} genres, {} influences, {} styles, {} instruments and {} similar artists.",
                details.genres.len(),
                details.influences.len(),
                details.styles.len(),
                details.instruments.len(),
                details.similar_artists.len()
            );
            recommendations.push(Recommendation {
                id: subject.to_owned(),
                score,
                name,
                description,
                artist_info: details.artist_info.clone(),
                match_details: details,
            });
        }
    }

    // Stable sort: equal scores stay in the subject-id walk order.
    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
