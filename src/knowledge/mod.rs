//! The discovery core: fact accumulation and recommendation scoring.

mod fact;
mod fact_vault;
mod ingest;
mod recommender;

pub use fact::{ArtistAttributes, FactCategory};
pub use fact_vault::FactVault;
pub use ingest::ingest_bindings;
pub use recommender::{generate_recommendations, MatchDetails, Recommendation, MAX_RECOMMENDATIONS};
