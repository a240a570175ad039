//! Recommendation and metadata inspection routes.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use futures::future::join_all;
use serde::Serialize;
use tracing::warn;

use crate::catalog::Track;
use crate::knowledge::{generate_recommendations, Recommendation};

use super::session::Session;
use super::state::ServerState;

/// How many catalog hits are fetched per playlist artist for the
/// similar-tracks display list, and how many survive overall.
const SIMILAR_TRACKS_PER_ARTIST: usize = 3;
const SIMILAR_TRACKS_LIMIT: usize = 3;

#[derive(Serialize)]
struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
    pub similar_tracks: Vec<Track>,
}

/// Fetches up to three catalog tracks per playlist artist concurrently and
/// deduplicates the union by track id, preserving artist order.
async fn collect_similar_tracks(state: &ServerState, artist_names: &[String]) -> Vec<Track> {
    let searches = artist_names.iter().map(|name| {
        let catalog = state.catalog.clone();
        let query = format!("artist:{}", name);
        async move {
            match catalog
                .search_tracks(&query, SIMILAR_TRACKS_PER_ARTIST)
                .await
            {
                Ok(tracks) => tracks,
                Err(e) => {
                    warn!("Similar-track search failed for {:?}: {}", query, e);
                    vec![]
                }
            }
        }
    });

    let mut similar: Vec<Track> = Vec::new();
    for tracks in join_all(searches).await {
        for track in tracks {
            if !similar.iter().any(|t| t.id == track.id) {
                similar.push(track);
            }
        }
    }
    similar.truncate(SIMILAR_TRACKS_LIMIT);
    similar
}

async fn get_recommendations(session: Session, State(state): State<ServerState>) -> impl IntoResponse {
    // Score under the session lock for a consistent vault snapshot.
    let (artist_names, recommendations) = {
        let locked = session.session.lock().unwrap();
        let names = locked.playlist.artist_names();
        let recommendations = generate_recommendations(&locked.fact_vault, &names);
        (names, recommendations)
    };

    let similar_tracks = collect_similar_tracks(&state, &artist_names).await;

    Json(RecommendationsResponse {
        recommendations,
        similar_tracks,
    })
}

/// Raw property bindings for an artist, for metadata inspection in the
/// presentation layer.
async fn get_artist_metadata(
    _session: Session,
    State(state): State<ServerState>,
    Path(artist_name): Path<String>,
) -> impl IntoResponse {
    Json(state.metadata.artist_bindings(&artist_name).await)
}

pub fn make_recommendation_routes(state: ServerState) -> Router {
    Router::new()
        .route("/recommendations", get(get_recommendations))
        .route("/metadata/{artist_name}", get(get_artist_metadata))
        .with_state(state)
}
