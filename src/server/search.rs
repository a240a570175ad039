//! Track search API routes

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use tracing::warn;

use super::session::Session;
use super::state::ServerState;

/// Default and maximum number of tracks returned per search.
const DEFAULT_SEARCH_LIMIT: usize = 10;
const MAX_SEARCH_LIMIT: usize = 50;

#[derive(Deserialize)]
struct SearchBody {
    pub query: String,

    /// Maximum number of results to return (default: 10)
    pub limit: Option<usize>,
}

async fn search(
    _session: Session,
    State(server_state): State<ServerState>,
    Json(payload): Json<SearchBody>,
) -> impl IntoResponse {
    let query = payload.query.trim();
    if query.is_empty() {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let limit = payload
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_LIMIT);

    // Catalog failures degrade to an empty result list.
    let tracks = match server_state.catalog.search_tracks(query, limit).await {
        Ok(tracks) => tracks,
        Err(e) => {
            warn!("Catalog search failed for {:?}: {}", query, e);
            vec![]
        }
    };

    Json(tracks).into_response()
}

pub fn make_search_routes(state: ServerState) -> Router {
    Router::new()
        .route("/search", post(search))
        .with_state(state)
}
