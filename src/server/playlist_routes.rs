//! Playlist API routes.
//!
//! Adding a track is the ingestion trigger: the track's primary artist is
//! looked up in the metadata source and the resulting bindings are folded
//! into the session's fact vault before recommendations are recomputed.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Track;
use crate::knowledge::{generate_recommendations, ingest_bindings, Recommendation};

use super::session::Session;
use super::state::ServerState;

#[derive(Deserialize, Debug)]
struct AddTrackBody {
    pub track: Track,
}

#[derive(Serialize)]
struct AddTrackResponse {
    pub added: bool,
    pub playlist_len: usize,
    pub recommendations: Vec<Recommendation>,
}

async fn get_playlist(session: Session) -> Response {
    let locked = session.session.lock().unwrap();
    Json(locked.playlist.tracks().to_vec()).into_response()
}

async fn add_track(
    session: Session,
    State(state): State<ServerState>,
    Json(payload): Json<AddTrackBody>,
) -> Response {
    let track = payload.track;

    let (added, playlist_len) = {
        let mut locked = session.session.lock().unwrap();
        let added = locked.playlist.add(track.clone());
        (added, locked.playlist.len())
    };

    if !added {
        // Duplicate adds are a no-op; report current recommendations.
        let locked = session.session.lock().unwrap();
        let recommendations =
            generate_recommendations(&locked.fact_vault, &locked.playlist.artist_names());
        return Json(AddTrackResponse {
            added: false,
            playlist_len,
            recommendations,
        })
        .into_response();
    }

    // Metadata fetch happens outside the session lock; a failed lookup is
    // an empty binding sequence, never an error response.
    let bindings = match track.primary_artist() {
        Some(artist) => state.metadata.artist_bindings(&artist.name).await,
        None => vec![],
    };

    let recommendations = {
        let mut locked = session.session.lock().unwrap();
        ingest_bindings(&mut locked.fact_vault, &track.id, &bindings);
        generate_recommendations(&locked.fact_vault, &locked.playlist.artist_names())
    };

    info!(
        "Added track {} to playlist ({} bindings ingested, {} recommendations)",
        track.id,
        bindings.len(),
        recommendations.len()
    );

    Json(AddTrackResponse {
        added: true,
        playlist_len,
        recommendations,
    })
    .into_response()
}

async fn remove_track(session: Session, Path(track_id): Path<String>) -> Response {
    let removed = {
        let mut locked = session.session.lock().unwrap();
        // Facts contributed by the track stay in the vault; the store only
        // grows for the session lifetime.
        locked.playlist.remove(&track_id)
    };

    if removed {
        StatusCode::NO_CONTENT.into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

pub fn make_playlist_routes(state: ServerState) -> Router {
    Router::new()
        .route("/playlist", get(get_playlist))
        .route("/playlist/tracks", post(add_track))
        .route("/playlist/tracks/{track_id}", delete(remove_track))
        .with_state(state)
}
