use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tower_http::services::ServeDir;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::session::{Session, SessionVault, COOKIE_SESSION_TOKEN_KEY};
use super::state::{GuardedMetadataSource, GuardedTrackCatalog, ServerState};
use super::{log_requests, make_playlist_routes, make_recommendation_routes, make_search_routes};
use super::{RequestsLoggingLevel, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub active_sessions: usize,
    pub session_token: Option<String>,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(session: Option<Session>, State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        active_sessions: state.sessions.count(),
        session_token: session.map(|s| s.token),
    };
    Json(stats)
}

#[derive(Serialize)]
struct CreateSessionResponse {
    token: String,
}

async fn create_session(State(state): State<ServerState>, jar: CookieJar) -> impl IntoResponse {
    let token = state.sessions.create();

    let cookie = Cookie::build(Cookie::new(COOKIE_SESSION_TOKEN_KEY, token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    (
        StatusCode::CREATED,
        jar.add(cookie),
        Json(CreateSessionResponse { token }),
    )
}

pub fn make_app(
    config: ServerConfig,
    catalog: GuardedTrackCatalog,
    metadata: GuardedMetadataSource,
    sessions: Arc<SessionVault>,
) -> Router {
    let state = ServerState::new(config.clone(), catalog, metadata, sessions);

    let v1_routes: Router = Router::new()
        .route("/session", post(create_session))
        .with_state(state.clone())
        .merge(make_search_routes(state.clone()))
        .merge(make_playlist_routes(state.clone()))
        .merge(make_recommendation_routes(state.clone()));

    let home_router: Router = match &config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    let app: Router = home_router.nest("/v1", v1_routes);

    app.layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(
    catalog: GuardedTrackCatalog,
    metadata: GuardedMetadataSource,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
    frontend_dir_path: Option<String>,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
        frontend_dir_path,
    };
    let sessions = Arc::new(SessionVault::new());
    let app = make_app(config, catalog, metadata, sessions);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received, stopping server...");
            }
        })
        .await?;

    Ok(())
}
