//! Anonymous discovery sessions.
//!
//! Each session owns one playlist and one fact vault; the token is the
//! only handle to them. Sessions live for the process lifetime — state is
//! deliberately in-memory only.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;
use uuid::Uuid;

use crate::knowledge::FactVault;
use crate::playlist::Playlist;

use super::state::ServerState;

pub const COOKIE_SESSION_TOKEN_KEY: &str = "session_token";
pub const HEADER_SESSION_TOKEN_KEY: &str = "Authorization";

/// The state owned by one user session.
#[derive(Debug, Default)]
pub struct DiscoverySession {
    pub playlist: Playlist,
    pub fact_vault: FactVault,
}

pub type GuardedSession = Arc<Mutex<DiscoverySession>>;

struct SessionEntry {
    session: GuardedSession,
    created_at: DateTime<Utc>,
}

/// Registry of live sessions, keyed by opaque token.
#[derive(Default)]
pub struct SessionVault {
    sessions: Mutex<HashMap<String, SessionEntry>>,
}

impl SessionVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh session and returns its token.
    pub fn create(&self) -> String {
        let token = Uuid::new_v4().to_string();
        let entry = SessionEntry {
            session: Arc::new(Mutex::new(DiscoverySession::default())),
            created_at: Utc::now(),
        };
        self.sessions.lock().unwrap().insert(token.clone(), entry);
        debug!("Created session {}", token);
        token
    }

    pub fn get(&self, token: &str) -> Option<GuardedSession> {
        self.sessions
            .lock()
            .unwrap()
            .get(token)
            .map(|entry| entry.session.clone())
    }

    pub fn count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn created_at(&self, token: &str) -> Option<DateTime<Utc>> {
        self.sessions
            .lock()
            .unwrap()
            .get(token)
            .map(|entry| entry.created_at)
    }
}

/// A resolved session, extracted from the request's cookie or
/// Authorization header.
pub struct Session {
    pub token: String,
    pub session: GuardedSession,
}

pub enum SessionExtractionError {
    AccessDenied,
}

impl IntoResponse for SessionExtractionError {
    fn into_response(self) -> axum::response::Response {
        match self {
            SessionExtractionError::AccessDenied => StatusCode::FORBIDDEN.into_response(),
        }
    }
}

async fn extract_session_token_from_cookies(
    parts: &mut Parts,
    ctx: &ServerState,
) -> Option<String> {
    CookieJar::from_request_parts(parts, &ctx)
        .await
        .expect("Could not read cookies into CookieJar.")
        .get(COOKIE_SESSION_TOKEN_KEY)
        .map(Cookie::value)
        .map(|s| s.to_string())
}

fn extract_session_token_from_headers(parts: &mut Parts) -> Option<String> {
    parts
        .headers
        .get(HEADER_SESSION_TOKEN_KEY)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

async fn extract_session_from_request_parts(
    parts: &mut Parts,
    ctx: &ServerState,
) -> Option<Session> {
    let token = match extract_session_token_from_cookies(parts, ctx)
        .await
        .or_else(|| extract_session_token_from_headers(parts))
    {
        None => {
            debug!("No session token in cookies nor headers.");
            return None;
        }
        Some(x) => x,
    };

    match ctx.sessions.get(&token) {
        Some(session) => Some(Session { token, session }),
        None => {
            debug!("Unknown session token {}", token);
            None
        }
    }
}

impl FromRequestParts<ServerState> for Session {
    type Rejection = SessionExtractionError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        extract_session_from_request_parts(parts, ctx)
            .await
            .ok_or(SessionExtractionError::AccessDenied)
    }
}

impl FromRequestParts<ServerState> for Option<Session> {
    type Rejection = SessionExtractionError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        Ok(extract_session_from_request_parts(parts, ctx).await)
    }
}
