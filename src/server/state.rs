use axum::extract::FromRef;

use crate::catalog::TrackCatalog;
use crate::metadata::MetadataSource;
use std::sync::Arc;
use std::time::Instant;

use super::session::SessionVault;
use super::ServerConfig;

pub type GuardedTrackCatalog = Arc<dyn TrackCatalog>;
pub type GuardedMetadataSource = Arc<dyn MetadataSource>;
pub type GuardedSessionVault = Arc<SessionVault>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog: GuardedTrackCatalog,
    pub metadata: GuardedMetadataSource,
    pub sessions: GuardedSessionVault,
}

impl ServerState {
    pub fn new(
        config: ServerConfig,
        catalog: GuardedTrackCatalog,
        metadata: GuardedMetadataSource,
        sessions: GuardedSessionVault,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            catalog,
            metadata,
            sessions,
        }
    }
}

impl FromRef<ServerState> for GuardedTrackCatalog {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog.clone()
    }
}

impl FromRef<ServerState> for GuardedMetadataSource {
    fn from_ref(input: &ServerState) -> Self {
        input.metadata.clone()
    }
}

impl FromRef<ServerState> for GuardedSessionVault {
    fn from_ref(input: &ServerState) -> Self {
        input.sessions.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
