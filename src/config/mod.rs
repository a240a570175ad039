mod file_config;

pub use file_config::{CatalogConfig, FileConfig, MetadataConfig};

use crate::catalog::{DEFAULT_API_BASE, DEFAULT_TOKEN_ENDPOINT};
use crate::metadata::MusicBrainzClient;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;

pub const DEFAULT_METADATA_USER_AGENT: &str = "tunescout-discovery-server/0.1";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub catalog_api_base: Option<String>,
    pub catalog_token_endpoint: Option<String>,
    pub catalog_client_id: Option<String>,
    pub catalog_client_secret: Option<String>,
    pub metadata_api_base: Option<String>,
    pub metadata_user_agent: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Core settings
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,

    // External services
    pub catalog: CatalogSettings,
    pub metadata: MetadataSettings,
}

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub api_base: String,
    pub token_endpoint: String,
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone)]
pub struct MetadataSettings {
    pub api_base: String,
    pub user_agent: String,
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present; catalog credentials
    /// fall back to the CATALOG_CLIENT_ID / CATALOG_CLIENT_SECRET env vars.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let catalog_file = file.catalog.unwrap_or_default();
        let client_id = catalog_file
            .client_id
            .or_else(|| cli.catalog_client_id.clone())
            .or_else(|| std::env::var("CATALOG_CLIENT_ID").ok());
        let client_secret = catalog_file
            .client_secret
            .or_else(|| cli.catalog_client_secret.clone())
            .or_else(|| std::env::var("CATALOG_CLIENT_SECRET").ok());

        let (Some(client_id), Some(client_secret)) = (client_id, client_secret) else {
            bail!(
                "Catalog credentials must be provided via CLI flags, the [catalog] \
                 config section, or CATALOG_CLIENT_ID / CATALOG_CLIENT_SECRET"
            );
        };

        let catalog = CatalogSettings {
            api_base: catalog_file
                .api_base
                .or_else(|| cli.catalog_api_base.clone())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            token_endpoint: catalog_file
                .token_endpoint
                .or_else(|| cli.catalog_token_endpoint.clone())
                .unwrap_or_else(|| DEFAULT_TOKEN_ENDPOINT.to_string()),
            client_id,
            client_secret,
        };

        let metadata_file = file.metadata.unwrap_or_default();
        let metadata = MetadataSettings {
            api_base: metadata_file
                .api_base
                .or_else(|| cli.metadata_api_base.clone())
                .unwrap_or_else(|| {
                    crate::metadata::MUSICBRAINZ_API_BASE.to_string()
                }),
            user_agent: metadata_file
                .user_agent
                .or_else(|| cli.metadata_user_agent.clone())
                .unwrap_or_else(|| DEFAULT_METADATA_USER_AGENT.to_string()),
        };

        Ok(AppConfig {
            port,
            logging_level,
            frontend_dir_path,
            catalog,
            metadata,
        })
    }

    pub fn build_metadata_client(&self) -> Result<MusicBrainzClient> {
        MusicBrainzClient::new(&self.metadata.user_agent, &self.metadata.api_base)
    }
}
