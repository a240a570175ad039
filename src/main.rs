use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod catalog;
use catalog::CatalogClient;

mod config;
use config::{AppConfig, CliConfig, FileConfig};

mod knowledge;

mod metadata;

mod playlist;

mod server;
use server::run_server;
use server::RequestsLoggingLevel;

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to an optional TOML config file. File values override CLI flags.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Base URL of the track catalog API.
    #[clap(long)]
    pub catalog_api_base: Option<String>,

    /// Token endpoint of the track catalog API.
    #[clap(long)]
    pub catalog_token_endpoint: Option<String>,

    /// Catalog API client id (falls back to CATALOG_CLIENT_ID).
    #[clap(long)]
    pub catalog_client_id: Option<String>,

    /// Catalog API client secret (falls back to CATALOG_CLIENT_SECRET).
    #[clap(long)]
    pub catalog_client_secret: Option<String>,

    /// Base URL of the metadata (MusicBrainz) API.
    #[clap(long)]
    pub metadata_api_base: Option<String>,

    /// User agent sent to the metadata API.
    #[clap(long)]
    pub metadata_user_agent: Option<String>,
}

impl CliArgs {
    fn into_cli_config(self) -> (Option<PathBuf>, CliConfig) {
        let config_path = self.config;
        let cli = CliConfig {
            port: self.port,
            logging_level: self.logging_level,
            frontend_dir_path: self.frontend_dir_path,
            catalog_api_base: self.catalog_api_base,
            catalog_token_endpoint: self.catalog_token_endpoint,
            catalog_client_id: self.catalog_client_id,
            catalog_client_secret: self.catalog_client_secret,
            metadata_api_base: self.metadata_api_base,
            metadata_user_agent: self.metadata_user_agent,
        };
        (config_path, cli)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let (config_path, cli_config) = cli_args.into_cli_config();

    let file_config = match &config_path {
        Some(path) => {
            info!("Loading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };

    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!("Connecting catalog client to {}...", config.catalog.api_base);
    let catalog = Arc::new(CatalogClient::new(
        &config.catalog.api_base,
        &config.catalog.token_endpoint,
        &config.catalog.client_id,
        &config.catalog.client_secret,
    )?);

    info!(
        "Using metadata source at {}...",
        config.metadata.api_base
    );
    let metadata = Arc::new(config.build_metadata_client()?);

    info!("Ready to serve at port {}!", config.port);
    run_server(
        catalog,
        metadata,
        config.logging_level,
        config.port,
        config.frontend_dir_path,
    )
    .await
}
