pub mod config;
mod http_layers;
mod playlist_routes;
mod recommendations;
mod search;
pub mod server;
pub mod session;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::*;
pub(crate) use playlist_routes::make_playlist_routes;
pub(crate) use recommendations::make_recommendation_routes;
pub(crate) use search::make_search_routes;
#[allow(unused_imports)] // Used by main.rs
pub use server::run_server;
