//! Tunescout Discovery Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog;
pub mod config;
pub mod knowledge;
pub mod metadata;
pub mod playlist;
pub mod server;

// Re-export commonly used types for convenience
pub use knowledge::{generate_recommendations, ingest_bindings, FactVault, Recommendation};
pub use server::{run_server, RequestsLoggingLevel};
