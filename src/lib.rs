//! Songdex Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog;
pub mod config;

// Re-export commonly used types for convenience
pub use catalog::{load_catalog, Catalog, SongRecord};
pub use config::{AppConfig, CliConfig, FileConfig};
