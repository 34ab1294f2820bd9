//! Shared types, error model, and configuration for castpress.
//!
//! This crate is the foundation depended on by all other castpress crates.
//! It provides:
//! - [`CastpressError`] — the unified error type
//! - Domain types ([`Episode`], [`Catalog`], [`EpisodeId`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, PathsConfig, RestoreConfig, SiteConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{CastpressError, Result};
pub use types::{Catalog, Episode, EpisodeId};
