//! Application configuration for castpress.
//!
//! User config lives at `~/.castpress/castpress.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CastpressError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "castpress.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".castpress";

// ---------------------------------------------------------------------------
// Config structs (matching castpress.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input/output file locations.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Restore heuristic settings.
    #[serde(default)]
    pub restore: RestoreConfig,

    /// Static-site rendering settings.
    #[serde(default)]
    pub site: SiteConfig,
}

/// `[paths]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Canonical catalog file (the clean backup).
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,

    /// Manually edited overlay file merged into the catalog.
    #[serde(default = "default_overlay_file")]
    pub overlay_file: String,

    /// Pretty-printed JSON output.
    #[serde(default = "default_json_out")]
    pub json_out: String,

    /// Embeddable data script output (`const PODCAST_DATA = ...;`).
    #[serde(default = "default_data_script_out")]
    pub data_script_out: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            catalog_file: default_catalog_file(),
            overlay_file: default_overlay_file(),
            json_out: default_json_out(),
            data_script_out: default_data_script_out(),
        }
    }
}

fn default_catalog_file() -> String {
    "podcast_episodes.json".into()
}
fn default_overlay_file() -> String {
    "user_manual_update.json".into()
}
fn default_json_out() -> String {
    "podcast_episodes_updated.json".into()
}
fn default_data_script_out() -> String {
    "episodes_data.js".into()
}

/// `[restore]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoreConfig {
    /// Which qualifying rule decides when a trailing paragraph gets the
    /// "Extended description" heading: "strict" or "relaxed".
    #[serde(default = "default_extended_policy")]
    pub extended_policy: String,
}

impl Default for RestoreConfig {
    fn default() -> Self {
        Self {
            extended_policy: default_extended_policy(),
        }
    }
}

fn default_extended_policy() -> String {
    "strict".into()
}

/// `[site]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// How many episode cards the home page grid shows.
    #[serde(default = "default_home_limit")]
    pub home_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            home_limit: default_home_limit(),
        }
    }
}

fn default_home_limit() -> usize {
    3
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.castpress/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CastpressError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.castpress/castpress.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CastpressError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| CastpressError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| CastpressError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| CastpressError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| CastpressError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
