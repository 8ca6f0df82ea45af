//! Application configuration module.
//!
//! Handles loading, validating, and merging `genimg.toml`. Stock defaults are
//! the base layer; a user file overrides any subset of keys on top of them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [defaults]
//! width = 1440              # Seed width for a fresh session
//! height = 1080             # Seed height for a fresh session
//!
//! [gallery]
//! image_base_url = "https://s.jyj.cx/proj/GenImg/"
//!
//! [generation]
//! model = "black-forest-labs/FLUX.1-schnell-Free"
//! steps = 4                 # Diffusion steps per image
//! count = 1                 # Images per request
//! response_format = "base64"
//!
//! [store]
//! dir = ".genimg"           # Where the session and gallery are kept
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse: override just the values you want:
//!
//! ```toml
//! [generation]
//! steps = 8
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::dimensions::{MAX_DIMENSION, MIN_DIMENSION};

/// Default location of the config file, relative to the working directory.
pub const CONFIG_FILENAME: &str = "genimg.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Application configuration loaded from `genimg.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Seed dimensions for a session with nothing saved yet.
    pub defaults: DefaultsConfig,
    /// Where generated images are served from.
    pub gallery: GalleryConfig,
    /// Provider settings attached to every generation request.
    pub generation: GenerationConfig,
    /// Local persistence settings.
    pub store: StoreConfig,
}

impl AppConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if !range.contains(&self.defaults.width) || !range.contains(&self.defaults.height) {
            return Err(ConfigError::Validation(format!(
                "defaults.width and defaults.height must be {MIN_DIMENSION}-{MAX_DIMENSION}"
            )));
        }
        if self.generation.steps == 0 {
            return Err(ConfigError::Validation(
                "generation.steps must be at least 1".into(),
            ));
        }
        if self.generation.count == 0 {
            return Err(ConfigError::Validation(
                "generation.count must be at least 1".into(),
            ));
        }
        if self.generation.model.trim().is_empty() {
            return Err(ConfigError::Validation(
                "generation.model must not be empty".into(),
            ));
        }
        if self.gallery.image_base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "gallery.image_base_url must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Seed dimensions for a fresh session.
///
/// These are loaded as-is, so they only need to be in range; the first
/// dimension edit puts them on the 16px grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            width: 1440,
            height: 1080,
        }
    }
}

/// Gallery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Prefix joined with a photo's filename to build its `src`.
    pub image_base_url: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            image_base_url: "https://s.jyj.cx/proj/GenImg/".to_string(),
        }
    }
}

/// Image-generation provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Provider model identifier.
    pub model: String,
    /// Diffusion steps per image.
    pub steps: u32,
    /// Images per request (`n` in the provider payload).
    pub count: u32,
    /// How the provider returns image data.
    pub response_format: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "black-forest-labs/FLUX.1-schnell-Free".to_string(),
            steps: 4,
            count: 1,
            response_format: "base64".to_string(),
        }
    }
}

/// Local persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory holding one JSON file per stored key.
    pub dir: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: ".genimg".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(AppConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        log::debug!("no config at {}, using stock defaults", path.display());
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<AppConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: AppConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the file at `path`.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `genimg.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# genimg Configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Fresh-session dimensions
# ---------------------------------------------------------------------------
[defaults]
# Used until the first dimension edit is saved. Must be 64-1440.
width = 1440
height = 1080

# ---------------------------------------------------------------------------
# Gallery
# ---------------------------------------------------------------------------
[gallery]
# Prefix joined with each image filename to build its URL.
image_base_url = "https://s.jyj.cx/proj/GenImg/"

# ---------------------------------------------------------------------------
# Generation provider
# ---------------------------------------------------------------------------
[generation]
model = "black-forest-labs/FLUX.1-schnell-Free"

# Diffusion steps per image.
steps = 4

# Images per request.
count = 1

# How image data comes back from the provider.
response_format = "base64"

# ---------------------------------------------------------------------------
# Local store
# ---------------------------------------------------------------------------
[store]
# Directory holding the saved session and gallery (one JSON file per key).
dir = ".genimg"
"##
}
