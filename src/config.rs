//! Configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by the user file found in the config directory (`--config-dir`,
//! default: the current directory). The breakpoint table is read once here and
//! then passed around as an immutable value.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [breakpoints]             # Minimum viewport width (px) per breakpoint
//! xs = 0
//! sm = 576
//! md = 768
//! lg = 992
//! xl = 1200
//! xxl = 1400
//!
//! [placeholder]
//! format = "jpg"            # Format query for the low-quality placeholder
//! quality = 10              # Placeholder quality (0-100)
//!
//! [render]
//! lazy = true               # Placeholder first, full picture lazily
//! dimensions_fit = false    # Size from intrinsic dimensions, no aspect padding
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [breakpoints]
//! lg = 1024
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::breakpoints::BreakpointTable;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `config.toml`.
///
/// All fields have defaults; user files only specify overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PictureConfig {
    /// Viewport thresholds per breakpoint.
    pub breakpoints: BreakpointTable,
    /// Low-quality placeholder settings.
    pub placeholder: PlaceholderConfig,
    /// Defaults for image sets that do not set them.
    pub render: RenderConfig,
}

impl PictureConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.breakpoints.validate().map_err(ConfigError::Validation)?;
        if self.placeholder.quality > 100 {
            return Err(ConfigError::Validation(
                "placeholder.quality must be 0-100".into(),
            ));
        }
        if self.placeholder.format.trim().is_empty() {
            return Err(ConfigError::Validation(
                "placeholder.format must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Low-quality placeholder shown while a lazy picture is off-screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaceholderConfig {
    /// Value of the `format` query parameter, e.g. `"jpg"`.
    pub format: String,
    /// Value of the `quality` query parameter (0 = worst, 100 = best).
    pub quality: u32,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            format: "jpg".to_string(),
            quality: 10,
        }
    }
}

impl PlaceholderConfig {
    /// Query string appended to the xs URL, e.g. `?format=jpg&quality=10`.
    pub fn query(&self) -> String {
        format!("?format={}&quality={}", self.format, self.quality)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub lazy: bool,
    pub dimensions_fit: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            lazy: true,
            dimensions_fit: false,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(PictureConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
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

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<PictureConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: PictureConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(dir: &Path) -> Result<PictureConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(dir)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# picture-frame configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Breakpoints
# ---------------------------------------------------------------------------
# Minimum viewport width, in CSS pixels, at which each breakpoint applies.
# Must strictly increase from xs to xxl.
[breakpoints]
xs = 0
sm = 576
md = 768
lg = 992
xl = 1200
xxl = 1400

# ---------------------------------------------------------------------------
# Placeholder
# ---------------------------------------------------------------------------
# Lazy pictures first show the xs image at low quality, requested as
# <xs url>?format=<format>&quality=<quality>.
[placeholder]
format = "jpg"

# 0 = worst, 100 = best.
quality = 10

# ---------------------------------------------------------------------------
# Rendering defaults (an image set may override these)
# ---------------------------------------------------------------------------
[render]
# Render the placeholder and mark the full picture for lazy loading.
lazy = true

# Size the wrapper from the image's intrinsic width/height instead of
# reserving space with aspect-ratio padding.
dimensions_fit = false
"##
}
