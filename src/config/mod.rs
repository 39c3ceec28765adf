// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gesture]` - Reset animation duration and drag pinch sensitivity
//! - `[display]` - Background drawn behind the image surface
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `PINCH_LENS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! A missing `settings.toml` is written with the default values on first
//! load, so there is always a file to edit.
//!
//! # Examples
//!
//! ```no_run
//! use pinch_lens::config;
//! use std::path::Path;
//!
//! let (mut config, _warning) = config::load();
//! config.gesture.reset_duration_ms = Some(500);
//! config::save_to_path(&config, Path::new("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the notice shown when `settings.toml` exists but cannot be read.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundTheme {
    Light,
    #[default]
    Dark,
    Checkerboard,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Pinch gesture tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Duration of the eased return to rest, in milliseconds.
    #[serde(
        default = "default_reset_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reset_duration_ms: Option<u64>,

    /// Vertical drag distance (pixels) that multiplies the scale by e.
    #[serde(
        default = "default_drag_sensitivity_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub drag_sensitivity_px: Option<f32>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            reset_duration_ms: default_reset_duration_ms(),
            drag_sensitivity_px: default_drag_sensitivity_px(),
        }
    }
}

impl GestureConfig {
    /// Reset duration clamped to the supported range.
    #[must_use]
    pub fn reset_duration(&self) -> Duration {
        let millis = self
            .reset_duration_ms
            .unwrap_or(DEFAULT_RESET_DURATION_MS)
            .clamp(MIN_RESET_DURATION_MS, MAX_RESET_DURATION_MS);
        Duration::from_millis(millis)
    }

    /// Drag sensitivity clamped to the supported range.
    #[must_use]
    pub fn drag_sensitivity(&self) -> f32 {
        match self.drag_sensitivity_px {
            Some(value) if value.is_finite() => {
                value.clamp(MIN_DRAG_SENSITIVITY_PX, MAX_DRAG_SENSITIVITY_PX)
            }
            _ => DEFAULT_DRAG_SENSITIVITY_PX,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Background drawn behind the image surface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_theme: Option<BackgroundTheme>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            background_theme: Some(BackgroundTheme::default()),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gesture: GestureConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_reset_duration_ms() -> Option<u64> {
    Some(DEFAULT_RESET_DURATION_MS)
}

fn default_drag_sensitivity_px() -> Option<f32> {
    Some(DEFAULT_DRAG_SENSITIVITY_PX)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::debug!("loaded config from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("ignoring unreadable config {}: {err}", path.display());
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
        let config = Config::default();
        match save_to_path(&config, &path) {
            Ok(()) => log::info!("wrote default config to {}", path.display()),
            Err(err) => log::warn!("could not write default config {}: {err}", path.display()),
        }
        return (config, None);
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
