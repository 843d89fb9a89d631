// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[browser]` - Gallery toolbar, initial view mode and sort key
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_GALLERY_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::browser::BrowserOptions;
use crate::application::query::SortKey;
use crate::application::view_mode::ViewMode;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Gallery settings.
// Allow excessive bools: independent toolbar switches mirrored from the file.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserConfig {
    /// Heading shown above the gallery. Falls back to the localized default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default = "default_show_filters")]
    pub show_filters: bool,

    #[serde(default = "default_show_search")]
    pub show_search: bool,

    #[serde(default = "default_show_view_toggle")]
    pub show_view_toggle: bool,

    /// Layout used when the gallery opens.
    #[serde(default)]
    pub default_view_mode: ViewMode,

    /// Sort key used when the gallery opens.
    #[serde(default)]
    pub default_sort: SortKey,

    /// Initialize liked items from the catalog's `liked` flags.
    #[serde(default = "default_seed_likes")]
    pub seed_likes_from_items: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            title: None,
            show_filters: DEFAULT_SHOW_FILTERS,
            show_search: DEFAULT_SHOW_SEARCH,
            show_view_toggle: DEFAULT_SHOW_VIEW_TOGGLE,
            default_view_mode: ViewMode::default(),
            default_sort: SortKey::default(),
            seed_likes_from_items: DEFAULT_SEED_LIKES_FROM_ITEMS,
        }
    }
}

impl BrowserConfig {
    /// Session options for a new browser.
    #[must_use]
    pub fn browser_options(&self) -> BrowserOptions {
        BrowserOptions {
            show_filters: self.show_filters,
            show_search: self.show_search,
            show_view_toggle: self.show_view_toggle,
            view_mode: self.default_view_mode,
            sort: self.default_sort,
            seed_likes: self.seed_likes_from_items,
        }
    }
}

/// Application configuration, one field per section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub browser: BrowserConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_show_filters() -> bool {
    DEFAULT_SHOW_FILTERS
}

fn default_show_search() -> bool {
    DEFAULT_SHOW_SEARCH
}

fn default_show_view_toggle() -> bool {
    DEFAULT_SHOW_VIEW_TOGGLE
}

fn default_seed_likes() -> bool {
    DEFAULT_SEED_LIKES_FROM_ITEMS
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
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

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
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "Failed to load config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// this schema (unknown enum values included).
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
