//! Application Configuration
//!
//! Read-only settings loaded from `lang-switch.toml` in the platform config
//! directory. The active language is never written back.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::error::Result;
use crate::helpers::config_dir;
use crate::i18n::Language;

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "lang-switch.toml";

const MIN_WINDOW_WIDTH: f32 = 320.0;
const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Main window size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 640.0,
        }
    }
}

impl WindowConfig {
    /// Size clamped to the smallest usable window.
    ///
    /// Non-finite values (`inf`, `nan` are valid TOML floats) fall back to the default.
    pub fn clamped(self) -> Self {
        let defaults = Self::default();
        let finite_or = |value: f32, default: f32| if value.is_finite() { value } else { default };

        Self {
            width: finite_or(self.width, defaults.width).max(MIN_WINDOW_WIDTH),
            height: finite_or(self.height, defaults.height).max(MIN_WINDOW_HEIGHT),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Language shown at startup
    pub language: Option<Language>,
    /// Main window settings
    pub window: WindowConfig,
}

impl AppConfig {
    /// Path of the config file
    pub fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from disk; a missing file yields defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load config from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = ?path, "No config file, using defaults");
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;
        Self::parse(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
        })
    }

    /// Parse config from TOML text
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Startup language: configured value, then system locale, then Serbian
    pub fn initial_language(&self) -> Language {
        Self::resolve_language(self.language, Language::from_system_locale())
    }

    /// Pick the startup language from the configured and detected values
    pub fn resolve_language(configured: Option<Language>, system: Option<Language>) -> Language {
        configured.or(system).unwrap_or_default()
    }
}
