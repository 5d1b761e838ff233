//! TOML-based configuration for the border quiz.
//!
//! Reads `AppConfig` from the platform-appropriate config file:
//! - Windows:  `%APPDATA%\Borders\config.toml`
//! - Linux:    `~/.config/borders/config.toml` (or `$XDG_CONFIG_HOME/borders`)
//! - macOS:    `~/Library/Application Support/Borders/config.toml`
//!
//! Every section and field is optional:
//!
//! ```toml
//! [general]
//! locale = "de"
//! log_level = "debug"
//!
//! [game]
//! max_wrong_attempts = 6
//! min_borders = 2
//!
//! [map]
//! atlas_path = "/usr/share/borders/countries-110m.json"
//! default_zoom = 2
//!
//! [[map.mainland]]
//! country = "Norway"
//! min_lon = 4.0
//! max_lon = 32.0
//! min_lat = 57.0
//! max_lat = 72.0
//! ```
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return value
//! of `some_fn()` when absent, so a missing or partial file still yields a
//! complete configuration.

use std::path::{Path, PathBuf};

use borders_core::game::{GameRules, MIN_TARGET_BORDERS};
use borders_core::geo::{default_mainland_boxes, MainlandBox, Projector, Zoom};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub map: MapConfig,
}

/// Locale and logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Display locale tag (`"en"` or `"de"`).
    #[serde(default = "default_locale")]
    pub locale: String,
    /// `tracing` log level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Round rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    /// Wrong guesses allowed before a round is lost.
    #[serde(default = "default_max_wrong_attempts")]
    pub max_wrong_attempts: u32,
    /// Minimum number of borders for a country to be picked as target.
    #[serde(default = "default_min_borders")]
    pub min_borders: usize,
}

/// Map rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    /// TopoJSON/GeoJSON world atlas.  Without one the map is not rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atlas_path: Option<PathBuf>,
    /// Width of the projected plane.
    #[serde(default = "default_map_width")]
    pub width: f64,
    /// Height of the projected plane.
    #[serde(default = "default_map_height")]
    pub height: f64,
    /// Zoom every round starts at: 0.5, 1, 2, 4 or 8.
    #[serde(default = "default_zoom")]
    pub default_zoom: f64,
    /// Extra mainland rules; an entry for a country replaces its built-in rule.
    #[serde(default)]
    pub mainland: Vec<MainlandEntry>,
}

/// One `[[map.mainland]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MainlandEntry {
    pub country: String,
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_locale() -> String {
    "en".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_max_wrong_attempts() -> u32 {
    GameRules::default().max_wrong_attempts
}
fn default_min_borders() -> usize {
    GameRules::default().min_borders
}
fn default_map_width() -> f64 {
    borders_core::geo::MAP_WIDTH
}
fn default_map_height() -> f64 {
    borders_core::geo::MAP_HEIGHT
}
fn default_zoom() -> f64 {
    Zoom::DEFAULT.factor()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            log_level: default_log_level(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_wrong_attempts: default_max_wrong_attempts(),
            min_borders: default_min_borders(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            atlas_path: None,
            width: default_map_width(),
            height: default_map_height(),
            default_zoom: default_zoom(),
            mainland: Vec::new(),
        }
    }
}

// ── Conversions into domain types ─────────────────────────────────────────────

impl AppConfig {
    /// Checks ranges that TOML types alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.max_wrong_attempts == 0 {
            return Err(ConfigError::Invalid {
                field: "game.max_wrong_attempts",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.game.min_borders < MIN_TARGET_BORDERS {
            return Err(ConfigError::Invalid {
                field: "game.min_borders",
                reason: format!(
                    "must be at least {MIN_TARGET_BORDERS}, got {}",
                    self.game.min_borders
                ),
            });
        }
        for (field, value) in [("map.width", self.map.width), ("map.height", self.map.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        self.map.zoom()?;
        if let Some(entry) = self
            .map
            .mainland
            .iter()
            .find(|m| m.min_lon > m.max_lon || m.min_lat > m.max_lat)
        {
            return Err(ConfigError::Invalid {
                field: "map.mainland",
                reason: format!("box for {} has min greater than max", entry.country),
            });
        }
        Ok(())
    }
}

impl GameConfig {
    pub fn rules(&self) -> GameRules {
        GameRules {
            max_wrong_attempts: self.max_wrong_attempts,
            min_borders: self.min_borders,
        }
    }
}

impl MapConfig {
    /// The configured starting zoom.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] unless the value is a supported step.
    pub fn zoom(&self) -> Result<Zoom, ConfigError> {
        Zoom::from_factor(self.default_zoom).ok_or_else(|| ConfigError::Invalid {
            field: "map.default_zoom",
            reason: format!("must be one of 0.5, 1, 2, 4, 8, got {}", self.default_zoom),
        })
    }

    /// Built-in mainland rules overlaid with the configured ones.
    pub fn mainland_boxes(&self) -> Vec<MainlandBox> {
        let mut boxes = default_mainland_boxes();
        for entry in &self.mainland {
            let rule = MainlandBox {
                country: entry.country.clone(),
                min_lon: entry.min_lon,
                max_lon: entry.max_lon,
                min_lat: entry.min_lat,
                max_lat: entry.max_lat,
            };
            match boxes
                .iter_mut()
                .find(|b| borders_core::same_name(&b.country, &entry.country))
            {
                Some(existing) => *existing = rule,
                None => boxes.push(rule),
            }
        }
        boxes
    }

    pub fn projector(&self) -> Projector {
        Projector::new(self.width, self.height).with_mainland(self.mainland_boxes())
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from the platform config file.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads and validates `AppConfig` from `path`, returning
/// `AppConfig::default()` if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// [`ConfigError::Parse`] if the TOML is malformed, and
/// [`ConfigError::Invalid`] for out-of-range values.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str::<AppConfig>(&content)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no config at {}, using defaults", path.display());
            AppConfig::default()
        }
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };
    config.validate()?;
    Ok(config)
}

/// Resolves the platform config base directory including the `borders` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Borders"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("borders"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Borders")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
