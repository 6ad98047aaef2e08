use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::slider::{SpringConfig, HANDLE_WIDTH, MARGIN, SHIMMER_MS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find config directory")]
    NoConfigDir,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Hex colors for the host screen and the track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: String,
    pub track: String,
    pub handle: String,
    pub text: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#000000".to_string(),
            track: "#2D6844".to_string(),
            handle: "#FFFFFF".to_string(),
            text: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Handle width in terminal columns
    pub handle_width: f32,

    /// Gap between the handle and the track edge, in columns
    pub margin: f32,

    /// Period of one shimmer cycle
    pub shimmer_ms: u64,

    /// Text of the alert shown after a completed swipe
    pub message: String,

    /// Also send a desktop notification on completion
    pub notifications: bool,

    pub spring: SpringConfig,

    pub colors: ColorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            handle_width: HANDLE_WIDTH,
            margin: MARGIN,
            shimmer_ms: SHIMMER_MS,
            message: "Here we go!".to_string(),
            notifications: false,
            spring: SpringConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("swipe-to-start");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!("{}, using defaults", e);
                    return Self::default();
                }
            },
        };

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        config.sanitize();
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::warn!("Could not create config directory: {}", e);
            }
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Geometry and timing must stay positive for the slider math to hold
    fn sanitize(&mut self) {
        let defaults = Self::default();
        if !self.handle_width.is_finite() || self.handle_width < 1.0 {
            self.handle_width = defaults.handle_width;
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            self.margin = defaults.margin;
        }
        if self.shimmer_ms == 0 {
            self.shimmer_ms = defaults.shimmer_ms;
        }
        if !self.spring.is_valid() {
            tracing::warn!(spring = ?self.spring, "Spring would not settle, using defaults");
            self.spring = defaults.spring;
        }
        self.handle_width = self.handle_width.round();
        self.margin = self.margin.round();
    }
}
