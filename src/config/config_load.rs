// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::{CameraConfig, StyleConfig, WalkConfig, WindowConfig};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Largest accepted spawn/reset radius. Start points are sampled from
/// `[-r, r]`, whose width must stay finite.
pub const MAX_SPAWN_RADIUS: f32 = 1.0e6;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub walk: WalkConfig,
    pub camera: CameraConfig,
    pub style: StyleConfig,
}

impl Config {
    /// Loads the first config.toml found next to the executable or in the
    /// working directory. Falls back to built-in defaults when neither exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::candidate_paths().into_iter().find(|p| p.exists()) {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading config");
                Self::load_from_path(&path)
            }
            None => {
                tracing::warn!("no {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        {
            paths.push(exe_dir.join(CONFIG_FILE_NAME));
        }
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
        paths
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.camera.min_zoom.is_finite() || self.camera.min_zoom <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "camera.min_zoom must be positive and finite, got {}",
                self.camera.min_zoom
            )));
        }
        for (name, value) in [
            ("camera.pan_speed", self.camera.pan_speed),
            ("camera.zoom_speed", self.camera.zoom_speed),
            ("camera.fine_zoom_factor", self.camera.fine_zoom_factor),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.walk.count == 0 {
            return Err(ConfigError::Invalid("walk.count must be at least 1".into()));
        }
        if self.walk.iterations == 0 {
            return Err(ConfigError::Invalid(
                "walk.iterations must be at least 1".into(),
            ));
        }
        for (name, radius) in [
            ("walk.spawn_radius", self.walk.spawn_radius),
            ("walk.reset_radius", self.walk.reset_radius),
        ] {
            if !radius.is_finite() || !(0.0..=MAX_SPAWN_RADIUS).contains(&radius) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within [0, {MAX_SPAWN_RADIUS}], got {radius}"
                )));
            }
        }
        if self.style.palette.is_empty() {
            return Err(ConfigError::Invalid("style.palette is empty".into()));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid("window size must be non-zero".into()));
        }
        Ok(())
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(s).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
}
