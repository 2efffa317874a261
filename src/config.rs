//! Start-up configuration: built-in defaults, then `config.toml`, then
//! environment overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::{lightbox::ImageRef, reveal::RevealConfig};

pub const PASSWORD_ENV: &str = "NEONPAGE_PLAYLIST_PASSWORD";
pub const STORAGE_ENV: &str = "NEONPAGE_STORAGE";
pub const CONFIG_ENV: &str = "NEONPAGE_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Could not determine a home directory for the data files")]
    NoHomeDir,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub about: String,
    /// Shared secret for adding songs. Not access control.
    pub playlist_password: String,
    pub notice_ttl_ms: u64,
    pub reveal_threshold: f32,
    pub reveal_margin: u32,
    pub reveal_offset: u16,
    pub reveal_duration_ms: u64,
    /// Redraw ticks per second while a reveal is animating.
    pub frame_rate: f64,
    pub storage_path: Option<PathBuf>,
    pub images: Vec<ImageRef>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "NEONPAGE".to_string(),
            about: "Welcome to my corner of the terminal.\n\
                    Scroll down for pictures, the songs on repeat and a place to leave feedback."
                .to_string(),
            playlist_password: "WebsiteNgani".to_string(),
            notice_ttl_ms: 3000,
            reveal_threshold: 0.1,
            reveal_margin: 2,
            reveal_offset: 2,
            reveal_duration_ms: 600,
            frame_rate: 30.0,
            storage_path: None,
            images: vec![
                ImageRef::new("assets/setup.jpg", "Desk setup at night"),
                ImageRef::new("assets/concert.jpg", "Front row at the last concert"),
                ImageRef::new("assets/cat.jpg", "The cat, unimpressed"),
            ],
        }
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
}

impl Config {
    /// Loads the config file named by `NEONPAGE_CONFIG`, or `config.toml` in
    /// the platform config directory. A missing file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| project_dirs().map(|d| d.config_dir().join("config.toml")));

        let config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(password) = var(PASSWORD_ENV).filter(|p| !p.is_empty()) {
            self.playlist_password = password;
        }
        if let Some(path) = var(STORAGE_ENV).filter(|p| !p.is_empty()) {
            self.storage_path = Some(PathBuf::from(path));
        }
        self
    }

    /// Explicit storage path, else `storage.json` in the platform data
    /// directory.
    pub fn storage_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.storage_path {
            return Ok(path.clone());
        }
        project_dirs()
            .map(|d| d.data_dir().join("storage.json"))
            .ok_or(ConfigError::NoHomeDir)
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms)
    }

    pub fn reveal(&self) -> RevealConfig {
        RevealConfig {
            threshold: self.reveal_threshold.clamp(0.0, 1.0),
            bottom_margin: self.reveal_margin,
            offset: self.reveal_offset,
            duration: Duration::from_millis(self.reveal_duration_ms),
        }
    }
}
