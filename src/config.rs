//! Configuration handling for the intake client

use crate::api::DEFAULT_BASE_URL;
use crate::city::CityConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const API_URL_ENV: &str = "PAWSNCLAWS_API_URL";
pub const CITY_ENV: &str = "PAWSNCLAWS_CITY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "pawsnclaws", "pawsnclaws-tui")
}

/// Directory for checklist progress and other client state
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// User configuration for the intake client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API address, e.g. `https://pawsnclaws.org`
    pub api_base_url: Option<String>,
    /// Chapter slug
    pub city: Option<String>,
}

impl ClientConfig {
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load from the platform config dir, then apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// A missing file is not an error
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Non-empty variables win over values from the file
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(url) = read(API_URL_ENV) {
            self.api_base_url = Some(url);
        }
        if let Some(city) = read(CITY_ENV) {
            self.city = Some(city);
        }
        self
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// The configured chapter, or the default one
    pub fn city(&self) -> &'static CityConfig {
        CityConfig::resolve(self.city.as_deref())
    }
}
