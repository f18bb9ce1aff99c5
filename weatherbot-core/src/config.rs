use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    http::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, HttpSettings},
    policy::ResolutionPolicy,
    resolver::geonames::DEFAULT_SEARCH_URL,
    retriever::wttr::{DEFAULT_FORMAT, DEFAULT_WEATHER_URL},
};

/// Location used by inline queries that arrive without any text.
pub const DEFAULT_LOCATION: &str = "КАЗАХСТАН";

/// Upstream services the bot talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Location search page, queried with `?q=<text>`.
    pub location_search: String,

    /// Weather service root; the location is appended as a path segment.
    pub weather: String,

    /// Value of the `format` query parameter sent to the weather service.
    pub weather_format: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            location_search: DEFAULT_SEARCH_URL.to_string(),
            weather: DEFAULT_WEATHER_URL.to_string(),
            weather_format: DEFAULT_FORMAT.to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// resolution = "best_effort"
/// timeout_secs = 5
///
/// [endpoints]
/// weather = "https://wttr.in"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub user_agent: String,
    pub timeout_secs: u64,
    pub resolution: ResolutionPolicy,
    /// Used for empty requests; an empty string disables the fallback.
    pub default_location: String,
    pub endpoints: Endpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            resolution: ResolutionPolicy::default(),
            default_location: DEFAULT_LOCATION.to_string(),
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    pub fn default_location(&self) -> Option<&str> {
        let location = self.default_location.trim();
        (!location.is_empty()).then_some(location)
    }

    /// Load config from the platform config directory, or defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load config from an explicit path, or defaults if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherbot", "weatherbot")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
