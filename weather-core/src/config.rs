use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::provider::openweather::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Env var holding the upstream API key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";
/// Older name for [`API_KEY_ENV`], still honoured.
pub const LEGACY_API_KEY_ENV: &str = "API_KEY";
pub const BASE_URL_ENV: &str = "WEATHER_BASE_URL";
/// Points at an alternate config file.
pub const CONFIG_PATH_ENV: &str = "WEATHER_CONFIG";

/// Relay bind address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. "info" or "weather_core=debug".
    pub level: Option<String>,
}

impl LoggingConfig {
    /// Configured level, or `fallback` when unset or blank. Each binary picks its own fallback.
    pub fn level_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.level
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(fallback)
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// timeout_secs = 10
///
/// [relay]
/// host = "127.0.0.1"
/// port = 3000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub relay: RelayConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// API key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key.trim().to_string());
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Load config from the default location and apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let mut cfg = Self::load_from(&path)?;
        cfg.apply_env(|name| std::env::var(name).ok());
        Ok(cfg)
    }

    /// Load config from `path`, or return an empty default if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to `path`, creating parent directories as needed.
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

    /// Path to the config file; `WEATHER_CONFIG` wins over the platform directory.
    pub fn config_file_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("dev", "weather-lookup", "weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlay values from the environment. `lookup` is `std::env::var` outside tests.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_blank(API_KEY_ENV).or_else(|| non_blank(LEGACY_API_KEY_ENV)) {
            self.set_api_key(key);
        }

        if let Some(url) = non_blank(BASE_URL_ENV) {
            self.base_url = Some(url.trim().to_string());
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }
}
