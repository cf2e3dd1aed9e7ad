//! Configuration for rendering and serving the guide.
//!
//! Values come from `<config_dir>/stylebook/config.json` when present, then
//! from `STYLEBOOK_*` environment variables. Command-line flags override both.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "stylebook";
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_OUT_DIR: &str = "site";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylebookConfig {
    /// Directory the rendered site is written to.
    pub out_dir: PathBuf,
    /// Port for the preview server.
    pub port: u16,
    /// Title shown in page headers. Defaults to the guide's own title.
    pub site_title: Option<String>,
    /// Allowed CORS origins for the preview API. `None` is permissive.
    pub cors_origins: Option<Vec<String>>,
}

impl Default for StylebookConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            port: DEFAULT_PORT,
            site_title: None,
            cors_origins: None,
        }
    }
}

impl StylebookConfig {
    /// Load the config file and apply environment overrides.
    /// Falls back to defaults if the file is missing or fails to parse.
    pub fn load() -> Self {
        let config = match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    fn try_load() -> Result<Self> {
        let config_path = get_config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse config file")
    }

    /// Apply `STYLEBOOK_*` overrides read through `var`.
    pub fn with_env(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(out_dir) = var("STYLEBOOK_OUT_DIR") {
            self.out_dir = PathBuf::from(out_dir);
        }
        if let Some(port) = var("STYLEBOOK_PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring invalid STYLEBOOK_PORT: {}", port),
            }
        }
        if let Some(title) = var("STYLEBOOK_SITE_TITLE") {
            self.site_title = Some(title);
        }
        if let Some(origins) = var("STYLEBOOK_CORS_ORIGINS") {
            self.cors_origins = Some(
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            );
        }
        self
    }

    /// Save the current configuration to disk.
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(config_path)
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
