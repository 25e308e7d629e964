//! Configuration: defaults, then `<config_dir>/newsdesk/config.json`, then environment

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::view::markup::RenderOptions;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

pub const ENV_BACKEND_URL: &str = "NEWSDESK_BACKEND_URL";
pub const ENV_ESCAPE_MARKUP: &str = "NEWSDESK_ESCAPE_MARKUP";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Base URL the endpoint paths are appended to
    pub backend_url: String,
    /// Entity-encode backend text before rendering it
    pub escape_markup: bool,
    /// Program and arguments of a local backend started with the window
    pub backend_command: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            escape_markup: false,
            backend_command: None,
        }
    }
}

/// On-disk form; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    backend_url: Option<String>,
    escape_markup: Option<bool>,
    backend_command: Option<Vec<String>>,
}

impl Config {
    /// Resolve the configuration for this process
    pub fn load() -> Result<Self> {
        let _ = dotenv::dotenv();

        let mut config = Self::default();
        if let Some(path) = Self::default_path() {
            if path.exists() {
                config.apply_file(&path)?;
            }
        }
        config.apply_env(|key| dotenv::var(key).ok())?;

        tracing::debug!("Resolved config: {:?}", config);
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("newsdesk").join("config.json"))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            escape_markup: self.escape_markup,
        }
    }

    fn apply_file(&mut self, path: &Path) -> Result<()> {
        let raw = std::fs::read_to_string(path)?;
        let file: FileConfig = serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        if let Some(url) = file.backend_url {
            self.backend_url = url;
        }
        if let Some(escape) = file.escape_markup {
            self.escape_markup = escape;
        }
        if file.backend_command.is_some() {
            self.backend_command = file.backend_command;
        }
        tracing::debug!("Loaded config file {}", path.display());
        Ok(())
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup(ENV_BACKEND_URL).filter(|v| !v.trim().is_empty()) {
            self.backend_url = url.trim().to_string();
        }
        if let Some(value) = lookup(ENV_ESCAPE_MARKUP) {
            self.escape_markup = parse_bool(ENV_ESCAPE_MARKUP, &value)?;
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!("{} must be a boolean, got {:?}", key, other))),
    }
}
