//! Configuration system for servo-web
//!
//! Reads config from ~/.config/servo-web/config.toml

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub http_port: u16,
    /// Origin the panels send control requests to; empty means this host
    pub device_base: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            http_port: 8080,
            device_base: String::new(),
        }
    }
}

/// Control journal configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    pub capacity: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self { capacity: 256 }
    }
}

/// Full application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub journal: JournalConfig,
}

const DEFAULT_CONFIG: &str = r#"# servo-web Configuration

[server]
bind = "127.0.0.1"
http_port = 8080
# Send control requests to a device instead of this host, e.g. "http://169.254.1.1"
device_base = ""

[journal]
capacity = 256
"#;

impl Config {
    /// Load configuration from default path, falling back to defaults
    pub fn load() -> Self {
        let path = Self::default_config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable config");
                Self::default()
            }
        }
    }

    /// Get default config path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("servo-web")
            .join("config.toml")
    }

    /// Load from specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Create default config file if it doesn't exist
    pub fn create_default_if_missing(path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        std::fs::write(path, DEFAULT_CONFIG).context("Failed to write default config")?;
        Ok(())
    }
}
