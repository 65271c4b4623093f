//! Configuration handling for the app

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::address::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Environment variable overriding the address service URL
pub const CEP_URL_ENV: &str = "CIDADE_LIMPA_CEP_URL";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Base URL of the CEP service
    pub address_lookup_url: Option<String>,
    /// Request timeout for the CEP service, in seconds
    pub lookup_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("br", "cidadelimpa", "cidade-limpa")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path, defaulting when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Address service URL: environment, then file, then default
    pub fn lookup_url(&self) -> String {
        self.resolve_lookup_url(std::env::var(CEP_URL_ENV).ok())
    }

    pub(crate) fn resolve_lookup_url(&self, from_env: Option<String>) -> String {
        from_env
            .filter(|url| !url.is_empty())
            .or_else(|| self.address_lookup_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}
