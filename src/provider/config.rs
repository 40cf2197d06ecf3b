//! Monitor configuration file support.
//!
//! Loads `monitor.toml`, applying serde defaults for anything the file does
//! not set. Every field has a default, so a missing file is not an error for
//! callers that go through [`MonitorConfig::default`]; only an explicitly
//! named file that cannot be read or parsed fails.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::error::ProviderError;
use super::factory::ProviderKind;

/// Monitor configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitorConfig {
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub backend: BackendSettings,
}

/// Provider selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Reading source: "mock" or "backend"
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}

/// Backend endpoint settings, used when the source is "backend".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_source() -> String {
    "mock".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl MonitorConfig {
    /// Load monitor configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProviderError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ProviderError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: MonitorConfig = toml::from_str(&content).map_err(|e| {
            ProviderError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load monitor configuration from the default location.
    ///
    /// Searches for `monitor.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    ///
    /// Falls back to defaults (mock provider) when no file exists.
    pub fn from_default_location() -> Result<Self, ProviderError> {
        let search_paths = [
            PathBuf::from("monitor.toml"),
            PathBuf::from("config/monitor.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply environment-variable overrides.
    ///
    /// `UEM_PROVIDER` overrides the source, `UEM_BACKEND_URL` the base URL.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(source) = std::env::var("UEM_PROVIDER") {
            self.provider.source = source;
        }
        if let Ok(url) = std::env::var("UEM_BACKEND_URL") {
            self.backend.base_url = url;
        }
        self
    }

    /// Get the provider kind from configuration.
    pub fn provider_kind(&self) -> Result<ProviderKind, ProviderError> {
        ProviderKind::from_str(&self.provider.source)
            .map_err(|e| ProviderError::configuration(format!("Invalid provider source: {}", e)))
    }

    fn validate(&self) -> Result<(), ProviderError> {
        self.provider_kind().map(|_| ())
    }
}
