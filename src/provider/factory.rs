//! Provider factory for dependency injection.
//!
//! Builds `Arc<dyn MetricProvider>` instances from an explicit selection,
//! a configuration file, or the environment. The controller never constructs
//! its own provider; it receives one from here (or from a test).

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::config::MonitorConfig;
use super::error::{ProviderError, ProviderResult};
use super::metrics::MetricProvider;
use super::providers::{BackendProvider, MockProvider};

/// Provider type selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// HTTP client against the monitoring backend
    Backend,
    /// Locally generated mock readings
    Mock,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "backend" | "http" => Ok(Self::Backend),
            "mock" => Ok(Self::Mock),
            _ => Err(format!("Unknown provider kind: {}", s)),
        }
    }
}

impl ProviderKind {
    /// Get provider kind from environment variables.
    ///
    /// Reads `UEM_PROVIDER`; defaults to Backend if `UEM_BACKEND_URL` is
    /// present, otherwise Mock.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("UEM_PROVIDER") {
            return val.parse().unwrap_or(Self::Mock);
        }

        if std::env::var("UEM_BACKEND_URL").is_ok() {
            Self::Backend
        } else {
            Self::Mock
        }
    }
}

/// Factory for creating provider instances.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider of the given kind.
    ///
    /// The backend settings in `config` are only consulted for
    /// [`ProviderKind::Backend`].
    pub fn create(
        kind: ProviderKind,
        config: &MonitorConfig,
    ) -> ProviderResult<Arc<dyn MetricProvider>> {
        match kind {
            ProviderKind::Backend => {
                let backend = Self::create_backend(config)?;
                Ok(backend as Arc<dyn MetricProvider>)
            }
            ProviderKind::Mock => Ok(Self::create_mock()),
        }
    }

    /// Create a backend HTTP provider from configuration.
    pub fn create_backend(config: &MonitorConfig) -> ProviderResult<Arc<BackendProvider>> {
        if config.backend.base_url.is_empty() {
            return Err(ProviderError::configuration(
                "Backend provider requires 'backend.base_url' setting",
            ));
        }
        let provider =
            BackendProvider::new(&config.backend.base_url, config.backend.timeout_secs)?;
        Ok(Arc::new(provider))
    }

    /// Create a mock provider with an entropy-seeded RNG.
    pub fn create_mock() -> Arc<dyn MetricProvider> {
        Arc::new(MockProvider::new())
    }

    /// Create a provider from a `MonitorConfig`.
    pub fn from_config(config: &MonitorConfig) -> ProviderResult<Arc<dyn MetricProvider>> {
        let kind = config.provider_kind()?;
        Self::create(kind, config)
    }

    /// Create a provider from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> ProviderResult<Arc<dyn MetricProvider>> {
        let config = MonitorConfig::from_file(config_path)?;
        Self::from_config(&config)
    }

    /// Create a provider from the default configuration location plus
    /// environment overrides.
    ///
    /// This is the production entry point: `monitor.toml` if present,
    /// defaults otherwise, then `UEM_PROVIDER` / `UEM_BACKEND_URL` on top.
    pub fn from_env() -> ProviderResult<Arc<dyn MetricProvider>> {
        let config = MonitorConfig::from_default_location()?.with_env_overrides();
        Self::from_config(&config)
    }
}
