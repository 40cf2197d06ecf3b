//! Data-source abstraction for zone readings.
//!
//! The dashboard's old "use mock data" toggle is an explicit configuration
//! here: the [`ProviderFactory`] turns a [`MonitorConfig`] (or environment
//! variables) into an `Arc<dyn MetricProvider>` that the controller is
//! constructed with.

pub mod config;
pub mod error;
pub mod factory;
pub mod metrics;
pub mod providers;

pub use config::MonitorConfig;
pub use error::{ErrorContext, ProviderError, ProviderResult};
pub use factory::{ProviderFactory, ProviderKind};
pub use metrics::MetricProvider;
pub use providers::{BackendProvider, MockProvider};
