//! Provider implementations module.
//!
//! This module contains the two implementations of the `MetricProvider`
//! trait:
//! - `backend`: HTTP client against the monitoring backend
//! - `mock`: locally generated readings for development and testing

pub mod backend;
pub mod mock;

pub use backend::BackendProvider;
pub use mock::MockProvider;
