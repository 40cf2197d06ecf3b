//! # UEM Rust Core
//!
//! Environmental-monitoring data core for the Hyderabad zone dashboard.
//!
//! This crate provides the Rust data layer behind a React dashboard that maps
//! air-quality, flood-risk, and heatwave conditions across city zones. It owns
//! the typed domain model, the metric classification and heatmap mapping used
//! by every panel, the mock data generators, the backend fetch client, and the
//! controller that orchestrates per-zone refreshes. Rendering stays in the
//! frontend; everything it renders comes from here.
//!
//! ## Features
//!
//! - **Domain Model**: Zones, metric readings, and category types shared by
//!   all consumers
//! - **Classification**: Threshold banding for AQI, flood risk, and heat
//!   index, identical for cards, markers, and legends
//! - **Visualization Mapping**: Heatmap intensity, marker opacity, and
//!   gradient color interpolation
//! - **Providers**: Backend HTTP client and mock generator behind one async
//!   trait, selected by configuration
//! - **Refresh Orchestration**: Concurrent per-zone fetching with per-zone
//!   failure isolation and wholesale result replacement
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) shared with the frontend
//! - [`models`]: Zone registry, city tables, and reading parsers
//! - [`services`]: Pure computation (classification, heatmap, mock, advisory,
//!   forecast, rankings)
//! - [`provider`]: Data-source abstraction, configuration, and factory
//! - [`controller`]: Zone-data refresh orchestration and cycle tracking

pub mod api;

pub mod controller;
pub mod models;

pub mod provider;

pub mod services;
