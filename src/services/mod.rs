//! Service layer for pure metric computation.
//!
//! These modules hold the arithmetic shared by every dashboard panel:
//! classification into category bands, heatmap/marker visualization mapping,
//! mock reading generation, health advisories, prediction series, and city
//! rankings. Everything here is deterministic given its inputs (RNG state is
//! always passed in) and does no I/O.

pub mod advisory;

pub mod classify;

pub mod forecast;

pub mod heatmap;

pub mod mock;
pub mod rankings;

pub use classify::{aqi_category, flood_risk_level, heatwave_level, Category};
pub use heatmap::{heatmap_intensity, marker_opacity, zone_display_color};
pub use mock::{mock_aqi_reading, mock_flood_reading, mock_heatwave_reading, mock_reading};
