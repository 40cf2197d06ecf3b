//! Threshold banding for metric values.
//!
//! Every panel that shows a metric value (cards, map markers, legends, the
//! heatmap layer) classifies it through these functions, so a given value
//! always yields the same label and color everywhere. Bands are contiguous
//! with inclusive upper bounds; the last band of each kind is unbounded, so
//! classification is total over the non-negative reals.

use serde::Serialize;

use crate::api::Severity;

/// A semantic category: human-facing label plus display color.
///
/// Derived on demand from the band tables below, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub label: &'static str,
    pub color: &'static str,
}

/// AQI bands in increasing severity, `(inclusive upper bound, category)`.
///
/// Exported so legends can render the full ordered scale.
pub const AQI_CATEGORIES: [(f64, Category); 6] = [
    (50.0, Category { label: "Good", color: "#22c55e" }),
    (100.0, Category { label: "Moderate", color: "#eab308" }),
    (150.0, Category { label: "Unhealthy for Sensitive", color: "#f97316" }),
    (200.0, Category { label: "Unhealthy", color: "#ef4444" }),
    (300.0, Category { label: "Very Unhealthy", color: "#7c3aed" }),
    (f64::INFINITY, Category { label: "Hazardous", color: "#831843" }),
];

/// Flood-risk bands (percentage domain) in increasing severity.
pub const FLOOD_LEVELS: [(f64, Category); 5] = [
    (20.0, Category { label: "Low", color: "#22c55e" }),
    (40.0, Category { label: "Moderate", color: "#eab308" }),
    (60.0, Category { label: "High", color: "#f97316" }),
    (80.0, Category { label: "Very High", color: "#ef4444" }),
    (f64::INFINITY, Category { label: "Extreme", color: "#831843" }),
];

/// Heat-index bands (°C) in increasing severity.
pub const HEAT_LEVELS: [(f64, Category); 5] = [
    (27.0, Category { label: "Normal", color: "#22c55e" }),
    (32.0, Category { label: "Caution", color: "#eab308" }),
    (39.0, Category { label: "Extreme Caution", color: "#f97316" }),
    (51.0, Category { label: "Danger", color: "#ef4444" }),
    (f64::INFINITY, Category { label: "Extreme Danger", color: "#831843" }),
];

fn classify(value: f64, bands: &[(f64, Category)]) -> Category {
    for (upper, category) in bands {
        if value <= *upper {
            return *category;
        }
    }
    // Unreachable: the last band's bound is infinite
    bands[bands.len() - 1].1
}

/// Classify an AQI value into one of the six categories.
pub fn aqi_category(aqi: f64) -> Category {
    classify(aqi, &AQI_CATEGORIES)
}

/// Classify a flood-risk percentage into one of the five levels.
pub fn flood_risk_level(risk: f64) -> Category {
    classify(risk, &FLOOD_LEVELS)
}

/// Classify a heat index (°C) into one of the five levels.
pub fn heatwave_level(index: f64) -> Category {
    classify(index, &HEAT_LEVELS)
}

/// Position of a value's band within its kind's ordered scale (0 = mildest).
pub fn band_index(value: f64, bands: &[(f64, Category)]) -> usize {
    bands
        .iter()
        .position(|(upper, _)| value <= *upper)
        .unwrap_or(bands.len() - 1)
}

// ==================== Gauge severities ====================
// Per-pollutant card levels. Thresholds are exclusive lower bounds: a value
// must exceed the bound to escalate.

/// PM2.5 gauge level (µg/m³).
pub fn pm25_severity(value: f64) -> Severity {
    gauge_severity(value, 50.0, 100.0)
}

/// PM10 gauge level (µg/m³).
pub fn pm10_severity(value: f64) -> Severity {
    gauge_severity(value, 75.0, 150.0)
}

/// TVOC gauge level (ppm).
pub fn tvoc_severity(value: f64) -> Severity {
    gauge_severity(value, 2.0, 5.0)
}

/// Noise gauge level (dB).
pub fn noise_severity(value: f64) -> Severity {
    gauge_severity(value, 50.0, 70.0)
}

/// Water-level gauge level (meters).
pub fn water_level_severity(value: f64) -> Severity {
    gauge_severity(value, 1.5, 3.0)
}

/// Rainfall gauge level (mm over 24h).
pub fn rainfall_severity(value: f64) -> Severity {
    gauge_severity(value, 50.0, 100.0)
}

/// Drainage card level, driven by the flood-risk percentage.
pub fn flood_risk_severity(risk: f64) -> Severity {
    gauge_severity(risk, 30.0, 60.0)
}

/// Remaining drainage capacity as a percentage of the flood risk.
pub fn drainage_capacity(flood_risk: f64) -> f64 {
    (100.0 - flood_risk).max(0.0)
}

fn gauge_severity(value: f64, medium_above: f64, high_above: f64) -> Severity {
    if value > high_above {
        Severity::High
    } else if value > medium_above {
        Severity::Medium
    } else {
        Severity::Low
    }
}

// ==================== Scale badges ====================

/// UV-index badge label for the weather card.
pub fn uv_index_badge(uv: f64) -> &'static str {
    if uv < 3.0 {
        "Low"
    } else if uv < 6.0 {
        "Moderate"
    } else if uv < 8.0 {
        "High"
    } else {
        "Very High"
    }
}

/// Wind-speed badge label (km/h) for the weather card.
pub fn wind_speed_badge(speed: f64) -> &'static str {
    if speed < 10.0 {
        "Light breeze"
    } else if speed < 20.0 {
        "Moderate"
    } else {
        "Strong"
    }
}
