//! Public API surface for the monitoring core.
//!
//! This file consolidates the DTO types shared with the dashboard frontend.
//! All types derive Serialize/Deserialize for JSON serialization, and wire
//! field names match the backend contract exactly.

pub use crate::models::cities::CityAqi;
pub use crate::models::zones::CityBounds;
pub use crate::models::zones::Zone;
pub use crate::services::advisory::Suggestion;
pub use crate::services::classify::Category;
pub use crate::services::forecast::ForecastPoint;
pub use crate::services::rankings::CityRanking;
pub use crate::services::rankings::Trend;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Zone identifier (the dashboard's stable per-zone key, e.g. `"zone-3"`).
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ZoneId(pub String);

impl ZoneId {
    pub fn new(value: impl Into<String>) -> Self {
        ZoneId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(value: &str) -> Self {
        ZoneId(value.to_string())
    }
}

impl From<String> for ZoneId {
    fn from(value: String) -> Self {
        ZoneId(value)
    }
}

/// The three monitored metric kinds.
///
/// Serialized lowercase; the lowercase name doubles as the backend endpoint
/// path segment (`/aqi`, `/flood`, `/heatwave`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Aqi,
    Flood,
    Heatwave,
}

impl MetricKind {
    /// All kinds in dashboard tab order.
    pub const ALL: [MetricKind; 3] = [MetricKind::Aqi, MetricKind::Flood, MetricKind::Heatwave];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Aqi => "aqi",
            MetricKind::Flood => "flood",
            MetricKind::Heatwave => "heatwave",
        }
    }
}

impl FromStr for MetricKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aqi" => Ok(Self::Aqi),
            "flood" => Ok(Self::Flood),
            "heatwave" => Ok(Self::Heatwave),
            _ => Err(format!("Unknown metric kind: {}", s)),
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Three-level severity shared by gauge cards and advisory priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    /// Accent color used by gauge cards for this level.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Low => "#22c55e",
            Severity::Medium => "#eab308",
            Severity::High => "#ef4444",
        }
    }
}

/// Air-quality reading for one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiReading {
    pub zone_id: ZoneId,
    /// Composite Air Quality Index
    pub aqi: f64,
    /// PM2.5 concentration in µg/m³
    pub pm25: f64,
    /// PM10 concentration in µg/m³
    pub pm10: f64,
    /// Dust level in µg/m³ (not reported by every station)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dust: Option<f64>,
    /// Ozone in ppb (not reported by every station)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o3: Option<f64>,
    /// Total volatile organic compounds in ppm
    pub tvoc: f64,
    /// Ambient noise in dB
    pub noise: f64,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

/// Flood-risk reading for one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloodReading {
    pub zone_id: ZoneId,
    /// Flood risk percentage (0-100)
    #[serde(rename = "floodRisk")]
    pub flood_risk: f64,
    /// Water level in meters
    #[serde(rename = "waterLevel")]
    pub water_level: f64,
    /// Rainfall in millimeters
    pub rainfall: f64,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

/// Heatwave reading for one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatwaveReading {
    pub zone_id: ZoneId,
    /// Perceived heat severity in °C
    #[serde(rename = "heatIndex")]
    pub heat_index: f64,
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
    /// Wind speed in km/h
    #[serde(rename = "windSpeed")]
    pub wind_speed: f64,
    /// UV index (0-11 scale)
    #[serde(rename = "uvIndex")]
    pub uv_index: f64,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

/// A reading for one zone in exactly one metric kind.
///
/// Unifies the three reading shapes for dispatch; the inner record is what
/// goes on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneReading {
    Aqi(AqiReading),
    Flood(FloodReading),
    Heatwave(HeatwaveReading),
}

impl ZoneReading {
    pub fn kind(&self) -> MetricKind {
        match self {
            ZoneReading::Aqi(_) => MetricKind::Aqi,
            ZoneReading::Flood(_) => MetricKind::Flood,
            ZoneReading::Heatwave(_) => MetricKind::Heatwave,
        }
    }

    pub fn zone_id(&self) -> &ZoneId {
        match self {
            ZoneReading::Aqi(r) => &r.zone_id,
            ZoneReading::Flood(r) => &r.zone_id,
            ZoneReading::Heatwave(r) => &r.zone_id,
        }
    }

    /// The scalar the kind is classified and mapped by: AQI index, flood
    /// risk percentage, or heat index.
    pub fn primary_value(&self) -> f64 {
        match self {
            ZoneReading::Aqi(r) => r.aqi,
            ZoneReading::Flood(r) => r.flood_risk,
            ZoneReading::Heatwave(r) => r.heat_index,
        }
    }

    pub fn last_updated(&self) -> &str {
        match self {
            ZoneReading::Aqi(r) => &r.last_updated,
            ZoneReading::Flood(r) => &r.last_updated,
            ZoneReading::Heatwave(r) => &r.last_updated,
        }
    }

    pub fn into_aqi(self) -> Option<AqiReading> {
        match self {
            ZoneReading::Aqi(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_flood(self) -> Option<FloodReading> {
        match self {
            ZoneReading::Flood(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_heatwave(self) -> Option<HeatwaveReading> {
        match self {
            ZoneReading::Heatwave(r) => Some(r),
            _ => None,
        }
    }
}

/// Request body sent to the backend for one zone fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneQuery {
    pub zone_id: ZoneId,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub kind: MetricKind,
}

impl ZoneQuery {
    pub fn from_zone(zone: &Zone, kind: MetricKind) -> Self {
        Self {
            zone_id: zone.id.clone(),
            lat: zone.lat,
            lng: zone.lng,
            kind,
        }
    }
}
