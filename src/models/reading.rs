// ============================================================================
// JSON Decoding for Backend Reading Payloads
// ============================================================================
//
// The backend returns one flat JSON record per zone fetch. These functions
// validate the payload structurally before deserializing, so a malformed
// body surfaces as a decode error for that zone rather than a panic or a
// half-populated reading.

use anyhow::{Context, Result};

use crate::api;

fn validate_reading_json(body: &str) -> Result<()> {
    let value: serde_json::Value = serde_json::from_str(body).context("Invalid reading JSON")?;
    let zone_id = value
        .as_object()
        .and_then(|obj| obj.get("zone_id"))
        .and_then(|v| v.as_str());
    match zone_id {
        Some(id) if !id.is_empty() => Ok(()),
        Some(_) => anyhow::bail!("Field 'zone_id' must not be empty"),
        None => anyhow::bail!("Missing required 'zone_id' field"),
    }
}

/// Parse an AQI reading from a backend response body.
pub fn parse_aqi_reading(body: &str) -> Result<api::AqiReading> {
    validate_reading_json(body)?;
    serde_json::from_str(body).context("Failed to deserialize AQI reading")
}

/// Parse a flood-risk reading from a backend response body.
pub fn parse_flood_reading(body: &str) -> Result<api::FloodReading> {
    validate_reading_json(body)?;
    serde_json::from_str(body).context("Failed to deserialize flood reading")
}

/// Parse a heatwave reading from a backend response body.
pub fn parse_heatwave_reading(body: &str) -> Result<api::HeatwaveReading> {
    validate_reading_json(body)?;
    serde_json::from_str(body).context("Failed to deserialize heatwave reading")
}

/// Parse a reading of the given kind, wrapped for uniform dispatch.
pub fn parse_reading(body: &str, kind: api::MetricKind) -> Result<api::ZoneReading> {
    match kind {
        api::MetricKind::Aqi => parse_aqi_reading(body).map(api::ZoneReading::Aqi),
        api::MetricKind::Flood => parse_flood_reading(body).map(api::ZoneReading::Flood),
        api::MetricKind::Heatwave => parse_heatwave_reading(body).map(api::ZoneReading::Heatwave),
    }
}
