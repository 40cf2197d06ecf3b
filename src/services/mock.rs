//! Mock reading generation.
//!
//! Produces randomized plausible readings for development and tests when no
//! backend is configured. Generation never fails and always carries the zone
//! id through. The RNG is injected so callers can seed it for reproducible
//! sequences.

use chrono::Local;
use rand::Rng;

use crate::api::{AqiReading, FloodReading, HeatwaveReading, MetricKind, ZoneReading};
use crate::models::zones::Zone;

fn display_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Generate an AQI reading for a zone. The index lands in 120-199.
pub fn mock_aqi_reading(rng: &mut impl Rng, zone: &Zone) -> AqiReading {
    AqiReading {
        zone_id: zone.id.clone(),
        aqi: rng.gen_range(120..200) as f64,
        pm25: rng.gen_range(70..110) as f64,
        pm10: rng.gen_range(90..140) as f64,
        dust: Some(rng.gen_range(55..90) as f64),
        o3: Some(rng.gen_range(20..35) as f64),
        tvoc: rng.gen_range(4.0..7.0),
        noise: rng.gen_range(55..80) as f64,
        last_updated: display_time(),
    }
}

/// Generate a flood-risk reading for a zone. Risk lands in 0-99.
pub fn mock_flood_reading(rng: &mut impl Rng, zone: &Zone) -> FloodReading {
    FloodReading {
        zone_id: zone.id.clone(),
        flood_risk: rng.gen_range(0..100) as f64,
        water_level: rng.gen_range(0.0..5.0),
        rainfall: rng.gen_range(0..200) as f64,
        last_updated: display_time(),
    }
}

/// Generate a heatwave reading for a zone. Heat index lands in 25-44.
pub fn mock_heatwave_reading(rng: &mut impl Rng, zone: &Zone) -> HeatwaveReading {
    HeatwaveReading {
        zone_id: zone.id.clone(),
        heat_index: rng.gen_range(25..45) as f64,
        temperature: rng.gen_range(24..39) as f64,
        humidity: rng.gen_range(40..80) as f64,
        wind_speed: rng.gen_range(5..25) as f64,
        uv_index: rng.gen_range(0..11) as f64,
        last_updated: display_time(),
    }
}

/// Generate a reading of the given kind.
pub fn mock_reading(rng: &mut impl Rng, zone: &Zone, kind: MetricKind) -> ZoneReading {
    match kind {
        MetricKind::Aqi => ZoneReading::Aqi(mock_aqi_reading(rng, zone)),
        MetricKind::Flood => ZoneReading::Flood(mock_flood_reading(rng, zone)),
        MetricKind::Heatwave => ZoneReading::Heatwave(mock_heatwave_reading(rng, zone)),
    }
}
