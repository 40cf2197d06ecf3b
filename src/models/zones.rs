//! Monitoring zone registry for Hyderabad.
//!
//! The registry is a fixed lookup table built at process start; zones are
//! never added or removed at runtime. Latest readings live in the controller,
//! keyed by [`ZoneId`], not on the zone itself.

use serde::{Deserialize, Serialize};

use crate::api::ZoneId;

/// A monitored city zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    /// Latitude in decimal degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub lng: f64,
    /// Locality descriptor shown in map popups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Compass position relative to the city center
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

impl Zone {
    pub fn new(
        id: impl Into<ZoneId>,
        name: impl Into<String>,
        lat: f64,
        lng: f64,
    ) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err("Longitude must be between -180 and 180 degrees".to_string());
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            lat,
            lng,
            area: None,
            direction: None,
        })
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }
}

/// Rectangular bounding box for the monitored city area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl CityBounds {
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }
}

/// Map viewport bounds for Hyderabad.
pub const HYDERABAD_BOUNDS: CityBounds = CityBounds {
    north: 17.55,
    south: 17.25,
    east: 78.65,
    west: 78.25,
};

/// Default map center (lat, lng).
pub const HYDERABAD_CENTER: (f64, f64) = (17.385, 78.4867);

/// Radius of a zone's circular map marker.
pub const ZONE_RADIUS_METERS: f64 = 3000.0;

fn zone(id: &str, name: &str, lat: f64, lng: f64, direction: &str, area: &str) -> Zone {
    Zone {
        id: ZoneId::from(id),
        name: name.to_string(),
        lat,
        lng,
        area: Some(area.to_string()),
        direction: Some(direction.to_string()),
    }
}

/// The seven monitored Hyderabad zones.
pub fn hyderabad_zones() -> Vec<Zone> {
    vec![
        zone("zone-1", "Secunderabad", 17.4399, 78.4983, "North", "Twin City"),
        zone("zone-2", "Begumpet", 17.4432, 78.4677, "North-West", "Commercial District"),
        zone("zone-3", "Banjara Hills", 17.4156, 78.4347, "West", "Upscale Residential"),
        zone("zone-4", "Hitech City", 17.4435, 78.3772, "North-West", "IT Corridor"),
        zone("zone-5", "Charminar", 17.3616, 78.4747, "South", "Old City"),
        zone("zone-6", "Gachibowli", 17.4401, 78.3489, "West", "Financial District"),
        zone("zone-7", "LB Nagar", 17.3457, 78.5522, "South-East", "Residential Hub"),
    ]
}

/// Find a zone by its id string.
pub fn zone_by_id<'a>(zones: &'a [Zone], id: &str) -> Option<&'a Zone> {
    zones.iter().find(|z| z.id.as_str() == id)
}
