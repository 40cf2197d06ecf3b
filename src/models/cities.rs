//! AQI reference table for major Indian cities.
//!
//! Snapshot values used by the national map and the rankings card. A live
//! deployment would refresh these from a measurement API.

use serde::{Deserialize, Serialize};

/// One city's AQI snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityAqi {
    pub city: String,
    pub state: String,
    pub lat: f64,
    pub lng: f64,
    pub aqi: f64,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

fn city(city: &str, state: &str, lat: f64, lng: f64, aqi: f64, last_updated: &str) -> CityAqi {
    CityAqi {
        city: city.to_string(),
        state: state.to_string(),
        lat,
        lng,
        aqi,
        last_updated: last_updated.to_string(),
    }
}

/// AQI snapshot for 20 major Indian cities.
pub fn indian_cities() -> Vec<CityAqi> {
    vec![
        // Delhi NCR
        city("New Delhi", "Delhi", 28.6139, 77.2090, 187.0, "5 mins ago"),
        city("Gurugram", "Haryana", 28.4595, 77.0266, 234.0, "3 mins ago"),
        city("Noida", "Uttar Pradesh", 28.5355, 77.3910, 265.0, "4 mins ago"),
        city("Ghaziabad", "Uttar Pradesh", 28.6692, 77.4538, 287.0, "6 mins ago"),
        city("Faridabad", "Haryana", 28.4089, 77.3178, 221.0, "5 mins ago"),
        // Major metros
        city("Mumbai", "Maharashtra", 19.0760, 72.8777, 89.0, "2 mins ago"),
        city("Bangalore", "Karnataka", 12.9716, 77.5946, 72.0, "4 mins ago"),
        city("Chennai", "Tamil Nadu", 13.0827, 80.2707, 65.0, "3 mins ago"),
        city("Kolkata", "West Bengal", 22.5726, 88.3639, 156.0, "5 mins ago"),
        city("Hyderabad", "Telangana", 17.3850, 78.4867, 98.0, "4 mins ago"),
        // Other major cities
        city("Lucknow", "Uttar Pradesh", 26.8467, 80.9462, 198.0, "6 mins ago"),
        city("Kanpur", "Uttar Pradesh", 26.4499, 80.3319, 212.0, "7 mins ago"),
        city("Jaipur", "Rajasthan", 26.9124, 75.7873, 145.0, "5 mins ago"),
        city("Ahmedabad", "Gujarat", 23.0225, 72.5714, 112.0, "4 mins ago"),
        city("Pune", "Maharashtra", 18.5204, 73.8567, 78.0, "3 mins ago"),
        city("Patna", "Bihar", 25.5941, 85.1376, 189.0, "8 mins ago"),
        city("Chandigarh", "Punjab", 30.7333, 76.7794, 134.0, "5 mins ago"),
        city("Bhopal", "Madhya Pradesh", 23.2599, 77.4126, 125.0, "6 mins ago"),
        city("Nagpur", "Maharashtra", 21.1458, 79.0882, 95.0, "4 mins ago"),
        city("Visakhapatnam", "Andhra Pradesh", 17.6868, 83.2185, 58.0, "5 mins ago"),
    ]
}

/// Find a city by display name.
///
/// Accepts `"Hyderabad, India"`-style strings: only the first comma-separated
/// segment is matched, case-insensitively.
pub fn city_by_name<'a>(cities: &'a [CityAqi], name: &str) -> Option<&'a CityAqi> {
    let search = name.split(',').next().unwrap_or("").trim().to_lowercase();
    cities.iter().find(|c| c.city.to_lowercase() == search)
}
