//! City pollution rankings for the national panel.
//!
//! Ranks the Indian-cities AQI table worst-first and computes each city's
//! trend against an optional previous snapshot.

use serde::Serialize;

use crate::models::cities::CityAqi;

/// Direction of a city's AQI since the previous snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// One row of the rankings card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityRanking {
    /// 1-based rank, 1 = most polluted
    pub rank: usize,
    pub city: CityAqi,
    pub trend: Trend,
}

/// Rank cities by descending AQI.
///
/// When `previous` is given, each city's trend compares its AQI against the
/// snapshot entry with the same name; cities absent from the snapshot are
/// `Stable`. Ties keep the input order.
pub fn rank_cities(cities: &[CityAqi], previous: Option<&[CityAqi]>) -> Vec<CityRanking> {
    let mut sorted: Vec<&CityAqi> = cities.iter().collect();
    sorted.sort_by(|a, b| b.aqi.partial_cmp(&a.aqi).unwrap_or(std::cmp::Ordering::Equal));

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, city)| CityRanking {
            rank: index + 1,
            city: city.clone(),
            trend: trend_for(city, previous),
        })
        .collect()
}

/// The `count` most polluted cities.
pub fn top_polluted(cities: &[CityAqi], count: usize) -> Vec<CityRanking> {
    let mut ranked = rank_cities(cities, None);
    ranked.truncate(count);
    ranked
}

fn trend_for(city: &CityAqi, previous: Option<&[CityAqi]>) -> Trend {
    let earlier = previous
        .and_then(|snapshot| snapshot.iter().find(|c| c.city == city.city))
        .map(|c| c.aqi);

    match earlier {
        Some(before) if city.aqi > before => Trend::Up,
        Some(before) if city.aqi < before => Trend::Down,
        _ => Trend::Stable,
    }
}
