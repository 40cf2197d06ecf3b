//! Hourly prediction series for the dashboard charts.
//!
//! The prediction chart shows a 12-point series derived from the current
//! reading: a slow sinusoidal drift plus per-point jitter. The RNG is
//! injected so tests can seed it.

use rand::Rng;
use serde::Serialize;

/// Number of points in a prediction series.
pub const FORECAST_HOURS: usize = 12;

/// One point of a prediction series: hour label plus predicted value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub time: String,
    pub value: f64,
}

/// Predicted AQI for the next 12 hours, starting from the current value.
///
/// Values are rounded to whole AQI points and floored at 0.
pub fn aqi_forecast(rng: &mut impl Rng, current_aqi: f64) -> Vec<ForecastPoint> {
    (0..FORECAST_HOURS)
        .map(|hour| {
            let variance =
                (hour as f64 / 3.0).sin() * 15.0 + (rng.gen::<f64>() - 0.5) * 10.0;
            ForecastPoint {
                time: format!("{}:00", hour),
                value: (current_aqi + variance).round().max(0.0),
            }
        })
        .collect()
}

/// Predicted temperature (°C) for the next 12 hours.
///
/// Values are rounded to one decimal; the drift and jitter amplitudes are
/// smaller than the AQI variant's.
pub fn temperature_forecast(rng: &mut impl Rng, current_temp: f64) -> Vec<ForecastPoint> {
    (0..FORECAST_HOURS)
        .map(|hour| {
            let variance = (hour as f64 / 3.0).sin() * 3.0 + (rng.gen::<f64>() - 0.5) * 2.0;
            ForecastPoint {
                time: format!("{}:00", hour),
                value: ((current_temp + variance) * 10.0).round() / 10.0,
            }
        })
        .collect()
}
