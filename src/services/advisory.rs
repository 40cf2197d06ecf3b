//! Health advisories derived from air quality.
//!
//! The suggestion list escalates with the AQI band; the vulnerable-groups
//! list is fixed.

use serde::Serialize;

use crate::api::Severity;

/// One actionable recommendation with its display priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: &'static str,
    pub priority: Severity,
}

const fn suggestion(text: &'static str, priority: Severity) -> Suggestion {
    Suggestion { text, priority }
}

/// Recommendations for the current AQI, mildest band first.
pub fn default_suggestions(aqi: f64) -> Vec<Suggestion> {
    if aqi <= 50.0 {
        return vec![
            suggestion("Great day for outdoor activities!", Severity::Low),
            suggestion("Perfect conditions for morning exercise", Severity::Low),
        ];
    }
    if aqi <= 100.0 {
        return vec![
            suggestion(
                "Sensitive individuals should limit prolonged outdoor exertion",
                Severity::Medium,
            ),
            suggestion("Stay hydrated throughout the day", Severity::Low),
        ];
    }
    if aqi <= 200.0 {
        return vec![
            suggestion("Wear a mask outdoors if possible", Severity::High),
            suggestion("Avoid morning walks and outdoor exercise", Severity::High),
            suggestion("Keep windows closed during peak hours", Severity::Medium),
            suggestion("Stay hydrated and use air purifiers indoors", Severity::Medium),
        ];
    }
    vec![
        suggestion("Wear N95 mask when going outdoors", Severity::High),
        suggestion("Stay indoors and keep all windows closed", Severity::High),
        suggestion("Use air purifiers on high setting", Severity::High),
        suggestion("Avoid all outdoor physical activities", Severity::High),
        suggestion("Stay hydrated and monitor for symptoms", Severity::Medium),
    ]
}

/// People at elevated risk from pollution, shown alongside the suggestions.
pub fn vulnerable_groups() -> [&'static str; 4] {
    ["Children", "Elderly", "Asthma Patients", "Outdoor Workers"]
}
