//! Property tests for classification and visualization mapping.

use proptest::prelude::*;

use uem_rust::api::MetricKind;
use uem_rust::services::classify::{
    aqi_category, band_index, flood_risk_level, heatwave_level, AQI_CATEGORIES, FLOOD_LEVELS,
    HEAT_LEVELS,
};
use uem_rust::services::heatmap::{
    gradient_color, heatmap_intensity, marker_opacity, CITY_HEATMAP_GRADIENT,
};

proptest! {
    #[test]
    fn aqi_label_is_one_of_the_six(value in 0.0f64..2000.0) {
        let labels: Vec<&str> = AQI_CATEGORIES.iter().map(|(_, c)| c.label).collect();
        prop_assert!(labels.contains(&aqi_category(value).label));
    }

    #[test]
    fn severity_is_monotonic_in_value(a in 0.0f64..2000.0, b in 0.0f64..2000.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(band_index(lo, &AQI_CATEGORIES) <= band_index(hi, &AQI_CATEGORIES));
        prop_assert!(band_index(lo, &FLOOD_LEVELS) <= band_index(hi, &FLOOD_LEVELS));
        prop_assert!(band_index(lo, &HEAT_LEVELS) <= band_index(hi, &HEAT_LEVELS));
    }

    #[test]
    fn classification_is_idempotent(value in 0.0f64..2000.0) {
        prop_assert_eq!(aqi_category(value), aqi_category(value));
        prop_assert_eq!(flood_risk_level(value), flood_risk_level(value));
        prop_assert_eq!(heatwave_level(value), heatwave_level(value));
    }

    #[test]
    fn intensity_stays_in_unit_interval(value in -100.0f64..5000.0) {
        for kind in MetricKind::ALL {
            let intensity = heatmap_intensity(kind, value);
            prop_assert!((0.0..=1.0).contains(&intensity), "{} -> {}", value, intensity);
        }
    }

    #[test]
    fn intensity_is_monotonic(a in 0.0f64..5000.0, b in 0.0f64..5000.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for kind in MetricKind::ALL {
            prop_assert!(heatmap_intensity(kind, lo) <= heatmap_intensity(kind, hi));
        }
    }

    #[test]
    fn opacity_stays_between_floor_and_ceiling(value in -100.0f64..5000.0) {
        for kind in MetricKind::ALL {
            let opacity = marker_opacity(kind, value);
            prop_assert!((0.3..=0.7).contains(&opacity), "{} -> {}", value, opacity);
        }
    }

    #[test]
    fn gradient_always_yields_valid_hex(intensity in -1.0f64..2.0) {
        let color = gradient_color(&CITY_HEATMAP_GRADIENT, intensity);
        prop_assert_eq!(color.len(), 7);
        prop_assert!(color.starts_with('#'));
        prop_assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn gradient_endpoints_match_their_stops() {
    assert_eq!(gradient_color(&CITY_HEATMAP_GRADIENT, 0.0), "#00ff00");
    assert_eq!(gradient_color(&CITY_HEATMAP_GRADIENT, 0.25), "#ffff00");
    assert_eq!(gradient_color(&CITY_HEATMAP_GRADIENT, 1.0), "#8b0000");
    // Clamped on both sides
    assert_eq!(gradient_color(&CITY_HEATMAP_GRADIENT, -0.5), "#00ff00");
    assert_eq!(gradient_color(&CITY_HEATMAP_GRADIENT, 1.5), "#8b0000");
}
