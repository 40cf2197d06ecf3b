//! Visualization mapping for map layers.
//!
//! Normalizes raw metric values into the 0-1 intensities, marker opacities,
//! and colors the map rendering layer consumes. The banding in
//! [`classify`](crate::services::classify) answers "what category is this
//! value"; this module answers "how should it look on the map".

use crate::api::MetricKind;
use crate::services::classify;

/// A gradient stop: normalized offset in [0,1] plus `#rrggbb` color.
pub type GradientStop = (f64, &'static str);

/// Gradient for the per-metric zone heat layer.
pub const ZONE_LAYER_GRADIENT: [GradientStop; 3] =
    [(0.0, "#2ecc71"), (0.5, "#f1c40f"), (1.0, "#e74c3c")];

/// Gradient for the national city heatmap.
pub const CITY_HEATMAP_GRADIENT: [GradientStop; 5] = [
    (0.0, "#00ff00"),
    (0.25, "#ffff00"),
    (0.5, "#ff8800"),
    (0.75, "#ff0000"),
    (1.0, "#8b0000"),
];

/// Normalize a metric value into a heat-layer intensity in [0,1].
///
/// Ceilings per kind: AQI 300, flood risk 100, heat index 60 (with a floor
/// of 20, so the divisor is 40). Values outside the range clamp, never go
/// negative.
pub fn heatmap_intensity(kind: MetricKind, value: f64) -> f64 {
    let scaled = match kind {
        MetricKind::Aqi => value / 300.0,
        MetricKind::Flood => value / 100.0,
        MetricKind::Heatwave => (value - 20.0) / 40.0,
    };
    scaled.clamp(0.0, 1.0)
}

/// Opacity for a zone's circular marker, between 0.3 and 0.7.
///
/// The heat scale tops out at index 55 (floor 20 plus a 35-degree span),
/// slightly below the intensity ceiling; that asymmetry is part of the
/// dashboard's look and is kept as-is.
pub fn marker_opacity(kind: MetricKind, value: f64) -> f64 {
    let scale = match kind {
        MetricKind::Aqi => value.min(300.0) / 300.0,
        MetricKind::Flood => value / 100.0,
        MetricKind::Heatwave => (value - 20.0).min(35.0) / 35.0,
    };
    0.3 + scale.clamp(0.0, 1.0) * 0.4
}

/// Discrete display color for a zone at the given value.
///
/// This is the category color for the kind, so markers, cards, and legends
/// always agree.
pub fn zone_display_color(kind: MetricKind, value: f64) -> &'static str {
    match kind {
        MetricKind::Aqi => classify::aqi_category(value).color,
        MetricKind::Flood => classify::flood_risk_level(value).color,
        MetricKind::Heatwave => classify::heatwave_level(value).color,
    }
}

/// Interpolate a gradient at the given intensity.
///
/// Intensity clamps to [0,1]; between stops the color is a channelwise
/// linear blend of the bracketing pair. Stops must be sorted ascending by
/// offset, as the exported gradients are.
pub fn gradient_color(stops: &[GradientStop], intensity: f64) -> String {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return "#000000".to_string(),
    };

    let x = intensity.clamp(0.0, 1.0);
    if x <= first.0 {
        return first.1.to_string();
    }
    if x >= last.0 {
        return last.1.to_string();
    }

    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if x <= hi.0 {
            let span = hi.0 - lo.0;
            let t = if span > 0.0 { (x - lo.0) / span } else { 1.0 };
            return match (parse_hex(lo.1), parse_hex(hi.1)) {
                (Some(a), Some(b)) => blend(a, b, t),
                _ if t < 0.5 => lo.1.to_string(),
                _ => hi.1.to_string(),
            };
        }
    }

    last.1.to_string()
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

fn blend(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> String {
    let channel = |from: u8, to: u8| -> u8 {
        (from as f64 + (to as f64 - from as f64) * t).round() as u8
    };
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(a.0, b.0),
        channel(a.1, b.1),
        channel(a.2, b.2)
    )
}
