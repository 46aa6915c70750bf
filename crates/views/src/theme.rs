//! The sunset palette and the tier-to-colour mappings.

use crate::widgets::ColorScale;
use analytics::{DeclineTier, GainTier, RiskClass};

pub const DARK_ORANGE: &str = "#FF6B35";
pub const CORAL: &str = "#F7931E";
pub const PEACH: &str = "#FFD166";
pub const PINK: &str = "#EF476F";
pub const MUTED_TEXT: &str = "#94a3b8";
pub const ACCENT: &str = "#FFB703";
pub const SUCCESS: &str = "#06d6a0";
pub const DANGER: &str = "#ef476f";
pub const SOFT_RED: &str = "#f87171";
pub const PALE_RED: &str = "#fca5a5";

/// Line colours for multi-series charts, taken from the start of the Plasma scale.
pub const SERIES: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

/// Red-yellow-green diverging anchors (ColorBrewer RdYlGn).
pub const RD_YL_GN: [&str; 3] = ["#a50026", "#ffffbf", "#006837"];

/// Correlation heatmap scale: danger at -1, peach at 0, success at +1.
pub fn correlation_scale() -> ColorScale {
    ColorScale::new(&[(0.0, DANGER), (0.5, PEACH), (1.0, SUCCESS)]).centered_at(0.0)
}

/// Return scale for the sector sunburst, red below zero and green above.
pub fn return_scale() -> ColorScale {
    ColorScale::new(&[(0.0, RD_YL_GN[0]), (0.5, RD_YL_GN[1]), (1.0, RD_YL_GN[2])]).centered_at(0.0)
}

pub fn series_color(index: usize) -> &'static str {
    SERIES[index % SERIES.len()]
}

/// Converts `#rrggbb` into a CSS `rgba(...)` string. Malformed input falls back to
/// transparent.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let digits = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits.get(range).and_then(|c| u8::from_str_radix(c, 16).ok())
    };
    match (digits.len(), channel(0..2), channel(2..4), channel(4..6)) {
        (6, Some(r), Some(g), Some(b)) => format!("rgba({},{},{},{})", r, g, b, alpha),
        _ => "rgba(0,0,0,0)".to_string(),
    }
}

pub fn gain_color(tier: GainTier) -> &'static str {
    match tier {
        GainTier::Strong => SUCCESS,
        GainTier::Moderate => PEACH,
        GainTier::Modest => CORAL,
    }
}

pub fn decline_color(tier: DeclineTier) -> &'static str {
    match tier {
        DeclineTier::Severe => DANGER,
        DeclineTier::Elevated => SOFT_RED,
        DeclineTier::Mild => PALE_RED,
    }
}

pub fn risk_color(class: RiskClass) -> &'static str {
    match class {
        RiskClass::High => DANGER,
        RiskClass::Medium => PEACH,
        RiskClass::Low => SUCCESS,
    }
}

/// Green for positive values, red otherwise.
pub fn trend_color(value: f64) -> &'static str {
    if value > 0.0 { SUCCESS } else { DANGER }
}
