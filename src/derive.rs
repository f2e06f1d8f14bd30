//! Derived values: the rules that rewrite or compute a variable value instead
//! of copying the setting verbatim.
//!
//! - **Shadow presets**: `soft`, `strong`, and `none` expand to full
//!   `box-shadow` values; anything else is used as written.
//! - **Dimension units**: `header_height` and `content_top_offset` get a `px`
//!   suffix when they carry no unit.
//! - **Header transparency**: a fixed triplet of overrides.
//! - **Hero overlay**: two gradient stops computed from one opacity.

use crate::settings::{format_number, is_truthy, to_float, to_text};
use serde::Serialize;
use serde_json::Value;

pub const SHADOW_SOFT: &str = "0 4px 20px -2px rgba(0, 0, 0, 0.05)";
pub const SHADOW_STRONG: &str = "0 20px 50px -5px rgba(0, 0, 0, 0.15)";

/// Units that mark a dimension as already qualified.
const DIMENSION_UNITS: [&str; 3] = ["px", "rem", "vh"];

/// Opacity used when `hero_overlay_opacity` is not provided.
pub const DEFAULT_OVERLAY_OPACITY: f64 = 0.8;

/// The end stop is this fraction of the start opacity.
const OVERLAY_END_FACTOR: f64 = 0.4;

/// Literal values forced while the header is transparent.
pub const TRANSPARENT_HEADER: [(&str, &str); 3] = [
    (crate::mapping::var::HEADER_BG, "transparent"),
    (crate::mapping::var::HEADER_BLUR, "none"),
    (crate::mapping::var::HEADER_BORDER, "none"),
];

/// Expand a shadow preset keyword.
pub fn shadow_preset(text: &str) -> &str {
    match text {
        "soft" => SHADOW_SOFT,
        "strong" => SHADOW_STRONG,
        "none" => "none",
        other => other,
    }
}

/// Append `px` to a truthy dimension that carries no known unit.
///
/// Falsy values (`0`, `""`, `false`) are returned untouched, so `0` stays
/// `0` rather than becoming `0px`. `None` means the value is `null`.
pub fn coerce_dimension(value: &Value) -> Option<String> {
    let text = to_text(value)?;
    if is_truthy(value) && !DIMENSION_UNITS.iter().any(|unit| text.ends_with(unit)) {
        Some(format!("{text}px"))
    } else {
        Some(text)
    }
}

/// Opacity to use for the hero overlay.
///
/// Absent, `null` and `""` fall back to the default. Everything else is parsed
/// and may come out as NaN, which is kept.
pub fn overlay_opacity(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Null) => DEFAULT_OVERLAY_OPACITY,
        Some(Value::String(s)) if s.is_empty() => DEFAULT_OVERLAY_OPACITY,
        Some(other) => to_float(other),
    }
}

/// The two gradient stops laid over the hero image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayStops {
    pub opacity: f64,
    pub start: String,
    pub end: String,
}

impl OverlayStops {
    pub fn from_opacity(opacity: f64) -> Self {
        Self {
            opacity,
            start: black_with_alpha(opacity),
            end: black_with_alpha(round_alpha(opacity * OVERLAY_END_FACTOR)),
        }
    }
}

fn black_with_alpha(alpha: f64) -> String {
    format!("rgba(0, 0, 0, {})", format_number(alpha))
}

/// Round to 15 significant digits so products like `0.8 * 0.4` print as
/// `0.32`. Magnitude is kept, so tiny and huge opacities survive.
fn round_alpha(alpha: f64) -> f64 {
    format!("{:.14e}", alpha).parse().unwrap_or(alpha)
}
