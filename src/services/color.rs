//! Colour math for decorative effects
//!
//! Every operation is a pure function of its arguments. Parsing failures
//! are returned as [`ColorError`] so callers can tell a genuine black from
//! a malformed input; the `*_or` variants exist for view code that needs a
//! value regardless and are the only place a diagnostic is logged.

use crate::models::{ColorError, Rgb};

/// Parse `#RGB`, `RGB`, `#RRGGBB` or `RRGGBB` (any case) into an [`Rgb`]
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidHex(hex.to_string());

    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(invalid()),
    };

    // from_str_radix tolerates a leading '+', so check the digits first
    if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Format channels as `#rrggbb`, clamping each one into `0..=255`
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    Rgb {
        r: clamp_channel(r),
        g: clamp_channel(g),
        b: clamp_channel(b),
    }
    .to_string()
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Linear interpolation between two colours, `ratio` clamped to `[0, 1]`
pub fn blend_color(color1: &str, color2: &str, ratio: f64) -> Result<String, ColorError> {
    let from = hex_to_rgb(color1)?;
    let to = hex_to_rgb(color2)?;
    Ok(blend_rgb(from, to, ratio).to_string())
}

pub fn blend_rgb(from: Rgb, to: Rgb, ratio: f64) -> Rgb {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let lerp = |a: u8, b: u8| {
        let a = f64::from(a);
        let b = f64::from(b);
        (a + (b - a) * ratio).round() as u8
    };
    Rgb {
        r: lerp(from.r, to.r),
        g: lerp(from.g, to.g),
        b: lerp(from.b, to.b),
    }
}

/// CSS `rgba(r, g, b, a)` string; alpha is passed through as given
pub fn with_alpha(color: &str, alpha: f64) -> Result<String, ColorError> {
    hex_to_rgb(color).map(|rgb| rgba(rgb, alpha))
}

fn rgba(rgb: Rgb, alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, alpha)
}

/// Perceptual luminance in `[0, 1]`
pub fn luminance(rgb: Rgb) -> f64 {
    (0.299 * f64::from(rgb.r) + 0.587 * f64::from(rgb.g) + 0.114 * f64::from(rgb.b)) / 255.0
}

pub fn is_light_color(color: &str) -> Result<bool, ColorError> {
    hex_to_rgb(color).map(|rgb| luminance(rgb) > 0.5)
}

/// Channel-wise inversion
pub fn complementary_color(color: &str) -> Result<String, ColorError> {
    let rgb = hex_to_rgb(color)?;
    Ok(Rgb {
        r: 255 - rgb.r,
        g: 255 - rgb.g,
        b: 255 - rgb.b,
    }
    .to_string())
}

/// [`with_alpha`], falling back to black at the requested alpha
pub fn with_alpha_or_black(color: &str, alpha: f64) -> String {
    with_alpha(color, alpha).unwrap_or_else(|e| {
        tracing::warn!(%e, "falling back to black");
        rgba(Rgb::BLACK, alpha)
    })
}

/// [`blend_color`], falling back to the first colour unchanged
pub fn blend_color_or_first(color1: &str, color2: &str, ratio: f64) -> String {
    blend_color(color1, color2, ratio).unwrap_or_else(|e| {
        tracing::warn!(%e, "blend skipped");
        color1.to_string()
    })
}
