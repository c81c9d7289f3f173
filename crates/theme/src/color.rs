//! Color utilities for Veneer
//!
//! Colors flow through the library as RGBA hex strings so that resolved
//! styles stay directly serializable for the host renderer. This module
//! provides the small amount of color math the resolvers need: hex parsing,
//! alpha application, and the perceived-lightness check used to pick
//! status-bar glyph colors.

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Type
// =============================================================================

/// A color represented as an RGBA hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// The sentinel value for a fully transparent background.
///
/// Resolvers must short-circuit on this value instead of running color math
/// on it: it is a keyword, not a parseable color.
pub const TRANSPARENT: &str = "transparent";

/// Errors that can occur when parsing a color string
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not a recognizable hex color
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;

// =============================================================================
// Parsing
// =============================================================================

/// Parsed RGBA components of a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255, 255 = opaque)
    pub a: u8,
}

/// Parse a hex color string to RGBA components
///
/// Accepts `#RRGGBB` and `#RRGGBBAA`, with or without the leading `#`.
pub fn parse_hex_color(hex: &str) -> Result<Rgba> {
    let raw = hex.trim_start_matches('#');
    // Every character must be a hex digit before any slicing: this rejects
    // non-ASCII input (whose byte ranges need not fall on char boundaries)
    // and the sign characters `from_str_radix` would otherwise accept.
    if raw.len() != 6 && raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }

    let component = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&raw[range], 16)
            .map_err(|_| ColorError::InvalidHex(hex.to_string()))
    };

    let r = component(0..2)?;
    let g = component(2..4)?;
    let b = component(4..6)?;
    let a = if raw.len() == 8 { component(6..8)? } else { 255 };

    Ok(Rgba { r, g, b, a })
}

/// Convert RGB components to a hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> Color {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Convert RGBA components to a hex string, omitting the alpha byte when opaque
pub fn rgba_to_hex(rgba: Rgba) -> Color {
    if rgba.a == 255 {
        rgb_to_hex(rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

/// Apply an alpha value (0.0 - 1.0) to a color
///
/// Any alpha already present in the input is replaced, matching how the
/// typography styles derive muted text from the theme's base text color.
pub fn with_alpha(color: &str, alpha: f32) -> Result<Color> {
    let rgba = parse_hex_color(color)?;
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Ok(rgba_to_hex(Rgba { a, ..rgba }))
}

// =============================================================================
// Perceived Lightness
// =============================================================================

/// The YIQ luma value below which a color reads as dark.
///
/// Pinned to 128 to match the behavior of the color library the original
/// status-bar heuristic was written against.
pub const LIGHTNESS_THRESHOLD: f32 = 128.0;

/// Compute the YIQ luma of a color (0.0 - 255.0)
///
/// Alpha is ignored; the heuristic only looks at the opaque channels.
pub fn luma(color: &str) -> Result<f32> {
    let Rgba { r, g, b, .. } = parse_hex_color(color)?;
    Ok((r as f32 * 299.0 + g as f32 * 587.0 + b as f32 * 114.0) / 1000.0)
}

/// Whether a color is perceived as light
pub fn is_light(color: &str) -> Result<bool> {
    Ok(luma(color)? >= LIGHTNESS_THRESHOLD)
}

/// Blend an overlay color over a base color, weighted by `opacity` (0.0 - 1.0)
///
/// Both inputs are treated as opaque; the result is an opaque hex color.
pub fn mix(base: &str, over: &str, opacity: f32) -> Result<Color> {
    let base = parse_hex_color(base)?;
    let over = parse_hex_color(over)?;
    let t = opacity.clamp(0.0, 1.0);

    let channel = |b: u8, o: u8| {
        (b as f32 + (o as f32 - b as f32) * t).round() as u8
    };

    Ok(rgb_to_hex(
        channel(base.r, over.r),
        channel(base.g, over.g),
        channel(base.b, over.b),
    ))
}
