//! Theme system for Veneer
//!
//! This crate owns the data a themeable component library resolves against:
//! theme objects (colors, fonts, dark-mode flag), color math, elevation
//! overlays and shadows, and the ordered style-layer merge every component
//! resolver composes its output with.
//!
//! # Modules
//!
//! - [`theme`] - Theme model, built-in themes, and the theme provider
//! - [`color`] - Hex color parsing, alpha, and perceived lightness
//! - [`overlay`] - Dark-mode elevation overlays
//! - [`shadow`] - Elevation shadows
//! - [`style`] - Style layers and ordered merging
//!
//! # Example
//!
//! ```rust
//! use veneer_theme::{flatten, get_theme, style_map, ThemeName};
//!
//! let theme = get_theme(ThemeName::Light);
//! let base = style_map([("backgroundColor", theme.colors.primary.as_str().into())]);
//! let caller = style_map([("backgroundColor", "#FF0000".into())]);
//!
//! let merged = flatten(&[base, caller]);
//! assert_eq!(merged["backgroundColor"].as_str(), Some("#FF0000"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod overlay;
pub mod shadow;
pub mod style;
pub mod theme;

// Re-export commonly used types
pub use color::{
    is_light, luma, mix, parse_hex_color, rgb_to_hex, rgba_to_hex, with_alpha, Color, ColorError,
    Rgba, LIGHTNESS_THRESHOLD, TRANSPARENT,
};
pub use overlay::overlay;
pub use shadow::{shadow, Shadow};
pub use style::{flatten, style_map, StyleMap, StyleValue};
pub use theme::{
    all_themes, dark_theme, get_theme, light_theme, FontDescriptor, FontVariant, Fonts, Theme,
    ThemeColors, ThemeName, ThemeProvider, Themed,
};
