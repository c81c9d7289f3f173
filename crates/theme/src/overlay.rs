//! Elevation overlays for dark surfaces
//!
//! Dark themes do not use shadows alone to convey depth; an elevated surface
//! is tinted toward white, with the tint strength growing with the elevation
//! level. The opacity stops follow the Material elevation-overlay table and
//! are linearly interpolated between defined levels.

use crate::color::{mix, Color};

/// Elevation level to white-overlay opacity stops
///
/// Levels between stops interpolate linearly; levels above the last stop
/// clamp to it.
const OVERLAY_STOPS: [(f32, f32); 10] = [
    (0.0, 0.00),
    (1.0, 0.05),
    (2.0, 0.07),
    (3.0, 0.08),
    (4.0, 0.09),
    (6.0, 0.11),
    (8.0, 0.12),
    (12.0, 0.14),
    (16.0, 0.15),
    (24.0, 0.16),
];

/// Overlay opacity for an elevation level
fn overlay_opacity(elevation: f32) -> f32 {
    let elevation = elevation.max(0.0);

    let mut prev = OVERLAY_STOPS[0];
    for stop in OVERLAY_STOPS.iter().copied() {
        if elevation == stop.0 {
            return stop.1;
        }
        if elevation < stop.0 {
            let t = (elevation - prev.0) / (stop.0 - prev.0);
            return prev.1 + (stop.1 - prev.1) * t;
        }
        prev = stop;
    }

    // Beyond the highest defined level the overlay stops growing
    OVERLAY_STOPS[OVERLAY_STOPS.len() - 1].1
}

/// Compute the elevated-surface color for a dark theme
///
/// Returns the surface tinted toward white by the overlay opacity for the
/// given elevation. Elevation 0 returns the surface unchanged. An
/// unparseable surface color falls back to the input untouched; resolvers
/// always feed this function theme-sourced colors, so the fallback is a
/// documented no-op rather than an error path.
pub fn overlay(elevation: f32, surface: &str) -> Color {
    let opacity = overlay_opacity(elevation);
    if opacity == 0.0 {
        return surface.to_string();
    }
    mix(surface, "#FFFFFF", opacity).unwrap_or_else(|_| surface.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_hex_color;

    #[test]
    fn test_overlay_opacity_at_stops() {
        assert_eq!(overlay_opacity(0.0), 0.0);
        assert_eq!(overlay_opacity(1.0), 0.05);
        assert_eq!(overlay_opacity(4.0), 0.09);
        assert_eq!(overlay_opacity(24.0), 0.16);
    }

    #[test]
    fn test_overlay_opacity_interpolates() {
        let opacity = overlay_opacity(5.0);
        assert!(opacity > 0.09 && opacity < 0.11);
    }

    #[test]
    fn test_overlay_opacity_clamps() {
        assert_eq!(overlay_opacity(48.0), 0.16);
        assert_eq!(overlay_opacity(-1.0), 0.0);
    }

    #[test]
    fn test_overlay_zero_is_identity() {
        assert_eq!(overlay(0.0, "#121212"), "#121212");
    }

    #[test]
    fn test_overlay_lightens_surface() {
        let base = parse_hex_color("#121212").unwrap();
        let elevated = parse_hex_color(&overlay(4.0, "#121212")).unwrap();
        assert!(elevated.r > base.r);
        assert!(elevated.g > base.g);
        assert!(elevated.b > base.b);
    }

    #[test]
    fn test_overlay_grows_with_elevation() {
        let low = parse_hex_color(&overlay(1.0, "#121212")).unwrap();
        let high = parse_hex_color(&overlay(8.0, "#121212")).unwrap();
        assert!(high.r > low.r);
    }

    #[test]
    fn test_overlay_never_reaches_primary_hue() {
        // The elevated surface is a tint of the surface, not the brand color
        assert_ne!(overlay(4.0, "#121212"), "#BB86FC");
    }

    #[test]
    fn test_overlay_unparseable_surface_is_identity() {
        assert_eq!(overlay(4.0, "transparent"), "transparent");
    }
}
