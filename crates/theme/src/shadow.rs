//! Shadow definitions
//!
//! Shadows carry the depth cue on light backgrounds. A shadow is derived
//! from a numeric elevation level; dark themes pair this with the elevation
//! overlay from [`crate::overlay`].

use serde::{Deserialize, Serialize};

/// Shadow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
    /// Shadow opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Shadow color
    pub color: String,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, opacity: f32, color: &str) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            opacity,
            color: color.to_string(),
        }
    }

    /// The absence of a shadow
    pub fn none() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, "#000000")
    }
}

/// Compute the shadow for an elevation level
///
/// The vertical offset and blur scale with elevation; elevation 0 yields no
/// shadow at all.
pub fn shadow(elevation: f32) -> Shadow {
    let elevation = elevation.max(0.0);
    if elevation == 0.0 {
        return Shadow::none();
    }
    Shadow::new(0.0, 0.5 * elevation, 0.8 * elevation, 0.24, "#000000")
}
