//! Media gallery layout helper
//!
//! A scrollable photo grid renders with CSS grid on the web and with
//! flex-wrap everywhere else. The helper is a single binary selection
//! between the two complete stylesheet variants; there is no merging and no
//! third variant.

use serde::{Deserialize, Serialize};
use veneer_platform::Platform;
use veneer_theme::{style_map, StyleMap};

/// Resolved gallery stylesheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryStyles {
    /// Scroll content container
    pub content: StyleMap,
    /// One grid cell
    pub item: StyleMap,
    /// The photo inside a cell
    pub photo: StyleMap,
}

/// Select the gallery stylesheet for a platform
///
/// `window_width` sizes the native variant's cells (two square-ish columns);
/// the web variant ignores it, its grid tracks are intrinsic.
pub fn gallery_styles(platform: Platform, window_width: f32) -> GalleryStyles {
    if platform.is_web() {
        GalleryStyles {
            content: style_map([
                ("display", "grid".into()),
                (
                    "gridTemplateColumns",
                    "repeat(auto-fill, minmax(150px, 1fr))".into(),
                ),
                // CSS consumes these, so the gaps carry their unit
                ("gridRowGap", "8px".into()),
                ("gridColumnGap", "8px".into()),
                ("padding", 8.0.into()),
            ]),
            item: style_map([("width", "100%".into()), ("height", 150.0.into())]),
            photo: photo_style(),
        }
    } else {
        GalleryStyles {
            content: style_map([
                ("flexDirection", "row".into()),
                ("flexWrap", "wrap".into()),
                ("padding", 4.0.into()),
            ]),
            item: style_map([
                ("height", (window_width / 2.0).into()),
                ("width", "50%".into()),
                ("padding", 4.0.into()),
            ]),
            photo: photo_style(),
        }
    }
}

fn photo_style() -> StyleMap {
    style_map([("flex", 1.0.into()), ("width", "100%".into())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_variant_uses_grid() {
        let styles = gallery_styles(Platform::Web, 1024.0);

        assert_eq!(styles.content["display"].as_str(), Some("grid"));
        assert!(styles.content.contains_key("gridTemplateColumns"));
        assert!(!styles.content.contains_key("flexWrap"));
        assert_eq!(styles.item["height"].as_number(), Some(150.0));
    }

    #[test]
    fn test_web_grid_gaps_carry_css_units() {
        let styles = gallery_styles(Platform::Web, 1024.0);

        assert_eq!(styles.content["gridRowGap"].as_str(), Some("8px"));
        assert_eq!(styles.content["gridColumnGap"].as_str(), Some("8px"));
    }

    #[test]
    fn test_native_variant_uses_flex_wrap() {
        let styles = gallery_styles(Platform::Ios, 375.0);

        assert_eq!(styles.content["flexDirection"].as_str(), Some("row"));
        assert_eq!(styles.content["flexWrap"].as_str(), Some("wrap"));
        assert!(!styles.content.contains_key("display"));
        assert!(!styles.content.contains_key("gridTemplateColumns"));
    }

    #[test]
    fn test_native_item_height_is_half_window_width() {
        let styles = gallery_styles(Platform::Android, 400.0);
        assert_eq!(styles.item["height"].as_number(), Some(200.0));
        assert_eq!(styles.item["width"].as_str(), Some("50%"));
    }

    #[test]
    fn test_all_native_platforms_share_the_default_variant() {
        let ios = gallery_styles(Platform::Ios, 375.0);
        let android = gallery_styles(Platform::Android, 375.0);
        assert_eq!(ios, android);
    }

    #[test]
    fn test_web_ignores_window_width() {
        let narrow = gallery_styles(Platform::Web, 320.0);
        let wide = gallery_styles(Platform::Web, 1920.0);
        assert_eq!(narrow, wide);
    }

    #[test]
    fn test_photo_style_is_shared() {
        let web = gallery_styles(Platform::Web, 1024.0);
        let native = gallery_styles(Platform::Ios, 375.0);
        assert_eq!(web.photo, native.photo);
    }
}
