//! Gallery Layout Integration Tests
//!
//! The media grid has exactly two stylesheet variants: CSS grid on the web
//! and flex-wrap on native platforms.

use veneer::components::gallery_styles;
use veneer::platform::Platform;

#[test]
fn test_web_gets_grid_layout() {
    let styles = gallery_styles(Platform::Web, 1280.0);

    assert_eq!(styles.content["display"].as_str(), Some("grid"));
    assert_eq!(
        styles.content["gridTemplateColumns"].as_str(),
        Some("repeat(auto-fill, minmax(150px, 1fr))")
    );
    assert!(!styles.content.contains_key("flexDirection"));
}

#[test]
fn test_native_gets_flex_wrap_layout() {
    for platform in [Platform::Ios, Platform::Android] {
        let styles = gallery_styles(platform, 375.0);

        assert_eq!(styles.content["flexWrap"].as_str(), Some("wrap"));
        assert_eq!(styles.item["width"].as_str(), Some("50%"));
        assert_eq!(styles.item["height"].as_number(), Some(187.5));
        assert!(!styles.content.contains_key("display"));
    }
}

#[test]
fn test_no_third_variant_exists() {
    // Every platform resolves to one of exactly two stylesheets
    let web = gallery_styles(Platform::Web, 800.0);
    let ios = gallery_styles(Platform::Ios, 800.0);
    let android = gallery_styles(Platform::Android, 800.0);

    assert_eq!(ios, android);
    assert_ne!(web, ios);
}

#[test]
fn test_styles_serialize_for_the_host() {
    let styles = gallery_styles(Platform::Web, 1280.0);
    let json = serde_json::to_value(&styles).unwrap();

    assert_eq!(json["content"]["display"], "grid");
    assert_eq!(json["item"]["height"], 150.0);
}
