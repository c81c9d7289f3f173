//! App bar components
//!
//! The header bar is the library's busiest style resolver: its background
//! depends on the theme's dark flag and elevation, its status-bar directive
//! on the resolved background's perceived lightness, and its top offset on
//! the host platform. All of that is computed in one pure pass; the caller
//! pushes the returned directive through a status-bar adapter.

use serde::{Deserialize, Serialize};
use veneer_platform::{approx_status_bar_height, Platform, StatusBar, StatusBarStyle};
use veneer_theme::{
    flatten, is_light, overlay, shadow, style_map, Shadow, StyleMap, StyleValue, Theme, Themed,
    TRANSPARENT,
};

/// Default app bar height in logical pixels
pub const DEFAULT_APPBAR_HEIGHT: f32 = 56.0;

/// Default header elevation level
pub const DEFAULT_HEADER_ELEVATION: f32 = 4.0;

// =============================================================================
// Appbar (inner bar)
// =============================================================================

/// The bar itself: a horizontal row holding the screen title and actions
///
/// Inside an [`AppbarHeader`] the row renders flat; the header wrapper owns
/// the elevation shadow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Appbar {
    /// Use the theme primary color even in dark mode
    #[serde(default)]
    pub primary: bool,
    /// Caller style override
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
}

impl Appbar {
    /// Create a new app bar
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the theme primary color even in dark mode
    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    /// Set a caller style override
    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

impl Themed for Appbar {
    type Styles = StyleMap;

    fn computed_styles(&self, theme: &Theme) -> StyleMap {
        let background = header_background(theme, self.primary, DEFAULT_HEADER_ELEVATION, None);
        let base = style_map([
            ("flexDirection", "row".into()),
            ("alignItems", "center".into()),
            ("height", DEFAULT_APPBAR_HEIGHT.into()),
            ("paddingHorizontal", 4.0.into()),
            ("backgroundColor", background.into()),
        ]);
        flatten(&[base, self.style.clone()])
    }
}

// =============================================================================
// Appbar Header
// =============================================================================

/// A header at the top of the screen
///
/// Wraps an [`Appbar`] with the status-bar offset, the elevation shadow,
/// and the status-bar glyph directive derived from the resolved background.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppbarHeader {
    /// Whether the background is a dark color; a dark header renders light
    /// status-bar glyphs and vice versa. Unset derives it from the resolved
    /// background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<bool>,
    /// Use the theme primary color even in dark mode. By default in dark
    /// mode the header uses the elevated surface color.
    #[serde(default)]
    pub primary: bool,
    /// Extra top padding to account for a translucent status bar. Unset
    /// falls back to the platform's approximate status-bar height; pass 0
    /// to disable the offset entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_bar_height: Option<f32>,
    /// Platform the header is resolved for
    #[serde(default)]
    pub platform: Platform,
    /// Caller style override; `height`, `elevation`, `backgroundColor`, and
    /// `zIndex` here feed the computation, everything else merges last.
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
}

impl AppbarHeader {
    /// Create a new header with default props
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the dark/light content mode instead of deriving it
    pub fn with_dark(mut self, dark: bool) -> Self {
        self.dark = Some(dark);
        self
    }

    /// Use the theme primary color even in dark mode
    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    /// Set an explicit status-bar offset
    pub fn with_status_bar_height(mut self, height: f32) -> Self {
        self.status_bar_height = Some(height);
        self
    }

    /// Set the platform the header is resolved for
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Set a caller style override
    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

/// Resolved header presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderStyles {
    /// Outer wrapper style (background, stacking, shadow host)
    pub wrapper: StyleMap,
    /// Inner bar style (height, background, status-bar offset, overrides)
    pub appbar: StyleMap,
    /// Elevation shadow for the wrapper
    pub shadow: Shadow,
    /// Directive for the host status bar
    pub status_bar: StatusBarStyle,
}

impl HeaderStyles {
    /// Push the resolved directive to a host status-bar adapter
    ///
    /// Fire-and-forget; the host confirms nothing.
    pub fn apply_status_bar(&self, bar: &dyn StatusBar) {
        tracing::trace!(directive = ?self.status_bar, "applying header status bar directive");
        bar.set_bar_style(self.status_bar);
    }
}

impl Themed for AppbarHeader {
    type Styles = HeaderStyles;

    fn computed_styles(&self, theme: &Theme) -> HeaderStyles {
        // Caller keys that feed the computation are pulled out; the rest of
        // the override merges after the structural layer.
        let height = number_prop(&self.style, "height").unwrap_or(DEFAULT_APPBAR_HEIGHT);
        let elevation =
            number_prop(&self.style, "elevation").unwrap_or(DEFAULT_HEADER_ELEVATION);
        let z_index = number_prop(&self.style, "zIndex").unwrap_or(0.0);
        let background_override = self
            .style
            .get("backgroundColor")
            .and_then(StyleValue::as_str)
            .map(str::to_string);

        let mut rest = self.style.clone();
        for key in ["height", "elevation", "zIndex", "backgroundColor"] {
            rest.remove(key);
        }

        let background = header_background(
            theme,
            self.primary,
            elevation,
            background_override.as_deref(),
        );

        let dark_background = match self.dark {
            Some(dark) => dark,
            // The transparent sentinel short-circuits: no lightness math on
            // a non-color keyword.
            None if background == TRANSPARENT => true,
            None => !is_light(&background).unwrap_or(false),
        };
        let status_bar = StatusBarStyle::for_dark_background(dark_background);

        let margin_top = self
            .status_bar_height
            .unwrap_or_else(|| approx_status_bar_height(self.platform));

        let base = style_map([
            ("height", height.into()),
            ("backgroundColor", background.as_str().into()),
            ("marginTop", margin_top.into()),
        ]);
        // The wrapper owns the shadow; the bar itself always renders flat.
        let structural = style_map([("elevation", 0.0.into())]);
        let appbar = flatten(&[base, structural, rest]);

        let wrapper = style_map([
            ("backgroundColor", background.as_str().into()),
            ("zIndex", z_index.into()),
        ]);

        HeaderStyles {
            wrapper,
            appbar,
            shadow: shadow(elevation),
            status_bar,
        }
    }
}

/// Resolve the header background color
///
/// Precedence: caller override, then the dark-mode elevated surface (unless
/// `primary` forces the brand color), then the theme primary color. The
/// result is never undefined.
fn header_background(
    theme: &Theme,
    primary: bool,
    elevation: f32,
    override_color: Option<&str>,
) -> String {
    if let Some(color) = override_color {
        return color.to_string();
    }
    if theme.dark && !primary {
        overlay(elevation, &theme.colors.surface)
    } else {
        theme.colors.primary.clone()
    }
}

fn number_prop(style: &StyleMap, key: &str) -> Option<f32> {
    style.get(key).and_then(StyleValue::as_number).map(|n| n as f32)
}
