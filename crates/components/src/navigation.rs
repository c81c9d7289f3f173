//! Bottom navigation
//!
//! A tab-bar model for switching between top-level scenes. Each route may
//! carry its own bar color; the active route's color drives the bar, falling
//! back to the theme primary color.

use serde::{Deserialize, Serialize};
use veneer_theme::{is_light, style_map, Color, StyleMap, Theme, Themed};

/// Default bottom bar height in logical pixels
pub const BOTTOM_NAV_HEIGHT: f32 = 56.0;

// =============================================================================
// Routes
// =============================================================================

/// One navigable tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavRoute {
    /// Unique route key
    pub key: String,
    /// Tab title
    pub title: String,
    /// Icon name
    pub icon: String,
    /// Bar color while this tab is active; unset falls back to the theme
    /// primary color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Whether the tab shows a badge
    #[serde(default)]
    pub badge: bool,
}

impl NavRoute {
    /// Create a new route
    pub fn new(key: impl Into<String>, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            icon: icon.into(),
            color: None,
            badge: false,
        }
    }

    /// Set the bar color for this route
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Show a badge on this tab
    pub fn with_badge(mut self, badge: bool) -> Self {
        self.badge = badge;
        self
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Bottom navigation state: the route list and the active index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Active route index
    index: usize,
    /// All routes, in tab order
    routes: Vec<NavRoute>,
}

impl NavigationState {
    /// Create navigation state starting at the first route
    pub fn new(routes: Vec<NavRoute>) -> Self {
        Self { index: 0, routes }
    }

    /// The active route index
    pub fn index(&self) -> usize {
        self.index
    }

    /// All routes
    pub fn routes(&self) -> &[NavRoute] {
        &self.routes
    }

    /// Switch to the given tab; out-of-range indices clamp to the last tab
    pub fn set_index(&mut self, index: usize) {
        self.index = index.min(self.routes.len().saturating_sub(1));
    }

    /// The active route, if any routes exist
    pub fn active_route(&self) -> Option<&NavRoute> {
        self.routes.get(self.index)
    }

    /// The bar color for the active route
    pub fn bar_color(&self, theme: &Theme) -> Color {
        self.active_route()
            .and_then(|route| route.color.clone())
            .unwrap_or_else(|| theme.colors.primary.clone())
    }
}

/// Resolved bottom bar presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottomNavStyles {
    /// Bar container style
    pub bar: StyleMap,
    /// Label/icon color on the bar
    pub content_color: Color,
}

impl Themed for NavigationState {
    type Styles = BottomNavStyles;

    fn computed_styles(&self, theme: &Theme) -> BottomNavStyles {
        let background = self.bar_color(theme);
        // Unparseable bar colors read as dark, keeping labels visible
        let content_color = if is_light(&background).unwrap_or(false) {
            "#000000".to_string()
        } else {
            "#FFFFFF".to_string()
        };

        BottomNavStyles {
            bar: style_map([
                ("flexDirection", "row".into()),
                ("height", BOTTOM_NAV_HEIGHT.into()),
                ("backgroundColor", background.as_str().into()),
            ]),
            content_color,
        }
    }
}
