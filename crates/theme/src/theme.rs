//! Theme model and provider for Veneer
//!
//! A [`Theme`] is an immutable bundle of semantic color tokens, font
//! descriptors, and a dark-mode flag. It is replaced wholesale when the
//! application switches themes and is read-only to every component.
//!
//! Components never read an ambient theme. Each themed component implements
//! [`Themed`] and takes the theme as an explicit argument, which keeps every
//! resolver a pure function of its inputs. [`ThemeProvider`] only stores the
//! tree's current theme and hands it to resolvers; looking a theme up where
//! no provider exists substitutes the default theme rather than failing.
//!
//! # Usage
//!
//! ```rust
//! use veneer_theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! assert!(theme.dark);
//! let bg = &theme.colors.surface;
//! ```

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Theme Name
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

// =============================================================================
// Semantic Colors
// =============================================================================

/// Semantic color tokens shared by every themed component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Primary brand color (toolbars, prominent buttons)
    pub primary: Color,
    /// Accent color (highlights, floating actions)
    pub accent: Color,
    /// Screen background color
    pub background: Color,
    /// Surface color (cards, sheets, app bars in dark mode)
    pub surface: Color,
    /// Error color
    pub error: Color,
    /// Primary text color
    pub text: Color,
    /// Disabled element color
    pub disabled: Color,
    /// Placeholder text color
    pub placeholder: Color,
    /// Modal backdrop color
    pub backdrop: Color,
    /// Notification badge color
    pub notification: Color,
}

// =============================================================================
// Fonts
// =============================================================================

/// A font descriptor: family plus numeric weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Font family name
    pub family: String,
    /// Font weight (100 - 800)
    pub weight: u16,
}

impl FontDescriptor {
    /// Create a new font descriptor
    pub fn new(family: impl Into<String>, weight: u16) -> Self {
        Self {
            family: family.into(),
            weight,
        }
    }
}

/// Font descriptors keyed by weight name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fonts {
    /// Regular weight (400)
    pub regular: FontDescriptor,
    /// Medium weight (500)
    pub medium: FontDescriptor,
    /// Light weight (300)
    pub light: FontDescriptor,
    /// Thin weight (100)
    pub thin: FontDescriptor,
}

impl Fonts {
    /// Look up a font descriptor by weight name
    pub fn get(&self, name: FontVariant) -> &FontDescriptor {
        match name {
            FontVariant::Regular => &self.regular,
            FontVariant::Medium => &self.medium,
            FontVariant::Light => &self.light,
            FontVariant::Thin => &self.thin,
        }
    }
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            regular: FontDescriptor::new("System", 400),
            medium: FontDescriptor::new("System", 500),
            light: FontDescriptor::new("System", 300),
            thin: FontDescriptor::new("System", 100),
        }
    }
}

/// Named font weights available in a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontVariant {
    /// Regular weight
    #[default]
    Regular,
    /// Medium weight
    Medium,
    /// Light weight
    Light,
    /// Thin weight
    Thin,
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Whether this is a dark theme
    pub dark: bool,
    /// Semantic color tokens
    pub colors: ThemeColors,
    /// Font descriptors
    pub fonts: Fonts,
    /// Animation scale multiplier
    pub animation_scale: f32,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.dark
    }
}

impl Default for Theme {
    fn default() -> Self {
        light_theme()
    }
}

// =============================================================================
// Built-in Themes
// =============================================================================

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        dark: false,
        colors: ThemeColors {
            primary: "#6200EE".to_string(),
            accent: "#03DAC4".to_string(),
            background: "#F6F6F6".to_string(),
            surface: "#FFFFFF".to_string(),
            error: "#B00020".to_string(),
            text: "#000000".to_string(),
            disabled: "#00000042".to_string(),    // black at 26%
            placeholder: "#0000008A".to_string(), // black at 54%
            backdrop: "#00000080".to_string(),    // black at 50%
            notification: "#F50057".to_string(),
        },
        fonts: Fonts::default(),
        animation_scale: 1.0,
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        dark: true,
        colors: ThemeColors {
            primary: "#BB86FC".to_string(),
            accent: "#03DAC6".to_string(),
            background: "#121212".to_string(),
            surface: "#121212".to_string(),
            error: "#CF6679".to_string(),
            text: "#FFFFFF".to_string(),
            disabled: "#FFFFFF61".to_string(),    // white at 38%
            placeholder: "#FFFFFF8A".to_string(), // white at 54%
            backdrop: "#00000080".to_string(),
            notification: "#FF80AB".to_string(),
        },
        fonts: Fonts::default(),
        animation_scale: 1.0,
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

/// All available themes
pub fn all_themes() -> HashMap<ThemeName, Theme> {
    let mut themes = HashMap::new();
    themes.insert(ThemeName::Light, light_theme());
    themes.insert(ThemeName::Dark, dark_theme());
    themes
}

// =============================================================================
// Themed Components
// =============================================================================

/// A component whose visual style is a pure function of props and theme
///
/// Implementors must be referentially transparent: identical props and theme
/// always resolve to identical styles.
pub trait Themed {
    /// Resolved style output for this component
    type Styles;

    /// Compute the final styles for this component under the given theme
    fn computed_styles(&self, theme: &Theme) -> Self::Styles;
}

// =============================================================================
// Theme Provider
// =============================================================================

/// Tree-scoped holder for the current theme
///
/// Initialized once at the application root; descendants resolve their
/// styles against [`ThemeProvider::current_theme`]. Where no provider exists
/// in the ancestry, [`ThemeProvider::theme_or_default`] substitutes the
/// default light theme. That substitution is a documented fallback, not a
/// failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeProvider {
    /// Current theme name
    pub theme_name: ThemeName,
    /// Current theme (regenerated on deserialization)
    #[serde(skip, default)]
    theme: Theme,
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(ThemeName::Light)
    }
}

impl ThemeProvider {
    /// Create a provider with the given theme
    pub fn new(theme_name: ThemeName) -> Self {
        Self {
            theme_name,
            theme: get_theme(theme_name),
        }
    }

    /// Replace the current theme wholesale
    pub fn set_theme(&mut self, theme_name: ThemeName) {
        self.theme_name = theme_name;
        self.theme = get_theme(theme_name);
    }

    /// Get the current theme
    pub fn current_theme(&self) -> &Theme {
        &self.theme
    }

    /// Resolve a themed component against the current theme
    pub fn resolve<C: Themed>(&self, component: &C) -> C::Styles {
        component.computed_styles(&self.theme)
    }

    /// The provider's theme, or the default theme when no provider exists
    ///
    /// Components rendered outside a provider's tree still resolve; the
    /// fallback is logged so misconfigured ancestries are visible in traces.
    pub fn theme_or_default(provider: Option<&Self>) -> Theme {
        match provider {
            Some(p) => p.current_theme().clone(),
            None => {
                tracing::debug!("no theme provider in ancestry, using default theme");
                Theme::default()
            }
        }
    }
}
