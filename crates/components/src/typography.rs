//! Typography components
//!
//! Text components resolve their color and font from the theme and accept a
//! caller style override that always wins. The concrete variants (`Text`,
//! `Title`, `Paragraph`) are thin prop bundles over one shared resolver,
//! [`StyledText`].

use serde::{Deserialize, Serialize};
use veneer_theme::{
    flatten, style_map, with_alpha, FontVariant, StyleMap, Theme, Themed,
};

/// Fallback text color when the theme text color cannot be parsed
const FALLBACK_TEXT_COLOR: &str = "#000000";

// =============================================================================
// Styled Text
// =============================================================================

/// Shared resolver for theme-following text
///
/// Layers, in precedence order: theme-derived color and font, the variant's
/// base metrics, the caller override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledText {
    /// Opacity applied to the theme text color (0.0 - 1.0)
    pub alpha: f32,
    /// Theme font weight to render with
    pub family: FontVariant,
    /// Variant base metrics (font size, line height, margins)
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub base: StyleMap,
    /// Caller style override
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
}

impl Default for StyledText {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            family: FontVariant::Regular,
            base: StyleMap::new(),
            style: StyleMap::new(),
        }
    }
}

impl StyledText {
    /// Create a resolver for the given alpha and font weight
    pub fn new(alpha: f32, family: FontVariant) -> Self {
        Self {
            alpha,
            family,
            ..Self::default()
        }
    }

    /// Set the variant base metrics
    pub fn with_base(mut self, base: StyleMap) -> Self {
        self.base = base;
        self
    }

    /// Set a caller style override
    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

impl Themed for StyledText {
    type Styles = StyleMap;

    fn computed_styles(&self, theme: &Theme) -> StyleMap {
        // The resolved color is never undefined: an unparseable theme color
        // falls back to plain black.
        let color = with_alpha(&theme.colors.text, self.alpha)
            .unwrap_or_else(|_| FALLBACK_TEXT_COLOR.to_string());
        let font = theme.fonts.get(self.family);

        let themed = style_map([
            ("color", color.into()),
            ("fontFamily", font.family.as_str().into()),
            ("fontWeight", f32::from(font.weight).into()),
        ]);
        flatten(&[themed, self.base.clone(), self.style.clone()])
    }
}

// =============================================================================
// Text
// =============================================================================

/// Plain text following the theme's regular font and text color
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Caller style override
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
}

impl Text {
    /// Create a new text component
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a caller style override
    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

impl Themed for Text {
    type Styles = StyleMap;

    fn computed_styles(&self, theme: &Theme) -> StyleMap {
        StyledText::new(1.0, FontVariant::Regular)
            .with_style(self.style.clone())
            .computed_styles(theme)
    }
}

// =============================================================================
// Title
// =============================================================================

/// Typography component for showing a title
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// Caller style override
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
}

impl Title {
    /// Create a new title
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a caller style override
    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

impl Themed for Title {
    type Styles = StyleMap;

    fn computed_styles(&self, theme: &Theme) -> StyleMap {
        StyledText::new(0.87, FontVariant::Medium)
            .with_base(style_map([
                ("fontSize", 20.0.into()),
                ("lineHeight", 30.0.into()),
                ("marginVertical", 2.0.into()),
            ]))
            .with_style(self.style.clone())
            .computed_styles(theme)
    }
}

// =============================================================================
// Paragraph
// =============================================================================

/// Typography component for showing a paragraph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Caller style override
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
}

impl Paragraph {
    /// Create a new paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a caller style override
    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

impl Themed for Paragraph {
    type Styles = StyleMap;

    fn computed_styles(&self, theme: &Theme) -> StyleMap {
        StyledText::new(0.87, FontVariant::Regular)
            .with_base(style_map([
                ("fontSize", 14.0.into()),
                ("lineHeight", 20.0.into()),
                ("marginVertical", 2.0.into()),
            ]))
            .with_style(self.style.clone())
            .computed_styles(theme)
    }
}
