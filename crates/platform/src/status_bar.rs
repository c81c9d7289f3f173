//! Status-bar directive and host adapter
//!
//! A resolver that wants light or dark status-bar glyphs does not reach into
//! the host directly. It returns a [`StatusBarStyle`] as part of its output,
//! and the caller pushes that directive through a [`StatusBar`] adapter.
//! The call is fire-and-forget: the host reports nothing back and there is
//! no error path.

use serde::{Deserialize, Serialize};

// =============================================================================
// Directive
// =============================================================================

/// Glyph rendering mode requested from the host status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusBarStyle {
    /// Light glyphs, for dark backgrounds
    #[serde(rename = "light-content")]
    LightContent,
    /// Dark glyphs, for light backgrounds
    #[serde(rename = "dark-content")]
    DarkContent,
}

impl StatusBarStyle {
    /// The directive for a background of the given darkness
    pub fn for_dark_background(dark: bool) -> Self {
        if dark {
            StatusBarStyle::LightContent
        } else {
            StatusBarStyle::DarkContent
        }
    }
}

// =============================================================================
// Host Adapter
// =============================================================================

/// Host status-bar subsystem
///
/// Implemented once per host shell; swapped for a mock in tests. The single
/// operation takes effect immediately and confirms nothing.
#[cfg_attr(test, mockall::automock)]
pub trait StatusBar {
    /// Ask the host to render status-bar glyphs in the given style
    fn set_bar_style(&self, style: StatusBarStyle);
}

/// Adapter that records directives in the trace log
///
/// Useful as a default host in shells that have no status bar (web) and in
/// examples; every directive surfaces in traces instead of vanishing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingStatusBar;

impl StatusBar for LoggingStatusBar {
    fn set_bar_style(&self, style: StatusBarStyle) {
        tracing::debug!(?style, "status bar style requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_for_background() {
        assert_eq!(
            StatusBarStyle::for_dark_background(true),
            StatusBarStyle::LightContent
        );
        assert_eq!(
            StatusBarStyle::for_dark_background(false),
            StatusBarStyle::DarkContent
        );
    }

    #[test]
    fn test_directive_wire_names() {
        assert_eq!(
            serde_json::to_string(&StatusBarStyle::LightContent).unwrap(),
            "\"light-content\""
        );
        assert_eq!(
            serde_json::to_string(&StatusBarStyle::DarkContent).unwrap(),
            "\"dark-content\""
        );
    }

    #[test]
    fn test_adapter_receives_directive() {
        let mut mock = MockStatusBar::new();
        mock.expect_set_bar_style()
            .with(mockall::predicate::eq(StatusBarStyle::LightContent))
            .times(1)
            .return_const(());

        mock.set_bar_style(StatusBarStyle::LightContent);
    }

    #[test]
    fn test_logging_adapter_is_fire_and_forget() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        // No panic, no return value to observe
        LoggingStatusBar.set_bar_style(StatusBarStyle::DarkContent);
    }
}
