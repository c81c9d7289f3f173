//! Platform layer for Veneer
//!
//! This crate identifies the host platform a style is being resolved for and
//! wraps the host subsystems components talk to. Resolvers stay pure: they
//! return directives as data, and the adapters here perform the actual
//! imperative call-outs.
//!
//! # Modules
//!
//! - [`status_bar`] - Status-bar directive and host adapter

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod status_bar;

pub use status_bar::{LoggingStatusBar, StatusBar, StatusBarStyle};

use serde::{Deserialize, Serialize};

// =============================================================================
// Platform Identifiers
// =============================================================================

/// The host platform styles are resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS
    #[default]
    Ios,
    /// Android
    Android,
    /// Web
    Web,
}

impl Platform {
    /// Whether this is the web platform
    pub fn is_web(&self) -> bool {
        matches!(self, Platform::Web)
    }

    /// Whether this is a native (non-web) platform
    pub fn is_native(&self) -> bool {
        !self.is_web()
    }
}

// =============================================================================
// Status Bar Constants
// =============================================================================

/// Approximate status-bar heights per platform, in logical pixels
pub mod status_bar_height {
    /// iOS status bar (pre-notch devices)
    pub const IOS: f32 = 20.0;
    /// Android status bar
    pub const ANDROID: f32 = 24.0;
    /// Web has no status bar
    pub const WEB: f32 = 0.0;
}

/// Approximate status-bar height for a platform, in logical pixels
///
/// Components use this as the default top offset when the caller does not
/// pass an explicit one.
pub fn approx_status_bar_height(platform: Platform) -> f32 {
    match platform {
        Platform::Ios => status_bar_height::IOS,
        Platform::Android => status_bar_height::ANDROID,
        Platform::Web => status_bar_height::WEB,
    }
}
