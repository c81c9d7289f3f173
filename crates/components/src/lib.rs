//! Themed components for Veneer
//!
//! Every component here is a serializable prop bundle whose visual style is
//! resolved by a pure function of the props and an explicit [`Theme`]
//! argument (the [`Themed`] trait). Nothing reads ambient state; side
//! effects such as the status-bar directive come back as data for the
//! caller to push through a platform adapter.
//!
//! # Available Components
//!
//! - [`AppbarHeader`] / [`Appbar`] - Screen header with elevation, status-bar
//!   offset, and glyph directive
//! - [`Text`], [`Title`], [`Paragraph`] - Theme-following typography
//! - [`NavigationState`] - Bottom tab navigation with per-route bar colors
//! - [`gallery_styles`] - Platform-conditional media grid stylesheet
//!
//! [`Theme`]: veneer_theme::Theme
//! [`Themed`]: veneer_theme::Themed

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod appbar;
pub mod gallery;
pub mod navigation;
pub mod typography;

// Re-export commonly used types
pub use appbar::{
    Appbar, AppbarHeader, HeaderStyles, DEFAULT_APPBAR_HEIGHT, DEFAULT_HEADER_ELEVATION,
};
pub use gallery::{gallery_styles, GalleryStyles};
pub use navigation::{BottomNavStyles, NavRoute, NavigationState, BOTTOM_NAV_HEIGHT};
pub use typography::{Paragraph, StyledText, Text, Title};
