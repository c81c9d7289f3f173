//! Veneer: a themeable UI component library
//!
//! Veneer provides platform-native-looking widget definitions (app bars,
//! typography, bottom navigation) for a mobile/web application shell. The
//! library owns theming and style resolution only; layout, paint, and
//! gesture handling belong to the host renderer, which consumes the
//! serializable styles resolved here.
//!
//! # Crates
//!
//! - [`theme`] - Theme model, color math, elevation overlays, style layers
//! - [`platform`] - Platform identifiers and host adapters
//! - [`components`] - Themed components and layout helpers
//!
//! # Example
//!
//! ```rust
//! use veneer::components::AppbarHeader;
//! use veneer::theme::{get_theme, Themed, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! let header = AppbarHeader::new().computed_styles(&theme);
//!
//! // In dark mode the header sits on the elevated surface, not the brand
//! // color, and asks the host for light status-bar glyphs.
//! assert_ne!(
//!     header.appbar["backgroundColor"].as_str(),
//!     Some(theme.colors.primary.as_str())
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use veneer_components as components;
pub use veneer_platform as platform;
pub use veneer_theme as theme;
