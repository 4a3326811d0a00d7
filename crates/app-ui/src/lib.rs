//! Design system data for Bugar
//!
//! Screens never hard-code colors: they resolve semantic roles through the
//! palette of the active appearance mode.
//!
//! Two appearance modes are supported:
//! - [`theme::AppearanceMode::Light`] - white background, dark text
//! - [`theme::AppearanceMode::Dark`] - black background, light text
//!
//! # Example
//!
//! ```rust
//! use app_ui::{AppearanceMode, ColorRole};
//!
//! let palette = AppearanceMode::Light.palette();
//! assert_eq!(palette.color(ColorRole::Background), "#FFFFFF");
//! assert!(AppearanceMode::Light.toggled().is_dark());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod theme;

// Re-export commonly used types
pub use theme::{
    brand, parse_hex_color, AppearanceMode, Color, ColorRole, Palette,
    DARK_PALETTE, LIGHT_PALETTE,
};
