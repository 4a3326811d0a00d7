//! Platform-specific code for Bugar
//!
//! This crate answers questions only the host platform can answer, such as
//! which appearance the operating system currently prefers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod appearance;

pub use appearance::{AppearanceSource, FixedAppearance, SystemAppearance};
