//! Application state management for Bugar
//!
//! This crate owns the process-wide appearance preference: the active
//! light/dark mode, its palette, persistence, and change notifications.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod preferences;

pub use preferences::{
    AppearanceState, PreferenceConfig, PreferenceStore, Subscription, DEFAULT_STORAGE_KEY,
};
