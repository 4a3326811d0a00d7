//! Platform-reported appearance
//!
//! The preference store falls back to the platform's light/dark setting when no
//! choice has been persisted yet.

use app_ui::AppearanceMode;

/// Source of the platform's preferred appearance
pub trait AppearanceSource: Send + Sync {
    /// The platform's preferred mode, or `None` when it expresses no preference
    fn system_appearance(&self) -> Option<AppearanceMode>;
}

/// Asks the operating system via the `dark-light` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAppearance;

impl AppearanceSource for SystemAppearance {
    fn system_appearance(&self) -> Option<AppearanceMode> {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Some(AppearanceMode::Light),
            Ok(dark_light::Mode::Dark) => Some(AppearanceMode::Dark),
            Ok(dark_light::Mode::Unspecified) => None,
            Err(err) => {
                tracing::debug!("Platform appearance detection failed: {:?}", err);
                None
            }
        }
    }
}

/// Reports a fixed answer; used for headless runs and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedAppearance(pub Option<AppearanceMode>);

impl FixedAppearance {
    /// Platform prefers `mode`
    pub fn new(mode: AppearanceMode) -> Self {
        Self(Some(mode))
    }

    /// Platform has no preference
    pub fn unspecified() -> Self {
        Self(None)
    }
}

impl AppearanceSource for FixedAppearance {
    fn system_appearance(&self) -> Option<AppearanceMode> {
        self.0
    }
}
