//! Appearance modes and color palettes for Bugar
//!
//! Every screen resolves its colors through a [`Palette`] selected by the
//! active [`AppearanceMode`]. Palettes are static data: one per mode, defined
//! at compile time and never mutated.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{AppearanceMode, ColorRole};
//!
//! let palette = AppearanceMode::Dark.palette();
//! assert_eq!(palette.background, "#000000");
//! assert_eq!(palette.color(ColorRole::Background), "#000000");
//! assert_eq!(palette.get("textPrimary"), Some("#FFFFFF"));
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#FFFFFF")
pub type Color = &'static str;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

// =============================================================================
// Brand Colors
// =============================================================================

/// Bugar brand colors
pub mod brand {
    /// Primary brand color (energetic orange)
    pub const PRIMARY: &str = "#FF6B35";

    /// Secondary brand color (calm teal)
    pub const SECONDARY: &str = "#1B998B";

    /// Gold used for exclusive-program badges
    pub const EXCLUSIVE_GOLD: &str = "#F4B400";

    /// Pure white
    pub const WHITE: &str = "#FFFFFF";

    /// Pure black
    pub const BLACK: &str = "#000000";
}

// =============================================================================
// Appearance Mode
// =============================================================================

/// Light/dark display setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    /// Light appearance
    #[default]
    Light,
    /// Dark appearance
    Dark,
}

impl AppearanceMode {
    /// Both modes, light first
    pub const ALL: [AppearanceMode; 2] = [AppearanceMode::Light, AppearanceMode::Dark];

    /// Stable lowercase name, used as the persisted form
    pub fn as_str(&self) -> &'static str {
        match self {
            AppearanceMode::Light => "light",
            AppearanceMode::Dark => "dark",
        }
    }

    /// The opposite mode
    pub fn toggled(self) -> Self {
        match self {
            AppearanceMode::Light => AppearanceMode::Dark,
            AppearanceMode::Dark => AppearanceMode::Light,
        }
    }

    /// Check if this is the dark mode
    pub fn is_dark(&self) -> bool {
        matches!(self, AppearanceMode::Dark)
    }

    /// Palette for this mode
    pub fn palette(self) -> &'static Palette {
        match self {
            AppearanceMode::Light => &LIGHT_PALETTE,
            AppearanceMode::Dark => &DARK_PALETTE,
        }
    }
}

impl std::fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppearanceMode::Light => write!(f, "Light"),
            AppearanceMode::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for AppearanceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(AppearanceMode::Light),
            "dark" => Ok(AppearanceMode::Dark),
            _ => Err(format!("Unknown appearance mode: {}", s)),
        }
    }
}

// =============================================================================
// Color Roles
// =============================================================================

/// Semantic color role resolved through a [`Palette`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    /// Primary actions, active tabs
    Primary,
    /// Secondary accents
    Secondary,
    /// Screen background
    Background,
    /// Elevated surfaces (cards, sheets)
    Surface,
    /// Main text
    TextPrimary,
    /// Labels and captions
    TextSecondary,
    /// Disabled or placeholder text
    TextMuted,
    /// Borders and dividers
    Border,
    /// Icon tint
    Icon,
    /// Completed weeks, confirmations
    Success,
    /// Cautions
    Warning,
    /// Errors and destructive actions
    Error,
    /// Exclusive program badge
    Exclusive,
}

impl ColorRole {
    /// Every role, in declaration order
    pub const ALL: [ColorRole; 13] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::TextPrimary,
        ColorRole::TextSecondary,
        ColorRole::TextMuted,
        ColorRole::Border,
        ColorRole::Icon,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Error,
        ColorRole::Exclusive,
    ];

    /// camelCase role name
    pub fn name(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Background => "background",
            ColorRole::Surface => "surface",
            ColorRole::TextPrimary => "textPrimary",
            ColorRole::TextSecondary => "textSecondary",
            ColorRole::TextMuted => "textMuted",
            ColorRole::Border => "border",
            ColorRole::Icon => "icon",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Error => "error",
            ColorRole::Exclusive => "exclusive",
        }
    }
}

impl std::str::FromStr for ColorRole {
    type Err = String;

    /// Accepts camelCase (`textPrimary`) and snake_case (`text_primary`) names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars().filter(|c| *c != '_').collect::<String>().to_lowercase();
        ColorRole::ALL
            .into_iter()
            .find(|role| role.name().to_lowercase() == normalized)
            .ok_or_else(|| format!("Unknown color role: {}", s))
    }
}

// =============================================================================
// Palette
// =============================================================================

/// Complete set of semantic colors for one appearance mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Primary actions, active tabs
    pub primary: Color,
    /// Secondary accents
    pub secondary: Color,
    /// Screen background
    pub background: Color,
    /// Elevated surfaces
    pub surface: Color,
    /// Main text
    pub text_primary: Color,
    /// Labels and captions
    pub text_secondary: Color,
    /// Disabled or placeholder text
    pub text_muted: Color,
    /// Borders and dividers
    pub border: Color,
    /// Icon tint
    pub icon: Color,
    /// Positive state
    pub success: Color,
    /// Caution state
    pub warning: Color,
    /// Error state
    pub error: Color,
    /// Exclusive program badge
    pub exclusive: Color,
}

impl Palette {
    /// Resolve a color by role
    pub fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::TextPrimary => self.text_primary,
            ColorRole::TextSecondary => self.text_secondary,
            ColorRole::TextMuted => self.text_muted,
            ColorRole::Border => self.border,
            ColorRole::Icon => self.icon,
            ColorRole::Success => self.success,
            ColorRole::Warning => self.warning,
            ColorRole::Error => self.error,
            ColorRole::Exclusive => self.exclusive,
        }
    }

    /// Resolve a color by role name; `None` for unknown roles
    pub fn get(&self, role: &str) -> Option<Color> {
        role.parse::<ColorRole>().ok().map(|r| self.color(r))
    }

    /// Iterate over every `(role, color)` pair
    pub fn entries(&self) -> impl Iterator<Item = (ColorRole, Color)> + '_ {
        ColorRole::ALL.into_iter().map(move |role| (role, self.color(role)))
    }
}

/// Palette used in light mode
pub static LIGHT_PALETTE: Palette = Palette {
    primary: brand::PRIMARY,
    secondary: brand::SECONDARY,
    background: brand::WHITE,
    surface: "#F5F5F7",
    text_primary: brand::BLACK,
    text_secondary: "#5C5C66",
    text_muted: "#9A9AA3",
    border: "#E2E2E8",
    icon: "#3D3D45",
    success: "#2E9E5B",
    warning: "#E8A317",
    error: "#D93F3F",
    exclusive: brand::EXCLUSIVE_GOLD,
};

/// Palette used in dark mode
pub static DARK_PALETTE: Palette = Palette {
    primary: "#FF8457",
    secondary: "#3DC4B4",
    background: brand::BLACK,
    surface: "#1C1C1F",
    text_primary: brand::WHITE,
    text_secondary: "#B4B4BD",
    text_muted: "#6E6E78",
    border: "#2E2E33",
    icon: "#D6D6DC",
    success: "#4CC97E",
    warning: "#F2B544",
    error: "#F06A6A",
    exclusive: brand::EXCLUSIVE_GOLD,
};
