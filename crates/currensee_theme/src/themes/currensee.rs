//! Built-in CurrenSee themes
//!
//! Both palettes are tuned by hand for their background, so dark is not an
//! inversion of light. Semantic reds and greens are lifted in dark mode to
//! keep contrast on near-black surfaces.

use crate::color::Color;
use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::*;

/// Brand constants shared by both schemes
pub mod base {
    use crate::color::Color;

    pub const PURPLE_PRIMARY: Color = Color::hex(0x483AA0);
    pub const PURPLE_TONAL: Color = Color::hex(0x7965C1);
    pub const LIGHT_PURPLE_TINT: Color = Color::hex(0xE9E5FF);
}

/// Light theme
pub static LIGHT_THEME: Theme = Theme::new(
    "CurrenSee",
    ColorScheme::Light,
    ColorTokens {
        bg: Color::hex(0xF3F4F6),
        surface: Color::hex(0xFBFAFF),
        card: Color::WHITE,
        text: Color::hex(0x1E1E1E),
        subtext: Color::hex(0x4B5563),
        muted: Color::hex(0x6B7280),
        border: Color::hex(0xE5E7EB),
        tint: base::PURPLE_PRIMARY,
        on_tint: Color::WHITE,
        danger: Color::hex(0xEF4444),
        success: Color::hex(0x22C55E),
        sheet_handle: Color::hex(0xD7D2EA),
        icon: Color::hex(0x1E1E1E),
        nav_bg: Color::WHITE,

        icon_default: Color::hex(0x1E1E1E),
        icon_muted: Color::hex(0x9CA3AF),
        icon_active: base::PURPLE_PRIMARY,
        icon_danger: Color::hex(0xEF4444),
        icon_success: Color::hex(0x22C55E),
        icon_warning: Color::hex(0xEA580C),

        icon_bg_default: Color::hex(0xF1F2F6),
        icon_bg_muted: Color::hex(0xEEF1F7),
        icon_bg_accent: base::LIGHT_PURPLE_TINT,
        icon_bg_danger: Color::hex(0xFDECEC),
        icon_bg_success: Color::hex(0xEAF8F0),
        icon_bg_warning: Color::hex(0xFFF2E8),

        on_icon_bg_default: Color::hex(0x1E1E1E),
        on_icon_bg_muted: Color::hex(0x6F6B7E),
        on_icon_bg_accent: base::PURPLE_PRIMARY,
        on_icon_bg_danger: Color::hex(0x7F1D1D),
        on_icon_bg_success: Color::hex(0x065F46),
        on_icon_bg_warning: Color::hex(0x7C2D12),

        highlight_ring: Color::hex(0x0B0B0B),
        highlight_tint: base::PURPLE_PRIMARY,
        highlight_fill: Color::rgba(72, 58, 160, 0.12),
        highlight_border: Color::rgba(72, 58, 160, 0.35),
    },
    RoleTokens::standard(),
    RadiusTokens::standard(),
    SpacingTokens::standard(),
    ShadowTokens::light(),
    TypographyTokens::standard(),
);

/// Dark theme
pub static DARK_THEME: Theme = Theme::new(
    "CurrenSee",
    ColorScheme::Dark,
    ColorTokens {
        bg: Color::hex(0x0F0F12),
        surface: Color::hex(0x161423),
        card: Color::hex(0x1C1C21),
        text: Color::WHITE,
        subtext: Color::hex(0xC7C2E4),
        muted: Color::hex(0x9A94BD),
        border: Color::hex(0x3A3553),
        tint: base::PURPLE_TONAL,
        on_tint: Color::WHITE,
        danger: Color::hex(0xF87171),
        success: Color::hex(0x34D399),
        sheet_handle: Color::hex(0x3A3553),
        icon: Color::WHITE,
        nav_bg: Color::hex(0x0F0F12),

        icon_default: Color::WHITE,
        icon_muted: Color::hex(0x8A84A8),
        icon_active: base::PURPLE_TONAL,
        icon_danger: Color::hex(0xF87171),
        icon_success: Color::hex(0x34D399),
        icon_warning: Color::hex(0xF59E0B),

        icon_bg_default: Color::hex(0x242239),
        icon_bg_muted: Color::hex(0x26223E),
        icon_bg_accent: Color::hex(0x2A2650),
        icon_bg_danger: Color::hex(0x3C2130),
        icon_bg_success: Color::hex(0x1F3A2E),
        icon_bg_warning: Color::hex(0x3F2A14),

        on_icon_bg_default: Color::WHITE,
        on_icon_bg_muted: Color::hex(0xB9B3D9),
        on_icon_bg_accent: base::PURPLE_PRIMARY,
        on_icon_bg_danger: Color::hex(0xFCA5A5),
        on_icon_bg_success: Color::hex(0x86EFAC),
        on_icon_bg_warning: Color::hex(0xFCD34D),

        highlight_ring: Color::WHITE,
        highlight_tint: base::PURPLE_TONAL,
        highlight_fill: Color::rgba(121, 101, 193, 0.20),
        highlight_border: Color::rgba(121, 101, 193, 0.65),
    },
    RoleTokens::standard(),
    RadiusTokens::standard(),
    SpacingTokens::standard(),
    ShadowTokens::dark(),
    TypographyTokens::standard(),
);

/// The built-in light/dark bundle
pub fn currensee_bundle() -> ThemeBundle {
    ThemeBundle::new("CurrenSee", &LIGHT_THEME, &DARK_THEME)
}

impl ThemeBundle {
    /// The built-in light/dark bundle
    pub fn currensee() -> Self {
        currensee_bundle()
    }
}

impl Default for ThemeBundle {
    fn default() -> Self {
        currensee_bundle()
    }
}
