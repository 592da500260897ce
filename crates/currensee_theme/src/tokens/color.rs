//! Color tokens for theming

use crate::color::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum ColorToken {
    // Surfaces and text
    Bg,
    Surface,
    Card,
    Text,
    Subtext,
    Muted,
    Border,
    Tint,
    OnTint,
    Danger,
    Success,
    SheetHandle,
    Icon,
    NavBg,

    // Icon foregrounds
    IconDefault,
    IconMuted,
    IconActive,
    IconDanger,
    IconSuccess,
    IconWarning,

    // Icon backgrounds
    IconBgDefault,
    IconBgMuted,
    IconBgAccent,
    IconBgDanger,
    IconBgSuccess,
    IconBgWarning,

    // Foregrounds drawn on icon backgrounds
    OnIconBgDefault,
    OnIconBgMuted,
    OnIconBgAccent,
    OnIconBgDanger,
    OnIconBgSuccess,
    OnIconBgWarning,

    // Highlight
    HighlightRing,
    HighlightTint,
    HighlightFill,
    HighlightBorder,
}

impl ColorToken {
    /// Every token, in declaration order
    pub const ALL: [ColorToken; 36] = [
        ColorToken::Bg,
        ColorToken::Surface,
        ColorToken::Card,
        ColorToken::Text,
        ColorToken::Subtext,
        ColorToken::Muted,
        ColorToken::Border,
        ColorToken::Tint,
        ColorToken::OnTint,
        ColorToken::Danger,
        ColorToken::Success,
        ColorToken::SheetHandle,
        ColorToken::Icon,
        ColorToken::NavBg,
        ColorToken::IconDefault,
        ColorToken::IconMuted,
        ColorToken::IconActive,
        ColorToken::IconDanger,
        ColorToken::IconSuccess,
        ColorToken::IconWarning,
        ColorToken::IconBgDefault,
        ColorToken::IconBgMuted,
        ColorToken::IconBgAccent,
        ColorToken::IconBgDanger,
        ColorToken::IconBgSuccess,
        ColorToken::IconBgWarning,
        ColorToken::OnIconBgDefault,
        ColorToken::OnIconBgMuted,
        ColorToken::OnIconBgAccent,
        ColorToken::OnIconBgDanger,
        ColorToken::OnIconBgSuccess,
        ColorToken::OnIconBgWarning,
        ColorToken::HighlightRing,
        ColorToken::HighlightTint,
        ColorToken::HighlightFill,
        ColorToken::HighlightBorder,
    ];

    /// camelCase key used in config files
    pub const fn key(self) -> &'static str {
        match self {
            ColorToken::Bg => "bg",
            ColorToken::Surface => "surface",
            ColorToken::Card => "card",
            ColorToken::Text => "text",
            ColorToken::Subtext => "subtext",
            ColorToken::Muted => "muted",
            ColorToken::Border => "border",
            ColorToken::Tint => "tint",
            ColorToken::OnTint => "onTint",
            ColorToken::Danger => "danger",
            ColorToken::Success => "success",
            ColorToken::SheetHandle => "sheetHandle",
            ColorToken::Icon => "icon",
            ColorToken::NavBg => "navBg",
            ColorToken::IconDefault => "iconDefault",
            ColorToken::IconMuted => "iconMuted",
            ColorToken::IconActive => "iconActive",
            ColorToken::IconDanger => "iconDanger",
            ColorToken::IconSuccess => "iconSuccess",
            ColorToken::IconWarning => "iconWarning",
            ColorToken::IconBgDefault => "iconBgDefault",
            ColorToken::IconBgMuted => "iconBgMuted",
            ColorToken::IconBgAccent => "iconBgAccent",
            ColorToken::IconBgDanger => "iconBgDanger",
            ColorToken::IconBgSuccess => "iconBgSuccess",
            ColorToken::IconBgWarning => "iconBgWarning",
            ColorToken::OnIconBgDefault => "onIconBgDefault",
            ColorToken::OnIconBgMuted => "onIconBgMuted",
            ColorToken::OnIconBgAccent => "onIconBgAccent",
            ColorToken::OnIconBgDanger => "onIconBgDanger",
            ColorToken::OnIconBgSuccess => "onIconBgSuccess",
            ColorToken::OnIconBgWarning => "onIconBgWarning",
            ColorToken::HighlightRing => "highlightRing",
            ColorToken::HighlightTint => "highlightTint",
            ColorToken::HighlightFill => "highlightFill",
            ColorToken::HighlightBorder => "highlightBorder",
        }
    }

    /// Look up a token by its camelCase key
    pub fn from_key(key: &str) -> Option<ColorToken> {
        Self::ALL.into_iter().find(|token| token.key() == key)
    }

    /// kebab-case name, e.g. `on-icon-bg-default`
    pub fn css_name(self) -> String {
        let key = self.key();
        let mut out = String::with_capacity(key.len() + 4);
        for ch in key.chars() {
            if ch.is_ascii_uppercase() {
                out.push('-');
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub bg: Color,
    pub surface: Color,
    pub card: Color,
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,
    pub border: Color,
    pub tint: Color,
    pub on_tint: Color,
    pub danger: Color,
    pub success: Color,
    pub sheet_handle: Color,
    pub icon: Color,
    pub nav_bg: Color,

    pub icon_default: Color,
    pub icon_muted: Color,
    pub icon_active: Color,
    pub icon_danger: Color,
    pub icon_success: Color,
    pub icon_warning: Color,

    pub icon_bg_default: Color,
    pub icon_bg_muted: Color,
    pub icon_bg_accent: Color,
    pub icon_bg_danger: Color,
    pub icon_bg_success: Color,
    pub icon_bg_warning: Color,

    pub on_icon_bg_default: Color,
    pub on_icon_bg_muted: Color,
    pub on_icon_bg_accent: Color,
    pub on_icon_bg_danger: Color,
    pub on_icon_bg_success: Color,
    pub on_icon_bg_warning: Color,

    pub highlight_ring: Color,
    pub highlight_tint: Color,
    pub highlight_fill: Color,
    pub highlight_border: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Bg => self.bg,
            ColorToken::Surface => self.surface,
            ColorToken::Card => self.card,
            ColorToken::Text => self.text,
            ColorToken::Subtext => self.subtext,
            ColorToken::Muted => self.muted,
            ColorToken::Border => self.border,
            ColorToken::Tint => self.tint,
            ColorToken::OnTint => self.on_tint,
            ColorToken::Danger => self.danger,
            ColorToken::Success => self.success,
            ColorToken::SheetHandle => self.sheet_handle,
            ColorToken::Icon => self.icon,
            ColorToken::NavBg => self.nav_bg,
            ColorToken::IconDefault => self.icon_default,
            ColorToken::IconMuted => self.icon_muted,
            ColorToken::IconActive => self.icon_active,
            ColorToken::IconDanger => self.icon_danger,
            ColorToken::IconSuccess => self.icon_success,
            ColorToken::IconWarning => self.icon_warning,
            ColorToken::IconBgDefault => self.icon_bg_default,
            ColorToken::IconBgMuted => self.icon_bg_muted,
            ColorToken::IconBgAccent => self.icon_bg_accent,
            ColorToken::IconBgDanger => self.icon_bg_danger,
            ColorToken::IconBgSuccess => self.icon_bg_success,
            ColorToken::IconBgWarning => self.icon_bg_warning,
            ColorToken::OnIconBgDefault => self.on_icon_bg_default,
            ColorToken::OnIconBgMuted => self.on_icon_bg_muted,
            ColorToken::OnIconBgAccent => self.on_icon_bg_accent,
            ColorToken::OnIconBgDanger => self.on_icon_bg_danger,
            ColorToken::OnIconBgSuccess => self.on_icon_bg_success,
            ColorToken::OnIconBgWarning => self.on_icon_bg_warning,
            ColorToken::HighlightRing => self.highlight_ring,
            ColorToken::HighlightTint => self.highlight_tint,
            ColorToken::HighlightFill => self.highlight_fill,
            ColorToken::HighlightBorder => self.highlight_border,
        }
    }

    /// All `(token, color)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ColorToken, Color)> + '_ {
        ColorToken::ALL.into_iter().map(move |token| (token, self.get(token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_names_are_kebab_case() {
        assert_eq!(ColorToken::Bg.css_name(), "bg");
        assert_eq!(ColorToken::OnTint.css_name(), "on-tint");
        assert_eq!(ColorToken::OnIconBgDefault.css_name(), "on-icon-bg-default");
        assert_eq!(ColorToken::HighlightFill.css_name(), "highlight-fill");
    }

    #[test]
    fn keys_round_trip_and_are_unique() {
        let mut keys: Vec<&str> = ColorToken::ALL.iter().map(|t| t.key()).collect();
        for token in ColorToken::ALL {
            assert_eq!(ColorToken::from_key(token.key()), Some(token));
        }
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ColorToken::ALL.len());
        assert_eq!(ColorToken::from_key("nope"), None);
    }
}
