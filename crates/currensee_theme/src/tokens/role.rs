//! Role tokens: UI-specific names resolved to a foreground/background token pair
//!
//! UI code asks for a role rather than a raw color, so re-theming never
//! touches call sites. Pairs hold [`ColorToken`]s, which makes a dangling
//! reference impossible to express.

use crate::tokens::ColorToken;

/// Semantic role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RoleToken {
    SettingsDefaultFromIcon,
    SettingsDefaultToIcon,
    SettingsDarkModeIcon,
    SettingsNotifIcon,
}

impl RoleToken {
    pub const ALL: [RoleToken; 4] = [
        RoleToken::SettingsDefaultFromIcon,
        RoleToken::SettingsDefaultToIcon,
        RoleToken::SettingsDarkModeIcon,
        RoleToken::SettingsNotifIcon,
    ];

    /// Dotted key, e.g. `settings.defaultFromIcon`
    pub const fn key(self) -> &'static str {
        match self {
            RoleToken::SettingsDefaultFromIcon => "settings.defaultFromIcon",
            RoleToken::SettingsDefaultToIcon => "settings.defaultToIcon",
            RoleToken::SettingsDarkModeIcon => "settings.darkModeIcon",
            RoleToken::SettingsNotifIcon => "settings.notifIcon",
        }
    }

    pub fn from_key(key: &str) -> Option<RoleToken> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }
}

/// Foreground/background token pair for a role
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RolePair {
    pub fg: ColorToken,
    pub bg: ColorToken,
}

impl RolePair {
    pub const fn new(fg: ColorToken, bg: ColorToken) -> Self {
        Self { fg, bg }
    }
}

/// Settings-screen roles
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsRoles {
    pub default_from_icon: RolePair,
    pub default_to_icon: RolePair,
    pub dark_mode_icon: RolePair,
    pub notif_icon: RolePair,
}

/// Complete role table
#[derive(Clone, Debug, PartialEq)]
pub struct RoleTokens {
    pub settings: SettingsRoles,
}

impl RoleTokens {
    /// Get the token pair for a role
    pub fn get(&self, role: RoleToken) -> RolePair {
        match role {
            RoleToken::SettingsDefaultFromIcon => self.settings.default_from_icon,
            RoleToken::SettingsDefaultToIcon => self.settings.default_to_icon,
            RoleToken::SettingsDarkModeIcon => self.settings.dark_mode_icon,
            RoleToken::SettingsNotifIcon => self.settings.notif_icon,
        }
    }

    /// The role table shared by both built-in schemes
    pub const fn standard() -> Self {
        Self {
            settings: SettingsRoles {
                default_from_icon: RolePair::new(ColorToken::IconActive, ColorToken::IconBgAccent),
                default_to_icon: RolePair::new(ColorToken::IconWarning, ColorToken::IconBgWarning),
                dark_mode_icon: RolePair::new(ColorToken::IconDefault, ColorToken::IconBgDefault),
                notif_icon: RolePair::new(ColorToken::IconDanger, ColorToken::IconBgDanger),
            },
        }
    }
}

impl Default for RoleTokens {
    fn default() -> Self {
        Self::standard()
    }
}
