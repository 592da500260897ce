//! Theme aggregate, color scheme and light/dark bundle

use crate::color::Color;
use crate::tokens::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual scheme of a theme
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// The opposite scheme
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(format!("unknown color scheme: {other:?}")),
        }
    }
}

/// A complete, immutable set of tokens for one scheme
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    name: &'static str,
    scheme: ColorScheme,
    colors: ColorTokens,
    roles: RoleTokens,
    radius: RadiusTokens,
    spacing: SpacingTokens,
    shadow: ShadowTokens,
    typography: TypographyTokens,
}

impl Theme {
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn new(
        name: &'static str,
        scheme: ColorScheme,
        colors: ColorTokens,
        roles: RoleTokens,
        radius: RadiusTokens,
        spacing: SpacingTokens,
        shadow: ShadowTokens,
        typography: TypographyTokens,
    ) -> Self {
        Self {
            name,
            scheme,
            colors,
            roles,
            radius,
            spacing,
            shadow,
            typography,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    pub fn roles(&self) -> &RoleTokens {
        &self.roles
    }

    pub fn radius(&self) -> &RadiusTokens {
        &self.radius
    }

    pub fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    pub fn shadow(&self) -> &ShadowTokens {
        &self.shadow
    }

    pub fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    /// Shortcut for `colors().get(token)`
    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    /// Resolve a role to its `(foreground, background)` colors
    pub fn role_colors(&self, role: RoleToken) -> (Color, Color) {
        let pair = self.roles.get(role);
        (self.colors.get(pair.fg), self.colors.get(pair.bg))
    }
}

/// A light/dark pair of themes
#[derive(Clone, Copy, Debug)]
pub struct ThemeBundle {
    pub name: &'static str,
    pub light: &'static Theme,
    pub dark: &'static Theme,
}

impl ThemeBundle {
    pub const fn new(name: &'static str, light: &'static Theme, dark: &'static Theme) -> Self {
        Self { name, light, dark }
    }

    /// Get the theme for a color scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &'static Theme {
        match scheme {
            ColorScheme::Light => self.light,
            ColorScheme::Dark => self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_toggles_and_parses() {
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggle(), ColorScheme::Light);
        assert_eq!(" Dark ".parse::<ColorScheme>(), Ok(ColorScheme::Dark));
        assert!("system".parse::<ColorScheme>().is_err());
    }
}
