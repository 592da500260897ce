//! Typed CSS color values
//!
//! Theme palettes are declared with the `const` constructors below, so a
//! palette entry is parsed once at compile time instead of on every
//! projection. [`Color::from_str`] exists for values that arrive as text
//! (config overrides, command-line input).

use crate::error::ColorParseError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A color as it appears in a theme palette
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// Opaque `#RRGGBB`
    Hex { r: u8, g: u8, b: u8 },
    /// `rgba(r,g,b,a)` with alpha in `0.0..=1.0`
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

impl Color {
    pub const WHITE: Color = Color::hex(0xFFFFFF);
    pub const BLACK: Color = Color::hex(0x000000);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    /// Opaque color from a `0xRRGGBB` literal
    pub const fn hex(hex: u32) -> Self {
        Color::Hex {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba { r, g, b, a }
    }

    /// Same channels with an explicit alpha
    pub const fn with_alpha(self, a: f32) -> Self {
        let (r, g, b) = self.channels();
        Color::Rgba { r, g, b, a }
    }

    /// The `(r, g, b)` channels, ignoring alpha
    pub const fn channels(&self) -> (u8, u8, u8) {
        match *self {
            Color::Hex { r, g, b } | Color::Rgba { r, g, b, .. } => (r, g, b),
        }
    }

    pub const fn alpha(&self) -> f32 {
        match *self {
            Color::Hex { .. } => 1.0,
            Color::Rgba { a, .. } => a,
        }
    }

    /// CSS text for this color, `#RRGGBB` or `rgba(r,g,b,a)`
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Hex { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Rgba { r, g, b, a } => {
                write!(f, "rgba({},{},{},{})", r, g, b, format_alpha(a))
            }
        }
    }
}

/// Alpha as written in the palettes: at least two fractional digits
/// (`0.20`, `1.00`), more only when the value needs them.
fn format_alpha(a: f32) -> String {
    let mut text = a.to_string();
    let fraction = match text.find('.') {
        Some(dot) => text.len() - dot - 1,
        None => {
            text.push('.');
            0
        }
    };
    for _ in fraction..2 {
        text.push('0');
    }
    text
}

fn rgb_function_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
        )
        .expect("rgb() pattern is valid")
    })
}

/// `digits` is all ASCII digits, so the only failure is overflow
fn parse_channel(digits: &str) -> Result<u8, ColorParseError> {
    digits
        .parse::<u8>()
        .map_err(|_| ColorParseError::ChannelOutOfRange(digits.to_string()))
}

fn parse_hex(s: &str) -> Result<Color, ColorParseError> {
    let digits = &s[1..];
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHex(s.to_string()));
    }
    let value =
        u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::InvalidHex(s.to_string()))?;
    Ok(Color::hex(value))
}

fn parse_rgb_function(s: &str) -> Result<Color, ColorParseError> {
    let caps = rgb_function_regex()
        .captures(s)
        .ok_or_else(|| ColorParseError::Syntax(s.to_string()))?;

    let r = parse_channel(&caps[1])?;
    let g = parse_channel(&caps[2])?;
    let b = parse_channel(&caps[3])?;

    match caps.get(4) {
        Some(alpha) => {
            let a = alpha
                .as_str()
                .parse::<f32>()
                .map_err(|_| ColorParseError::InvalidAlpha(alpha.as_str().to_string()))?;
            if !(0.0..=1.0).contains(&a) {
                return Err(ColorParseError::InvalidAlpha(alpha.as_str().to_string()));
            }
            Ok(Color::rgba(r, g, b, a))
        }
        None => Ok(Color::Hex { r, g, b }),
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            parse_hex(s)
        } else if s.starts_with("rgb") {
            parse_rgb_function(s)
        } else {
            Err(ColorParseError::Syntax(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_in_either_case() {
        assert_eq!("#483AA0".parse::<Color>(), Ok(Color::hex(0x483AA0)));
        assert_eq!("#483aa0".parse::<Color>(), Ok(Color::hex(0x483AA0)));
    }

    #[test]
    fn rejects_short_and_non_hex_forms() {
        assert!(matches!(
            "#FFF".parse::<Color>(),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            "#GG0000".parse::<Color>(),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            "tomato".parse::<Color>(),
            Err(ColorParseError::Syntax(_))
        ));
    }

    #[test]
    fn parses_rgb_functions() {
        assert_eq!(
            "rgba(72,58,160,0.12)".parse::<Color>(),
            Ok(Color::rgba(72, 58, 160, 0.12))
        );
        assert_eq!(
            "rgb(10, 20, 30)".parse::<Color>(),
            Ok(Color::Hex { r: 10, g: 20, b: 30 })
        );
    }

    #[test]
    fn out_of_range_channel_is_rejected() {
        assert_eq!(
            "rgba(999,0,0,1)".parse::<Color>(),
            Err(ColorParseError::ChannelOutOfRange("999".to_string()))
        );
        assert_eq!(
            "rgb(99999999999,0,0)".parse::<Color>(),
            Err(ColorParseError::ChannelOutOfRange("99999999999".to_string()))
        );
        assert_eq!("rgb(0,0,255)".parse::<Color>(), Ok(Color::hex(0x0000FF)));
        assert!(matches!(
            "rgba(0,0,0,1.5)".parse::<Color>(),
            Err(ColorParseError::InvalidAlpha(_))
        ));
    }

    #[test]
    fn display_matches_css_syntax() {
        assert_eq!(Color::hex(0x0b0b0b).to_string(), "#0B0B0B");
        assert_eq!(
            Color::rgba(121, 101, 193, 0.65).to_string(),
            "rgba(121,101,193,0.65)"
        );
        assert_eq!(Color::hex(0x483AA0).with_alpha(0.2).alpha(), 0.2);
    }

    #[test]
    fn alpha_keeps_palette_precision() {
        assert_eq!(
            Color::rgba(121, 101, 193, 0.20).to_string(),
            "rgba(121,101,193,0.20)"
        );
        assert_eq!(Color::rgba(0, 0, 0, 1.0).to_string(), "rgba(0,0,0,1.00)");
        assert_eq!(Color::rgba(0, 0, 0, 0.125).to_string(), "rgba(0,0,0,0.125)");
        assert_eq!(Color::TRANSPARENT.to_string(), "rgba(0,0,0,0.00)");
    }
}
