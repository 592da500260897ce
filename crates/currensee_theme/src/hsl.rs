//! sRGB to HSL conversion for utility-class compatibility variables
//!
//! The compatibility layer expects bare `H S% L%` triplets (no `hsl()`
//! wrapper) so call sites can add their own alpha, e.g.
//! `hsl(var(--primary) / 0.5)`.

use crate::color::Color;
use std::fmt;

/// Rounded hue/saturation/lightness triplet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue in degrees, `0..360`
    pub h: u16,
    /// Saturation percent, `0..=100`
    pub s: u8,
    /// Lightness percent, `0..=100`
    pub l: u8,
}

impl Hsl {
    /// Neutral mid-gray used when a color cannot be parsed
    pub const FALLBACK: Hsl = Hsl { h: 0, s: 0, l: 50 };

    /// Convert 8-bit sRGB channels
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = f64::from(r) / 255.0;
        let g = f64::from(g) / 255.0;
        let b = f64::from(b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let h = if max == r {
                ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
            } else if max == g {
                ((b - r) / d + 2.0) / 6.0
            } else {
                ((r - g) / d + 4.0) / 6.0
            };
            (h, s)
        };

        Hsl {
            h: ((h * 360.0).round() as u16) % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

impl Color {
    /// HSL of the color channels; alpha does not participate
    pub fn to_hsl(&self) -> Hsl {
        let (r, g, b) = self.channels();
        Hsl::from_rgb(r, g, b)
    }
}

/// Convert a CSS color string to an `H S% L%` triplet.
///
/// Never fails: anything that does not parse as `#RRGGBB` or
/// `rgb()`/`rgba()` yields [`Hsl::FALLBACK`].
pub fn to_hsl(color: &str) -> String {
    match color.parse::<Color>() {
        Ok(parsed) => parsed.to_hsl().to_string(),
        Err(err) => {
            tracing::warn!("falling back to neutral gray for {:?}: {}", color, err);
            Hsl::FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_purple() {
        assert_eq!(to_hsl("#483AA0"), "248 47% 43%");
    }

    #[test]
    fn achromatic_extremes() {
        assert_eq!(to_hsl("#FFFFFF"), "0 0% 100%");
        assert_eq!(to_hsl("#000000"), "0 0% 0%");
        assert_eq!(to_hsl("#808080"), "0 0% 50%");
    }

    #[test]
    fn primary_hues() {
        assert_eq!(to_hsl("#FF0000"), "0 100% 50%");
        assert_eq!(to_hsl("#00FF00"), "120 100% 50%");
        assert_eq!(to_hsl("#0000FF"), "240 100% 50%");
    }

    #[test]
    fn red_dominant_with_blue_above_green_wraps_hue() {
        // max == r and g < b takes the +6 branch
        assert_eq!(to_hsl("#FF0080"), "330 100% 50%");
    }

    #[test]
    fn hue_rounding_to_360_wraps_to_zero() {
        // raw hue is ~359.8 degrees
        let hsl = Hsl::from_rgb(255, 0, 1);
        assert_eq!(hsl.h, 0);
    }

    #[test]
    fn rgba_ignores_alpha() {
        assert_eq!(to_hsl("rgba(72,58,160,0.12)"), to_hsl("#483AA0"));
        assert_eq!(to_hsl("rgb(72, 58, 160)"), "248 47% 43%");
    }

    #[test]
    fn unparseable_input_falls_back() {
        assert_eq!(to_hsl("not-a-color"), "0 0% 50%");
        assert_eq!(to_hsl(""), "0 0% 50%");
        assert_eq!(to_hsl("rgba(999,0,0,1)"), "0 0% 50%");
    }

    #[test]
    fn every_hex_value_stays_in_range() {
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(51) {
                for b in (0..=255u16).step_by(85) {
                    let hsl = Hsl::from_rgb(r as u8, g as u8, b as u8);
                    assert!(hsl.h < 360, "{r},{g},{b} -> {hsl}");
                    assert!(hsl.s <= 100, "{r},{g},{b} -> {hsl}");
                    assert!(hsl.l <= 100, "{r},{g},{b} -> {hsl}");
                }
            }
        }
    }
}
