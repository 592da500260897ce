//! Shadow tokens for theming
//!
//! The site mirrors the mobile app, which describes elevation per platform:
//! an iOS-style layered shadow and an Android elevation level.

use crate::color::Color;

/// iOS-style shadow definition
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub opacity: f32,
    pub radius: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Shadow {
    pub const fn new(color: Color, opacity: f32, radius: f32, offset_x: f32, offset_y: f32) -> Self {
        Self {
            color,
            opacity,
            radius,
            offset_x,
            offset_y,
        }
    }

    pub const fn none() -> Self {
        Self {
            color: Color::TRANSPARENT,
            opacity: 0.0,
            radius: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// CSS `box-shadow` value; the opacity is folded into the color alpha
    pub fn to_css(&self) -> String {
        if self.opacity == 0.0 {
            return "none".to_string();
        }
        let (r, g, b) = self.color.channels();
        format!(
            "{}px {}px {}px rgba({},{},{},{})",
            self.offset_x, self.offset_y, self.radius, r, g, b, self.opacity
        )
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Complete set of shadow tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowTokens {
    pub ios: Shadow,
    pub android_elevation: u8,
}

impl ShadowTokens {
    /// Create shadow tokens for a light color scheme
    pub const fn light() -> Self {
        Self {
            ios: Shadow::new(Color::BLACK, 0.08, 12.0, 0.0, 4.0),
            android_elevation: 3,
        }
    }

    /// Create shadow tokens for a dark color scheme (flat)
    pub const fn dark() -> Self {
        Self {
            ios: Shadow::none(),
            android_elevation: 0,
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_shadow_renders_as_box_shadow() {
        assert_eq!(
            ShadowTokens::light().ios.to_css(),
            "0px 4px 12px rgba(0,0,0,0.08)"
        );
    }

    #[test]
    fn dark_shadow_is_flat() {
        assert_eq!(ShadowTokens::dark().ios.to_css(), "none");
        assert_eq!(ShadowTokens::dark().android_elevation, 0);
    }
}
