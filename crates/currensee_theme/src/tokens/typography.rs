//! Typography tokens for theming

/// A text style: size and line height in px, CSS numeric weight
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: u16,
    pub line_height: f32,
}

impl TextStyle {
    pub const fn new(size: f32, weight: u16, line_height: f32) -> Self {
        Self {
            size,
            weight,
            line_height,
        }
    }
}

/// Small uppercase label style
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionStyle {
    pub style: TextStyle,
    pub letter_spacing: f32,
    pub uppercase: bool,
}

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    pub h1: TextStyle,
    pub title: TextStyle,
    pub body: TextStyle,
    pub caption: CaptionStyle,
    /// Weight used for emphasized amounts
    pub num_strong_weight: u16,
    /// Size of the large converted-amount readout
    pub num_strong_large: f32,
}

impl TypographyTokens {
    pub const fn standard() -> Self {
        Self {
            h1: TextStyle::new(22.0, 700, 28.0),
            title: TextStyle::new(16.0, 700, 22.0),
            body: TextStyle::new(15.0, 400, 22.5),
            caption: CaptionStyle {
                style: TextStyle::new(12.0, 700, 16.0),
                letter_spacing: 0.6,
                uppercase: true,
            },
            num_strong_weight: 800,
            num_strong_large: 40.0,
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self::standard()
    }
}
