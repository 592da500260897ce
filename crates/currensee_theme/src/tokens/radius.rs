//! Border radius tokens for theming

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    Sm,
    Md,
    Lg,
    Xl,
    Pill,
    Sheet,
}

/// Complete set of radius tokens, in px
#[derive(Clone, Debug, PartialEq)]
pub struct RadiusTokens {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub pill: f32,
    pub sheet: f32,
}

impl RadiusTokens {
    /// Get radius by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
            RadiusToken::Xl => self.xl,
            RadiusToken::Pill => self.pill,
            RadiusToken::Sheet => self.sheet,
        }
    }

    pub const fn standard() -> Self {
        Self {
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 20.0,
            pill: 999.0,
            sheet: 28.0,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self::standard()
    }
}
