//! Spacing tokens for theming (4px-based scale)

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
    Xl3,
    Xl4,
    Xl5,
    Xl6,
}

/// Complete set of spacing tokens, in px
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingTokens {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xl_2: f32,
    pub xl_3: f32,
    pub xl_4: f32,
    pub xl_5: f32,
    pub xl_6: f32,
}

impl SpacingTokens {
    /// Get spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xl2 => self.xl_2,
            SpacingToken::Xl3 => self.xl_3,
            SpacingToken::Xl4 => self.xl_4,
            SpacingToken::Xl5 => self.xl_5,
            SpacingToken::Xl6 => self.xl_6,
        }
    }

    pub const fn standard() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 20.0,
            xl_2: 24.0,
            xl_3: 32.0,
            xl_4: 40.0,
            xl_5: 48.0,
            xl_6: 64.0,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self::standard()
    }
}
