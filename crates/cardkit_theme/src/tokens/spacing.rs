//! Spacing tokens for theming

use serde::{Deserialize, Serialize};

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

/// Spacing scale in pixels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
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
        }
    }

    /// Spacing value formatted as a `px` length
    pub fn px(&self, token: SpacingToken) -> String {
        format!("{}px", self.get(token))
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 16.0,
            lg: 24.0,
            xl: 32.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_formatting_drops_fraction_for_whole_values() {
        let spacing = SpacingTokens::default();
        assert_eq!(spacing.px(SpacingToken::Md), "16px");
        assert_eq!(spacing.px(SpacingToken::Xs), "4px");

        let half = SpacingTokens {
            sm: 7.5,
            ..SpacingTokens::default()
        };
        assert_eq!(half.px(SpacingToken::Sm), "7.5px");
    }
}
