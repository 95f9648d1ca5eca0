//! Responsive breakpoint tokens

use serde::{Deserialize, Serialize};

/// Breakpoint token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum BreakpointToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

/// Breakpoint widths (CSS length strings)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreakpointTokens {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl BreakpointTokens {
    /// Get a breakpoint width by token key
    pub fn get(&self, token: BreakpointToken) -> &str {
        match token {
            BreakpointToken::Xs => &self.xs,
            BreakpointToken::Sm => &self.sm,
            BreakpointToken::Md => &self.md,
            BreakpointToken::Lg => &self.lg,
            BreakpointToken::Xl => &self.xl,
        }
    }

    /// Breakpoint width in pixels
    ///
    /// Accepts `px` lengths and unitless numbers. Other units (`em`, `rem`,
    /// `vw`, ...) cannot be compared against a pixel viewport and yield `None`.
    pub fn width_px(&self, token: BreakpointToken) -> Option<f32> {
        parse_px(self.get(token))
    }
}

impl Default for BreakpointTokens {
    fn default() -> Self {
        Self {
            xs: "0px".to_string(),
            sm: "576px".to_string(),
            md: "768px".to_string(),
            lg: "992px".to_string(),
            xl: "1200px".to_string(),
        }
    }
}

/// Parse a `px` length (or bare number) into pixels
pub fn parse_px(value: &str) -> Option<f32> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f32>().ok().filter(|px| px.is_finite())
}
