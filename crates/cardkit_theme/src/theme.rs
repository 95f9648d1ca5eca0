//! The theme record

use serde::{Deserialize, Serialize};

use crate::overrides::{Merge, ThemeOverrides};
use crate::tokens::*;

/// A complete, immutable set of design tokens
///
/// Every level and scale key used by the card resolvers has a field here, so
/// token lookups are total. Derived themes are produced with
/// [`Theme::merged`] / [`create_theme`](crate::create_theme); an existing
/// theme is never mutated in place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: ColorTokens,
    pub spacing: SpacingTokens,
    pub border_radius: RadiusTokens,
    pub shadows: ShadowTokens,
    pub animations: AnimationTokens,
    pub breakpoints: BreakpointTokens,
}

impl Theme {
    /// Get a semantic color
    pub fn color(&self, token: ColorToken) -> &str {
        self.colors.get(token)
    }

    /// Get a spacing step formatted as a `px` length
    pub fn spacing_px(&self, token: SpacingToken) -> String {
        self.spacing.px(token)
    }

    /// Get a border radius length
    pub fn radius(&self, token: RadiusToken) -> &str {
        self.border_radius.get(token)
    }

    /// Get a `box-shadow` value
    pub fn shadow(&self, token: ShadowToken) -> &str {
        self.shadows.get(token)
    }

    /// Build a derived theme with `overrides` deep-merged on top
    pub fn merged(&self, overrides: &ThemeOverrides) -> Theme {
        let mut theme = self.clone();
        theme.merge(overrides);
        theme
    }
}
