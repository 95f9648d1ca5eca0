//! Partial theme records and deep merge
//!
//! Each token record has a matching overrides record where every field is
//! optional. Merging walks the two records side by side:
//!
//! - a `None` field (absent or `null` in the source document) keeps the base
//!   value
//! - a leaf field replaces the base value outright
//! - a nested group merges recursively, so overriding `colors.text.primary`
//!   leaves `colors.text.secondary` untouched
//!
//! Merging is idempotent: applying the same overrides twice yields the same
//! theme as applying them once.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::theme::Theme;
use crate::tokens::*;

/// Deep merge of a partial record onto a complete one
pub trait Merge {
    type Overrides;

    /// Apply `overrides` in place
    fn merge(&mut self, overrides: &Self::Overrides);
}

/// Declares an overrides record for a token record, plus its [`Merge`] impl.
///
/// Fields before the `;` are leaves (replaced wholesale); fields after it are
/// nested groups that merge recursively.
macro_rules! overrides {
    (
        $(#[$meta:meta])*
        $name:ident for $tokens:ty {
            $($leaf:ident: $leaf_ty:ty),* $(,)?
            $(; $($nested:ident: $nested_ty:ty),* $(,)?)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $name {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $leaf: Option<$leaf_ty>,
            )*
            $($(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $nested: Option<$nested_ty>,
            )*)?
        }

        impl Merge for $tokens {
            type Overrides = $name;

            fn merge(&mut self, overrides: &$name) {
                $(
                    if let Some(value) = &overrides.$leaf {
                        self.$leaf = value.clone();
                    }
                )*
                $($(
                    if let Some(group) = &overrides.$nested {
                        self.$nested.merge(group);
                    }
                )*)?
            }
        }
    };
}

overrides! {
    /// Partial [`TextColors`]
    TextColorOverrides for TextColors {
        primary: String,
        secondary: String,
        disabled: String,
    }
}

overrides! {
    /// Partial [`ColorTokens`]
    ColorOverrides for ColorTokens {
        primary: String,
        secondary: String,
        success: String,
        warning: String,
        error: String,
        info: String,
        background: String,
        surface: String,
        border: String,
        shadow: String;
        text: TextColorOverrides,
    }
}

overrides! {
    /// Partial [`SpacingTokens`]
    SpacingOverrides for SpacingTokens {
        xs: f32,
        sm: f32,
        md: f32,
        lg: f32,
        xl: f32,
    }
}

overrides! {
    /// Partial [`RadiusTokens`]
    RadiusOverrides for RadiusTokens {
        none: String,
        sm: String,
        md: String,
        lg: String,
        full: String,
    }
}

overrides! {
    /// Partial [`ShadowTokens`]
    ShadowOverrides for ShadowTokens {
        none: String,
        sm: String,
        md: String,
        lg: String,
        xl: String,
    }
}

overrides! {
    /// Partial [`DurationTokens`]
    DurationOverrides for DurationTokens {
        fast: String,
        normal: String,
        slow: String,
    }
}

overrides! {
    /// Partial [`EasingTokens`]
    EasingOverrides for EasingTokens {
        ease_in: String,
        ease_out: String,
        ease_in_out: String,
    }
}

overrides! {
    /// Partial [`AnimationTokens`]
    AnimationOverrides for AnimationTokens {
        ;
        duration: DurationOverrides,
        easing: EasingOverrides,
    }
}

overrides! {
    /// Partial [`BreakpointTokens`]
    BreakpointOverrides for BreakpointTokens {
        xs: String,
        sm: String,
        md: String,
        lg: String,
        xl: String,
    }
}

overrides! {
    /// Partial [`Theme`]
    ///
    /// Deserializes from the same camelCase shape as a full theme, with any
    /// subset of keys present.
    ThemeOverrides for Theme {
        ;
        colors: ColorOverrides,
        spacing: SpacingOverrides,
        border_radius: RadiusOverrides,
        shadows: ShadowOverrides,
        animations: AnimationOverrides,
        breakpoints: BreakpointOverrides,
    }
}

impl ThemeOverrides {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Parse overrides from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parse overrides from a JSON document (`null` values are skipped)
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load overrides from a file, picking the format from its extension
    ///
    /// `.json` files are read as JSON, everything else as TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let overrides = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&source)?,
            _ => Self::from_toml_str(&source)?,
        };
        tracing::debug!(path = %path.display(), "loaded theme overrides");
        Ok(overrides)
    }
}

/// Create a derived theme by deep-merging `overrides` onto `base`
///
/// `base` is left untouched. An empty overrides record yields a theme equal
/// to `base`.
pub fn create_theme(base: &Theme, overrides: &ThemeOverrides) -> Theme {
    if overrides.is_empty() {
        return base.clone();
    }
    tracing::debug!("deriving theme from overrides");
    base.merged(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_override_keeps_siblings() {
        let overrides = ThemeOverrides {
            colors: Some(ColorOverrides {
                text: Some(TextColorOverrides {
                    primary: Some("#000000".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let base = Theme::default();
        let theme = create_theme(&base, &overrides);

        assert_eq!(theme.colors.text.primary, "#000000");
        assert_eq!(theme.colors.text.secondary, base.colors.text.secondary);
        assert_eq!(theme.colors.primary, base.colors.primary);
        assert_eq!(theme.spacing, base.spacing);
    }

    #[test]
    fn test_base_is_not_mutated() {
        let base = Theme::default();
        let overrides = ThemeOverrides {
            spacing: Some(SpacingOverrides {
                md: Some(20.0),
                ..Default::default()
            }),
            ..Default::default()
        };

        let derived = create_theme(&base, &overrides);
        assert_eq!(derived.spacing.md, 20.0);
        assert_eq!(base.spacing.md, 16.0);
    }

    #[test]
    fn test_empty_overrides_yield_equal_theme() {
        let base = Theme::default();
        assert!(ThemeOverrides::default().is_empty());
        assert_eq!(create_theme(&base, &ThemeOverrides::default()), base);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let overrides = ThemeOverrides {
            shadows: Some(ShadowOverrides {
                md: Some("0 0 4px black".to_string()),
                ..Default::default()
            }),
            animations: Some(AnimationOverrides {
                easing: Some(EasingOverrides {
                    ease_in_out: Some("linear".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let once = create_theme(&Theme::default(), &overrides);
        let twice = create_theme(&once, &overrides);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_json_nulls_are_skipped() {
        let overrides = ThemeOverrides::from_json_str(
            r##"{ "colors": { "primary": null, "surface": "#eeeeee" }, "spacing": null }"##,
        )
        .unwrap();

        let theme = Theme::default().merged(&overrides);
        assert_eq!(theme.colors.primary, "#3b82f6");
        assert_eq!(theme.colors.surface, "#eeeeee");
        assert_eq!(theme.spacing, SpacingTokens::default());
    }

    #[test]
    fn test_toml_uses_camel_case_keys() {
        let overrides = ThemeOverrides::from_toml_str(
            r#"
            [borderRadius]
            md = "10px"

            [animations.easing]
            easeInOut = "ease"
            "#,
        )
        .unwrap();

        let theme = Theme::default().merged(&overrides);
        assert_eq!(theme.border_radius.md, "10px");
        assert_eq!(theme.animations.easing.ease_in_out, "ease");
        assert_eq!(theme.animations.easing.ease_in, "cubic-bezier(0.4, 0.0, 1, 1)");
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = ThemeOverrides::from_toml_str("[spacing]\nmd = \"wide\"").unwrap_err();
        assert!(matches!(err, ThemeError::Toml(_)));
    }
}
