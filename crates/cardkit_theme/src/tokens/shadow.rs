//! Shadow tokens for theming

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Elevation levels
///
/// Parsed leniently from configuration: an unrecognised key resolves to
/// [`ShadowToken::Md`].
#[derive(
    Clone, Copy, Debug, Default, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ShadowToken {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ShadowToken {
    /// Stable key used in theme records and configuration
    pub fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Parse a key, returning `None` for unknown keys
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            _ => None,
        }
    }

    /// Parse a key, falling back to `md` for unknown keys
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            tracing::warn!(key, "unknown shadow level, using md");
            Self::default()
        })
    }

    /// The next elevation level up, saturating at `xl`
    pub fn raised(self) -> Self {
        match self {
            Self::None => Self::Sm,
            Self::Sm => Self::Md,
            Self::Md => Self::Lg,
            Self::Lg | Self::Xl => Self::Xl,
        }
    }
}

impl From<String> for ShadowToken {
    fn from(key: String) -> Self {
        Self::from_key_or_default(&key)
    }
}

impl From<&str> for ShadowToken {
    fn from(key: &str) -> Self {
        Self::from_key_or_default(key)
    }
}

impl Display for ShadowToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Complete set of shadow tokens (CSS `box-shadow` values)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub none: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl ShadowTokens {
    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> &str {
        match token {
            ShadowToken::None => &self.none,
            ShadowToken::Sm => &self.sm,
            ShadowToken::Md => &self.md,
            ShadowToken::Lg => &self.lg,
            ShadowToken::Xl => &self.xl,
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self {
            none: "none".to_string(),
            sm: "0 1px 2px 0 rgba(0, 0, 0, 0.05)".to_string(),
            md: "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)"
                .to_string(),
            lg: "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)"
                .to_string(),
            xl: "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)"
                .to_string(),
        }
    }
}
