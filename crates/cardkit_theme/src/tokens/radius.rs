//! Border radius tokens for theming

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Border radius levels
///
/// Parsed leniently from configuration: an unrecognised key resolves to
/// [`RadiusToken::Md`].
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RadiusToken {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Full,
}

impl RadiusToken {
    /// Stable key used in theme records and configuration
    pub fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Full => "full",
        }
    }

    /// Parse a key, returning `None` for unknown keys
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            "full" => Some(Self::Full),
            _ => None,
        }
    }

    /// Parse a key, falling back to `md` for unknown keys
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            tracing::warn!(key, "unknown border radius level, using md");
            Self::default()
        })
    }
}

impl From<String> for RadiusToken {
    fn from(key: String) -> Self {
        Self::from_key_or_default(&key)
    }
}

impl From<&str> for RadiusToken {
    fn from(key: &str) -> Self {
        Self::from_key_or_default(key)
    }
}

impl Display for RadiusToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Complete set of border radius tokens (CSS length strings)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub none: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub full: String,
}

impl RadiusTokens {
    /// Get radius by token key
    pub fn get(&self, token: RadiusToken) -> &str {
        match token {
            RadiusToken::None => &self.none,
            RadiusToken::Sm => &self.sm,
            RadiusToken::Md => &self.md,
            RadiusToken::Lg => &self.lg,
            RadiusToken::Full => &self.full,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            none: "0px".to_string(),
            sm: "4px".to_string(),
            md: "8px".to_string(),
            lg: "12px".to_string(),
            full: "9999px".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_falls_back_to_md() {
        assert_eq!(RadiusToken::from_key("pill"), None);
        assert_eq!(RadiusToken::from("pill"), RadiusToken::Md);
        assert_eq!(RadiusToken::from(" LG "), RadiusToken::Lg);
    }

    #[test]
    fn test_deserialize_is_lenient() {
        let token: RadiusToken = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(token, RadiusToken::Full);

        // `xl` is a shadow level, not a radius level
        let token: RadiusToken = serde_json::from_str("\"xl\"").unwrap();
        assert_eq!(token, RadiusToken::Md);
    }
}
