//! Card configuration
//!
//! The caller-supplied attribute set for one card. Enum fields are normalised
//! when the configuration is built or deserialized, so resolvers only ever see
//! valid levels.

use std::fmt::{Display, Formatter};
use std::path::Path;

use cardkit_theme::{RadiusToken, ShadowToken};
use serde::{Deserialize, Serialize};

use crate::error::{CardConfigError, Result};

/// Card size
///
/// Unknown keys resolve to [`CardSize::Md`].
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum CardSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl CardSize {
    pub fn key(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Parse a key, returning `None` for unknown keys
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            _ => None,
        }
    }

    /// Parse a key, falling back to `md` for unknown keys
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            tracing::warn!(key, "unknown card size, using md");
            Self::default()
        })
    }
}

impl From<String> for CardSize {
    fn from(key: String) -> Self {
        Self::from_key_or_default(&key)
    }
}

impl From<&str> for CardSize {
    fn from(key: &str) -> Self {
        Self::from_key_or_default(key)
    }
}

impl Display for CardSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Visual treatment of the card surface
///
/// A configuration that does not mention a variant gets
/// [`CardVariant::Elevated`]; a variant key that is present but not
/// recognised resolves to [`CardVariant::FALLBACK`] (`filled`).
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum CardVariant {
    Filled,
    Outlined,
    #[default]
    Elevated,
    Ghost,
}

impl CardVariant {
    /// Variant used for unrecognised keys
    pub const FALLBACK: Self = Self::Filled;

    pub fn key(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outlined => "outlined",
            Self::Elevated => "elevated",
            Self::Ghost => "ghost",
        }
    }

    /// Parse a key, returning `None` for unknown keys
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "filled" => Some(Self::Filled),
            "outlined" => Some(Self::Outlined),
            "elevated" => Some(Self::Elevated),
            "ghost" => Some(Self::Ghost),
            _ => None,
        }
    }

    /// Parse a key, falling back to `filled` for unknown keys
    pub fn from_key_or_fallback(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            tracing::warn!(key, "unknown card variant, using filled");
            Self::FALLBACK
        })
    }
}

impl From<String> for CardVariant {
    fn from(key: String) -> Self {
        Self::from_key_or_fallback(&key)
    }
}

impl From<&str> for CardVariant {
    fn from(key: &str) -> Self {
        Self::from_key_or_fallback(key)
    }
}

impl Display for CardVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A caller-supplied length: a number of pixels or a CSS length passed
/// through verbatim
///
/// Values are not validated; a negative width reaches the output as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Px(f32),
    Raw(String),
}

impl Dimension {
    /// CSS value for this length
    pub fn to_css(&self) -> String {
        match self {
            Self::Px(px) => format!("{px}px"),
            Self::Raw(raw) => raw.clone(),
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

impl From<f32> for Dimension {
    fn from(px: f32) -> Self {
        Self::Px(px)
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Self::Px(px as f32)
    }
}

impl From<&str> for Dimension {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for Dimension {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

/// Static attribute set for one card
///
/// Immutable per render: a change is made by building a new configuration
/// and handing it to the card again.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardConfig {
    pub size: CardSize,
    pub variant: CardVariant,
    /// Requested elevation; `None` when the caller did not ask for one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowToken>,
    pub border_radius: RadiusToken,
    pub disabled: bool,
    pub clickable: bool,
    pub selected: bool,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<Dimension>,

    // Pass-through attributes for the presentation layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_described_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl CardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: impl Into<CardSize>) -> Self {
        self.size = size.into();
        self
    }

    pub fn variant(mut self, variant: impl Into<CardVariant>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn shadow(mut self, shadow: impl Into<ShadowToken>) -> Self {
        self.shadow = Some(shadow.into());
        self
    }

    pub fn border_radius(mut self, radius: impl Into<RadiusToken>) -> Self {
        self.border_radius = radius.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn max_width(mut self, width: impl Into<Dimension>) -> Self {
        self.max_width = Some(width.into());
        self
    }

    pub fn min_height(mut self, height: impl Into<Dimension>) -> Self {
        self.min_height = Some(height.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn aria_described_by(mut self, id: impl Into<String>) -> Self {
        self.aria_described_by = Some(id.into());
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    /// Clickable and not disabled
    pub fn is_interactive(&self) -> bool {
        self.clickable && !self.disabled
    }

    /// Shadow level drawn at rest, if any
    ///
    /// Elevated cards always carry a shadow: `md` unless a visible level was
    /// requested. Other variants carry one only when a level other than
    /// `none` was requested.
    pub fn resting_shadow(&self) -> Option<ShadowToken> {
        match (self.variant, self.shadow) {
            (CardVariant::Elevated, None | Some(ShadowToken::None)) => Some(ShadowToken::Md),
            (_, Some(ShadowToken::None)) | (_, None) => None,
            (_, Some(level)) => Some(level),
        }
    }

    /// Baseline level for hover and press feedback
    ///
    /// The resting shadow, or `md` for cards that have none at rest.
    pub fn feedback_shadow(&self) -> ShadowToken {
        self.resting_shadow().unwrap_or(ShadowToken::Md)
    }

    /// Parse a configuration from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a configuration from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CardConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded card config");
        Ok(config)
    }
}
