//! Color tokens for theming

use serde::{Deserialize, Serialize};

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    Secondary,

    // Semantic colors
    Success,
    Warning,
    Error,
    Info,

    // Surface colors
    Background,
    Surface,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextDisabled,

    // Border and shadow
    Border,
    Shadow,
}

/// Text sub-palette
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub disabled: String,
}

impl Default for TextColors {
    fn default() -> Self {
        Self {
            primary: "#1e293b".to_string(),
            secondary: "#64748b".to_string(),
            disabled: "#cbd5e1".to_string(),
        }
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    // Brand colors
    pub primary: String,
    pub secondary: String,

    // Semantic colors
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,

    // Surface colors
    pub background: String,
    pub surface: String,

    pub text: TextColors,

    pub border: String,
    pub shadow: String,
}

impl ColorTokens {
    /// Get color by token key
    pub fn get(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::Primary => &self.primary,
            ColorToken::Secondary => &self.secondary,
            ColorToken::Success => &self.success,
            ColorToken::Warning => &self.warning,
            ColorToken::Error => &self.error,
            ColorToken::Info => &self.info,
            ColorToken::Background => &self.background,
            ColorToken::Surface => &self.surface,
            ColorToken::TextPrimary => &self.text.primary,
            ColorToken::TextSecondary => &self.text.secondary,
            ColorToken::TextDisabled => &self.text.disabled,
            ColorToken::Border => &self.border,
            ColorToken::Shadow => &self.shadow,
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            secondary: "#64748b".to_string(),
            success: "#10b981".to_string(),
            warning: "#f59e0b".to_string(),
            error: "#ef4444".to_string(),
            info: "#06b6d4".to_string(),
            background: "#ffffff".to_string(),
            surface: "#f8fafc".to_string(),
            text: TextColors::default(),
            border: "#e2e8f0".to_string(),
            shadow: "rgba(0, 0, 0, 0.1)".to_string(),
        }
    }
}

/// Append a two-digit hex alpha to a `#rrggbb` color
///
/// `with_hex_alpha("#3b82f6", 0x20)` yields `#3b82f620`. Colors in any other
/// format are returned unchanged.
pub fn with_hex_alpha(color: &str, alpha: u8) -> String {
    let is_rrggbb = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if is_rrggbb {
        format!("{color}{alpha:02x}")
    } else {
        color.to_string()
    }
}

/// Parse `#rgb` / `#rrggbb` into 8-bit channels
pub(crate) fn parse_hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut chars = hex.chars().map(|c| c.to_digit(16));
            let r = chars.next()?? as u8;
            let g = chars.next()?? as u8;
            let b = chars.next()?? as u8;
            Some((r * 17, g * 17, b * 17))
        }
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}
