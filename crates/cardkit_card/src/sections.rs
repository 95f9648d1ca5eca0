//! Styles for the card's inner sections: header, content, actions and media

use cardkit_theme::{SpacingToken, Theme};
use serde::{Deserialize, Serialize};

use crate::config::Dimension;
use crate::style::{StyleFragment, StyleProperty as P};

/// Default media height
pub const DEFAULT_MEDIA_HEIGHT: &str = "200px";

/// Header row: title block on the left, optional action on the right
pub fn header_style(has_action: bool, theme: &Theme) -> StyleFragment {
    let bottom = if has_action {
        SpacingToken::Sm
    } else {
        SpacingToken::Md
    };

    StyleFragment::new()
        .with(P::Display, "flex")
        .with(P::AlignItems, "flex-start")
        .with(P::JustifyContent, "space-between")
        .with(P::Padding, theme.spacing_px(SpacingToken::Md))
        .with(P::PaddingBottom, theme.spacing_px(bottom))
}

/// Main content area
pub fn content_style(padded: bool, theme: &Theme) -> StyleFragment {
    let padding = if padded {
        let md = theme.spacing_px(SpacingToken::Md);
        format!("0 {md} {md}")
    } else {
        "0".to_string()
    };

    StyleFragment::new()
        .with(P::Flex, "1")
        .with(P::Padding, padding)
        .with(P::Color, theme.colors.text.primary.as_str())
        .with(P::LineHeight, "1.6")
        .with(P::OverflowWrap, "break-word")
        .with(P::MinWidth, "0")
}

/// Horizontal alignment of the action row
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum ActionsAlign {
    #[default]
    Left,
    Center,
    Right,
    SpaceBetween,
}

impl ActionsAlign {
    pub fn justify_content(self) -> &'static str {
        match self {
            Self::Left => "flex-start",
            Self::Center => "center",
            Self::Right => "flex-end",
            Self::SpaceBetween => "space-between",
        }
    }
}

impl From<String> for ActionsAlign {
    fn from(key: String) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "left" => Self::Left,
            "center" => Self::Center,
            "right" => Self::Right,
            "space-between" => Self::SpaceBetween,
            other => {
                tracing::warn!(key = other, "unknown actions alignment, using left");
                Self::Left
            }
        }
    }
}

/// Action button row
pub fn actions_style(align: ActionsAlign, divider: bool, theme: &Theme) -> StyleFragment {
    let mut style = StyleFragment::new()
        .with(P::Display, "flex")
        .with(P::AlignItems, "center")
        .with(
            P::Padding,
            format!(
                "{} {}",
                theme.spacing_px(SpacingToken::Sm),
                theme.spacing_px(SpacingToken::Md)
            ),
        )
        .with(P::Gap, theme.spacing_px(SpacingToken::Sm))
        .with(P::JustifyContent, align.justify_content());

    if divider {
        style.set(P::BorderTop, format!("1px solid {}", theme.colors.border));
    }
    style
}

/// Media slot (image, video or custom content)
///
/// `height` defaults to [`DEFAULT_MEDIA_HEIGHT`].
pub fn media_style(height: Option<&Dimension>, theme: &Theme) -> StyleFragment {
    let height = height.map_or_else(|| DEFAULT_MEDIA_HEIGHT.to_string(), Dimension::to_css);

    StyleFragment::new()
        .with(P::Position, "relative")
        .with(P::Overflow, "hidden")
        .with(P::BackgroundColor, theme.colors.surface.as_str())
        .with(P::Height, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_tightens_under_action() {
        let theme = Theme::default();
        assert_eq!(header_style(true, &theme).get(P::PaddingBottom), Some("8px"));
        assert_eq!(header_style(false, &theme).get(P::PaddingBottom), Some("16px"));
    }

    #[test]
    fn test_content_padding() {
        let theme = Theme::default();
        assert_eq!(content_style(true, &theme).get(P::Padding), Some("0 16px 16px"));
        assert_eq!(content_style(false, &theme).get(P::Padding), Some("0"));
    }

    #[test]
    fn test_actions() {
        let theme = Theme::default();
        let style = actions_style(ActionsAlign::from("space-between".to_string()), true, &theme);
        assert_eq!(style.get(P::JustifyContent), Some("space-between"));
        assert_eq!(style.get(P::BorderTop), Some("1px solid #e2e8f0"));
        assert_eq!(style.get(P::Padding), Some("8px 16px"));

        let plain = actions_style(ActionsAlign::from("diagonal".to_string()), false, &theme);
        assert_eq!(plain.get(P::JustifyContent), Some("flex-start"));
        assert!(!plain.contains(P::BorderTop));
    }

    #[test]
    fn test_media_height() {
        let theme = Theme::default();
        assert_eq!(media_style(None, &theme).get(P::Height), Some("200px"));
        assert_eq!(
            media_style(Some(&Dimension::Px(120.0)), &theme).get(P::Height),
            Some("120px")
        );
        assert_eq!(
            media_style(Some(&Dimension::from("16rem")), &theme).get(P::Height),
            Some("16rem")
        );
    }
}
