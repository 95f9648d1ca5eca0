//! Style and theme inspection commands

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use cardkit_card::{
    compose_card_style_in, CardAttributes, CardConfig, CardStyle, InteractionState, MediaContext,
};
use cardkit_theme::{create_theme, default_theme, Theme, ThemeOverrides};
use serde::Serialize;

use crate::Format;

/// Interaction flags requested on the command line
#[derive(Clone, Copy, Debug, Default)]
pub struct InteractionFlags {
    pub hovered: bool,
    pub pressed: bool,
    pub focused: bool,
}

impl From<InteractionFlags> for InteractionState {
    fn from(flags: InteractionFlags) -> Self {
        Self {
            is_hovered: flags.hovered,
            is_pressed: flags.pressed,
            is_focused: flags.focused,
        }
    }
}

/// Media conditions requested on the command line
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaFlags {
    pub viewport: Option<f32>,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

impl From<MediaFlags> for MediaContext {
    fn from(flags: MediaFlags) -> Self {
        Self {
            viewport_width: flags.viewport,
            prefers_high_contrast: flags.high_contrast,
            prefers_reduced_motion: flags.reduced_motion,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    config: &'a CardConfig,
    interaction: InteractionState,
    style: CardStyle,
    attributes: CardAttributes,
}

/// Default theme, or the default with overrides from `path` merged in
pub fn load_theme(path: Option<&Path>) -> Result<Arc<Theme>> {
    let Some(path) = path else {
        return Ok(default_theme());
    };
    let overrides = ThemeOverrides::from_path(path)
        .with_context(|| format!("Failed to load theme overrides from {}", path.display()))?;
    Ok(Arc::new(create_theme(&default_theme(), &overrides)))
}

/// `cardkit resolve`
pub fn resolve(
    card: &Path,
    theme: Option<&Path>,
    interaction: InteractionFlags,
    media: MediaFlags,
    format: Format,
) -> Result<String> {
    let config = CardConfig::from_path(card)
        .with_context(|| format!("Failed to load card config from {}", card.display()))?;
    let theme = load_theme(theme)?;
    render_report(&config, &theme, interaction.into(), media.into(), format)
}

/// `cardkit theme`
pub fn theme(path: Option<&Path>) -> Result<String> {
    let theme = load_theme(path)?;
    serde_json::to_string_pretty(&*theme).context("Failed to serialize theme")
}

pub fn render_report(
    config: &CardConfig,
    theme: &Theme,
    interaction: InteractionState,
    media: MediaContext,
    format: Format,
) -> Result<String> {
    let style = compose_card_style_in(config, theme, &interaction, &media);
    let attributes = CardAttributes::new(config, &interaction);
    tracing::debug!(declarations = style.root.len(), "resolved card style");

    match format {
        Format::Css => Ok(render_css(&style, &attributes)),
        Format::Json => {
            let report = Report {
                config,
                interaction,
                style,
                attributes,
            };
            serde_json::to_string_pretty(&report).context("Failed to serialize report")
        }
    }
}

fn render_css(style: &CardStyle, attributes: &CardAttributes) -> String {
    let attrs = attributes
        .to_pairs()
        .into_iter()
        .map(|(name, value)| format!("{name}=\"{value}\""))
        .collect::<Vec<_>>()
        .join(" ");
    format!("/* {attrs} */\n{}", style.to_css())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_report() {
        let config = CardConfig::new().clickable(true).variant("outlined");
        let flags = InteractionFlags {
            hovered: true,
            ..Default::default()
        };
        let css = render_report(
            &config,
            &Theme::default(),
            flags.into(),
            MediaContext::default(),
            Format::Css,
        )
        .unwrap();

        assert!(css.starts_with("/* data-hovered=\"true\""));
        assert!(css.contains("role=\"button\""));
        assert!(css.contains("transform: translateY(-2px);"));
    }

    #[test]
    fn test_json_report() {
        let config = CardConfig::new().loading(true);
        let media = MediaFlags {
            reduced_motion: true,
            ..Default::default()
        };
        let json = render_report(
            &config,
            &Theme::default(),
            InteractionState::default(),
            media.into(),
            Format::Json,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["style"]["root"]["transition"], "none");
        assert!(value["style"]["loading"]["spinner"].is_object());
        assert_eq!(value["attributes"]["ariaDisabled"], false);
        assert_eq!(value["config"]["loading"], true);
    }

    #[test]
    fn test_default_theme_without_path() {
        let theme = load_theme(None).unwrap();
        assert!(Arc::ptr_eq(&theme, &default_theme()));
    }
}
