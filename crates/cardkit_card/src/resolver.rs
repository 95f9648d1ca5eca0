//! Card style resolution
//!
//! Four table lookups (size, variant, shadow, radius) and one composition
//! step that layers conditional overlays on top of them. Everything here is
//! pure: the same configuration, theme, interaction state and media context
//! always produce the same [`CardStyle`].
//!
//! Overlay order (later overlays win on conflicting properties):
//!
//! 1. base layout, size padding/min-height, variant surface, radius
//! 2. resting shadow
//! 3. explicit `max-width` / `min-height`
//! 4. interactive feedback (clickable and not disabled)
//! 5. disabled
//! 6. selected
//! 7. loading indicator
//! 8. narrow viewport adjustments (folded into the size-derived values of
//!    step 1, so explicit dimensions from step 3 still win)
//! 9. high contrast
//! 10. reduced motion

use cardkit_theme::{
    px_to_rem, with_hex_alpha, BreakpointToken, DurationToken, EasingToken, RadiusToken,
    ShadowToken, SpacingToken, Theme,
};
use serde::Serialize;

use crate::config::{CardConfig, CardSize, CardVariant};
use crate::interaction::InteractionState;
use crate::style::{StyleFragment, StyleProperty as P};

/// Alpha applied to the primary color for the selected glow
const SELECTED_GLOW_ALPHA: u8 = 0x20;

/// Padding and minimum height for a card size
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeStyle {
    pub padding: String,
    pub min_height: String,
}

/// Surface treatment for a card variant
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantStyle {
    pub background_color: String,
    pub border: String,
}

/// Environment the card is rendered into
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MediaContext {
    /// Viewport width in pixels, when known
    pub viewport_width: Option<f32>,
    pub prefers_high_contrast: bool,
    pub prefers_reduced_motion: bool,
}

impl MediaContext {
    pub fn viewport(mut self, width: f32) -> Self {
        self.viewport_width = Some(width);
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.prefers_high_contrast = enabled;
        self
    }

    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.prefers_reduced_motion = enabled;
        self
    }

    fn at_most(&self, breakpoint: BreakpointToken, theme: &Theme) -> bool {
        match (self.viewport_width, theme.breakpoints.width_px(breakpoint)) {
            (Some(width), Some(limit)) => width <= limit,
            _ => false,
        }
    }
}

/// Styles for the loading placeholder shown instead of content
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoadingStyle {
    pub container: StyleFragment,
    pub spinner: StyleFragment,
}

/// Everything the presentation layer needs to draw a card surface
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardStyle {
    pub root: StyleFragment,
    /// Present while the card is loading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading: Option<LoadingStyle>,
}

impl CardStyle {
    /// Render the root declarations, followed by the loading indicator
    /// blocks when present
    pub fn to_css(&self) -> String {
        let mut css = self.root.to_css();
        if let Some(loading) = &self.loading {
            css.push_str("\n.card-loading {\n");
            push_indented(&mut css, &loading.container);
            css.push_str("}\n\n.card-loading::before {\n");
            push_indented(&mut css, &loading.spinner);
            css.push_str("}\n");
        }
        css
    }
}

fn push_indented(css: &mut String, fragment: &StyleFragment) {
    for line in fragment.to_css().lines() {
        css.push_str("  ");
        css.push_str(line);
        css.push('\n');
    }
}

/// Padding and minimum height for `size`
pub fn size_style(size: CardSize, theme: &Theme) -> SizeStyle {
    match size {
        CardSize::Sm => SizeStyle {
            padding: theme.spacing_px(SpacingToken::Sm),
            min_height: "120px".to_string(),
        },
        CardSize::Md => SizeStyle {
            padding: theme.spacing_px(SpacingToken::Md),
            min_height: "160px".to_string(),
        },
        CardSize::Lg => SizeStyle {
            padding: theme.spacing_px(SpacingToken::Lg),
            min_height: "200px".to_string(),
        },
    }
}

/// Background and border for `variant`
pub fn variant_style(variant: CardVariant, theme: &Theme) -> VariantStyle {
    let colors = &theme.colors;
    match variant {
        CardVariant::Filled => VariantStyle {
            background_color: colors.surface.clone(),
            border: "none".to_string(),
        },
        CardVariant::Outlined => VariantStyle {
            background_color: colors.background.clone(),
            border: format!("1px solid {}", colors.border),
        },
        CardVariant::Elevated => VariantStyle {
            background_color: colors.background.clone(),
            border: "none".to_string(),
        },
        CardVariant::Ghost => VariantStyle {
            background_color: "transparent".to_string(),
            border: "none".to_string(),
        },
    }
}

/// `box-shadow` value for `level`
pub fn shadow_style(level: ShadowToken, theme: &Theme) -> &str {
    theme.shadow(level)
}

/// `border-radius` value for `level`
pub fn radius_style(level: RadiusToken, theme: &Theme) -> &str {
    theme.radius(level)
}

/// Compose the full card style in a neutral media context
pub fn compose_card_style(
    config: &CardConfig,
    theme: &Theme,
    state: &InteractionState,
) -> CardStyle {
    compose_card_style_in(config, theme, state, &MediaContext::default())
}

/// Same as [`compose_card_style`]
pub fn resolve_card_style(
    config: &CardConfig,
    theme: &Theme,
    state: &InteractionState,
) -> CardStyle {
    compose_card_style(config, theme, state)
}

/// Compose the full card style for a given media context
pub fn compose_card_style_in(
    config: &CardConfig,
    theme: &Theme,
    state: &InteractionState,
    media: &MediaContext,
) -> CardStyle {
    let primary = theme.colors.primary.as_str();
    let mut root = StyleFragment::new();

    // Base layout
    root.set(P::Display, "flex")
        .set(P::FlexDirection, "column")
        .set(P::Position, "relative")
        .set(P::BoxSizing, "border-box")
        .set(P::Width, "100%");

    let size = responsive_size_style(config.size, theme, media);
    let variant = variant_style(config.variant, theme);
    let radius = if media.at_most(BreakpointToken::Xs, theme) {
        RadiusToken::Sm
    } else {
        config.border_radius
    };
    root.set(P::Padding, size.padding)
        .set(P::MinHeight, size.min_height)
        .set(P::BackgroundColor, variant.background_color)
        .set(P::Border, variant.border)
        .set(P::BorderRadius, radius_style(radius, theme));

    if let Some(level) = config.resting_shadow() {
        root.set(P::BoxShadow, shadow_style(level, theme));
    }

    if let Some(max_width) = &config.max_width {
        root.set(P::MaxWidth, max_width.to_css());
    }
    if let Some(min_height) = &config.min_height {
        root.set(P::MinHeight, min_height.to_css());
    }

    root.set(
        P::Transition,
        theme
            .animations
            .transition_all(DurationToken::Normal, EasingToken::EaseInOut),
    );

    if config.is_interactive() {
        root.set(P::Cursor, "pointer").set(P::UserSelect, "none");

        let feedback = config.feedback_shadow();
        if state.is_pressed {
            root.set(P::Transform, "translateY(0)")
                .set(P::BoxShadow, shadow_style(feedback, theme));
        } else if state.is_hovered {
            root.set(P::Transform, "translateY(-2px)")
                .set(P::BoxShadow, shadow_style(feedback.raised(), theme));
        }

        if state.is_focused {
            root.set(P::Outline, format!("2px solid {primary}"))
                .set(P::OutlineOffset, "2px");
        }
    }

    if config.disabled {
        root.set(P::Opacity, "0.6")
            .set(P::Cursor, "not-allowed")
            .set(P::UserSelect, "none")
            .set(P::PointerEvents, "none");
    }

    if config.selected {
        root.set(P::BorderColor, primary).set(
            P::BoxShadow,
            format!("0 0 0 2px {}", with_hex_alpha(primary, SELECTED_GLOW_ALPHA)),
        );
    }

    let loading = config.loading.then(|| loading_style(theme));

    if media.prefers_high_contrast {
        root.set(P::Border, format!("2px solid {}", theme.colors.border));
        if config.selected {
            root.set(P::BorderColor, primary).set(P::BorderWidth, "3px");
        }
    }

    if media.prefers_reduced_motion {
        root.set(P::Transition, "none");
        if config.is_interactive() && root.contains(P::Transform) {
            root.set(P::Transform, "none");
        }
    }

    CardStyle { root, loading }
}

fn responsive_size_style(size: CardSize, theme: &Theme, media: &MediaContext) -> SizeStyle {
    if size != CardSize::Sm && media.at_most(BreakpointToken::Xs, theme) {
        return size_style(CardSize::Sm, theme);
    }
    if size == CardSize::Lg && media.at_most(BreakpointToken::Sm, theme) {
        return size_style(CardSize::Md, theme);
    }
    size_style(size, theme)
}

/// Loading placeholder and its spinner
pub fn loading_style(theme: &Theme) -> LoadingStyle {
    let container = StyleFragment::new()
        .with(P::Display, "flex")
        .with(P::AlignItems, "center")
        .with(P::JustifyContent, "center")
        .with(P::Padding, theme.spacing_px(SpacingToken::Xl))
        .with(P::Color, theme.colors.text.secondary.as_str())
        .with(P::FontSize, px_to_rem(14.0));

    let spinner = StyleFragment::new()
        .with(P::Width, "16px")
        .with(P::Height, "16px")
        .with(P::MarginRight, theme.spacing_px(SpacingToken::Sm))
        .with(P::Border, format!("2px solid {}", theme.colors.border))
        .with(P::BorderTopColor, theme.colors.primary.as_str())
        .with(P::BorderRadius, "50%")
        .with(P::Animation, "spin 1s linear infinite");

    LoadingStyle { container, spinner }
}
