//! Cardkit Card
//!
//! The state-and-style core of a themeable card surface:
//!
//! - **Resolver**: maps a [`CardConfig`], a [`Theme`](cardkit_theme::Theme)
//!   and the transient interaction flags to a structured [`CardStyle`]
//! - **Interaction**: hover/press/focus tracking gated on `disabled` and
//!   `clickable`
//! - **Visibility**: lazy viewport visibility detection with a sticky
//!   "has been visible" flag
//! - **Attributes**: state flags and ARIA markers for the presentation layer
//! - **Sections**: header, content, actions and media styles
//!
//! Nothing here draws. A presentation layer binds the emitted styles and
//! attributes to real elements and feeds host events back in.
//!
//! # Example
//!
//! ```rust
//! use cardkit_card::{compose_card_style, CardConfig, InteractionState, StyleProperty};
//! use cardkit_theme::default_theme;
//!
//! let config = CardConfig::new().variant("outlined").shadow("none").clickable(true);
//! let style = compose_card_style(&config, &default_theme(), &InteractionState::default());
//!
//! assert_eq!(style.root.get(StyleProperty::Border), Some("1px solid #e2e8f0"));
//! assert!(!style.root.contains(StyleProperty::BoxShadow));
//! ```

pub mod attributes;
pub mod card;
pub mod config;
pub mod error;
pub mod interaction;
pub mod listeners;
pub mod resolver;
pub mod sections;
pub mod style;
pub mod visibility;

pub use attributes::{card_attributes, CardAttributes, Role};
pub use card::{Card, CardBody, CardRender};
pub use config::{CardConfig, CardSize, CardVariant, Dimension};
pub use error::{CardConfigError, Result};
pub use interaction::{
    EventCallback, InteractionEvent, InteractionGates, InteractionMachine, InteractionState,
};
pub use listeners::SubscriptionId;
pub use resolver::{
    compose_card_style, compose_card_style_in, loading_style, radius_style, resolve_card_style,
    shadow_style, size_style, variant_style, CardStyle, LoadingStyle, MediaContext, SizeStyle,
    VariantStyle,
};
pub use sections::{actions_style, content_style, header_style, media_style, ActionsAlign};
pub use style::{StyleFragment, StyleProperty};
pub use visibility::{
    ElementId, IntersectionEntry, IntersectionHost, Observation, TargetRef, VisibilityDetector,
    VisibilityOptions, VisibilityState,
};

/// Common imports for building on cardkit cards
pub mod prelude {
    pub use crate::card::{Card, CardBody};
    pub use crate::config::{CardConfig, CardSize, CardVariant, Dimension};
    pub use crate::interaction::{InteractionGates, InteractionMachine, InteractionState};
    pub use crate::resolver::{compose_card_style, CardStyle, MediaContext};
    pub use crate::style::{StyleFragment, StyleProperty};
    pub use crate::visibility::{TargetRef, VisibilityDetector, VisibilityOptions};
    pub use cardkit_theme::{default_theme, RadiusToken, ShadowToken, Theme};
}
