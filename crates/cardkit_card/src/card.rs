//! Card controller
//!
//! Ties a configuration, a theme, the interaction machine and an opaque
//! content payload together. The payload is never inspected; it is only
//! withheld while the card is loading.

use std::sync::Arc;

use cardkit_core::events::Event;
use cardkit_theme::{default_theme, Theme};

use crate::attributes::CardAttributes;
use crate::config::CardConfig;
use crate::interaction::{InteractionGates, InteractionMachine, InteractionState};
use crate::listeners::SubscriptionId;
use crate::resolver::{compose_card_style_in, CardStyle, MediaContext};

/// What the card body shows
#[derive(Debug, PartialEq)]
pub enum CardBody<'a, C> {
    /// Loading placeholder; content is withheld
    Loading,
    Content(&'a C),
    Empty,
}

/// One frame of render output
#[derive(Debug)]
pub struct CardRender<'a, C> {
    pub style: CardStyle,
    pub attributes: CardAttributes,
    pub body: CardBody<'a, C>,
}

/// A card instance
pub struct Card<C = ()> {
    config: CardConfig,
    theme: Arc<Theme>,
    media: MediaContext,
    interaction: InteractionMachine,
    content: Option<C>,
}

impl<C> Card<C> {
    /// Create a card using the default theme
    pub fn new(config: CardConfig) -> Self {
        let gates = InteractionGates::new(config.disabled, config.clickable);
        Self {
            config,
            theme: default_theme(),
            media: MediaContext::default(),
            interaction: InteractionMachine::new(gates),
            content: None,
        }
    }

    pub fn theme(mut self, theme: Arc<Theme>) -> Self {
        self.theme = theme;
        self
    }

    pub fn media(mut self, media: MediaContext) -> Self {
        self.media = media;
        self
    }

    pub fn content(mut self, content: C) -> Self {
        self.content = Some(content);
        self
    }

    pub fn on_click<F: FnMut(&Event) + 'static>(mut self, callback: F) -> Self {
        self.interaction = self.interaction.on_click(callback);
        self
    }

    pub fn on_double_click<F: FnMut(&Event) + 'static>(mut self, callback: F) -> Self {
        self.interaction = self.interaction.on_double_click(callback);
        self
    }

    pub fn on_pointer_enter<F: FnMut(&Event) + 'static>(mut self, callback: F) -> Self {
        self.interaction = self.interaction.on_pointer_enter(callback);
        self
    }

    pub fn on_pointer_leave<F: FnMut(&Event) + 'static>(mut self, callback: F) -> Self {
        self.interaction = self.interaction.on_pointer_leave(callback);
        self
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn current_theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.interaction.state()
    }

    /// Re-supply the configuration
    ///
    /// Gates are forwarded to the interaction machine, so disabling the card
    /// resets its interaction flags.
    pub fn set_config(&mut self, config: CardConfig) {
        self.interaction
            .set_gates(InteractionGates::new(config.disabled, config.clickable));
        self.config = config;
    }

    pub fn set_theme(&mut self, theme: Arc<Theme>) {
        self.theme = theme;
    }

    pub fn set_media(&mut self, media: MediaContext) {
        self.media = media;
    }

    /// Replace the payload, returning the previous one
    pub fn set_content(&mut self, content: Option<C>) -> Option<C> {
        std::mem::replace(&mut self.content, content)
    }

    /// Forward a host event to the interaction machine
    pub fn handle_event(&mut self, event: &mut Event) {
        self.interaction.handle_event(event);
    }

    pub fn subscribe<F: FnMut(&InteractionState) + 'static>(&mut self, listener: F) -> SubscriptionId {
        self.interaction.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.interaction.unsubscribe(id)
    }

    pub fn style(&self) -> CardStyle {
        compose_card_style_in(
            &self.config,
            &self.theme,
            &self.interaction.state(),
            &self.media,
        )
    }

    pub fn attributes(&self) -> CardAttributes {
        CardAttributes::new(&self.config, &self.interaction.state())
    }

    pub fn body(&self) -> CardBody<'_, C> {
        if self.config.loading {
            return CardBody::Loading;
        }
        match &self.content {
            Some(content) => CardBody::Content(content),
            None => CardBody::Empty,
        }
    }

    pub fn render(&self) -> CardRender<'_, C> {
        CardRender {
            style: self.style(),
            attributes: self.attributes(),
            body: self.body(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleProperty;
    use cardkit_core::events::event_types;
    use cardkit_theme::{create_theme, ColorOverrides, ThemeOverrides};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_loading_withholds_content() {
        let card = Card::new(CardConfig::new().loading(true)).content("hello");
        let frame = card.render();
        assert_eq!(frame.body, CardBody::Loading);
        assert!(frame.style.loading.is_some());

        let card = Card::new(CardConfig::new()).content("hello");
        assert_eq!(card.body(), CardBody::Content(&"hello"));

        let empty: Card<String> = Card::new(CardConfig::new());
        assert_eq!(empty.body(), CardBody::Empty);
    }

    #[test]
    fn test_hover_shows_in_style_and_attributes() {
        let mut card: Card = Card::new(CardConfig::new().clickable(true));
        card.handle_event(&mut Event::new(event_types::POINTER_ENTER, 1));

        let frame = card.render();
        assert!(frame.attributes.hovered);
        assert_eq!(
            frame.style.root.get(StyleProperty::Transform),
            Some("translateY(-2px)")
        );
    }

    #[test]
    fn test_set_config_disabled_resets_state() {
        let clicks = Rc::new(Cell::new(0));
        let clicks_clone = clicks.clone();
        let mut card: Card = Card::new(CardConfig::new().clickable(true))
            .on_click(move |_| clicks_clone.set(clicks_clone.get() + 1));

        card.handle_event(&mut Event::new(event_types::POINTER_ENTER, 1));
        card.handle_event(&mut Event::new(event_types::FOCUS, 1));
        card.set_config(CardConfig::new().clickable(true).disabled(true));
        assert!(card.interaction_state().is_idle());

        card.handle_event(&mut Event::new(event_types::CLICK, 1));
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_theme_swap() {
        let overrides = ThemeOverrides {
            colors: Some(ColorOverrides {
                surface: Some("#111111".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let dark = Arc::new(create_theme(&default_theme(), &overrides));

        let mut card: Card = Card::new(CardConfig::new().variant("filled"));
        card.set_theme(dark);
        assert_eq!(
            card.style().root.get(StyleProperty::BackgroundColor),
            Some("#111111")
        );
    }
}
