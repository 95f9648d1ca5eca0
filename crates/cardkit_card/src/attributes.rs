//! State and accessibility attributes for the card root

use serde::Serialize;

use crate::config::CardConfig;
use crate::interaction::InteractionState;

/// Semantic role marker
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Button,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
        }
    }
}

/// Attributes the presentation layer binds onto the card element
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAttributes {
    pub hovered: bool,
    pub pressed: bool,
    pub focused: bool,
    /// `button` when the card is clickable
    pub role: Option<Role>,
    /// Focus order marker, present when clickable and not disabled
    pub tab_index: Option<i32>,
    pub aria_disabled: bool,
    pub aria_selected: bool,
    pub aria_label: Option<String>,
    pub aria_described_by: Option<String>,
    pub test_id: Option<String>,
    pub class_name: Option<String>,
}

impl CardAttributes {
    pub fn new(config: &CardConfig, state: &InteractionState) -> Self {
        Self {
            hovered: state.is_hovered,
            pressed: state.is_pressed,
            focused: state.is_focused,
            role: config.clickable.then_some(Role::Button),
            tab_index: config.is_interactive().then_some(0),
            aria_disabled: config.disabled,
            aria_selected: config.selected,
            aria_label: config.aria_label.clone(),
            aria_described_by: config.aria_described_by.clone(),
            test_id: config.test_id.clone(),
            class_name: config.class_name.clone(),
        }
    }

    /// Flatten into HTML-style attribute name/value pairs
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("data-hovered", self.hovered.to_string()),
            ("data-pressed", self.pressed.to_string()),
            ("data-focused", self.focused.to_string()),
        ];

        if let Some(role) = self.role {
            pairs.push(("role", role.as_str().to_string()));
        }
        if let Some(tab_index) = self.tab_index {
            pairs.push(("tabindex", tab_index.to_string()));
        }
        pairs.push(("aria-disabled", self.aria_disabled.to_string()));
        pairs.push(("aria-selected", self.aria_selected.to_string()));

        let optional = [
            ("aria-label", &self.aria_label),
            ("aria-describedby", &self.aria_described_by),
            ("data-testid", &self.test_id),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                pairs.push((name, value.clone()));
            }
        }

        let class = match &self.class_name {
            Some(extra) => format!("card {extra}"),
            None => "card".to_string(),
        };
        pairs.push(("class", class));
        pairs
    }
}

/// Attributes for `config` in interaction `state`
pub fn card_attributes(config: &CardConfig, state: &InteractionState) -> CardAttributes {
    CardAttributes::new(config, state)
}
