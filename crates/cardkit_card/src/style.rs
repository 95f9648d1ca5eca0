//! Structured style output
//!
//! A [`StyleFragment`] is an ordered property → value map. Setting a property
//! that is already present replaces its value in place, which is how later
//! overlays win over earlier ones while declaration order stays stable.

use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::Serialize;

/// CSS properties emitted by the resolvers
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleProperty {
    // Layout
    Display,
    FlexDirection,
    Flex,
    FlexShrink,
    AlignItems,
    JustifyContent,
    Gap,
    Position,
    BoxSizing,
    Overflow,
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    Padding,
    PaddingBottom,
    Margin,
    MarginRight,

    // Surface
    BackgroundColor,
    Border,
    BorderTop,
    BorderColor,
    BorderTopColor,
    BorderWidth,
    BorderRadius,
    BoxShadow,
    Opacity,

    // Text
    Color,
    FontSize,
    LineHeight,
    OverflowWrap,

    // Interaction
    Cursor,
    UserSelect,
    PointerEvents,
    Outline,
    OutlineOffset,

    // Motion
    Transform,
    Transition,
    Animation,
}

impl StyleProperty {
    /// CSS property name
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::FlexDirection => "flex-direction",
            Self::Flex => "flex",
            Self::FlexShrink => "flex-shrink",
            Self::AlignItems => "align-items",
            Self::JustifyContent => "justify-content",
            Self::Gap => "gap",
            Self::Position => "position",
            Self::BoxSizing => "box-sizing",
            Self::Overflow => "overflow",
            Self::Width => "width",
            Self::Height => "height",
            Self::MinWidth => "min-width",
            Self::MinHeight => "min-height",
            Self::MaxWidth => "max-width",
            Self::Padding => "padding",
            Self::PaddingBottom => "padding-bottom",
            Self::Margin => "margin",
            Self::MarginRight => "margin-right",
            Self::BackgroundColor => "background-color",
            Self::Border => "border",
            Self::BorderTop => "border-top",
            Self::BorderColor => "border-color",
            Self::BorderTopColor => "border-top-color",
            Self::BorderWidth => "border-width",
            Self::BorderRadius => "border-radius",
            Self::BoxShadow => "box-shadow",
            Self::Opacity => "opacity",
            Self::Color => "color",
            Self::FontSize => "font-size",
            Self::LineHeight => "line-height",
            Self::OverflowWrap => "overflow-wrap",
            Self::Cursor => "cursor",
            Self::UserSelect => "user-select",
            Self::PointerEvents => "pointer-events",
            Self::Outline => "outline",
            Self::OutlineOffset => "outline-offset",
            Self::Transform => "transform",
            Self::Transition => "transition",
            Self::Animation => "animation",
        }
    }
}

/// Ordered set of style declarations
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleFragment {
    declarations: IndexMap<StyleProperty, String>,
}

impl StyleFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration, replacing any earlier value for the property
    pub fn set(&mut self, property: StyleProperty, value: impl Into<String>) -> &mut Self {
        self.declarations.insert(property, value.into());
        self
    }

    /// Builder form of [`set`](Self::set)
    pub fn with(mut self, property: StyleProperty, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.declarations.get(&property).map(String::as_str)
    }

    pub fn contains(&self, property: StyleProperty) -> bool {
        self.declarations.contains_key(&property)
    }

    /// Remove a declaration, keeping the order of the rest
    pub fn remove(&mut self, property: StyleProperty) -> Option<String> {
        self.declarations.shift_remove(&property)
    }

    /// Layer `other` on top of this fragment
    pub fn extend(&mut self, other: &StyleFragment) {
        for (property, value) in other.iter() {
            self.set(property, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.declarations
            .iter()
            .map(|(property, value)| (*property, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Render as CSS declarations, one `property: value;` per line
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (property, value) in self.iter() {
            let _ = writeln!(css, "{}: {};", property.css_name(), value);
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut style = StyleFragment::new();
        style
            .set(StyleProperty::Display, "flex")
            .set(StyleProperty::Padding, "8px")
            .set(StyleProperty::Display, "block");

        assert_eq!(style.get(StyleProperty::Display), Some("block"));
        assert_eq!(style.to_css(), "display: block;\npadding: 8px;\n");
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut style = StyleFragment::new()
            .with(StyleProperty::Width, "100%")
            .with(StyleProperty::Transform, "translateY(-2px)")
            .with(StyleProperty::Cursor, "pointer");

        assert_eq!(style.remove(StyleProperty::Transform).as_deref(), Some("translateY(-2px)"));
        let props: Vec<_> = style.iter().map(|(p, _)| p).collect();
        assert_eq!(props, vec![StyleProperty::Width, StyleProperty::Cursor]);
    }

    #[test]
    fn test_serializes_with_css_names() {
        let style = StyleFragment::new()
            .with(StyleProperty::BackgroundColor, "#ffffff")
            .with(StyleProperty::BoxShadow, "none");

        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r##"{"background-color":"#ffffff","box-shadow":"none"}"##);
    }
}
