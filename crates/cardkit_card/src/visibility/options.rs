//! Observation options: root margin, thresholds and the enable switch

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// One side of a root margin
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MarginValue {
    Px(f32),
    /// Percentage of the root's width (left/right) or height (top/bottom)
    Percent(f32),
}

impl MarginValue {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let (number, make): (&str, fn(f32) -> Self) = if let Some(n) = value.strip_suffix('%') {
            (n, Self::Percent)
        } else if let Some(n) = value.strip_suffix("px") {
            (n, Self::Px)
        } else if value == "0" {
            (value, Self::Px)
        } else {
            return None;
        };
        number
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|n| n.is_finite())
            .map(make)
    }

    /// Resolve against the root extent along this side's axis
    pub fn resolve(self, extent: f32) -> f32 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => extent * pct / 100.0,
        }
    }
}

impl Display for MarginValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Growth (or, when negative, shrinkage) of the root region before
/// intersections are computed
///
/// Written like the CSS `margin` shorthand: one to four `px` or `%` values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RootMargin {
    pub top: MarginValue,
    pub right: MarginValue,
    pub bottom: MarginValue,
    pub left: MarginValue,
}

impl RootMargin {
    /// Same pixel margin on every side
    pub fn uniform(px: f32) -> Self {
        let value = MarginValue::Px(px);
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Parse the shorthand form, `None` when any part is malformed
    ///
    /// An empty string is a zero margin.
    pub fn parse(source: &str) -> Option<Self> {
        let values = source
            .split_whitespace()
            .map(MarginValue::parse)
            .collect::<Option<Vec<_>>>()?;

        let [top, right, bottom, left] = match values.as_slice() {
            [] => [MarginValue::Px(0.0); 4],
            [all] => [*all; 4],
            [vertical, horizontal] => [*vertical, *horizontal, *vertical, *horizontal],
            [top, horizontal, bottom] => [*top, *horizontal, *bottom, *horizontal],
            [top, right, bottom, left] => [*top, *right, *bottom, *left],
            _ => return None,
        };
        Some(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

impl From<&str> for RootMargin {
    fn from(source: &str) -> Self {
        Self::parse(source).unwrap_or_else(|| {
            tracing::warn!(root_margin = source, "malformed root margin, using 50px");
            Self::default()
        })
    }
}

impl From<String> for RootMargin {
    fn from(source: String) -> Self {
        Self::from(source.as_str())
    }
}

impl From<RootMargin> for String {
    fn from(margin: RootMargin) -> Self {
        margin.to_string()
    }
}

impl Display for RootMargin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Intersection ratio trigger point(s)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Threshold {
    Single(f32),
    Multiple(Vec<f32>),
}

impl Threshold {
    /// Trigger points clamped to `0.0..=1.0`, sorted and deduplicated
    ///
    /// An empty list means a single trigger at `0.0`.
    pub fn values(&self) -> Vec<f32> {
        let mut values: Vec<f32> = match self {
            Self::Single(value) => vec![*value],
            Self::Multiple(values) => values.clone(),
        };
        values.retain(|v| !v.is_nan());
        for value in values.iter_mut() {
            *value = value.clamp(0.0, 1.0);
        }
        values.sort_by(|a, b| a.total_cmp(b));
        values.dedup();
        if values.is_empty() {
            values.push(0.0);
        }
        values
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::Single(0.1)
    }
}

impl From<f32> for Threshold {
    fn from(value: f32) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<f32>> for Threshold {
    fn from(values: Vec<f32>) -> Self {
        Self::Multiple(values)
    }
}

/// Visibility detector configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisibilityOptions {
    pub root_margin: RootMargin,
    pub threshold: Threshold,
    pub enabled: bool,
}

impl VisibilityOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_margin(mut self, margin: impl Into<RootMargin>) -> Self {
        self.root_margin = margin.into();
        self
    }

    pub fn threshold(mut self, threshold: impl Into<Threshold>) -> Self {
        self.threshold = threshold.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            root_margin: RootMargin::default(),
            threshold: Threshold::default(),
            enabled: true,
        }
    }
}
