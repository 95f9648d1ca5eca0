//! Animation tokens for theming

use serde::{Deserialize, Serialize};

/// Duration token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum DurationToken {
    Fast,
    Normal,
    Slow,
}

/// Easing curve token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum EasingToken {
    EaseIn,
    EaseOut,
    EaseInOut,
}

/// Named durations (CSS time strings)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DurationTokens {
    pub fast: String,
    pub normal: String,
    pub slow: String,
}

impl Default for DurationTokens {
    fn default() -> Self {
        Self {
            fast: "150ms".to_string(),
            normal: "300ms".to_string(),
            slow: "500ms".to_string(),
        }
    }
}

/// Named easing curves (CSS timing functions)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EasingTokens {
    pub ease_in: String,
    pub ease_out: String,
    pub ease_in_out: String,
}

impl Default for EasingTokens {
    fn default() -> Self {
        Self {
            ease_in: "cubic-bezier(0.4, 0.0, 1, 1)".to_string(),
            ease_out: "cubic-bezier(0.0, 0.0, 0.2, 1)".to_string(),
            ease_in_out: "cubic-bezier(0.4, 0.0, 0.2, 1)".to_string(),
        }
    }
}

/// Complete set of animation tokens
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationTokens {
    pub duration: DurationTokens,
    pub easing: EasingTokens,
}

impl AnimationTokens {
    /// Get a duration by token key
    pub fn duration(&self, token: DurationToken) -> &str {
        match token {
            DurationToken::Fast => &self.duration.fast,
            DurationToken::Normal => &self.duration.normal,
            DurationToken::Slow => &self.duration.slow,
        }
    }

    /// Get an easing curve by token key
    pub fn easing(&self, token: EasingToken) -> &str {
        match token {
            EasingToken::EaseIn => &self.easing.ease_in,
            EasingToken::EaseOut => &self.easing.ease_out,
            EasingToken::EaseInOut => &self.easing.ease_in_out,
        }
    }

    /// `transition` shorthand covering all properties
    pub fn transition_all(&self, duration: DurationToken, easing: EasingToken) -> String {
        format!("all {} {}", self.duration(duration), self.easing(easing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_all() {
        let animations = AnimationTokens::default();
        assert_eq!(
            animations.transition_all(DurationToken::Normal, EasingToken::EaseInOut),
            "all 300ms cubic-bezier(0.4, 0.0, 0.2, 1)"
        );
    }

    #[test]
    fn test_easing_keys_serialize_camel_case() {
        let json = serde_json::to_value(EasingTokens::default()).unwrap();
        assert!(json.get("easeInOut").is_some());
        assert!(json.get("ease_in_out").is_none());
    }
}
