//! Expander configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use unfold_dom::{Easing, TransitionConfig};

use crate::direction::ExpandDirection;
use crate::error::ConfigError;

/// Default expand and collapse animation length in milliseconds.
pub const DEFAULT_ANIMATION_LENGTH: u32 = 250;

/// Default frame interval in milliseconds.
pub const DEFAULT_FRAME_INTERVAL: u32 = 16;

/// Longest animation length accepted by [`ExpanderConfig::validate`].
pub const MAX_ANIMATION_LENGTH: u32 = 60_000;

/// Per-instance configuration.
///
/// Every field has a default, so a config file only needs to name what it
/// changes:
///
/// ```
/// # use unfold::{ExpanderConfig, ExpandDirection};
/// let config = ExpanderConfig::from_json(r#"{ "direction": "left_to_right" }"#).unwrap();
/// assert_eq!(config.direction, ExpandDirection::LeftToRight);
/// assert_eq!(config.expand_animation_length, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpanderConfig {
    pub direction: ExpandDirection,
    pub is_expanded: bool,
    /// Full-distance expand duration in milliseconds.
    pub expand_animation_length: u32,
    /// Full-distance collapse duration in milliseconds.
    pub collapse_animation_length: u32,
    pub expand_animation_easing: Easing,
    pub collapse_animation_easing: Easing,
    /// Milliseconds between animation frames.
    pub frame_interval: u32,
}

impl Default for ExpanderConfig {
    fn default() -> Self {
        Self {
            direction: ExpandDirection::default(),
            is_expanded: false,
            expand_animation_length: DEFAULT_ANIMATION_LENGTH,
            collapse_animation_length: DEFAULT_ANIMATION_LENGTH,
            expand_animation_easing: Easing::Linear,
            collapse_animation_easing: Easing::Linear,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

impl ExpanderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("expand_animation_length", self.expand_animation_length),
            ("collapse_animation_length", self.collapse_animation_length),
        ] {
            if value > MAX_ANIMATION_LENGTH {
                return Err(ConfigError::InvalidDuration { field, value });
            }
        }
        if self.frame_interval == 0 || self.frame_interval > MAX_ANIMATION_LENGTH {
            return Err(ConfigError::InvalidDuration {
                field: "frame_interval",
                value: self.frame_interval,
            });
        }
        Ok(())
    }

    pub fn direction(mut self, direction: ExpandDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn expanded(mut self, is_expanded: bool) -> Self {
        self.is_expanded = is_expanded;
        self
    }

    pub fn expand_animation_length(mut self, millis: u32) -> Self {
        self.expand_animation_length = millis;
        self
    }

    pub fn collapse_animation_length(mut self, millis: u32) -> Self {
        self.collapse_animation_length = millis;
        self
    }

    pub fn expand_animation_easing(mut self, easing: Easing) -> Self {
        self.expand_animation_easing = easing;
        self
    }

    pub fn collapse_animation_easing(mut self, easing: Easing) -> Self {
        self.collapse_animation_easing = easing;
        self
    }

    pub fn frame_interval(mut self, millis: u32) -> Self {
        self.frame_interval = millis;
        self
    }

    /// Length and easing for a transition in the given direction.
    pub fn transition(&self, expanding: bool) -> TransitionConfig {
        if expanding {
            TransitionConfig::from_millis(self.expand_animation_length, self.expand_animation_easing)
        } else {
            TransitionConfig::from_millis(
                self.collapse_animation_length,
                self.collapse_animation_easing,
            )
        }
    }

    pub fn frame_interval_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.frame_interval.max(1)))
    }
}
