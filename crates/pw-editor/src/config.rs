//! Session configuration loaded from JSON.

use std::path::Path;

use pw_core::error::{PathError, Result};
use pw_core::traits::Validate;
use pw_curve::SAMPLES_PER_SEGMENT;
use pw_follow::{Easing, DEFAULT_SPEED};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Samples evaluated per cubic segment (same for every segment).
    pub samples_per_segment: usize,
    /// Follower progress gained per second.
    pub follower_speed: f64,
    /// Easing active when the session starts.
    pub initial_easing: Easing,
    /// Radius within which a picked position selects a control point.
    pub pick_radius: f64,
}

impl EditorConfig {
    pub const DEFAULT_PICK_RADIUS: f64 = 1e-4;

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            samples_per_segment: SAMPLES_PER_SEGMENT,
            follower_speed: DEFAULT_SPEED,
            initial_easing: Easing::Linear,
            pick_radius: Self::DEFAULT_PICK_RADIUS,
        }
    }
}

impl Validate for EditorConfig {
    fn validate(&self) -> Result<()> {
        if self.samples_per_segment < 2 {
            return Err(PathError::Config(format!(
                "samples_per_segment must be at least 2, got {}",
                self.samples_per_segment
            )));
        }
        if !self.follower_speed.is_finite() || self.follower_speed < 0.0 {
            return Err(PathError::Config(format!(
                "follower_speed must be a non-negative number, got {}",
                self.follower_speed
            )));
        }
        if !self.pick_radius.is_finite() || self.pick_radius < 0.0 {
            return Err(PathError::Config(format!(
                "pick_radius must be a non-negative number, got {}",
                self.pick_radius
            )));
        }
        Ok(())
    }
}
