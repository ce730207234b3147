//! Control configuration

use std::env;

/// Configuration for the movement controller.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlConfig {
    /// How long one movement step takes, in seconds. The walk animation
    /// loops for the same duration.
    pub movement_duration_secs: f32,
    /// Distance covered by one forward/back step, in world units.
    pub step_distance: f32,
    /// Turn angle for left/right commands, in degrees about the Y axis.
    pub turn_degrees: f32,
    /// Cross-fade into the walk animation, in seconds.
    pub walk_fade_in_secs: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            movement_duration_secs: 5.0,
            step_distance: 1.0,
            turn_degrees: 90.0,
            walk_fade_in_secs: 0.5,
        }
    }
}

impl ControlConfig {
    /// Builds a configuration from environment variables while falling back
    /// to the defaults.
    pub fn from_env() -> Self {
        Self {
            movement_duration_secs: env::var("VOICEBOT_MOVE_DURATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5.0),
            step_distance: env::var("VOICEBOT_STEP_DISTANCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1.0),
            turn_degrees: env::var("VOICEBOT_TURN_DEGREES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(90.0),
            walk_fade_in_secs: env::var("VOICEBOT_WALK_FADE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.5),
        }
    }
}
