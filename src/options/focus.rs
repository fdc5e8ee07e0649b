use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Focus orbit", inline)]
#[serde(default)]
/// Focus autopilot orbit and entry-transition parameters.
pub struct FocusOptions {
    /// Orbit radius as a multiple of the target body's radius.
    #[schemars(title = "Orbit Radius Ratio", range(min = 1.5, max = 10.0), extend("step" = 0.1))]
    pub orbit_radius_ratio: f32,
    /// Camera revolution speed around the target (radians per second).
    #[schemars(title = "Orbit Speed", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub orbit_angular_speed: f32,
    /// Duration of the entry blend from free flight into orbit (seconds).
    #[schemars(title = "Transition Duration", range(min = 0.2, max = 10.0), extend("step" = 0.1))]
    pub transition_duration: f32,
    /// Easing curve shaping the entry blend.
    #[schemars(title = "Transition Easing")]
    pub transition_easing: EasingFunction,
    /// Camera height above the orbit plane, as a fraction of the orbit
    /// radius.
    #[schemars(title = "Vertical Offset", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub vertical_offset_fraction: f32,
    /// Time constant for tracking the ideal orbit point once orbiting
    /// (seconds).
    #[schemars(skip)]
    pub follow_time_constant: f32,
    /// Time constant for the look-at orientation slerp (seconds).
    #[schemars(skip)]
    pub look_time_constant: f32,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            orbit_radius_ratio: 3.0,
            orbit_angular_speed: 0.25,
            transition_duration: 2.0,
            transition_easing: EasingFunction::default(),
            vertical_offset_fraction: 0.35,
            follow_time_constant: 0.3,
            look_time_constant: 0.25,
        }
    }
}
