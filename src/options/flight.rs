use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Free flight", inline)]
#[serde(default)]
/// Free-flight movement and mouse-look parameters.
pub struct FlightOptions {
    /// Cruise speed in world units per second.
    #[schemars(title = "Base Speed", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub base_speed: f32,
    /// Speed multiplier while the boost action is held.
    #[schemars(title = "Boost Multiplier", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub boost_multiplier: f32,
    /// Velocity time constant while a direction is commanded (seconds).
    /// Smaller than the coast constant for snappy starts.
    #[schemars(title = "Acceleration Response", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub accel_time_constant: f32,
    /// Velocity time constant while coasting to rest (seconds).
    #[schemars(title = "Coast Response", range(min = 0.01, max = 4.0), extend("step" = 0.01))]
    pub decel_time_constant: f32,
    /// Mouse-look sensitivity in radians per pointer count.
    #[schemars(title = "Pointer Sensitivity", range(min = 0.0001, max = 0.02), extend("step" = 0.0001))]
    pub pointer_sensitivity: f32,
    /// Pitch clamp in degrees; looking straight up/down is the limit.
    #[schemars(skip)]
    pub pitch_limit_deg: f32,
}

impl Default for FlightOptions {
    fn default() -> Self {
        Self {
            base_speed: 40.0,
            boost_multiplier: 5.0,
            accel_time_constant: 0.12,
            decel_time_constant: 0.45,
            pointer_sensitivity: 0.002,
            pitch_limit_deg: 90.0,
        }
    }
}
