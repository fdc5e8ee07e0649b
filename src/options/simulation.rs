use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Simulation", inline)]
#[serde(default)]
/// Orbital and spin pacing constants.
///
/// Both scales map elapsed simulation time to visible motion. They are
/// gameplay constants with no canonical value — real orbital rates would
/// be imperceptible at interactive frame rates — so they live in
/// configuration rather than in the update formulas.
pub struct SimulationOptions {
    /// Radians of orbital angle accumulated per `orbit_period` of
    /// simulated time. 2π would mean one real revolution per period.
    #[schemars(title = "Orbital Pace", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub angular_scale: f32,
    /// Spin-rate multiplier applied to `1 / rotation_period`.
    #[schemars(title = "Spin Pace", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub spin_scale: f32,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            angular_scale: 10.0,
            spin_scale: 5.0,
        }
    }
}
