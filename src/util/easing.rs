//! Easing functions for camera interpolation.
//!
//! The two temporal-decay models used by the navigation controllers live
//! here as named, independently testable functions: a cubic ease-in-out
//! for the finite focus-entry blend, and an exponential-approach factor
//! for the open-ended tracking cases (orbit follow, velocity damping).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for finite interpolations.
///
/// Serializes as a `snake_case` string so it reads naturally in TOML
/// presets (`transition_easing = "cubic_in_out"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Cubic ease-in-out (slow start, fast middle, slow end).
    CubicInOut,
}

impl EasingFunction {
    /// Default easing for camera transitions.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let omt = -2.0 * t + 2.0;
                    1.0 - omt * omt * omt / 2.0
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Fraction of remaining distance to cover this frame when exponentially
/// approaching a (possibly moving) target with the given time constant.
///
/// `1 - e^(-dt/tau)` — applying this factor every frame yields the same
/// trajectory regardless of how `dt` is subdivided, which keeps the
/// orbit-follow and velocity damping frame-rate independent. A
/// non-positive `tau` degenerates to an instant snap (factor 1).
#[inline]
#[must_use]
pub fn exp_approach_factor(dt: f32, tau: f32) -> f32 {
    if tau <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt / tau).exp()
}
