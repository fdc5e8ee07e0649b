//! Camera state and the two navigation controllers.
//!
//! Exactly one controller writes the camera per frame: free flight
//! integrates an inertially-damped velocity, the focus autopilot drives
//! a smooth entry into and a continuous orbit around a chosen body. The
//! [`NavigationRig`] owns that exclusivity and routes the discrete
//! focus/release commands between them.

/// Core camera struct (eye + roll-free yaw/pitch orientation).
pub mod core;
/// Focus autopilot state machine.
pub mod focus;
/// Pointer/keyboard-driven inertial flight.
pub mod free_flight;
/// Mode arbitration and the per-frame readout.
pub mod rig;

pub use core::Camera;
pub use focus::{FocusController, FocusState};
pub use free_flight::{FreeFlightController, PointerCapture};
pub use rig::{NavCommand, NavReadout, NavigationRig};
