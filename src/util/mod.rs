//! Shared utilities for the navigation engine.
//!
//! Helpers for easing curves, exponential smoothing, and frame timing.

pub mod easing;
pub mod frame_timing;
