//! Celestial bodies and the per-tick position updater.
//!
//! A body's position is a pure function of simulation time and its (and
//! its ancestors') orbital parameters — recomputed from scratch every
//! tick, never accumulated, so it can never drift. Spin angle is the one
//! per-body quantity that accumulates.

/// Body storage, registration validation, and the position updater.
pub mod catalog;
/// Built-in gameplay-scaled solar system catalog.
pub mod presets;

pub use catalog::{BodyCatalog, BodyDef, BodyId, CelestialBody};
pub use presets::solar_system;
