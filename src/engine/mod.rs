//! Top-level simulation engine: owns the body catalog, the navigation
//! rig, the input processor, and the simulation clock, and sequences
//! them once per frame.

use crate::body::BodyCatalog;
use crate::camera::{Camera, NavReadout, NavigationRig, PointerCapture};
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;

/// The frame-driving core shared by the windowed viewer and headless
/// tests.
///
/// Update order within a frame is fixed: advance the simulation clock,
/// reposition bodies, snapshot input, then let the rig move the camera.
/// The camera therefore always sees body positions for the frame being
/// rendered, never stale ones.
pub struct OrreryEngine {
    options: Options,
    catalog: BodyCatalog,
    rig: NavigationRig,
    input: InputProcessor,
    sim_time: f32,
}

impl OrreryEngine {
    /// Build an engine around a populated catalog.
    #[must_use]
    pub fn new(catalog: BodyCatalog, options: Options) -> Self {
        Self {
            options,
            catalog,
            rig: NavigationRig::default(),
            input: InputProcessor::new(),
            sim_time: 0.0,
        }
    }

    /// Feed a raw input event. Capture changes are mirrored into the
    /// rig; edge-triggered commands are applied immediately.
    pub fn handle_input(&mut self, event: &InputEvent) {
        if let InputEvent::CaptureChanged { captured } = event {
            self.rig.handle_capture_change(*captured);
        }
        if let Some(command) =
            self.input.handle_event(event, &self.options.keybindings)
        {
            self.rig.apply(command, &self.catalog, &self.options);
        }
    }

    /// Advance one frame by `dt` seconds and return the navigation
    /// readout.
    pub fn update(&mut self, dt: f32) -> NavReadout {
        self.sim_time += dt;
        self.catalog
            .update(self.sim_time, dt, &self.options.simulation);

        let actions = self.input.snapshot();
        self.rig.update(&actions, &self.catalog, dt, &self.options);
        self.rig.readout(&self.catalog)
    }

    /// Request pointer capture from the platform.
    pub fn lock_pointer(&mut self, capture: &mut dyn PointerCapture) {
        self.rig.lock_pointer(capture);
    }

    /// Release pointer capture.
    pub fn unlock_pointer(&mut self, capture: &mut dyn PointerCapture) {
        self.rig.unlock_pointer(capture);
    }

    /// The camera, for the presentation layer.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.rig.camera()
    }

    /// Update the camera aspect ratio after a resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.rig.camera_mut().aspect = aspect;
    }

    /// The navigation rig.
    pub fn rig_mut(&mut self) -> &mut NavigationRig {
        &mut self.rig
    }

    /// The simulated bodies.
    #[must_use]
    pub fn catalog(&self) -> &BodyCatalog {
        &self.catalog
    }

    /// Effective options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Elapsed simulation time in seconds.
    #[must_use]
    pub fn sim_time(&self) -> f32 {
        self.sim_time
    }
}

#[cfg(test)]
mod tests {
    use super::OrreryEngine;
    use crate::body::{BodyCatalog, BodyDef};
    use crate::input::InputEvent;
    use crate::options::Options;

    fn key(code: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            code: code.to_owned(),
            pressed,
        }
    }

    fn engine_with_planet() -> OrreryEngine {
        let mut catalog = BodyCatalog::new();
        let _ = catalog
            .register(BodyDef {
                name: "planet".to_owned(),
                radius: 2.0,
                orbit_radius: 50.0,
                orbit_period: 100.0,
                rotation_period: 10.0,
                axial_tilt_deg: 0.0,
                parent: None,
            })
            .unwrap();
        OrreryEngine::new(catalog, Options::default())
    }

    #[test]
    fn frame_advances_simulation_and_reports_readout() {
        let mut engine = engine_with_planet();
        let readout = engine.update(0.016);
        assert_eq!(readout.target, None);
        assert!((engine.sim_time() - 0.016).abs() < 1e-6);
    }

    #[test]
    fn focus_key_engages_the_autopilot() {
        let mut engine = engine_with_planet();
        let _ = engine.update(0.016);

        engine.handle_input(&key("KeyF", true));
        let readout = engine.update(0.016);
        assert_eq!(readout.target.as_deref(), Some("planet"));

        engine.handle_input(&key("KeyR", true));
        let readout = engine.update(0.016);
        assert_eq!(readout.target, None);
    }

    #[test]
    fn movement_keys_move_the_camera_only_while_captured() {
        let mut engine = engine_with_planet();
        let start = engine.camera().eye;

        // No capture: held keys do not move the camera.
        engine.handle_input(&key("KeyW", true));
        for _ in 0..30 {
            let _ = engine.update(0.016);
        }
        assert_eq!(engine.camera().eye, start);

        engine.handle_input(&InputEvent::CaptureChanged { captured: true });
        for _ in 0..30 {
            let _ = engine.update(0.016);
        }
        assert!(engine.camera().eye.distance(start) > 0.1);
    }

    #[test]
    fn bodies_track_the_simulation_clock() {
        let mut engine = engine_with_planet();
        let _ = engine.update(0.016);
        let first = engine.catalog().iter().next().map(|(_, b)| b.position());

        for _ in 0..100 {
            let _ = engine.update(0.016);
        }
        let later = engine.catalog().iter().next().map(|(_, b)| b.position());
        assert_ne!(first, later);
    }
}
