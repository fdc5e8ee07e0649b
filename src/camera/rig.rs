//! Mode arbitration between free flight and the focus autopilot.
//!
//! The rig owns the camera and both controllers and is the single place
//! that decides which one writes the camera on a given frame.

use super::core::Camera;
use super::focus::{FocusController, FocusState};
use super::free_flight::{FreeFlightController, PointerCapture};
use crate::body::BodyCatalog;
use crate::input::ActionState;
use crate::options::Options;

/// Discrete navigation command emitted by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Engage the focus autopilot on the nearest body.
    RequestFocus,
    /// Release the focus target and resume free flight.
    RequestRelease,
}

/// Per-frame navigation summary for the HUD / status line.
#[derive(Debug, Clone, PartialEq)]
pub struct NavReadout {
    /// Free-flight speed in world units per second (zero while focused).
    pub speed: f32,
    /// Name of the focused body, if any.
    pub target: Option<String>,
    /// Distance to the focused body; 0.0 while no target is set.
    pub distance: f32,
}

/// Owns the camera and both controllers; routes commands and per-frame
/// updates so exactly one controller moves the camera each frame.
pub struct NavigationRig {
    camera: Camera,
    free_flight: FreeFlightController,
    focus: FocusController,
}

impl Default for NavigationRig {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

impl NavigationRig {
    /// Build a rig around an initial camera pose, starting in free
    /// flight.
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            free_flight: FreeFlightController::new(),
            focus: FocusController::new(),
        }
    }

    /// The camera, for the presentation layer.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access, e.g. for aspect-ratio updates on resize.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Current focus state.
    #[must_use]
    pub fn focus_state(&self) -> FocusState {
        self.focus.state()
    }

    /// The free-flight controller, for capture callbacks and state.
    pub fn free_flight_mut(&mut self) -> &mut FreeFlightController {
        &mut self.free_flight
    }

    /// Apply a discrete navigation command. Redundant commands are
    /// no-ops: a second focus request while already focused does not
    /// restart the transition, and releasing while free does nothing.
    pub fn apply(
        &mut self,
        command: NavCommand,
        catalog: &BodyCatalog,
        opts: &Options,
    ) {
        match command {
            NavCommand::RequestFocus => {
                if self.focus.is_focused() {
                    return;
                }
                self.free_flight.disable();
                if self
                    .focus
                    .focus_on_nearest(catalog, &self.camera, &opts.focus)
                    .is_none()
                {
                    // Nothing to focus; hand control straight back.
                    log::warn!("focus requested with no bodies registered");
                    self.free_flight.enable();
                }
            }
            NavCommand::RequestRelease => {
                if !self.focus.is_focused() {
                    return;
                }
                self.focus.return_to_free_flight();
                self.free_flight.enable();
            }
        }
    }

    /// Per-frame update: the focus autopilot drives while a target is
    /// set, free flight otherwise. Pointer capture is unaffected either
    /// way.
    pub fn update(
        &mut self,
        actions: &ActionState,
        catalog: &BodyCatalog,
        dt: f32,
        opts: &Options,
    ) {
        if self.focus.is_focused() {
            self.focus.update(&mut self.camera, catalog, dt, &opts.focus);
        } else {
            self.free_flight
                .update(&mut self.camera, actions, dt, &opts.flight);
        }
    }

    /// Request pointer capture from the platform.
    pub fn lock_pointer(&mut self, capture: &mut dyn PointerCapture) {
        self.free_flight.lock(capture);
    }

    /// Release pointer capture.
    pub fn unlock_pointer(&mut self, capture: &mut dyn PointerCapture) {
        self.free_flight.unlock(capture);
    }

    /// Mirror a platform-initiated capture change.
    pub fn handle_capture_change(&mut self, captured: bool) {
        self.free_flight.handle_capture_change(captured);
    }

    /// Build the per-frame status readout.
    #[must_use]
    pub fn readout(&self, catalog: &BodyCatalog) -> NavReadout {
        NavReadout {
            speed: self.free_flight.speed(),
            target: self
                .focus
                .target()
                .and_then(|id| catalog.get(id))
                .map(|body| body.name().to_owned()),
            distance: self.focus.distance_to_target(catalog, &self.camera),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use glam::{Vec2, Vec3};

    use super::{NavCommand, NavigationRig};
    use crate::body::{BodyCatalog, BodyDef};
    use crate::camera::{Camera, FocusState};
    use crate::input::{Action, ActionState};
    use crate::options::{Options, SimulationOptions};

    fn one_planet() -> BodyCatalog {
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
        catalog.update(0.0, 0.0, &SimulationOptions::default());
        catalog
    }

    fn forward_held() -> ActionState {
        let mut map = HashMap::new();
        let _ = map.insert(Action::Forward, true);
        ActionState::new(map, Vec2::ZERO)
    }

    #[test]
    fn focus_request_is_idempotent() {
        let catalog = one_planet();
        let opts = Options::default();
        let mut rig = NavigationRig::new(Camera::new(Vec3::ZERO, 0.0, 0.0));

        rig.apply(NavCommand::RequestFocus, &catalog, &opts);
        assert_eq!(rig.focus_state(), FocusState::Transitioning);

        // Let the transition partially play out, then re-request.
        for _ in 0..20 {
            rig.update(&forward_held(), &catalog, 0.016, &opts);
        }
        let mid_eye = rig.camera().eye;
        rig.apply(NavCommand::RequestFocus, &catalog, &opts);

        // The session was not restarted from scratch.
        assert_eq!(rig.camera().eye, mid_eye);
        rig.update(&forward_held(), &catalog, 0.016, &opts);
        assert_ne!(rig.camera().eye, mid_eye);
    }

    #[test]
    fn focus_freezes_free_flight_and_release_resumes_from_rest() {
        let catalog = one_planet();
        let opts = Options::default();
        let mut rig = NavigationRig::new(Camera::new(Vec3::ZERO, 0.0, 0.0));
        rig.handle_capture_change(true);

        // Build up speed in free flight.
        for _ in 0..60 {
            rig.update(&forward_held(), &catalog, 0.016, &opts);
        }
        assert!(rig.readout(&catalog).speed > 1.0);

        rig.apply(NavCommand::RequestFocus, &catalog, &opts);
        assert_eq!(rig.readout(&catalog).speed, 0.0);

        // Movement keys are ignored while focused.
        for _ in 0..30 {
            rig.update(&forward_held(), &catalog, 0.016, &opts);
        }
        assert_eq!(rig.readout(&catalog).speed, 0.0);

        rig.apply(NavCommand::RequestRelease, &catalog, &opts);
        assert_eq!(rig.focus_state(), FocusState::Idle);
        rig.update(&forward_held(), &catalog, 0.016, &opts);
        let speed = rig.readout(&catalog).speed;
        assert!(speed > 0.0 && speed < opts.flight.base_speed);
    }

    #[test]
    fn release_while_free_is_a_no_op() {
        let catalog = one_planet();
        let opts = Options::default();
        let mut rig = NavigationRig::new(Camera::new(Vec3::ZERO, 0.0, 0.0));
        rig.handle_capture_change(true);

        rig.apply(NavCommand::RequestRelease, &catalog, &opts);
        assert_eq!(rig.focus_state(), FocusState::Idle);
        rig.update(&forward_held(), &catalog, 0.016, &opts);
        assert!(rig.readout(&catalog).speed > 0.0);
    }

    #[test]
    fn focus_on_empty_catalog_keeps_free_flight_alive() {
        let catalog = BodyCatalog::new();
        let opts = Options::default();
        let mut rig = NavigationRig::new(Camera::new(Vec3::ZERO, 0.0, 0.0));
        rig.handle_capture_change(true);

        rig.apply(NavCommand::RequestFocus, &catalog, &opts);
        assert_eq!(rig.focus_state(), FocusState::Idle);

        rig.update(&forward_held(), &catalog, 0.016, &opts);
        assert!(rig.readout(&catalog).speed > 0.0);
    }

    #[test]
    fn readout_names_the_focused_body() {
        let catalog = one_planet();
        let opts = Options::default();
        let mut rig = NavigationRig::new(Camera::new(Vec3::ZERO, 0.0, 0.0));

        assert_eq!(rig.readout(&catalog).target, None);
        assert_eq!(rig.readout(&catalog).distance, 0.0);

        rig.apply(NavCommand::RequestFocus, &catalog, &opts);
        let readout = rig.readout(&catalog);
        assert_eq!(readout.target.as_deref(), Some("planet"));
        assert!(readout.distance > 0.0);
    }
}
