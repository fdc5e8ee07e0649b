//! Focus autopilot: smooth entry into, and continuous orbit around, a
//! chosen body.
//!
//! Translational and rotational easing are decoupled on purpose: the
//! entry path uses a finite cubic blend, the steady orbit uses
//! exponential tracking, and in both phases the orientation slerps
//! independently toward an exact look-at.

use glam::{EulerRot, Quat, Vec3};

use super::core::Camera;
use crate::body::{BodyCatalog, BodyId};
use crate::options::FocusOptions;
use crate::util::easing::exp_approach_factor;

/// Externally visible autopilot state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    /// No target; free flight owns the camera. Initial and terminal.
    Idle,
    /// Blending from the entry pose toward the orbit path.
    Transitioning,
    /// Continuously tracking the revolving orbit point.
    Orbiting,
}

/// Live state for one focus engagement. Created on focus request,
/// dropped on release, never persisted.
#[derive(Debug, Clone)]
struct FocusSession {
    target: BodyId,
    /// Camera bearing around the target, advancing monotonically.
    orbit_angle: f32,
    /// Fixed ratio × target radius, derived once at entry.
    orbit_radius: f32,
    /// Entry-blend progress in [0, 1].
    progress: f32,
    /// Camera position captured at focus entry, used only during the
    /// blend.
    start_eye: Vec3,
    orbiting: bool,
}

/// State machine driving the camera around a focus target.
#[derive(Debug, Default)]
pub struct FocusController {
    session: Option<FocusSession>,
}

impl FocusController {
    /// Create an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current autopilot state.
    #[must_use]
    pub fn state(&self) -> FocusState {
        match &self.session {
            None => FocusState::Idle,
            Some(s) if s.orbiting => FocusState::Orbiting,
            Some(_) => FocusState::Transitioning,
        }
    }

    /// Whether a target is currently set.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.session.is_some()
    }

    /// The focused body, if any.
    #[must_use]
    pub fn target(&self) -> Option<BodyId> {
        self.session.as_ref().map(|s| s.target)
    }

    /// Begin a focus engagement on `id`.
    ///
    /// Captures the camera's current pose as the transition start and
    /// seeds the orbit angle from the current camera-to-target bearing,
    /// so the entry path starts from wherever the viewer already is —
    /// never a snap. A stale handle from another catalog is ignored.
    pub fn focus_on_target(
        &mut self,
        id: BodyId,
        catalog: &BodyCatalog,
        camera: &Camera,
        opts: &FocusOptions,
    ) {
        let Some(body) = catalog.get(id) else {
            log::warn!("focus requested on unknown body handle");
            return;
        };

        let offset = camera.eye - body.position();
        self.session = Some(FocusSession {
            target: id,
            orbit_angle: offset.z.atan2(offset.x),
            orbit_radius: opts.orbit_radius_ratio * body.radius(),
            progress: 0.0,
            start_eye: camera.eye,
            orbiting: false,
        });
        log::info!("focusing {}", body.name());
    }

    /// Focus the body nearest to the camera.
    ///
    /// Scans every body — top-level and satellite alike — by Euclidean
    /// distance from the camera; exact ties keep the first body seen in
    /// catalog order. Returns the winner, or `None` when the catalog is
    /// empty (and the controller stays Idle).
    pub fn focus_on_nearest(
        &mut self,
        catalog: &BodyCatalog,
        camera: &Camera,
        opts: &FocusOptions,
    ) -> Option<BodyId> {
        let mut best: Option<(BodyId, f32)> = None;
        for (id, body) in catalog.iter() {
            let d = camera.eye.distance_squared(body.position());
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((id, d));
            }
        }
        let (id, _) = best?;
        self.focus_on_target(id, catalog, camera, opts);
        Some(id)
    }

    /// Per-frame update while a target is set; no-op when Idle.
    ///
    /// The orbit angle advances in both phases, so the ideal point keeps
    /// revolving even while the entry blend is still in flight.
    pub fn update(
        &mut self,
        camera: &mut Camera,
        catalog: &BodyCatalog,
        dt: f32,
        opts: &FocusOptions,
    ) {
        let Some(session) = &mut self.session else {
            return;
        };

        session.orbit_angle += opts.orbit_angular_speed * dt;
        let target_pos = catalog.position(session.target);
        let ideal = target_pos
            + orbit_offset(
                session.orbit_angle,
                session.orbit_radius,
                opts.vertical_offset_fraction,
            );

        if session.orbiting {
            // Critically-damped tracking of the moving orbit point.
            let k = exp_approach_factor(dt, opts.follow_time_constant);
            camera.eye += (ideal - camera.eye) * k;
        } else {
            session.progress =
                (session.progress + dt / opts.transition_duration).min(1.0);
            let t = opts.transition_easing.evaluate(session.progress);
            camera.eye = session.start_eye.lerp(ideal, t);
            if session.progress >= 1.0 {
                session.orbiting = true;
                log::debug!("focus transition complete, orbiting");
            }
        }

        aim_at(camera, target_pos, dt, opts);
    }

    /// Drop the target and return to Idle. The camera keeps its last
    /// pose — no snap-back; free flight resumes from rest.
    pub fn return_to_free_flight(&mut self) {
        if self.session.take().is_some() {
            log::info!("focus released, free flight resumes");
        }
    }

    /// Distance from the camera to the focused body.
    ///
    /// Returns a 0.0 sentinel while Idle — check [`is_focused`]
    /// (Self::is_focused) before trusting a zero.
    #[must_use]
    pub fn distance_to_target(
        &self,
        catalog: &BodyCatalog,
        camera: &Camera,
    ) -> f32 {
        self.session.as_ref().map_or(0.0, |s| {
            camera.eye.distance(catalog.position(s.target))
        })
    }
}

/// Camera offset from the target for a given bearing: a horizontal
/// circle of `radius` raised by `vertical_fraction × radius`.
fn orbit_offset(angle: f32, radius: f32, vertical_fraction: f32) -> Vec3 {
    Vec3::new(
        radius * angle.cos(),
        radius * vertical_fraction,
        radius * angle.sin(),
    )
}

/// Slerp the camera orientation toward an exact look-at on the target.
///
/// Both endpoints are roll-free and the result is re-derived as a
/// yaw/pitch pair, so roll can never creep in.
fn aim_at(camera: &mut Camera, target: Vec3, dt: f32, opts: &FocusOptions) {
    let Some(dir) = (target - camera.eye).try_normalize() else {
        return;
    };
    let desired_pitch = dir.y.asin();
    let desired_yaw = (-dir.x).atan2(-dir.z);
    let desired =
        Quat::from_euler(EulerRot::YXZ, desired_yaw, desired_pitch, 0.0);

    let k = exp_approach_factor(dt, opts.look_time_constant);
    let blended = camera.orientation().slerp(desired, k);
    camera.set_forward(blended * Vec3::NEG_Z);
}
