//! Pointer/keyboard-driven inertial flight.
//!
//! Orientation accumulates from relative pointer deltas while pointer
//! capture is held; position integrates an exponentially-damped velocity
//! so starts feel snappy and stops feel gentle.

use glam::{Vec2, Vec3};

use super::core::Camera;
use crate::input::{Action, ActionState};
use crate::options::FlightOptions;
use crate::util::easing::exp_approach_factor;

/// Seam between the controller and the platform's pointer grab.
///
/// The windowed viewer implements this over `winit`'s cursor grab; tests
/// use an in-memory stub. Keeping the seam here means the controller
/// never touches a window handle.
pub trait PointerCapture {
    /// Request exclusive routing of relative pointer motion.
    ///
    /// # Errors
    ///
    /// Returns the platform's refusal message when the grab is denied.
    fn grab(&mut self) -> Result<(), String>;

    /// Release the grab and restore default cursor behavior.
    fn release(&mut self);
}

/// Callback invoked when a pointer-capture request is rejected.
pub type CaptureDeniedCallback = Box<dyn FnMut(&str)>;

/// Free-flight controller: Unlocked ⇄ Locked pointer state plus
/// inertially-damped movement.
pub struct FreeFlightController {
    locked: bool,
    enabled: bool,
    velocity: Vec3,
    on_capture_denied: Option<CaptureDeniedCallback>,
}

impl Default for FreeFlightController {
    fn default() -> Self {
        Self::new()
    }
}

impl FreeFlightController {
    /// Create an unlocked, enabled controller at rest.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locked: false,
            enabled: true,
            velocity: Vec3::ZERO,
            on_capture_denied: None,
        }
    }

    /// Register the capture-rejection callback.
    pub fn set_capture_denied_callback(&mut self, cb: CaptureDeniedCallback) {
        self.on_capture_denied = Some(cb);
    }

    /// Whether relative pointer motion is currently captured.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Request pointer capture. On success the controller starts
    /// accepting look and movement input; on rejection it reports
    /// through the callback and stays Unlocked — it never retries on
    /// its own.
    pub fn lock(&mut self, capture: &mut dyn PointerCapture) {
        if self.locked {
            return;
        }
        match capture.grab() {
            Ok(()) => {
                self.locked = true;
                log::info!("pointer captured, free-flight look enabled");
            }
            Err(reason) => {
                log::warn!("pointer capture rejected: {reason}");
                if let Some(cb) = &mut self.on_capture_denied {
                    cb(&reason);
                }
            }
        }
    }

    /// Release pointer capture and return to Unlocked.
    pub fn unlock(&mut self, capture: &mut dyn PointerCapture) {
        if self.locked {
            capture.release();
            self.locked = false;
            log::info!("pointer capture released");
        }
    }

    /// The platform revoked or granted capture on its own (e.g. the user
    /// alt-tabbed away). Mirrors the state without touching the window.
    pub fn handle_capture_change(&mut self, captured: bool) {
        self.locked = captured;
    }

    /// Halt immediately: zero velocity, ignore input until re-enabled.
    ///
    /// Called when control hands over to the focus autopilot, so free
    /// flight later resumes from rest instead of replaying stale
    /// momentum.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.velocity = Vec3::ZERO;
    }

    /// Resume accepting movement input (from rest).
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Whether movement input is currently being integrated.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current speed in world units per second.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Per-frame update. Look and movement input apply only while
    /// Locked; while Unlocked all input is ignored and any residual
    /// velocity coasts to rest.
    pub fn update(
        &mut self,
        camera: &mut Camera,
        actions: &ActionState,
        dt: f32,
        opts: &FlightOptions,
    ) {
        if !self.enabled {
            return;
        }

        let dir = if self.locked {
            apply_look(camera, actions.pointer_delta(), opts);
            movement_direction(camera, actions)
        } else {
            Vec3::ZERO
        };
        let target_velocity = if dir == Vec3::ZERO {
            Vec3::ZERO
        } else {
            let boost = if actions.is_held(Action::Boost) {
                opts.boost_multiplier
            } else {
                1.0
            };
            dir * opts.base_speed * boost
        };

        // Faster response while a direction is commanded than while
        // coasting to rest.
        let tau = if dir == Vec3::ZERO {
            opts.decel_time_constant
        } else {
            opts.accel_time_constant
        };
        let k = exp_approach_factor(dt, tau);
        self.velocity += (target_velocity - self.velocity) * k;
        camera.eye += self.velocity * dt;
    }
}

/// Accumulate yaw/pitch from a relative pointer delta, honoring the
/// configured pitch clamp.
fn apply_look(camera: &mut Camera, delta: Vec2, opts: &FlightOptions) {
    if delta == Vec2::ZERO {
        return;
    }
    let limit = opts.pitch_limit_deg.to_radians();
    let yaw = camera.yaw() - delta.x * opts.pointer_sensitivity;
    let pitch = (camera.pitch() - delta.y * opts.pointer_sensitivity)
        .clamp(-limit, limit);
    camera.set_orientation(yaw, pitch);
}

/// Unit movement direction in world space from the six action flags,
/// or zero when nothing is held.
fn movement_direction(camera: &Camera, actions: &ActionState) -> Vec3 {
    let local = Vec3::new(
        actions.axis(Action::Right, Action::Left),
        actions.axis(Action::Up, Action::Down),
        actions.axis(Action::Back, Action::Forward),
    );
    if local == Vec3::ZERO {
        return Vec3::ZERO;
    }
    (camera.orientation() * local).normalize()
}
