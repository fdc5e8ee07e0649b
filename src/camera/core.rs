use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Perspective camera defined by an eye position and a roll-free
/// yaw/pitch orientation.
///
/// Yaw 0 / pitch 0 faces world −Z; positive pitch looks up. Pitch is
/// clamped to ±90° at the setter, so the orientation can never invert
/// and no gimbal ambiguity arises.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    yaw: f32,
    pitch: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 40.0, 160.0),
            yaw: 0.0,
            pitch: -0.2,
            aspect: 1.6,
            fovy: 55.0,
            znear: 0.1,
            zfar: 4000.0,
        }
    }
}

impl Camera {
    /// Create a camera at `eye` with the given yaw/pitch (radians).
    #[must_use]
    pub fn new(eye: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            eye,
            ..Self::default()
        };
        camera.set_orientation(yaw, pitch);
        camera
    }

    /// Current yaw in radians.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in radians, always within ±π/2.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set yaw and pitch, clamping pitch to ±90°.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Orientation as a quaternion (yaw about Y, then pitch about X;
    /// roll is always zero).
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Unit look direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    /// Camera-local right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation() * Vec3::X
    }

    /// Camera-local up direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation() * Vec3::Y
    }

    /// Point the camera along `dir`, discarding any roll component.
    ///
    /// A zero or near-vertical-degenerate direction leaves the
    /// orientation unchanged.
    pub fn set_forward(&mut self, dir: Vec3) {
        let Some(dir) = dir.try_normalize() else {
            return;
        };
        let pitch = dir.y.asin();
        // Looking straight up/down leaves yaw undefined; keep the old one.
        let flat = Vec3::new(dir.x, 0.0, dir.z);
        let yaw = if flat.length_squared() > 1e-10 {
            (-dir.x).atan2(-dir.z)
        } else {
            self.yaw
        };
        self.set_orientation(yaw, pitch);
    }

    /// Build the view matrix for the presentation layer.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, self.forward(), self.up())
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn view_proj_matrix(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * self.view_matrix()
    }
}
