use glam::{Mat4, Quat, Vec3};

use super::constants::{CAMERA_FOVY_DEG, CAMERA_TARGET, CAMERA_ZFAR, CAMERA_ZNEAR};
use super::device::DeviceProfile;

/// Right-handed perspective camera with a placement fixed at construction.
///
/// Eye, target and up come from the device profile and have no setters; only
/// the aspect ratio follows the canvas.
#[derive(Clone, Debug)]
pub struct Camera {
    eye: Vec3,
    target: Vec3,
    up: Vec3,
    aspect: f32,
    fovy_radians: f32,
    znear: f32,
    zfar: f32,
}

impl Camera {
    pub fn for_profile(profile: &DeviceProfile, aspect: f32) -> Self {
        Self {
            eye: profile.camera_eye,
            target: CAMERA_TARGET,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// World-space orientation of the camera (no roll).
    #[allow(dead_code)]
    pub fn orientation(&self) -> Quat {
        Quat::from_mat4(&self.view_matrix().inverse())
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
