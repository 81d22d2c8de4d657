//! Orbiting perspective camera.
//!
//! The eye position is a closed-form function of elapsed time, so the same
//! `t` always yields the same view no matter how many frames came before.

use crate::constants::{
    CAMERA_BASE_HEIGHT, CAMERA_BOB_AMPLITUDE, CAMERA_BOB_RATE, CAMERA_FAR, CAMERA_FOV_DEGREES,
    CAMERA_INITIAL_EYE, CAMERA_NEAR, CAMERA_ORBIT_RADIUS, CAMERA_ORBIT_RATE,
};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_INITIAL_EYE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Move the eye along the orbit for elapsed time `t` and look at the origin.
    pub fn follow_path(&mut self, t: f32) {
        self.eye = orbit_eye(t);
        self.target = Vec3::ZERO;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Eye position on the camera path at elapsed time `t`.
#[inline]
pub fn orbit_eye(t: f32) -> Vec3 {
    Vec3::new(
        (t * CAMERA_ORBIT_RATE).sin() * CAMERA_ORBIT_RADIUS,
        CAMERA_BASE_HEIGHT + (t * CAMERA_BOB_RATE).sin() * CAMERA_BOB_AMPLITUDE,
        (t * CAMERA_ORBIT_RATE).cos() * CAMERA_ORBIT_RADIUS,
    )
}
