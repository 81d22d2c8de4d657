use crate::constants::{
    SHAPE_MAX_INITIAL_ROTATION, SHAPE_MAX_ROTATION_SPEED, SHAPE_MIN_Y, SHAPE_SPAN_Y,
    SHAPE_SPREAD_XZ,
};
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;

/// A wireframe solid hanging above the grid and spinning in place.
#[derive(Clone, Debug)]
pub struct FloatingShape {
    pub position: Vec3,
    /// Euler angles in radians. Grows without bound; the renderer only ever
    /// feeds it through sin/cos.
    pub rotation: Vec3,
    pub rotation_speed: Vec3,
}

impl FloatingShape {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD_XZ,
            rng.gen::<f32>() * SHAPE_SPAN_Y + SHAPE_MIN_Y,
            (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD_XZ,
        );
        let rotation = Vec3::new(
            rng.gen::<f32>() * SHAPE_MAX_INITIAL_ROTATION,
            rng.gen::<f32>() * SHAPE_MAX_INITIAL_ROTATION,
            rng.gen::<f32>() * SHAPE_MAX_INITIAL_ROTATION,
        );
        let rotation_speed = Vec3::new(
            rng.gen::<f32>() * SHAPE_MAX_ROTATION_SPEED,
            rng.gen::<f32>() * SHAPE_MAX_ROTATION_SPEED,
            rng.gen::<f32>() * SHAPE_MAX_ROTATION_SPEED,
        );
        Self {
            position,
            rotation,
            rotation_speed,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.rotation += self.rotation_speed;
    }

    /// Model matrix: rotate in X, then Y, then Z order, then translate.
    pub fn model_matrix(&self) -> Mat4 {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_rotation_translation(q, self.position)
    }
}

pub fn spawn_shapes<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<FloatingShape> {
    (0..count).map(|_| FloatingShape::random(rng)).collect()
}

pub fn advance_shapes(shapes: &mut [FloatingShape]) {
    for s in shapes {
        s.advance();
    }
}
