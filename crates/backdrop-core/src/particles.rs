use crate::constants::{PARTICLE_BOB_AMPLITUDE, PARTICLE_CEILING, PARTICLE_SPREAD_XZ};
use rand::Rng;

/// Drifting point cloud. Positions and colours are kept as flat `[x, y, z]`
/// triples so they can be uploaded to the GPU as-is.
pub struct ParticleField {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
    dirty: bool,
}

/// Phase offset for particle `index`: the offset of its x component in the
/// flattened position buffer.
#[inline]
pub fn particle_phase(index: usize) -> f32 {
    (index * 3) as f32
}

/// One bob step for a single particle height. Heights above the ceiling are
/// recycled to zero rather than bounced.
#[inline]
pub fn step_height(y: f32, t: f32, phase: f32) -> f32 {
    let next = y + (t + phase).sin() * PARTICLE_BOB_AMPLITUDE;
    if next > PARTICLE_CEILING {
        0.0
    } else {
        next
    }
}

impl ParticleField {
    pub fn random<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push([
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_XZ,
                rng.gen::<f32>() * PARTICLE_CEILING,
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_XZ,
            ]);
            colors.push([rng.gen::<f32>(), rng.gen::<f32>(), 1.0]);
        }
        Self {
            positions,
            colors,
            dirty: true,
        }
    }

    pub fn update(&mut self, t: f32) {
        for (i, p) in self.positions.iter_mut().enumerate() {
            p[1] = step_height(p[1], t, particle_phase(i));
        }
        self.dirty = true;
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn set_height(&mut self, index: usize, y: f32) {
        if let Some(p) = self.positions.get_mut(index) {
            p[1] = y;
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
