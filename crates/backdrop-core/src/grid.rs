//! Rippling wireframe ground plane.
//!
//! The plane is subdivided into `divisions x divisions` cells and laid flat on
//! the XZ plane, centered on the origin. Vertex order is row-major: row `iz`
//! runs from `-size/2` to `+size/2` along Z and, within a row, `ix` runs along
//! X. Only the Y component of each vertex moves after construction.

use crate::constants::{WAVE_AMPLITUDE, WAVE_DISTANCE_FREQ, WAVE_TIME_FREQ};

/// Height offset of the circular ripple at planar distance `distance` from the
/// grid center and elapsed time `t` (seconds).
#[inline]
pub fn wave_height(distance: f32, t: f32) -> f32 {
    (distance * WAVE_DISTANCE_FREQ - t * WAVE_TIME_FREQ).sin() * WAVE_AMPLITUDE
}

pub struct WaveGrid {
    divisions: u32,
    positions: Vec<[f32; 3]>,
    initial_heights: Vec<f32>,
    planar_distances: Vec<f32>,
    dirty: bool,
}

impl WaveGrid {
    pub fn new(size: f32, divisions: u32) -> Self {
        let row = divisions as usize + 1;
        let half = size * 0.5;
        let step = size / divisions as f32;
        let mut positions = Vec::with_capacity(row * row);
        for iz in 0..row {
            let z = iz as f32 * step - half;
            for ix in 0..row {
                let x = ix as f32 * step - half;
                positions.push([x, 0.0, z]);
            }
        }
        let initial_heights = positions.iter().map(|p| p[1]).collect();
        let planar_distances = positions
            .iter()
            .map(|p| (p[0] * p[0] + p[2] * p[2]).sqrt())
            .collect();
        Self {
            divisions,
            positions,
            initial_heights,
            planar_distances,
            dirty: true,
        }
    }

    /// Recompute every vertex height for elapsed time `t` and mark the buffer dirty.
    pub fn update(&mut self, t: f32) {
        for ((p, &h0), &d) in self
            .positions
            .iter_mut()
            .zip(&self.initial_heights)
            .zip(&self.planar_distances)
        {
            p[1] = h0 + wave_height(d, t);
        }
        self.dirty = true;
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn current_height(&self, i: usize) -> f32 {
        self.positions[i][1]
    }

    pub fn initial_height(&self, i: usize) -> f32 {
        self.initial_heights[i]
    }

    pub fn planar_distance(&self, i: usize) -> f32 {
        self.planar_distances[i]
    }

    /// Index of the vertex at column `ix`, row `iz`.
    pub fn index_of(&self, ix: u32, iz: u32) -> usize {
        iz as usize * (self.divisions as usize + 1) + ix as usize
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Line-list indices for the wireframe: every row edge, every column edge
    /// and the diagonal that splits each cell into two triangles.
    pub fn wireframe_indices(&self) -> Vec<u32> {
        let n = self.divisions;
        let row = n + 1;
        let edge_count = 2 * (row * n) + n * n;
        let mut out = Vec::with_capacity(edge_count as usize * 2);
        for iz in 0..row {
            for ix in 0..n {
                let a = iz * row + ix;
                out.extend_from_slice(&[a, a + 1]);
            }
        }
        for iz in 0..n {
            for ix in 0..row {
                let a = iz * row + ix;
                out.extend_from_slice(&[a, a + row]);
            }
        }
        for iz in 0..n {
            for ix in 0..n {
                let a = iz * row + ix;
                out.extend_from_slice(&[a + row, a + 1]);
            }
        }
        out
    }
}
