use crate::camera::Camera;
use crate::constants::{GRID_DIVISIONS, GRID_SIZE, MAX_PIXEL_RATIO, PARTICLE_COUNT, SHAPE_COUNT};
use crate::error::{BackdropError, Result};
use crate::grid::WaveGrid;
use crate::particles::ParticleField;
use crate::shapes::{advance_shapes, spawn_shapes, FloatingShape};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Construction-time knobs for the scene.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub grid_size: f32,
    pub grid_divisions: u32,
    pub shape_count: usize,
    pub particle_count: usize,
    /// Fixed seed for reproducible placement; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            grid_divisions: GRID_DIVISIONS,
            shape_count: SHAPE_COUNT,
            particle_count: PARTICLE_COUNT,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<()> {
        if self.grid_divisions == 0 {
            return Err(BackdropError::InvalidConfig(
                "grid_divisions must be at least 1".into(),
            ));
        }
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            return Err(BackdropError::InvalidConfig(format!(
                "grid_size must be positive, got {}",
                self.grid_size
            )));
        }
        Ok(())
    }
}

/// Clamp the device pixel ratio into `(0, MAX_PIXEL_RATIO]`.
#[inline]
pub fn clamp_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// CSS-pixel output size plus the pixel density applied on top of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio: clamp_pixel_ratio(device_pixel_ratio),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Backing-store size in physical pixels, never below 1x1.
    pub fn physical_size(&self) -> (u32, u32) {
        let w = (self.width as f64 * self.pixel_ratio).round() as u32;
        let h = (self.height as f64 * self.pixel_ratio).round() as u32;
        (w.max(1), h.max(1))
    }
}

/// Everything the per-frame updaters touch, created once at startup.
pub struct SceneState {
    pub grid: WaveGrid,
    pub shapes: Vec<FloatingShape>,
    pub particles: ParticleField,
    pub camera: Camera,
    viewport: Viewport,
}

impl SceneState {
    pub fn new(config: &SceneConfig, viewport: Viewport) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, viewport, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(
        config: &SceneConfig,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        if viewport.is_empty() {
            return Err(BackdropError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let grid = WaveGrid::new(config.grid_size, config.grid_divisions);
        let shapes = spawn_shapes(config.shape_count, rng);
        let particles = ParticleField::random(config.particle_count, rng);
        let camera = Camera::new(viewport.aspect());
        log::debug!(
            "[scene] grid_vertices={} shapes={} particles={} viewport={}x{}@{}",
            grid.vertex_count(),
            shapes.len(),
            particles.len(),
            viewport.width,
            viewport.height,
            viewport.pixel_ratio
        );
        Ok(Self {
            grid,
            shapes,
            particles,
            camera,
            viewport,
        })
    }

    /// Run every per-frame updater for elapsed time `t`. The updaters touch
    /// disjoint state, so their order does not matter.
    pub fn advance(&mut self, t: f32) {
        self.grid.update(t);
        advance_shapes(&mut self.shapes);
        self.particles.update(t);
        self.camera.follow_path(t);
    }

    /// Adopt a new viewport. Zero-sized viewports (minimized tabs) are
    /// ignored and `false` is returned.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport.is_empty() {
            return false;
        }
        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
        true
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
