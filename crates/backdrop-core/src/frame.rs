//! Frame driver: samples the clock, runs the updaters and hands the scene to
//! the render surface, once per display refresh.

use crate::constants::TIME_WRAP_SECS;
use crate::scene::{SceneState, Viewport};
use instant::Instant;
use std::fmt::Debug;

/// Monotonic elapsed-time source sampled once per frame.
pub trait FrameClock {
    /// (Re)start counting from zero.
    fn start(&mut self);
    /// Seconds since `start`; zero if never started.
    fn elapsed_secs(&self) -> f64;
}

/// Narrow an elapsed time to the `f32` the updaters consume.
///
/// Every periodic term in the updaters repeats after `TIME_WRAP_SECS`, so the
/// wrap happens in `f64` and the narrowed value keeps sub-millisecond
/// resolution however long the page stays open.
#[inline]
pub fn frame_time(elapsed_secs: f64) -> f32 {
    elapsed_secs.rem_euclid(TIME_WRAP_SECS) as f32
}

/// Wall-clock `FrameClock` backed by `instant::Instant` (works on wasm32).
#[derive(Debug, Default)]
pub struct InstantClock {
    started: Option<Instant>,
}

impl FrameClock for InstantClock {
    fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    fn elapsed_secs(&self) -> f64 {
        self.started
            .map(|s| s.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// The backend that turns scene state into pixels.
pub trait RenderSurface {
    type Error: Debug;

    /// Draw one frame. Implementations upload any buffer whose dirty flag is
    /// set and clear it afterwards.
    fn draw(&mut self, scene: &mut SceneState) -> Result<(), Self::Error>;
    /// Output size in CSS pixels.
    fn set_viewport_size(&mut self, width: u32, height: u32);
    fn set_pixel_density(&mut self, ratio: f64);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Running,
    Stopped,
}

pub struct FrameDriver<C: FrameClock, S: RenderSurface> {
    scene: SceneState,
    clock: C,
    surface: S,
    state: DriverState,
    frames: u64,
}

impl<C: FrameClock, S: RenderSurface> FrameDriver<C, S> {
    pub fn new(scene: SceneState, clock: C, surface: S) -> Self {
        Self {
            scene,
            clock,
            surface,
            state: DriverState::Uninitialized,
            frames: 0,
        }
    }

    /// Size the surface to the scene's viewport, start the clock and enter
    /// `Running`. Only an uninitialized driver starts; once running or
    /// stopped this is a no-op.
    pub fn start(&mut self) {
        if self.state != DriverState::Uninitialized {
            return;
        }
        self.apply_viewport(self.scene.viewport());
        self.clock.start();
        self.state = DriverState::Running;
        log::info!("[frame] driver running");
    }

    /// Stop for good: the page is being discarded. The scene is left as it was.
    pub fn stop(&mut self) {
        if self.state == DriverState::Running {
            log::info!("[frame] driver stopped after {} frames", self.frames);
        }
        self.state = DriverState::Stopped;
    }

    /// Advance and draw one frame. Returns the sampled elapsed time, or `None`
    /// when the driver is not running.
    pub fn tick(&mut self) -> Option<f32> {
        if self.state != DriverState::Running {
            return None;
        }
        let t = frame_time(self.clock.elapsed_secs());
        self.scene.advance(t);
        if let Err(e) = self.surface.draw(&mut self.scene) {
            log::error!("render error: {:?}", e);
        }
        self.frames += 1;
        Some(t)
    }

    /// Apply a viewport change. Valid in every state; animation state is untouched.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.scene.resize(viewport) {
            self.apply_viewport(viewport);
        } else {
            log::debug!(
                "[frame] ignoring empty viewport {}x{}",
                viewport.width,
                viewport.height
            );
        }
    }

    fn apply_viewport(&mut self, viewport: Viewport) {
        self.surface.set_pixel_density(viewport.pixel_ratio);
        self.surface
            .set_viewport_size(viewport.width, viewport.height);
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
