// Host-side tests for scene construction and the frame driver, using a manual
// clock and a render surface that records what it was asked to do.

use backdrop_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct ManualClock {
    now: Rc<Cell<f64>>,
    starts: Rc<Cell<u32>>,
}

impl FrameClock for ManualClock {
    fn start(&mut self) {
        self.now.set(0.0);
        self.starts.set(self.starts.get() + 1);
    }

    fn elapsed_secs(&self) -> f64 {
        self.now.get()
    }
}

#[derive(Default)]
struct RecordingSurface {
    draws: u32,
    size: Option<(u32, u32)>,
    density: Option<f64>,
    grid_uploads: u32,
    fail_draws: bool,
}

impl RenderSurface for RecordingSurface {
    type Error = &'static str;

    fn draw(&mut self, scene: &mut SceneState) -> Result<(), Self::Error> {
        if scene.grid.is_dirty() {
            self.grid_uploads += 1;
            scene.grid.clear_dirty();
        }
        scene.particles.clear_dirty();
        self.draws += 1;
        if self.fail_draws {
            return Err("surface lost");
        }
        Ok(())
    }

    fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }

    fn set_pixel_density(&mut self, ratio: f64) {
        self.density = Some(ratio);
    }
}

fn test_config() -> SceneConfig {
    SceneConfig {
        grid_size: 40.0,
        grid_divisions: 20,
        seed: Some(42),
        ..SceneConfig::default()
    }
}

fn driver() -> (FrameDriver<ManualClock, RecordingSurface>, ManualClock) {
    let scene = SceneState::new(&test_config(), Viewport::new(1280, 720, 1.0)).expect("scene");
    let clock = ManualClock::default();
    let d = FrameDriver::new(scene, clock.clone(), RecordingSurface::default());
    (d, clock)
}

#[test]
fn default_scene_populates_documented_counts_and_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    let scene = SceneState::with_rng(
        &SceneConfig::default(),
        Viewport::new(1920, 1080, 1.0),
        &mut rng,
    )
    .expect("scene");

    assert_eq!(scene.shapes.len(), 50);
    assert_eq!(scene.particles.len(), 100);
    assert_eq!(scene.grid.vertex_count(), 201 * 201);

    for s in &scene.shapes {
        assert!(s.position.x >= -75.0 && s.position.x <= 75.0);
        assert!(s.position.z >= -75.0 && s.position.z <= 75.0);
        assert!(s.position.y >= 10.0 && s.position.y <= 60.0);
        for r in s.rotation.to_array() {
            assert!((0.0..=std::f32::consts::PI).contains(&r));
        }
        for v in s.rotation_speed.to_array() {
            assert!((0.0..=0.005).contains(&v));
        }
    }
    for (p, c) in scene.particles.positions().iter().zip(scene.particles.colors()) {
        assert!(p[0] >= -100.0 && p[0] <= 100.0);
        assert!(p[1] >= 0.0 && p[1] <= 100.0);
        assert!(p[2] >= -100.0 && p[2] <= 100.0);
        assert!((0.0..=1.0).contains(&c[0]) && (0.0..=1.0).contains(&c[1]));
        assert_eq!(c[2], 1.0);
    }
}

#[test]
fn same_seed_gives_same_scene() {
    let v = Viewport::new(800, 600, 1.0);
    let a = SceneState::new(&test_config(), v).expect("scene");
    let b = SceneState::new(&test_config(), v).expect("scene");
    for (sa, sb) in a.shapes.iter().zip(&b.shapes) {
        assert_eq!(sa.position, sb.position);
        assert_eq!(sa.rotation_speed, sb.rotation_speed);
    }
    assert_eq!(a.particles.positions(), b.particles.positions());
}

#[test]
fn scene_rejects_bad_config_and_empty_viewport() {
    let bad = SceneConfig {
        grid_divisions: 0,
        ..SceneConfig::default()
    };
    assert!(matches!(
        SceneState::new(&bad, Viewport::new(10, 10, 1.0)),
        Err(BackdropError::InvalidConfig(_))
    ));
    assert!(matches!(
        SceneState::new(&test_config(), Viewport::new(640, 0, 1.0)),
        Err(BackdropError::InvalidViewport {
            width: 640,
            height: 0
        })
    ));
}

#[test]
fn initial_camera_uses_viewport_aspect() {
    let scene = SceneState::new(&test_config(), Viewport::new(1600, 800, 1.0)).expect("scene");
    assert_eq!(scene.camera.aspect, 2.0);
    assert_eq!(scene.camera.eye, glam::Vec3::new(0.0, 5.0, 10.0));
    assert!((scene.camera.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
}

#[test]
fn driver_does_nothing_until_started() {
    let (mut d, _clock) = driver();
    assert_eq!(d.state(), DriverState::Uninitialized);
    assert_eq!(d.tick(), None);
    assert_eq!(d.surface().draws, 0);
    assert_eq!(d.surface().size, None);
}

#[test]
fn start_sizes_surface_and_starts_clock() {
    let (mut d, clock) = driver();
    d.start();
    assert_eq!(d.state(), DriverState::Running);
    assert_eq!(d.surface().size, Some((1280, 720)));
    assert_eq!(d.surface().density, Some(1.0));
    assert_eq!(clock.starts.get(), 1);
    d.start();
    assert_eq!(clock.starts.get(), 1);
}

#[test]
fn tick_updates_scene_from_sampled_time_and_draws() {
    let (mut d, clock) = driver();
    d.start();
    clock.now.set(3.0);
    assert_eq!(d.tick(), Some(3.0));
    assert_eq!(d.scene().camera.eye, orbit_eye(3.0));
    assert_eq!(d.surface().draws, 1);
    assert_eq!(d.surface().grid_uploads, 1);
    assert!(!d.scene().grid.is_dirty());
    clock.now.set(3.5);
    d.tick();
    assert_eq!(d.surface().draws, 2);
    assert_eq!(d.surface().grid_uploads, 2);
    assert_eq!(d.frames(), 2);
}

#[test]
fn ticks_advance_rotation_once_each() {
    let (mut d, clock) = driver();
    let r0 = d.scene().shapes[0].rotation;
    let speed = d.scene().shapes[0].rotation_speed;
    d.start();
    for k in 0..10 {
        clock.now.set(k as f64 / 60.0);
        d.tick();
    }
    let delta = d.scene().shapes[0].rotation - r0;
    assert!((delta - speed * 10.0).abs().max_element() < 1e-5);
}

#[test]
fn draw_errors_do_not_stop_the_loop() {
    let scene = SceneState::new(&test_config(), Viewport::new(1280, 720, 1.0)).expect("scene");
    let clock = ManualClock::default();
    let mut d = FrameDriver::new(
        scene,
        clock.clone(),
        RecordingSurface {
            fail_draws: true,
            ..RecordingSurface::default()
        },
    );
    d.start();
    clock.now.set(1.0);
    assert!(d.tick().is_some());
    clock.now.set(2.0);
    assert!(d.tick().is_some());
    assert_eq!(d.surface().draws, 2);
    assert!(d.is_running());
}

#[test]
fn resize_sets_aspect_and_surface_size_between_ticks() {
    let (mut d, clock) = driver();
    d.start();
    for k in 0..5 {
        clock.now.set(k as f64 * 0.1);
        d.tick();
    }
    d.resize(Viewport::new(1000, 500, 3.0));
    assert_eq!(d.scene().camera.aspect, 2.0);
    assert_eq!(d.surface().size, Some((1000, 500)));
    assert_eq!(d.surface().density, Some(2.0));
    let rot_before = d.scene().shapes[3].rotation;
    for k in 5..8 {
        clock.now.set(k as f64 * 0.1);
        d.tick();
    }
    assert_eq!(d.scene().camera.aspect, 2.0);
    assert_eq!(d.surface().size, Some((1000, 500)));
    assert_ne!(d.scene().shapes[3].rotation, rot_before);
}

#[test]
fn resize_before_start_still_applies() {
    let (mut d, _clock) = driver();
    d.resize(Viewport::new(300, 600, 1.0));
    assert_eq!(d.scene().camera.aspect, 0.5);
    assert_eq!(d.surface().size, Some((300, 600)));
}

#[test]
fn empty_resize_is_ignored() {
    let (mut d, _clock) = driver();
    d.start();
    d.resize(Viewport::new(0, 0, 1.0));
    assert_eq!(d.surface().size, Some((1280, 720)));
    assert!((d.scene().camera.aspect - 1280.0 / 720.0).abs() < 1e-6);
}

#[test]
fn stopped_driver_ignores_ticks() {
    let (mut d, clock) = driver();
    d.start();
    clock.now.set(1.0);
    d.tick();
    d.stop();
    assert_eq!(d.state(), DriverState::Stopped);
    clock.now.set(2.0);
    assert_eq!(d.tick(), None);
    assert_eq!(d.surface().draws, 1);
}

#[test]
fn stop_is_terminal_and_start_does_not_rewind() {
    let (mut d, clock) = driver();
    d.start();
    clock.now.set(30.0);
    assert_eq!(d.tick(), Some(30.0));
    let eye = d.scene().camera.eye;
    d.stop();
    assert_eq!(d.tick(), None);
    d.start();
    assert_eq!(d.state(), DriverState::Stopped);
    assert_eq!(clock.starts.get(), 1);
    assert_eq!(d.tick(), None);
    assert_eq!(d.scene().camera.eye, eye);
}

#[test]
fn long_sessions_keep_frame_time_precise() {
    // Ten hours in, one frame apart.
    let base = 36_000.0_f64;
    let a = frame_time(base);
    let b = frame_time(base + 1.0 / 60.0);
    assert!(a >= 0.0 && (a as f64) < TIME_WRAP_SECS);
    assert!(((b - a) as f64 - 1.0 / 60.0).abs() < 1e-4);
}

#[test]
fn wrapped_time_preserves_every_periodic_term() {
    let elapsed = 36_000.25_f64;
    let t = frame_time(elapsed);
    let eye = orbit_eye(t);
    assert!((eye.x as f64 - (elapsed * 0.2).sin() * 15.0).abs() < 1e-3);
    assert!((eye.y as f64 - (5.0 + (elapsed * 0.5).sin() * 2.0)).abs() < 1e-3);
    assert!((eye.z as f64 - (elapsed * 0.2).cos() * 15.0).abs() < 1e-3);
    let d = 12.5_f64;
    let expected = (d * 0.8 - elapsed).sin() * 0.5;
    assert!((wave_height(d as f32, t) as f64 - expected).abs() < 1e-3);
    assert!(((t + 3.0).sin() as f64 - (elapsed + 3.0).sin()).abs() < 1e-3);
}

#[test]
fn driver_feeds_wrapped_time_to_the_scene() {
    let (mut d, clock) = driver();
    d.start();
    clock.now.set(TIME_WRAP_SECS + 2.0);
    let t = d.tick().expect("running");
    assert!((t - 2.0).abs() < 1e-4);
}

#[test]
fn instant_clock_reads_zero_before_start() {
    let mut c = InstantClock::default();
    assert_eq!(c.elapsed_secs(), 0.0);
    c.start();
    let a = c.elapsed_secs();
    let b = c.elapsed_secs();
    assert!(a >= 0.0 && b >= a);
}

#[test]
fn pixel_ratio_is_clamped() {
    assert_eq!(clamp_pixel_ratio(1.0), 1.0);
    assert_eq!(clamp_pixel_ratio(1.5), 1.5);
    assert_eq!(clamp_pixel_ratio(3.0), 2.0);
    assert_eq!(clamp_pixel_ratio(0.0), 1.0);
    assert_eq!(clamp_pixel_ratio(f64::NAN), 1.0);
    let v = Viewport::new(800, 600, 2.5);
    assert_eq!(v.physical_size(), (1600, 1200));
}
