use std::f32::consts::PI;

// Shared tuning constants for the backdrop scene and its web front-end.

// Wave grid
pub const GRID_SIZE: f32 = 200.0; // world units per side
pub const GRID_DIVISIONS: u32 = 200; // segments per side
pub const GRID_Y_OFFSET: f32 = -1.0; // grid sits slightly below the scene origin
pub const WAVE_DISTANCE_FREQ: f32 = 0.8; // radians per world unit from center
pub const WAVE_TIME_FREQ: f32 = 1.0; // radians per second
pub const WAVE_AMPLITUDE: f32 = 0.5;

// Floating shapes
pub const SHAPE_COUNT: usize = 50;
pub const SHAPE_RADIUS: f32 = 1.5;
pub const SHAPE_SPREAD_XZ: f32 = 150.0; // x,z in [-75, 75)
pub const SHAPE_MIN_Y: f32 = 10.0;
pub const SHAPE_SPAN_Y: f32 = 50.0; // y in [10, 60)
pub const SHAPE_MAX_INITIAL_ROTATION: f32 = PI;
pub const SHAPE_MAX_ROTATION_SPEED: f32 = 0.005; // radians per tick

// Particle field
pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_SPREAD_XZ: f32 = 200.0; // x,z in [-100, 100)
pub const PARTICLE_CEILING: f32 = 100.0; // y wraps to 0 above this
pub const PARTICLE_BOB_AMPLITUDE: f32 = 0.01;
pub const PARTICLE_SIZE: f32 = 2.0;

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_INITIAL_EYE: [f32; 3] = [0.0, 5.0, 10.0];
pub const CAMERA_ORBIT_RADIUS: f32 = 15.0;
pub const CAMERA_ORBIT_RATE: f32 = 0.2;
pub const CAMERA_BASE_HEIGHT: f32 = 5.0;
pub const CAMERA_BOB_AMPLITUDE: f32 = 2.0;
pub const CAMERA_BOB_RATE: f32 = 0.5;

// Common period of the wave (2π), particle bob (2π), camera orbit (10π) and
// camera bob (4π), in seconds.
pub const TIME_WRAP_SECS: f64 = 20.0 * std::f64::consts::PI;

// Look and feel
pub const CLEAR_COLOR: [f32; 3] = [0.039, 0.039, 0.039]; // #0a0a0a
pub const FOG_COLOR: [f32; 3] = CLEAR_COLOR;
pub const FOG_NEAR: f32 = 1.0;
pub const FOG_FAR: f32 = 200.0;
pub const WIRE_COLOR: [f32; 3] = [0.0, 1.0, 1.0]; // #00ffff
pub const GRID_OPACITY: f32 = 0.2;
pub const SHAPE_OPACITY: f32 = 0.3;
pub const PARTICLE_OPACITY: f32 = 0.6;

// Rendering
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Loading overlay (milliseconds)
pub const OVERLAY_FADE_DELAY_MS: u32 = 500;
pub const OVERLAY_REMOVE_DELAY_MS: u32 = 1000;
