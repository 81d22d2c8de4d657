pub mod camera;
pub mod constants;
pub mod error;
pub mod frame;
pub mod grid;
pub mod mesh;
pub mod overlay;
pub mod particles;
pub mod scene;
pub mod shapes;
pub mod ui;

// Shaders bundled as string constants
pub static BACKDROP_WGSL: &str = include_str!("../shaders/backdrop.wgsl");

pub use camera::*;
pub use constants::*;
pub use error::BackdropError;
pub use frame::*;
pub use grid::*;
pub use mesh::*;
pub use overlay::*;
pub use particles::*;
pub use scene::*;
pub use shapes::*;
