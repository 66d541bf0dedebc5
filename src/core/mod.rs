pub mod camera;
pub mod constants;
pub mod easing;
pub mod hero;
pub mod menu;
pub mod model;
pub mod progress;
pub mod scrolly;

pub use camera::*;
pub use constants::*;
pub use easing::*;
pub use hero::*;
pub use menu::*;
pub use model::*;
pub use progress::*;
pub use scrolly::*;

// Shaders bundled as string constants
pub static HERO_WGSL: &str = include_str!("../../shaders/hero.wgsl");
