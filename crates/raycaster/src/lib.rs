//! Grid raycasting, and a camera which uses it to see a tile map one column at a time.
mod camera;
mod config;
mod errors;
mod grid_ray;

pub use camera::*;
pub use config::*;
pub use errors::*;
pub use grid_ray::*;
