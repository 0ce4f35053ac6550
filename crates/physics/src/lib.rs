//! Geometry and collision resolution for a tile-based world.
//!
//! Everything here is plain value math: colliders are small `Copy` types owned by whatever game object embeds them,
//! and every test returns either `None` or a [Hit] describing how to resolve the overlap.
mod aabb;
mod circle;
mod collision_tests;
mod errors;
mod hit;
mod ray;
mod raycasting;
mod shape;
mod v2;

pub use aabb::*;
pub use circle::*;
pub use errors::*;
pub use hit::*;
pub use ray::*;
pub use shape::*;
pub use v2::*;
