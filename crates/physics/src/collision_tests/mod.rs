pub(crate) mod aabb_aabb;
pub(crate) mod aabb_circle;
pub(crate) mod circle_circle;

pub(crate) use aabb_aabb::*;
pub(crate) use aabb_circle::*;
pub(crate) use circle_circle::*;
