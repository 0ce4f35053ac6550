//! Segment tests: a point moving along a vector, tested against a stationary shape.
//!
//! Both tests share the same contract: reject anything that is only hit before the start of the segment or at or
//! after its end, clamp `time` into `[0, 1]`, and let NaN fall through every comparison as a miss.
pub(crate) mod ray_aabb;
pub(crate) mod ray_circle;

pub(crate) use ray_aabb::*;
pub(crate) use ray_circle::*;
