//! Test collision between two circles.
use crate::*;

pub(crate) fn circle_circle_test<A: Circular, B: Circular>(c1: &A, c2: &B) -> bool {
    let dist_squared = c1.position().distance_squared(&c2.position());
    // Avoid square root, which is generally very slow.
    let touching_dist_squared = (c1.radius() + c2.radius()).powi(2);
    dist_squared < touching_dist_squared
}

/// Push a circle (or point, with zero radius) out of another circle.
///
/// The first circle is the receiver; the returned delta moves the second.
pub(crate) fn circle_circle_hit(center: V2, radius: f64, other_center: V2, other_radius: f64) -> Option<Hit> {
    let offset = other_center - center;
    let dist_squared = offset.length_squared();
    let combined = radius + other_radius;
    if !(dist_squared < combined * combined) {
        return None;
    }

    // Only now is the square root needed.
    let dist = dist_squared.sqrt();
    // Concentric circles have no axis between them, so pick one.
    let normal = if dist > 0.0 {
        offset / dist
    } else {
        V2::new(1.0, 0.0)
    };
    let overlap = combined - dist;

    Some(Hit::overlap(normal * overlap, normal, center + normal * radius))
}
