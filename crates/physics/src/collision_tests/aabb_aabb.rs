//! The AABB-AABB collision tests.
use crate::v2::sign;
use crate::*;

pub(crate) fn aabb_aabb_test<A: AxisAligned, B: AxisAligned>(box1: &A, box2: &B) -> bool {
    // We use the minkowski sum formulation: grow box1 by box2's half extents, then it's just if box2's center is
    // inside.
    let reach = box1.half_extents() + box2.half_extents();
    let dist = (box2.position() - box1.position()).abs();
    dist.x < reach.x && dist.y < reach.y
}

/// Pick the axis of least penetration, returning the unit normal along it (signed like `offset`) and the depth.
///
/// Ties go to y.  Every box-like resolution in the crate goes through here so that the choice is the same
/// everywhere.
pub(crate) fn shallowest_axis(penetration: V2, offset: V2) -> (V2, f64) {
    if penetration.x < penetration.y {
        (V2::new(sign(offset.x), 0.0), penetration.x)
    } else {
        (V2::new(0.0, sign(offset.y)), penetration.y)
    }
}

/// Minimum translation of a box (or point, with zero half extents) out of another box.
///
/// The first box is the receiver; the returned delta moves the second.
pub(crate) fn aabb_aabb_hit(center: V2, half: V2, other_center: V2, other_half: V2) -> Option<Hit> {
    let offset = other_center - center;
    let penetration = half + other_half - offset.abs();
    // Written so that NaN is a miss.
    if !(penetration.x > 0.0 && penetration.y > 0.0) {
        return None;
    }

    let (normal, depth) = shallowest_axis(penetration, offset);
    let pos = if normal.x != 0.0 {
        V2::new(center.x + half.x * normal.x, other_center.y)
    } else {
        V2::new(other_center.x, center.y + half.y * normal.y)
    };

    Some(Hit::overlap(normal * depth, normal, pos))
}
