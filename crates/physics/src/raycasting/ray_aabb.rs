use crate::v2::sign;
use crate::*;

/// A segment-aabb intersection test using the slab test, with a modification that allows it to also compute the
/// normal.
///
/// The segment runs from `origin` to `origin + vector`; `half` should already include any padding.
pub(crate) fn segment_aabb_test(origin: V2, vector: V2, center: V2, half: V2) -> Option<Hit> {
    // Reciprocals up front.  An axis-aligned segment gets an infinite
    // reciprocal on the other axis, whose sign still says which way it would
    // cross.
    let scale_x = 1.0 / vector.x;
    let scale_y = 1.0 / vector.y;
    let sign_x = sign(scale_x);
    let sign_y = sign(scale_y);

    // Each axis contributes a slab between two lines, and the segment is in
    // the box only while it is inside both slabs.  The signs pick which line
    // of each slab is met first, so near and far never need swapping.
    //
    // A segment lying exactly along an edge gives `inf * 0.0` here.  That NaN
    // is left alone and counts as a miss at the next check.
    let near_x = (center.x - sign_x * half.x - origin.x) * scale_x;
    let near_y = (center.y - sign_y * half.y - origin.y) * scale_y;
    let far_x = (center.x + sign_x * half.x - origin.x) * scale_x;
    let far_y = (center.y + sign_y * half.y - origin.y) * scale_y;

    // The slab intervals must overlap.  NaN stops here.
    if !(near_x <= far_y && near_y <= far_x) {
        return None;
    }

    // Latest entry, earliest exit.
    let near_time = if near_x > near_y { near_x } else { near_y };
    let far_time = if far_x < far_y { far_x } else { far_y };

    // Entirely after the end of the segment, or entirely behind the start.
    if near_time >= 1.0 || far_time <= 0.0 {
        return None;
    }

    // Starting inside the box clamps to 0.
    let time = near_time.clamp(0.0, 1.0);

    // The face hit is on the axis entered last.  Ties go to y, as in static
    // resolution.
    let normal = if near_x > near_y {
        V2::new(-sign_x, 0.0)
    } else {
        V2::new(0.0, -sign_y)
    };

    Some(Hit {
        delta: -vector * (1.0 - time),
        normal,
        pos: origin + vector * time,
        time: Some(time),
    })
}
