//! Test a segment against a circle.
use crate::*;

/// The segment runs from `origin` to `origin + vector`; `radius` should already include any padding.
pub(crate) fn segment_circle_test(origin: V2, vector: V2, center: V2, radius: f64) -> Option<Hit> {
    // If we project the vector from the start of the segment to the center of
    // the circle onto the segment's direction, we get the distance along the
    // segment at which it is closest to the circle.  Projecting onto the
    // direction rotated 90 degrees gives the distance from the center to the
    // line instead.
    //
    // That distance tells us if we hit.  Circles are symmetrical, so
    // `sqrt(r^2-d^2)` is half of the chord the line cuts through the circle,
    // and `t_closest+-half_chord` are the two points at which it passes through
    // the boundary.
    let length = vector.length();
    // A zero vector makes this NaN, which the check below turns into a miss.
    let direction = vector / length;
    let translated_center = center - origin;

    let dist_proj = direction.perpendicular().dot(&translated_center).abs();
    if !(dist_proj < radius) {
        return None;
    }

    let t_closest = direction.dot(&translated_center);
    let half_chord = (radius.powi(2) - dist_proj.powi(2)).sqrt();
    let t_near = t_closest - half_chord;
    let t_far = t_closest + half_chord;

    // Entirely behind the start, or beyond the end.
    if t_far <= 0.0 || t_near >= length {
        return None;
    }

    // Starting inside clamps to the start of the segment.
    let time = (t_near / length).clamp(0.0, 1.0);
    let pos = origin + vector * time;
    let outward = pos - center;
    let normal = if outward.is_zero() {
        -direction
    } else {
        outward.normalize()
    };

    Some(Hit {
        delta: -vector * (1.0 - time),
        normal,
        pos,
        time: Some(time),
    })
}
