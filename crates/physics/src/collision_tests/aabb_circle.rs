//! Test an AABB against a circle.
use crate::collision_tests::*;
use crate::*;

/// The point of the box closest to `point`, by clamping.
///
/// A box whose half extents aren't both non-negative has no points.  NaN extents land here.
fn closest_point(box_center: V2, half: V2, point: V2) -> Option<V2> {
    if !(half.x >= 0.0 && half.y >= 0.0) {
        return None;
    }

    Some(box_center + (point - box_center).clamp(-half, half))
}

pub(crate) fn aabb_circle_test<B: AxisAligned, C: Circular>(aabb: &B, circle: &C) -> bool {
    let center = circle.position();
    let closest = match closest_point(aabb.position(), aabb.half_extents(), center) {
        Some(c) => c,
        None => return false,
    };
    // A center inside the box always collides, even for a zero radius.
    closest == center || closest.distance_squared(&center) < circle.radius().powi(2)
}

/// Push a box out of a circle, using the exact closest point of the box.
///
/// The circle is the receiver; the returned delta moves the box.
pub(crate) fn circle_aabb_hit(center: V2, radius: f64, box_center: V2, half: V2) -> Option<Hit> {
    let closest = closest_point(box_center, half, center)?;
    if closest != center {
        // The usual case: the box is pushed as if it were the closest point.
        return circle_circle_hit(center, radius, closest, 0.0);
    }

    // The circle's center is inside the box, so clamping found nothing to push.  Resolve as the box against the
    // center point to learn which face is nearest, then push the box the whole distance to that face plus the radius.
    // The normal is reversed because it is the box, not the point, which moves.
    let offset = center - box_center;
    let penetration = half - offset.abs();
    let (to_face, depth) = shallowest_axis(penetration, offset);
    let normal = -to_face;

    Some(Hit::overlap(normal * (depth + radius), normal, center + normal * radius))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;
    use proptest::prelude::*;

    #[test]
    fn test_center_coincident() {
        let circle = CircleCollider::new(V2::new(3.0, 4.0), 0.5).unwrap();
        let aabb = AabbCollider::new(V2::new(3.0, 4.0), 2.0, 1.0).unwrap();
        let hit = circle.box_intersection(&aabb).expect("Should hit");
        assert!(hit.delta.is_finite());
        assert!(hit.normal.is_finite());
        // Shallowest is y, with half height 1.
        assert_eq!(hit.normal, V2::new(0.0, -1.0));
        assert_relative_eq!(hit.delta.length(), 1.0 + 0.5);

        let moved = aabb.move_aabb(&(aabb.get_center() + hit.delta));
        assert!(!aabb_circle_test(&moved, &circle));
    }

    #[test]
    fn test_center_inside_picks_near_face() {
        let circle = CircleCollider::new(V2::new(1.75, 0.0), 0.5).unwrap();
        let aabb = AabbCollider::new(V2::new(0.0, 0.0), 2.0, 2.0).unwrap();
        let hit = circle.box_intersection(&aabb).expect("Should hit");
        // The circle leaves through the right face, so the box goes left.
        assert_eq!(hit.normal, V2::new(-1.0, 0.0));
        assert_relative_eq!(hit.delta.x, -0.75);
        assert_relative_eq!(hit.delta.y, 0.0);
    }

    #[test]
    fn test_corner() {
        let circle = CircleCollider::new(V2::new(0.0, 0.0), 1.0).unwrap();
        let aabb = AabbCollider::new(V2::new(1.5, 1.5), 1.0, 1.0).unwrap();
        let hit = circle.box_intersection(&aabb).expect("Should hit");
        let diag = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(hit.normal.x, diag, epsilon = 1e-12);
        assert_relative_eq!(hit.normal.y, diag, epsilon = 1e-12);
        assert_relative_eq!(hit.delta.length(), 1.0 - 0.5f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(hit.pos.x, diag, epsilon = 1e-12);
    }

    /// A game object whose box came out of some broken arithmetic.
    struct Crate {
        half: V2,
    }

    impl HasPosition for Crate {
        fn position(&self) -> V2 {
            V2::new(4.5, 0.0)
        }
    }

    impl AxisAligned for Crate {
        fn half_extents(&self) -> V2 {
            self.half
        }
    }

    #[test]
    fn test_nan_extents_miss() {
        let circle = CircleCollider::new(V2::new(5.0, 0.0), 1.0).unwrap();
        for half in [
            V2::new(f64::NAN, 1.0),
            V2::new(1.0, f64::NAN),
            V2::new(f64::NAN, f64::NAN),
            V2::new(-1.0, 1.0),
        ] {
            let crate_box = Crate { half };
            assert!(!aabb_circle_test(&crate_box, &circle), "{:?}", half);
            assert!(circle.box_intersection(&crate_box).is_none(), "{:?}", half);
        }

        // The same box with sane extents overlaps.
        let crate_box = Crate { half: V2::new(1.0, 1.0) };
        assert!(aabb_circle_test(&crate_box, &circle));
        assert!(circle.box_intersection(&crate_box).is_some());
    }

    #[test]
    fn test_box_treats_circle_as_square() {
        // Just off the corner: the circle misses, but its bounding square doesn't.
        let circle = CircleCollider::new(V2::new(1.9, 1.9), 1.0).unwrap();
        let aabb = AabbCollider::new(V2::new(0.0, 0.0), 1.0, 1.0).unwrap();
        assert!(!aabb_circle_test(&aabb, &circle));
        assert!(circle.box_intersection(&aabb).is_none());
        assert!(aabb.circle_intersection(&circle).is_some());
    }

    // Place circles beside each side of the box, close enough that they must
    // overlap it.  The next test moves them just far enough away that they
    // can't.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100000))]
        #[test]
        fn test_overlaps_edges(
            x in -1000.0..=1000.0f64,
            y in -1000.0..1000.0f64,
            width in 1.0..100.0f64,
            height in 1.0..100.0f64,
            // used to specify where on the edge of the box we're going to take
            // the circle's center.
            width_percent in 0.01..0.99f64,
            height_percent in 0.01..0.99f64,
            circle_radius in 1.0..100.0f64,
            circle_dist_percent in 0.1..=0.9f64,
        ) {
            let circle_width_dist = (width + circle_radius)*circle_dist_percent;
            let circle_height_dist = (height + circle_radius) * circle_dist_percent;
            let centers = [
                V2::new(x + circle_width_dist, y + height * height_percent),
                V2::new(x - circle_width_dist, y + height * height_percent),
                V2::new(x + width * width_percent, y + circle_height_dist),
                V2::new(x - width * width_percent, y - circle_height_dist),
            ];

            let aabb = AabbCollider::new(V2::new(x, y), width, height).expect("Should succeed");
            for center in centers.iter().cloned() {
                let circle = CircleCollider::new(center, circle_radius).expect("Should succeed");
                prop_assert!(aabb_circle_test(&aabb, &circle), "{:?} {:?}", aabb, circle);
                let hit = circle.box_intersection(&aabb);
                prop_assert!(hit.is_some(), "{:?} {:?}", aabb, circle);
                prop_assert!(hit.unwrap().delta.is_finite());
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100000))]
        #[test]
        fn test_not_overlapping(
            x in -1000.0..=1000.0f64,
            y in -1000.0..1000.0f64,
            width in 1.0..100.0f64,
            height in 1.0..100.0f64,
            width_percent in 0.01..0.99f64,
            height_percent in 0.01..0.99f64,
            circle_radius in 1.0..100.0f64,
            gap in 0.1..100.0f64,
        ) {
            let circle_width_dist = width + circle_radius + gap;
            let circle_height_dist = height + circle_radius + gap;
            let centers = [
                V2::new(x + circle_width_dist, y + height * height_percent),
                V2::new(x - circle_width_dist, y + height * height_percent),
                V2::new(x + width * width_percent, y + circle_height_dist),
                V2::new(x - width * width_percent, y - circle_height_dist),
            ];

            let aabb = AabbCollider::new(V2::new(x, y), width, height).expect("Should succeed");
            for center in centers.iter().cloned() {
                let circle = CircleCollider::new(center, circle_radius).expect("Should succeed");
                prop_assert!(!aabb_circle_test(&aabb, &circle), "{:?} {:?}", aabb, circle);
                prop_assert!(circle.box_intersection(&aabb).is_none());
            }
        }
    }

    // Wherever the circle is inside the box, the fix must put the box fully clear of it.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100000))]
        #[test]
        fn test_inside_resolves(
            x in -100.0..100.0f64,
            y in -100.0..100.0f64,
            half_width in 0.5..50.0f64,
            half_height in 0.5..50.0f64,
            x_percent in -0.99..0.99f64,
            y_percent in -0.99..0.99f64,
            circle_radius in 0.1..10.0f64,
        ) {
            let aabb = AabbCollider::new(V2::new(x, y), half_width, half_height).unwrap();
            let center = V2::new(x + half_width * x_percent, y + half_height * y_percent);
            let circle = CircleCollider::new(center, circle_radius).unwrap();
            let hit = circle.box_intersection(&aabb).expect("Center inside always hits");
            prop_assert!((hit.normal.length() - 1.0).abs() < 1e-12);
            // Nudge slightly further so that rounding can't leave them touching.
            let moved = aabb.move_aabb(&(aabb.get_center() + hit.delta + hit.normal * 1e-6));
            prop_assert!(!aabb_circle_test(&moved, &circle), "{:?} {:?} {:?}", aabb, circle, hit);
        }
    }
}
