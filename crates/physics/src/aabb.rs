//! An axis-aligned bounding box.
use crate::collision_tests::*;
use crate::errors::*;
use crate::raycasting::*;
use crate::*;

/// An axis-aligned box, stored as a center and half extents.
///
/// Boxes may be degenerate (zero width or height), but never negative.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AabbCollider {
    center: V2,
    /// half width, half height
    half: V2,
}

impl AabbCollider {
    pub fn new(center: V2, half_width: f64, half_height: f64) -> Result<AabbCollider, ColliderError> {
        validate_half_extents(half_width, half_height)?;
        Ok(AabbCollider::from_center_half(
            center,
            V2::new(half_width, half_height),
        ))
    }

    /// Build a box from its lower left and upper right corners.
    pub fn from_points(p1: V2, p2: V2) -> Result<AabbCollider, ColliderError> {
        // Written so that NaN is rejected.
        if !(p1.x < p2.x && p1.y < p2.y) {
            return Err(ColliderError::InvalidDims);
        }

        Ok(AabbCollider::from_center_half((p1 + p2) / 2.0, (p2 - p1) / 2.0))
    }

    /// Unchecked: callers must already know that `half` is non-negative.
    pub(crate) fn from_center_half(center: V2, half: V2) -> AabbCollider {
        AabbCollider { center, half }
    }

    pub fn get_center(&self) -> V2 {
        self.center
    }

    pub fn get_half_extents(&self) -> V2 {
        self.half
    }

    pub fn get_half_width(&self) -> f64 {
        self.half.x
    }

    pub fn get_half_height(&self) -> f64 {
        self.half.y
    }

    pub fn get_width(&self) -> f64 {
        self.half.x * 2.0
    }

    pub fn get_height(&self) -> f64 {
        self.half.y * 2.0
    }

    /// The lower left corner.
    pub fn get_p1(&self) -> V2 {
        self.center - self.half
    }

    /// The upper right corner.
    pub fn get_p2(&self) -> V2 {
        self.center + self.half
    }

    pub fn set_center(&mut self, center: V2) {
        self.center = center;
    }

    pub fn translate(&mut self, by: V2) {
        self.center += by;
    }

    pub fn set_half_extents(&mut self, half_width: f64, half_height: f64) -> Result<(), ColliderError> {
        validate_half_extents(half_width, half_height)?;
        self.half = V2::new(half_width, half_height);
        Ok(())
    }

    /// Move the box to a new position.
    #[must_use = "This doesn't mutate the AabbCollider in-place"]
    pub fn move_aabb(&self, new_center: &V2) -> AabbCollider {
        AabbCollider {
            center: *new_center,
            half: self.half,
        }
    }

    pub fn get_bounding_box(&self) -> AabbCollider {
        *self
    }

    /// get the squared distance to a specific point.
    pub fn distance_to_point_squared(&self, point: &V2) -> f64 {
        // The closest point on a box to a point is the clamped value of the point itself.
        let closest = point.clamp(self.get_p1(), self.get_p2());
        closest.distance_squared(point)
    }

    pub fn distance_to_point(&self, point: &V2) -> f64 {
        self.distance_to_point_squared(point).sqrt()
    }

    /// Is the point inside the box or on its boundary?
    pub fn contains_point(&self, point: &V2) -> bool {
        let offset = (*point - self.center).abs();
        offset.x <= self.half.x && offset.y <= self.half.y
    }

    /// Do the boxes overlap?  Boxes which only touch do not.
    pub fn collision<B: AxisAligned>(&self, other: &B) -> bool {
        aabb_aabb_test(self, other)
    }

    /// Static test of a box given by its center and half extents against this one.
    ///
    /// On overlap, `delta` is the minimum translation which moves the other box out along the axis of least
    /// penetration.  If the penetration is the same on both axes, y wins.
    pub fn intersection(&self, center: V2, half_extents: V2) -> Option<Hit> {
        aabb_aabb_hit(self.center, self.half, center, half_extents)
    }

    pub fn point_intersection(&self, point: V2) -> Option<Hit> {
        self.intersection(point, V2::ZERO)
    }

    pub fn box_intersection<B: AxisAligned>(&self, other: &B) -> Option<Hit> {
        self.intersection(other.position(), other.half_extents())
    }

    /// Static test of a circle against this box.
    ///
    /// The circle is treated as the square which bounds it, so near the corners of the box this reports overlaps
    /// which the circle itself doesn't have.  For an exact answer ask the circle instead:
    /// [CircleCollider::box_intersection].
    pub fn circle_intersection<C: Circular>(&self, circle: &C) -> Option<Hit> {
        let r = circle.radius();
        self.intersection(circle.position(), V2::new(r, r))
    }

    /// Test the segment from `origin` to `origin + vector` against this box grown by `padding` on each side.
    pub fn vector_intersection(&self, origin: V2, vector: V2, padding: V2) -> Option<Hit> {
        segment_aabb_test(origin, vector, self.center, self.half + padding)
    }

    /// Sweep a box along `vector` against this one.
    ///
    /// `delta` is the distance the moving box can travel before touching, and `pos` is its center at that moment.
    /// A zero `vector` is the static test.
    pub fn swept_box_intersection<B: AxisAligned>(&self, moving: &B, vector: V2) -> Option<Hit> {
        if vector.is_zero() {
            return self.box_intersection(moving);
        }

        self.swept(moving.position(), moving.half_extents(), vector)
    }

    /// Sweep a circle along `vector` against this box, treating it as the square which bounds it.
    pub fn swept_circle_intersection<C: Circular>(&self, moving: &C, vector: V2) -> Option<Hit> {
        if vector.is_zero() {
            return self.circle_intersection(moving);
        }

        let r = moving.radius();
        self.swept(moving.position(), V2::new(r, r), vector)
    }

    fn swept(&self, origin: V2, half_extents: V2, vector: V2) -> Option<Hit> {
        // Grow this box by the moving one and the problem becomes a segment test of its center.
        let mut hit = self.vector_intersection(origin, vector, half_extents)?;
        hit.delta += vector;
        Some(hit)
    }
}

fn validate_half_extents(half_width: f64, half_height: f64) -> Result<(), ColliderError> {
    if !(half_width >= 0.0 && half_height >= 0.0) {
        return Err(ColliderError::NegativeHalfExtents(half_width, half_height));
    }

    Ok(())
}

impl HasPosition for AabbCollider {
    fn position(&self) -> V2 {
        self.center
    }
}

impl AxisAligned for AabbCollider {
    fn half_extents(&self) -> V2 {
        self.half
    }
}
