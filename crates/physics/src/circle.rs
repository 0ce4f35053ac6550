//! A simple circle.
use crate::collision_tests::*;
use crate::errors::*;
use crate::raycasting::*;
use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CircleCollider {
    center: V2,
    radius: f64,
}

impl CircleCollider {
    pub fn new(center: V2, radius: f64) -> Result<CircleCollider, ColliderError> {
        validate_radius(radius)?;
        Ok(CircleCollider { center, radius })
    }

    pub fn get_center(&self) -> V2 {
        self.center
    }

    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    pub fn set_center(&mut self, center: V2) {
        self.center = center;
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), ColliderError> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    pub fn translate(&mut self, by: V2) {
        self.center += by;
    }

    pub fn get_bounding_box(&self) -> AabbCollider {
        AabbCollider::from_center_half(self.center, V2::new(self.radius, self.radius))
    }

    /// Move the circle to a new position.
    #[must_use = "This doesn't mutate the CircleCollider in-place"]
    pub fn move_circle(&self, new_center: &V2) -> CircleCollider {
        CircleCollider {
            center: *new_center,
            radius: self.radius,
        }
    }

    /// Do the circles overlap?  Circles which only touch do not.
    pub fn collision<C: Circular>(&self, other: &C) -> bool {
        circle_circle_test(self, other)
    }

    /// Static test of a circle given by its center and radius against this one.
    ///
    /// On overlap the normal runs from this center toward the other, and `delta` moves the other circle until the
    /// two only touch.  Concentric circles are separated along the positive x axis.
    pub fn intersection(&self, center: V2, radius: f64) -> Option<Hit> {
        circle_circle_hit(self.center, self.radius, center, radius)
    }

    pub fn point_intersection(&self, point: V2) -> Option<Hit> {
        self.intersection(point, 0.0)
    }

    pub fn circle_intersection<C: Circular>(&self, other: &C) -> Option<Hit> {
        self.intersection(other.position(), other.radius())
    }

    /// Static test of a box against this circle, using the point of the box closest to the center.
    ///
    /// If the center is inside the box the box is pushed all the way past it, through whichever face is nearest.
    pub fn box_intersection<B: AxisAligned>(&self, other: &B) -> Option<Hit> {
        circle_aabb_hit(self.center, self.radius, other.position(), other.half_extents())
    }

    /// Test the segment from `origin` to `origin + vector` against this circle grown by `padding`.
    ///
    /// A zero `vector` never hits, even from inside.
    pub fn vector_intersection(&self, origin: V2, vector: V2, padding: f64) -> Option<Hit> {
        segment_circle_test(origin, vector, self.center, self.radius + padding)
    }

    /// Sweep a circle along `vector` against this one.
    ///
    /// `delta` is the distance the moving circle can travel before touching.  `pos` is the point where it touches
    /// this circle, on this circle's boundary, not the moving circle's center at contact; that center is
    /// `moving.position() + delta`.  This keeps `pos` meaning the same thing as in the static tests, so a zero
    /// `vector` returns exactly the static result.
    pub fn swept_circle_intersection<C: Circular>(&self, moving: &C, vector: V2) -> Option<Hit> {
        if vector.is_zero() {
            return self.circle_intersection(moving);
        }

        let radius = moving.radius();
        let mut hit = self.vector_intersection(moving.position(), vector, radius)?;
        hit.delta += vector;
        // The segment test found the moving center; step back to the surface.
        hit.pos -= hit.normal * radius;
        Some(hit)
    }

    /// Sweep a box along `vector` against the square bounding this circle.
    ///
    /// This is the box collider's simplification in reverse: near the diagonals it stops the box early.
    pub fn swept_box_intersection<B: AxisAligned>(&self, moving: &B, vector: V2) -> Option<Hit> {
        if vector.is_zero() {
            return self.box_intersection(moving);
        }

        self.get_bounding_box().swept_box_intersection(moving, vector)
    }
}

fn validate_radius(radius: f64) -> Result<(), ColliderError> {
    if !(radius >= 0.0) {
        return Err(ColliderError::NegativeRadius(radius));
    }

    Ok(())
}

impl HasPosition for CircleCollider {
    fn position(&self) -> V2 {
        self.center
    }
}

impl Circular for CircleCollider {
    fn radius(&self) -> f64 {
        self.radius
    }
}
