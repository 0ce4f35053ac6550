//! A shape is one of the concrete collider types behind an enum for collision
//! detection, plus the capability traits which let game objects take part in
//! tests without being colliders themselves.
use crate::*;

/// Anything with a position in the world.
pub trait HasPosition {
    fn position(&self) -> V2;
}

/// Anything which collides like a circle centered on its position.
pub trait Circular: HasPosition {
    fn radius(&self) -> f64;
}

/// Anything which collides like an axis-aligned box centered on its position.
pub trait AxisAligned: HasPosition {
    /// Half the width and half the height.
    fn half_extents(&self) -> V2;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Aabb(AabbCollider),
    Circle(CircleCollider),
}

impl Shape {
    pub fn get_bounding_box(&self) -> AabbCollider {
        match self {
            Shape::Aabb(ref a) => a.get_bounding_box(),
            Shape::Circle(ref c) => c.get_bounding_box(),
        }
    }

    pub fn get_center(&self) -> V2 {
        match self {
            Shape::Aabb(ref a) => a.get_center(),
            Shape::Circle(ref c) => c.get_center(),
        }
    }

    /// Test if this shape collides with another.
    pub fn collides_with(&self, other: &Shape) -> bool {
        use crate::collision_tests::*;
        use Shape::*;

        match (self, other) {
            (Aabb(ref a), Aabb(ref b)) => aabb_aabb_test(a, b),
            (Circle(ref a), Circle(ref b)) => circle_circle_test(a, b),
            (Aabb(ref a), Circle(ref b)) | (Circle(ref b), Aabb(ref a)) => aabb_circle_test(a, b),
        }
    }

    /// Static intersection of `other` against this shape.
    ///
    /// A box tested against a circle treats the circle as its bounding square, so near the box's corners this can
    /// report a hit where [Shape::collides_with] does not.  A circle tested against a box uses the exact closest
    /// point.
    pub fn intersect(&self, other: &Shape) -> Option<Hit> {
        use Shape::*;

        match (self, other) {
            (Aabb(ref a), Aabb(ref b)) => a.box_intersection(b),
            (Aabb(ref a), Circle(ref c)) => a.circle_intersection(c),
            (Circle(ref c), Aabb(ref b)) => c.box_intersection(b),
            (Circle(ref a), Circle(ref b)) => a.circle_intersection(b),
        }
    }

    /// Sweep `moving` along `vector` against this shape.
    pub fn sweep(&self, moving: &Shape, vector: V2) -> Option<Hit> {
        use Shape::*;

        match (self, moving) {
            (Aabb(ref a), Aabb(ref b)) => a.swept_box_intersection(b, vector),
            (Aabb(ref a), Circle(ref c)) => a.swept_circle_intersection(c, vector),
            (Circle(ref c), Aabb(ref b)) => c.swept_box_intersection(b, vector),
            (Circle(ref a), Circle(ref b)) => a.swept_circle_intersection(b, vector),
        }
    }

    /// Test the segment from `origin` to `origin + vector` against this shape.
    pub fn vector_intersection(&self, origin: V2, vector: V2) -> Option<Hit> {
        match self {
            Shape::Aabb(ref a) => a.vector_intersection(origin, vector, V2::ZERO),
            Shape::Circle(ref c) => c.vector_intersection(origin, vector, 0.0),
        }
    }

    pub fn raycast(&self, ray: &Ray) -> Option<Hit> {
        self.vector_intersection(ray.origin, ray.as_vector())
    }

    #[must_use = "This doesn't mutate the Shape in place"]
    pub fn move_shape(&self, new_center: &V2) -> Shape {
        match *self {
            Shape::Circle(ref c) => Shape::Circle(c.move_circle(new_center)),
            Shape::Aabb(ref a) => Shape::Aabb(a.move_aabb(new_center)),
        }
    }
}

impl HasPosition for Shape {
    fn position(&self) -> V2 {
        self.get_center()
    }
}

impl From<AabbCollider> for Shape {
    fn from(other: AabbCollider) -> Shape {
        Shape::Aabb(other)
    }
}

impl From<CircleCollider> for Shape {
    fn from(other: CircleCollider) -> Shape {
        Shape::Circle(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rand::prelude::*;
    use rand::rngs::SmallRng;

    /// A game object which isn't a collider but still takes part in tests.
    struct Player {
        x: f64,
        y: f64,
    }

    impl HasPosition for Player {
        fn position(&self) -> V2 {
            V2::new(self.x, self.y)
        }
    }

    impl Circular for Player {
        fn radius(&self) -> f64 {
            0.25
        }
    }

    #[test]
    fn test_capability_traits() {
        let wall = AabbCollider::new(V2::new(0.0, 0.0), 1.0, 1.0).unwrap();
        let player = Player { x: 1.0, y: 0.5 };
        let hit = wall.circle_intersection(&player).expect("Should hit");
        assert_eq!(hit.normal, V2::new(1.0, 0.0));
        assert!(wall.circle_intersection(&Player { x: 3.0, y: 0.0 }).is_none());
    }

    #[test]
    fn test_dispatch_matches_methods() {
        let b1: Shape = AabbCollider::new(V2::new(0.0, 0.0), 1.0, 1.0).unwrap().into();
        let b2: Shape = AabbCollider::new(V2::new(1.5, 0.5), 1.0, 1.0).unwrap().into();
        let c1: Shape = CircleCollider::new(V2::new(1.5, 0.0), 1.0).unwrap().into();
        let c2: Shape = CircleCollider::new(V2::new(0.0, 1.5), 1.0).unwrap().into();

        for a in [b1, b2, c1, c2].iter() {
            for b in [b1, b2, c1, c2].iter() {
                let expected = match (a, b) {
                    (Shape::Aabb(a), Shape::Aabb(b)) => a.box_intersection(b),
                    (Shape::Aabb(a), Shape::Circle(b)) => a.circle_intersection(b),
                    (Shape::Circle(a), Shape::Aabb(b)) => a.box_intersection(b),
                    (Shape::Circle(a), Shape::Circle(b)) => a.circle_intersection(b),
                };
                assert_eq!(a.intersect(b), expected);
                assert_eq!(a.collides_with(b), b.collides_with(a));
            }
        }
    }

    #[test]
    fn test_sweep_dispatch() {
        let wall: Shape = AabbCollider::new(V2::new(5.0, 0.0), 1.0, 1.0).unwrap().into();
        let ball: Shape = CircleCollider::new(V2::new(0.0, 0.0), 0.5).unwrap().into();
        let hit = wall.sweep(&ball, V2::new(10.0, 0.0)).expect("Should hit");
        approx::assert_relative_eq!(hit.time.unwrap(), 0.35);
        approx::assert_relative_eq!(hit.delta.x, 3.5);
        assert_eq!(hit.normal, V2::new(-1.0, 0.0));
    }

    #[test]
    fn test_move_shape() {
        let s: Shape = CircleCollider::new(V2::new(0.0, 0.0), 1.0).unwrap().into();
        let moved = s.move_shape(&V2::new(2.0, 3.0));
        assert_eq!(moved.position(), V2::new(2.0, 3.0));
        assert_eq!(s.position(), V2::new(0.0, 0.0));
    }

    #[test]
    fn test_raycast() {
        let s: Shape = CircleCollider::new(V2::new(5.0, 0.0), 1.0).unwrap().into();
        let hit = s
            .raycast(&Ray::new(V2::new(0.0, 0.0), V2::new(1.0, 0.0), 10.0))
            .expect("Should hit");
        approx::assert_relative_eq!(hit.pos.x, 4.0);
        approx::assert_relative_eq!(hit.time.unwrap(), 0.4);
    }

    fn random_shape(rng: &mut SmallRng) -> Shape {
        let center = V2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        if rng.gen_bool(0.5) {
            CircleCollider::new(center, rng.gen_range(0.1..3.0)).unwrap().into()
        } else {
            AabbCollider::new(center, rng.gen_range(0.1..3.0), rng.gen_range(0.1..3.0))
                .unwrap()
                .into()
        }
    }

    // The boolean test and the full test must agree, except where a box treats a circle as a square, which can only
    // add hits.
    #[test]
    fn test_random_pairs_agree() {
        let mut rng = SmallRng::seed_from_u64(7);
        let shapes = (0..200).map(|_| random_shape(&mut rng)).collect::<Vec<_>>();
        for a in shapes.iter() {
            for b in shapes.iter() {
                let hit = a.intersect(b);
                match (a, b) {
                    (Shape::Aabb(_), Shape::Circle(_)) => {
                        if a.collides_with(b) {
                            assert!(hit.is_some(), "{:?} {:?}", a, b);
                        }
                    }
                    _ => assert_eq!(hit.is_some(), a.collides_with(b), "{:?} {:?}", a, b),
                }
                if let Some(hit) = hit {
                    assert!(hit.delta.is_finite());
                    approx::assert_relative_eq!(hit.normal.length(), 1.0, epsilon = 1e-12);
                }
            }
        }
    }
}
