use crate::*;

/// A segment expressed as an origin, a unit direction, and a length.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Ray {
    pub(crate) origin: V2,
    pub(crate) direction: V2,
    pub(crate) length: f64,
}

impl Ray {
    pub fn from_angle(origin: V2, length: f64, theta: f64) -> Ray {
        Ray::new(origin, V2::from_angle(theta), length)
    }

    pub fn new(origin: V2, direction: V2, length: f64) -> Ray {
        Ray {
            origin,
            direction,
            length,
        }
    }

    /// Build a ray from a source point and a destination point.
    pub fn from_points(source: V2, target: V2) -> Ray {
        let length = source.distance(&target);
        let direction = (target - source).normalize();
        Ray::new(source, direction, length)
    }

    pub fn get_origin(&self) -> V2 {
        self.origin
    }

    pub fn get_direction(&self) -> V2 {
        self.direction
    }

    pub fn get_length(&self) -> f64 {
        self.length
    }

    /// The whole ray as a displacement from its origin.
    pub fn as_vector(&self) -> V2 {
        self.direction * self.length
    }

    pub fn get_bounding_box(&self) -> AabbCollider {
        let end = self.evaluate(self.length);
        let p1 = V2 {
            x: self.origin.x.min(end.x),
            y: self.origin.y.min(end.y),
        };
        let p2 = V2 {
            x: self.origin.x.max(end.x),
            y: self.origin.y.max(end.y),
        };
        AabbCollider::from_center_half((p1 + p2) / 2.0, (p2 - p1) / 2.0)
    }

    /// Evaluate the ray at a given `t`.
    pub fn evaluate(&self, t: f64) -> V2 {
        self.origin + self.direction * t
    }
}
