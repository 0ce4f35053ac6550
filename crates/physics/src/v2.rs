//! A 2-dimensional vector/point.
//!
//! Points and vectors share one type.  Everything that only makes sense for directions (angles, rotation, magnitude)
//! lives on `V2<f64>`; the integer forms are used for grid cells.
use num::Num;

#[derive(
    Debug, Default, Copy, Clone, Eq, Ord, PartialEq, PartialOrd, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct V2<T = f64> {
    pub x: T,
    pub y: T,
}

/// Which way [V2::rotate] turns, in a y-up coordinate system.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, proptest_derive::Arbitrary)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// `-1.0` for clockwise, `1.0` for counter-clockwise.
    pub fn sign(&self) -> f64 {
        match self {
            RotationDirection::Clockwise => -1.0,
            RotationDirection::CounterClockwise => 1.0,
        }
    }

    #[must_use]
    pub fn reverse(&self) -> RotationDirection {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// Sign of a value where zero counts as positive.
///
/// `f64::signum` distinguishes `-0.0`; collision code wants a single answer for "exactly aligned".
pub(crate) fn sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

impl<T: Num> V2<T> {
    pub const fn new(x: T, y: T) -> Self {
        V2 { x, y }
    }
}

impl<T> V2<T>
where
    T: Num + Copy,
    f64: From<T>,
{
    pub fn length_squared(&self) -> f64 {
        let x: f64 = self.x.into();
        let y: f64 = self.y.into();
        x * x + y * y
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Scale to unit length.  A zero vector has no direction and produces NaN components.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn normalize(self) -> V2<f64> {
        let l = self.length();
        V2 {
            x: f64::from(self.x) / l,
            y: f64::from(self.y) / l,
        }
    }

    pub fn dot(&self, other: &V2<T>) -> f64 {
        let sx: f64 = self.x.into();
        let sy: f64 = self.y.into();
        let ox: f64 = other.x.into();
        let oy: f64 = other.y.into();

        sx * ox + sy * oy
    }

    /// Squared distance, for comparisons which don't need the square root.
    pub fn distance_squared(&self, other: &V2<T>) -> f64 {
        let x1: f64 = self.x.into();
        let y1: f64 = self.y.into();
        let x2: f64 = other.x.into();
        let y2: f64 = other.y.into();
        (x2 - x1).powi(2) + (y2 - y1).powi(2)
    }

    pub fn distance(&self, other: &V2<T>) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

impl V2<f64> {
    pub const ZERO: V2 = V2 { x: 0.0, y: 0.0 };

    /// A unit vector pointing at `theta` radians from the positive x axis.
    pub fn from_angle(theta: f64) -> V2 {
        V2 {
            x: theta.cos(),
            y: theta.sin(),
        }
    }

    /// Overwrite this value with another in place.
    pub fn copy_from(&mut self, other: &V2) {
        self.x = other.x;
        self.y = other.y;
    }

    /// True only for an exact zero on both axes.
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Set the magnitude, keeping the direction.
    ///
    /// This is normalize-then-scale, so a zero vector yields NaN components regardless of `magnitude`.  Callers that
    /// may hold zero vectors must check [V2::is_zero] first.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn with_magnitude(self, magnitude: f64) -> V2 {
        self.normalize() * magnitude
    }

    /// Angle from the positive x axis, in `(-pi, pi]`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Point in direction `theta` while keeping the current magnitude.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn with_angle(self, theta: f64) -> V2 {
        V2::from_angle(theta) * self.length()
    }

    /// The vector turned a quarter turn counter-clockwise.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn perpendicular(self) -> V2 {
        V2 {
            x: -self.y,
            y: self.x,
        }
    }

    /// Rotate using `basis` as the rotation: `basis.x` is the cosine and `basis.y` the sine of the angle.
    ///
    /// A non-unit basis also scales the result by its length.  Rotating clockwise by a basis undoes rotating
    /// counter-clockwise by the same basis.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn rotate(self, basis: V2, direction: RotationDirection) -> V2 {
        let s = direction.sign();
        V2 {
            x: self.x * basis.x - s * self.y * basis.y,
            y: s * self.x * basis.y + self.y * basis.x,
        }
    }

    #[must_use = "This function doesn't modify the vector in place"]
    pub fn rotate_by_radians(self, theta: f64) -> V2 {
        self.rotate(V2::from_angle(theta), RotationDirection::CounterClockwise)
    }

    #[must_use = "This function doesn't modify the vector in place"]
    pub fn unrotate_by_radians(self, theta: f64) -> V2 {
        self.rotate(V2::from_angle(theta), RotationDirection::Clockwise)
    }

    /// Rotate by the angle of `other`.  Only its direction matters.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn rotate_by_vector(self, other: V2) -> V2 {
        self.rotate(other.normalize(), RotationDirection::CounterClockwise)
    }

    #[must_use = "This function doesn't modify the vector in place"]
    pub fn unrotate_by_vector(self, other: V2) -> V2 {
        self.rotate(other.normalize(), RotationDirection::Clockwise)
    }

    /// Per-axis absolute value.
    #[must_use]
    pub fn abs(self) -> V2 {
        V2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Clamp each axis into `[min, max]`.
    ///
    /// Unlike [f64::clamp] this never panics: a NaN bound is ignored, and a NaN component stays NaN.
    #[must_use]
    pub fn clamp(self, min: V2, max: V2) -> V2 {
        V2 {
            x: clamp_axis(self.x, min.x, max.x),
            y: clamp_axis(self.y, min.y, max.y),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// The grid cell containing this point.
    pub fn cell(&self) -> V2<i64> {
        V2 {
            x: self.x.floor() as i64,
            y: self.y.floor() as i64,
        }
    }
}

impl<T: Num> std::ops::Add for V2<T> {
    type Output = V2<T>;

    fn add(self, rhs: V2<T>) -> V2<T> {
        V2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Num + Copy> std::ops::AddAssign for V2<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
    }
}

impl<T: Copy> std::ops::Mul<f64> for V2<T>
where
    f64: From<T>,
{
    type Output = V2<f64>;

    fn mul(self, rhs: f64) -> Self::Output {
        V2 {
            x: f64::from(self.x) * rhs,
            y: f64::from(self.y) * rhs,
        }
    }
}

impl std::ops::MulAssign<f64> for V2<f64> {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl<T: Copy> std::ops::Div<f64> for V2<T>
where
    f64: From<T>,
{
    type Output = V2<f64>;

    fn div(self, rhs: f64) -> Self::Output {
        V2 {
            x: f64::from(self.x) / rhs,
            y: f64::from(self.y) / rhs,
        }
    }
}

impl std::ops::DivAssign<f64> for V2<f64> {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl<T: std::ops::Neg> std::ops::Neg for V2<T> {
    type Output = V2<<T as std::ops::Neg>::Output>;

    fn neg(self) -> Self::Output {
        V2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Num> std::ops::Sub for V2<T> {
    type Output = V2<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        V2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Num + Copy> std::ops::SubAssign for V2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;
    use proptest::prelude::*;

    #[test]
    fn test_distance() {
        let a = V2::new(1.0, 1.0);
        let b = V2::new(4.0, 5.0);
        assert_relative_eq!(a.distance(&b), 5.0);
        assert_relative_eq!(a.distance_squared(&b), 25.0);
    }

    #[test]
    fn test_integer_distance() {
        let a: V2<i32> = V2::new(0, 0);
        assert_relative_eq!(a.distance(&V2::new(3, 4)), 5.0);
    }

    #[test]
    fn test_copy_from() {
        let mut a = V2::new(1.0, 2.0);
        let b = a;
        a.copy_from(&V2::new(3.0, 4.0));
        assert_eq!(a, V2::new(3.0, 4.0));
        assert_eq!(b, V2::new(1.0, 2.0));
    }

    #[test]
    fn test_magnitude() {
        let v = V2::new(3.0, 4.0).with_magnitude(10.0);
        assert_relative_eq!(v.x, 6.0);
        assert_relative_eq!(v.y, 8.0);
        assert_relative_eq!(v.length(), 10.0);
    }

    #[test]
    fn test_zero_magnitude_is_nan() {
        let v = V2::ZERO.with_magnitude(5.0);
        assert!(v.x.is_nan());
        assert!(v.y.is_nan());
        assert!(!V2::ZERO.normalize().is_finite());
    }

    #[test]
    fn test_angle() {
        assert_relative_eq!(V2::new(0.0, 2.0).angle(), std::f64::consts::FRAC_PI_2);
        let v = V2::new(2.0, 0.0).with_angle(std::f64::consts::PI);
        assert_relative_eq!(v.x, -2.0);
        assert_abs_diff_eq!(v.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_quarter() {
        let v = V2::new(1.0, 0.0);
        let ccw = v.rotate_by_radians(std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(ccw.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(ccw.y, 1.0);
        let cw = v.unrotate_by_radians(std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(cw.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(cw.y, -1.0);
        assert_eq!(v.perpendicular(), V2::new(0.0, 1.0));
    }

    #[test]
    fn test_rotate_by_vector() {
        let v = V2::new(2.0, 0.0).rotate_by_vector(V2::new(0.0, 7.0));
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 2.0);
    }

    #[test]
    fn test_cell() {
        assert_eq!(V2::new(-0.5, 2.99).cell(), V2::new(-1, 2));
    }

    #[test]
    fn test_clamp() {
        let lo = V2::new(-1.0, -2.0);
        let hi = V2::new(1.0, 2.0);
        assert_eq!(V2::new(5.0, -5.0).clamp(lo, hi), V2::new(1.0, -2.0));
        assert_eq!(V2::new(0.5, 1.5).clamp(lo, hi), V2::new(0.5, 1.5));

        // NaN bounds don't panic.
        let nan = V2::new(f64::NAN, 2.0);
        assert_eq!(V2::new(5.0, 5.0).clamp(-nan, nan), V2::new(5.0, 2.0));
        assert!(V2::new(f64::NAN, 0.0).clamp(lo, hi).x.is_nan());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10000))]
        #[test]
        fn test_rotation_inverse(
            x in -1000.0..1000.0f64,
            y in -1000.0..1000.0f64,
            theta in -10.0..10.0f64,
            direction: RotationDirection,
        ) {
            let v = V2::new(x, y);
            let basis = V2::from_angle(theta);
            let back = v.rotate(basis, direction).rotate(basis, direction.reverse());
            prop_assert!((back.x - x).abs() < 1e-6, "{:?} {:?}", v, back);
            prop_assert!((back.y - y).abs() < 1e-6, "{:?} {:?}", v, back);
        }

        #[test]
        fn test_rotation_keeps_length(
            x in -1000.0..1000.0f64,
            y in -1000.0..1000.0f64,
            theta in -10.0..10.0f64,
        ) {
            let v = V2::new(x, y);
            prop_assert!((v.rotate_by_radians(theta).length() - v.length()).abs() < 1e-6);
        }

        #[test]
        fn test_rotation_adds_angles(
            theta in -3.0..3.0f64,
            by in -0.1..0.1f64,
        ) {
            let v = V2::from_angle(theta).rotate_by_radians(by);
            prop_assert!((v.angle() - (theta + by)).abs() < 1e-9);
        }
    }
}
