//! The description of a collision.
use crate::*;

/// What an intersection test found.
///
/// Tests are always asked of a stationary shape (the receiver) about another shape, point, or segment.  The
/// `normal` points out of the receiver's surface toward the other party.
///
/// The meaning of `delta` depends on the kind of test:
///
/// - Static tests: adding `delta` to the other shape's position separates the two shapes along the axis of least
///   penetration.
/// - Segment tests: adding `delta` to the end of the segment pulls it back to the point of contact, i.e. it is the
///   unconsumed part of the segment, negated.
/// - Swept tests: `delta` is how far the moving shape may travel before touching.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    pub delta: V2,
    pub normal: V2,
    /// Point of contact.
    pub pos: V2,
    /// Fraction of the segment or sweep completed before contact, in `[0, 1]`.  `None` for static tests.
    pub time: Option<f64>,
}

impl Hit {
    pub(crate) fn overlap(delta: V2, normal: V2, pos: V2) -> Hit {
        Hit {
            delta,
            normal,
            pos,
            time: None,
        }
    }
}
