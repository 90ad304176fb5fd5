//! Small capability traits shared by lines, segments, and vectors.
//!
//! Predicates in [`crate::intersect`] are written against these traits so
//! that the same code handles unbounded lines and bounded segments.

use crate::{Direction, Line, Point};

/// Something anchored at a point.
pub trait HasBasePoint {
    /// Returns the point the object is anchored at.
    fn base_point(&self) -> Point;
}

/// Something with an orientation in space.
pub trait HasDirection {
    /// Returns the direction of the object.
    fn direction(&self) -> Direction;
}

/// Something that lies along an infinite line.
pub trait LineLike: HasBasePoint + HasDirection {
    /// Returns the infinite line containing the object.
    fn to_line(&self) -> Line {
        Line::new(self.base_point(), self.direction())
    }
}
impl<T: HasBasePoint + HasDirection> LineLike for T {}
