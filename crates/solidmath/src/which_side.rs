//! Enums for which side of a plane contains another thing.

use std::ops::Neg;

/// Position of a point relative to an oriented plane.
///
/// "Inside" is the side the plane's normal points away from; "outside" is the
/// side the normal points toward.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointWhichSide {
    /// The point is on the plane.
    On,
    /// The point is behind the plane.
    Inside,
    /// The point is in front of the plane.
    Outside,
}
impl Neg for PointWhichSide {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            PointWhichSide::Inside => PointWhichSide::Outside,
            PointWhichSide::Outside => PointWhichSide::Inside,
            other => other,
        }
    }
}

/// Location of an object (such as a polygon or polyhedron) relative to the
/// half-spaces on either side of a plane.
///
/// A point cannot be `Split`, so instead we use [`PointWhichSide`] for that.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WhichSide {
    /// The object is flush with the plane. *Every* point on the object is
    /// touching the plane.
    Flush,
    /// The object is entirely inside the plane, possibly touching it.
    Inside,
    /// The object is entirely outside the plane, possibly touching it.
    Outside,
    /// The object is split by the plane.
    Split,
}
impl Neg for WhichSide {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            WhichSide::Inside => WhichSide::Outside,
            WhichSide::Outside => WhichSide::Inside,
            other => other,
        }
    }
}
impl WhichSide {
    /// Constructs a [`WhichSide`] from several representative point locations.
    pub fn from_points(points: impl IntoIterator<Item = PointWhichSide>) -> Self {
        let mut is_any_inside = false;
        let mut is_any_outside = false;
        for which_side in points {
            match which_side {
                PointWhichSide::On => (),
                PointWhichSide::Inside => is_any_inside = true,
                PointWhichSide::Outside => is_any_outside = true,
            }
        }
        match (is_any_inside, is_any_outside) {
            (true, true) => WhichSide::Split,
            (true, false) => WhichSide::Inside,
            (false, true) => WhichSide::Outside,
            (false, false) => WhichSide::Flush,
        }
    }

    /// Returns whether the object touches both sides of the plane.
    pub fn is_split(self) -> bool {
        self == WhichSide::Split
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_which_side_from_points() {
        use PointWhichSide::*;

        assert_eq!(WhichSide::from_points([On, On]), WhichSide::Flush);
        assert_eq!(WhichSide::from_points([On, Inside]), WhichSide::Inside);
        assert_eq!(WhichSide::from_points([Outside, On]), WhichSide::Outside);
        assert_eq!(WhichSide::from_points([Outside, Inside, On]), WhichSide::Split);
        assert_eq!(-WhichSide::from_points([Inside]), WhichSide::Outside);
        assert_eq!(-On, On);
    }
}
