//! Reversible composition of rotations and a translation.

use crate::{Point, Rotation};

/// Ordered list of rotations followed by a displacement.
///
/// A negated shift is applied in the opposite order (displacement first),
/// which is what makes [`Shift::negate()`] an exact inverse. See
/// [`crate::Transform::shift()`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Shift {
    rotations: Vec<Rotation>,
    displacement: Point,
    is_negated: bool,
}

impl Shift {
    /// Constructs a forward shift that applies `rotations` in order and then
    /// translates by `displacement`.
    pub fn new(rotations: Vec<Rotation>, displacement: Point) -> Self {
        Self {
            rotations,
            displacement,
            is_negated: false,
        }
    }
    /// Returns the shift that does nothing.
    pub fn identity() -> Self {
        Self::default()
    }
    /// Constructs a pure translation.
    pub fn from_displacement(displacement: Point) -> Self {
        Self::new(vec![], displacement)
    }
    /// Constructs a pure rotation.
    pub fn from_rotation(rotation: Rotation) -> Self {
        Self::new(vec![rotation], Point::ORIGIN)
    }

    /// Returns the rotations, in the order they are applied.
    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }
    /// Returns the displacement.
    pub fn displacement(&self) -> Point {
        self.displacement
    }
    /// Returns whether the displacement is applied before the rotations.
    pub fn is_negated(&self) -> bool {
        self.is_negated
    }

    /// Returns the inverse shift: rotations in reverse order with negated
    /// angles, a negated displacement, and the opposite application order.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            rotations: self.rotations.iter().rev().map(Rotation::inverse).collect(),
            displacement: -self.displacement,
            is_negated: !self.is_negated,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::*;

    fn sample_shift() -> Shift {
        Shift::new(
            vec![
                Rotation::about_z(Angle::from_degrees(30.0)),
                Rotation::new(
                    Line::new(Point::from_base(1.0, 2.0, 0.0), Direction::X),
                    Angle::from_degrees(-75.0),
                ),
            ],
            Point::from_base(4.0, -2.0, 7.5),
        )
    }

    #[test]
    fn test_shift_order() {
        let shift = Shift::new(
            vec![Rotation::about_z(Angle::QUARTER_TURN)],
            Point::from_base(10.0, 0.0, 0.0),
        );
        // rotate first, then translate
        let p = Point::from_base(1.0, 0.0, 0.0).shift(&shift);
        assert_approx_eq!(p, Point::from_base(10.0, 1.0, 0.0));
        // translate back first, then rotate back
        assert_approx_eq!(p.shift(&shift.negate()), Point::from_base(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_negate_twice() {
        let shift = sample_shift();
        let twice = shift.negate().negate();
        assert!(!twice.is_negated());
        assert_approx_eq!(twice.displacement(), shift.displacement());
        let p = Point::from_base(-3.0, 8.0, 1.0);
        assert_approx_eq!(p.shift(&twice), p.shift(&shift));
    }

    #[test]
    fn test_identity() {
        let p = Point::from_base(1.0, 2.0, 3.0);
        assert_eq!(p.shift(&Shift::identity()), p);
    }

    proptest! {
        #[test]
        fn proptest_negate_round_trip(
            x in -100.0..100.0_f64,
            y in -100.0..100.0_f64,
            z in -100.0..100.0_f64,
        ) {
            let shift = sample_shift();
            let p = Point::from_base(x, y, z);
            let back = p.shift(&shift).shift(&shift.negate());
            prop_assert!(approx::abs_diff_eq!(back, p, epsilon = 1e-9));
        }
    }
}
