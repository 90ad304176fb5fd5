//! Rotations about arbitrary axes.

use crate::{Angle, HasDirection, Line, Matrix, rotation_matrix};

/// Rotation by an angle about an axis line, which need not pass through the
/// origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    axis: Line,
    angle: Angle,
}

impl Rotation {
    /// Constructs a rotation about an axis.
    pub fn new(axis: Line, angle: Angle) -> Self {
        Self { axis, angle }
    }
    /// Constructs a rotation about the X axis.
    pub fn about_x(angle: Angle) -> Self {
        Self::new(Line::X_AXIS, angle)
    }
    /// Constructs a rotation about the Y axis.
    pub fn about_y(angle: Angle) -> Self {
        Self::new(Line::Y_AXIS, angle)
    }
    /// Constructs a rotation about the Z axis.
    pub fn about_z(angle: Angle) -> Self {
        Self::new(Line::Z_AXIS, angle)
    }

    /// Returns the axis of rotation.
    pub fn axis(&self) -> &Line {
        &self.axis
    }
    /// Returns the angle of rotation.
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// Returns the rotation that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(self.axis, -self.angle)
    }

    /// Returns the linear part of the rotation, ignoring where the axis is.
    pub fn matrix(&self) -> Matrix {
        rotation_matrix::rotation_about_unit_axis(self.axis.direction().unit_vec3(), self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    #[test]
    fn test_rotation_inverse() {
        let axis = Line::new(Point::from_base(3.0, 0.0, 0.0), Direction::Y);
        let r = Rotation::new(axis, Angle::from_degrees(40.0));
        let p = Point::from_base(1.0, 2.0, 3.0);
        assert_approx_eq!(p.rotate(&r).rotate(&r.inverse()), p);
        assert_approx_eq!(r.inverse().inverse().angle(), r.angle());
    }

    #[test]
    fn test_rotation_about_axes() {
        let p = Point::from_base(0.0, 0.0, 1.0);
        assert_approx_eq!(
            p.rotate(&Rotation::about_x(Angle::QUARTER_TURN)),
            Point::from_base(0.0, -1.0, 0.0),
        );
        assert_approx_eq!(
            p.rotate(&Rotation::about_y(Angle::QUARTER_TURN)),
            Point::from_base(1.0, 0.0, 0.0),
        );
        assert_approx_eq!(p.rotate(&Rotation::about_z(Angle::QUARTER_TURN)), p);
    }
}
