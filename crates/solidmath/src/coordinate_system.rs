//! Local coordinate frames.

use crate::{Angle, EPSILON, Float, Point, Rotation, Shift, Transform};

/// Local coordinate frame, described by its origin in world coordinates and
/// three rotation angles.
///
/// Moving geometry from the frame into world coordinates rotates it about the
/// world Z axis, then the world X axis, then the world Y axis, and then
/// translates it by the origin.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct CoordinateSystem {
    origin: Point,
    x_angle: Angle,
    y_angle: Angle,
    z_angle: Angle,
}

impl CoordinateSystem {
    /// World coordinate system.
    pub const WORLD: Self = CoordinateSystem {
        origin: Point::ORIGIN,
        x_angle: Angle::ZERO,
        y_angle: Angle::ZERO,
        z_angle: Angle::ZERO,
    };

    /// Constructs a coordinate system.
    pub fn new(origin: Point, x_angle: Angle, y_angle: Angle, z_angle: Angle) -> Self {
        Self {
            origin,
            x_angle,
            y_angle,
            z_angle,
        }
    }

    /// Returns the coordinate system that a shift moves the world frame to.
    ///
    /// The shift must be rigid. The rotation angles are recovered from the
    /// images of the unit axes; when the X rotation is a quarter turn the Z
    /// and Y rotations are not independent, so the Z angle is reported as
    /// zero.
    pub fn from_shift(shift: &Shift) -> Self {
        let origin = Point::ORIGIN.shift(shift);
        // columns of the rotation matrix
        let [ex, ey, ez] = [(1.0, 0.0, 0.0), (0.0, 1.0, 0.0), (0.0, 0.0, 1.0)]
            .map(|(x, y, z)| Point::from_base(x, y, z).shift(shift) - origin);
        let r = |row: usize, col: usize| -> Float { [ex, ey, ez][col].get(row as u8) };

        let x_angle = (-r(1, 2)).clamp(-1.0, 1.0).asin();
        let (y_angle, z_angle) = if x_angle.cos().abs() > EPSILON {
            (r(0, 2).atan2(r(2, 2)), r(1, 0).atan2(r(1, 1)))
        } else {
            ((-r(2, 0)).atan2(r(0, 0)), 0.0)
        };

        Self::new(
            origin,
            Angle::from_radians(x_angle),
            Angle::from_radians(y_angle),
            Angle::from_radians(z_angle),
        )
    }

    /// Returns the origin, in world coordinates.
    pub fn origin(&self) -> Point {
        self.origin
    }
    /// Returns the rotation about the world X axis.
    pub fn x_angle(&self) -> Angle {
        self.x_angle
    }
    /// Returns the rotation about the world Y axis.
    pub fn y_angle(&self) -> Angle {
        self.y_angle
    }
    /// Returns the rotation about the world Z axis.
    pub fn z_angle(&self) -> Angle {
        self.z_angle
    }

    /// Returns the shift that moves geometry from this frame into world
    /// coordinates.
    pub fn shift_to_world(&self) -> Shift {
        Shift::new(
            vec![
                Rotation::about_z(self.z_angle),
                Rotation::about_x(self.x_angle),
                Rotation::about_y(self.y_angle),
            ],
            self.origin,
        )
    }
    /// Returns the shift that moves geometry from world coordinates into this
    /// frame.
    pub fn shift_from_world(&self) -> Shift {
        self.shift_to_world().negate()
    }

    /// Converts a point from this frame to world coordinates.
    pub fn point_to_world(&self, p: Point) -> Point {
        p.shift(&self.shift_to_world())
    }
    /// Converts a point from world coordinates to this frame.
    pub fn point_from_world(&self, p: Point) -> Point {
        p.shift(&self.shift_from_world())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::*;

    #[test]
    fn test_coordinate_system_points() {
        let frame = CoordinateSystem::new(
            Point::from_base(10.0, 0.0, 0.0),
            Angle::ZERO,
            Angle::ZERO,
            Angle::QUARTER_TURN,
        );
        let local = Point::from_base(1.0, 0.0, 0.0);
        let world = frame.point_to_world(local);
        assert_approx_eq!(world, Point::from_base(10.0, 1.0, 0.0));
        assert_approx_eq!(frame.point_from_world(world), local);
        assert_approx_eq!(CoordinateSystem::WORLD.point_to_world(local), local);
    }

    #[test]
    fn test_from_shift_gimbal_lock() {
        let frame = CoordinateSystem::new(
            Point::from_base(1.0, 2.0, 3.0),
            Angle::QUARTER_TURN,
            Angle::from_degrees(20.0),
            Angle::ZERO,
        );
        let recovered = CoordinateSystem::from_shift(&frame.shift_to_world());
        assert_approx_eq!(recovered.origin(), frame.origin());
        assert_approx_eq!(recovered.x_angle(), frame.x_angle());
        assert_approx_eq!(recovered.y_angle(), frame.y_angle());
        assert_approx_eq!(recovered.z_angle(), Angle::ZERO);
    }

    proptest! {
        #[test]
        fn proptest_from_shift_round_trip(
            ox in -20.0..20.0_f64,
            oy in -20.0..20.0_f64,
            oz in -20.0..20.0_f64,
            x_deg in -80.0..80.0_f64,
            y_deg in -170.0..170.0_f64,
            z_deg in -170.0..170.0_f64,
        ) {
            let frame = CoordinateSystem::new(
                Point::from_base(ox, oy, oz),
                Angle::from_degrees(x_deg),
                Angle::from_degrees(y_deg),
                Angle::from_degrees(z_deg),
            );
            let recovered = CoordinateSystem::from_shift(&frame.shift_to_world());
            let p = Point::from_base(3.0, -1.0, 2.0);
            prop_assert!(approx::abs_diff_eq!(
                recovered.point_to_world(p),
                frame.point_to_world(p),
                epsilon = 1e-9,
            ));
            prop_assert!(approx::abs_diff_eq!(recovered.x_angle(), frame.x_angle(), epsilon = 1e-9));
        }
    }
}
