//! Directions in 3D space, stored as spherical angles.

use crate::{Angle, EPSILON, Float, Matrix, Point, Rotation, Transform, Vec3, is_approx_zero};

/// Unit direction in 3D space.
///
/// `phi` is the azimuth from the X axis toward the Y axis, in `[0, 360)`
/// degrees. `theta` is the inclination from the Z axis, in `[0, 180]`
/// degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Direction {
    phi: Angle,
    theta: Angle,
}

impl Default for Direction {
    fn default() -> Self {
        Self::X
    }
}

impl Direction {
    /// Positive X direction.
    pub const X: Self = Direction {
        phi: Angle::ZERO,
        theta: Angle::QUARTER_TURN,
    };
    /// Positive Y direction.
    pub const Y: Self = Direction {
        phi: Angle::QUARTER_TURN,
        theta: Angle::QUARTER_TURN,
    };
    /// Positive Z direction.
    pub const Z: Self = Direction {
        phi: Angle::ZERO,
        theta: Angle::ZERO,
    };
    /// Negative X direction.
    pub const NEG_X: Self = Direction {
        phi: Angle::HALF_TURN,
        theta: Angle::QUARTER_TURN,
    };
    /// Negative Y direction.
    pub const NEG_Y: Self = Direction {
        phi: Angle::from_radians(3.0 * std::f64::consts::FRAC_PI_2),
        theta: Angle::QUARTER_TURN,
    };
    /// Negative Z direction.
    pub const NEG_Z: Self = Direction {
        phi: Angle::ZERO,
        theta: Angle::HALF_TURN,
    };

    /// Constructs a direction from an azimuth and an inclination.
    ///
    /// An inclination outside `[0, 180]` degrees is folded back into range by
    /// turning the azimuth halfway around, so the represented unit vector is
    /// unchanged.
    pub fn new(phi: Angle, theta: Angle) -> Self {
        let mut phi = phi;
        let mut theta = theta.normalized();
        if theta > Angle::HALF_TURN {
            theta = Angle::FULL_TURN - theta;
            phi += Angle::HALF_TURN;
        }
        Direction {
            phi: phi.normalized(),
            theta,
        }
    }
    /// Returns the direction of a vector, or `None` if it is zero.
    pub fn from_vec3(v: Vec3) -> Option<Self> {
        Some(Self::from_unit_vec3(v.normalize()?))
    }
    /// Returns the direction of a unit vector. The vector is not normalized
    /// first.
    fn from_unit_vec3(v: Vec3) -> Self {
        let theta = Angle::from_radians(v.z.clamp(-1.0, 1.0).acos());
        let phi = match is_approx_zero(&v.x) && is_approx_zero(&v.y) {
            true => Angle::ZERO,
            false => Angle::from_radians(v.y.atan2(v.x)),
        };
        Self::new(phi, theta)
    }
    /// Returns the direction from one point toward another, or `None` if the
    /// points are the same.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        Self::from_vec3(to - from)
    }

    /// Returns the azimuth, in `[0, 360)` degrees.
    pub fn phi(self) -> Angle {
        self.phi
    }
    /// Returns the inclination from the Z axis, in `[0, 180]` degrees.
    pub fn theta(self) -> Angle {
        self.theta
    }

    /// Returns the unit vector for the direction.
    pub fn unit_vec3(self) -> Vec3 {
        let (sin_theta, cos_theta) = (self.theta.sin(), self.theta.cos());
        Vec3::new(
            sin_theta * self.phi.cos(),
            sin_theta * self.phi.sin(),
            cos_theta,
        )
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self::new(self.phi + Angle::HALF_TURN, Angle::HALF_TURN - self.theta)
    }

    /// Returns the unsigned angle between two directions, in `[0, 180]`
    /// degrees.
    pub fn angle_to(self, other: Direction) -> Angle {
        let (a, b) = (self.unit_vec3(), other.unit_vec3());
        Angle::from_radians(a.cross(&b).mag().atan2(a.dot(&b)))
    }
    /// Returns the dot product of the two unit vectors.
    pub fn dot(self, other: Direction) -> Float {
        self.unit_vec3().dot(&other.unit_vec3())
    }
    /// Returns the direction of the cross product of the two unit vectors,
    /// or `None` if the directions are parallel.
    pub fn cross(self, other: Direction) -> Option<Direction> {
        Self::from_vec3(self.unit_vec3().cross(&other.unit_vec3()))
    }

    /// Returns whether the directions are the same or opposite.
    pub fn is_parallel_to(self, other: Direction) -> bool {
        self.unit_vec3().cross(&other.unit_vec3()).mag() < EPSILON
    }
    /// Returns whether the directions are perpendicular.
    pub fn is_perpendicular_to(self, other: Direction) -> bool {
        is_approx_zero(&self.dot(other))
    }
    /// Returns some direction perpendicular to this one.
    pub fn any_perpendicular(self) -> Direction {
        match self.unit_vec3().any_perpendicular() {
            Some(v) => Self::from_unit_vec3(v),
            None => {
                debug_panic!("unit vector of {self:?} has no perpendicular");
                Self::X
            }
        }
    }

    /// Applies a 3x3 linear transformation to the direction.
    #[must_use]
    pub fn transformed_by(self, matrix: &Matrix) -> Direction {
        let v = matrix.apply_to(self.unit_vec3());
        Self::from_vec3(v).unwrap_or_else(|| {
            debug_panic!("matrix {matrix:?} collapses direction {self:?}");
            self
        })
    }
}

impl approx::AbsDiffEq for Direction {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.unit_vec3(), &other.unit_vec3(), epsilon)
    }
}

impl Transform for Direction {
    fn rotate(&self, rotation: &Rotation) -> Self {
        self.transformed_by(&rotation.matrix())
    }

    fn translate(&self, _displacement: Vec3) -> Self {
        *self
    }
}
