//! Points in 3D space.

use std::ops::{Add, Neg, Sub};

use crate::{
    Angle, EPSILON, Float, HasDirection, Length, Line, Rotation, Transform, Vec3,
    rotation_matrix,
};

/// Point in 3D space, with each coordinate stored as a [`Length`].
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: Length,
    /// Y coordinate.
    pub y: Length,
    /// Z coordinate.
    pub z: Length,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Self = Point::from_base(0.0, 0.0, 0.0);

    /// Constructs a point from its coordinates.
    pub const fn new(x: Length, y: Length, z: Length) -> Self {
        Self { x, y, z }
    }
    /// Constructs a point from coordinates in base units.
    pub const fn from_base(x: Float, y: Float, z: Float) -> Self {
        Self::new(Length::from_base(x), Length::from_base(y), Length::from_base(z))
    }
    /// Constructs a point from a position vector in base units.
    pub fn from_vec3(v: Vec3) -> Self {
        Self::from_base(v.x, v.y, v.z)
    }
    /// Returns the position vector of the point in base units.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x.base(), self.y.base(), self.z.base())
    }

    /// Returns the distance between two points.
    pub fn distance_to(self, other: Point) -> Length {
        Length::from_base((other - self).mag())
    }
    /// Returns the point halfway between two points.
    pub fn midpoint(self, other: Point) -> Point {
        Point::from_vec3((self.to_vec3() + other.to_vec3()) / 2.0)
    }

    /// Rotates the point about an arbitrary axis.
    ///
    /// The rotation matrix is only valid for axes through the origin, so for
    /// any other axis the point is recentered on the axis's closest point to
    /// the origin, rotated, and then moved back.
    #[must_use]
    pub fn rotate_3d(self, axis: &Line, angle: Angle) -> Point {
        let matrix = rotation_matrix::rotation_about_unit_axis(axis.direction().unit_vec3(), angle);
        if axis.passes_through_origin() {
            return Point::from_vec3(matrix.apply_to(self.to_vec3()));
        }
        let offset = axis.foot_from_origin().to_vec3();
        let recentered = self.to_vec3() - offset;
        Point::from_vec3(matrix.apply_to(recentered) + offset)
    }
}

impl Sub for Point {
    type Output = Vec3;

    fn sub(self, rhs: Point) -> Vec3 {
        self.to_vec3() - rhs.to_vec3()
    }
}
impl Add<Vec3> for Point {
    type Output = Point;

    fn add(self, rhs: Vec3) -> Point {
        Point::from_vec3(self.to_vec3() + rhs)
    }
}
impl Sub<Vec3> for Point {
    type Output = Point;

    fn sub(self, rhs: Vec3) -> Point {
        Point::from_vec3(self.to_vec3() - rhs)
    }
}
impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y, -self.z)
    }
}

impl approx::AbsDiffEq for Point {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.to_vec3(), &other.to_vec3(), epsilon)
    }
}

impl Transform for Point {
    fn rotate(&self, rotation: &Rotation) -> Self {
        self.rotate_3d(rotation.axis(), rotation.angle())
    }

    fn translate(&self, displacement: Vec3) -> Self {
        *self + displacement
    }
}
