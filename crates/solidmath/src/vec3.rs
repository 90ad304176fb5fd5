//! Raw 3D vector math in base units.

use std::fmt;
use std::ops::*;

use crate::{EPSILON, Float, util};

/// Constructs a [`Vec3`] from three numbers.
#[macro_export]
macro_rules! vec3 {
    ($x:expr, $y:expr, $z:expr $(,)?) => {
        $crate::Vec3::new($x as $crate::Float, $y as $crate::Float, $z as $crate::Float)
    };
}

/// Unitless 3D vector of floats. Geometry types convert to this for
/// arithmetic and back to unit-carrying types for their public API.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vec3 {
    /// X component.
    pub x: Float,
    /// Y component.
    pub y: Float,
    /// Z component.
    pub z: Float,
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Vec3 {
    /// Zero vector.
    pub const ZERO: Self = Vec3::new(0.0, 0.0, 0.0);
    /// Unit vector along the X axis.
    pub const X: Self = Vec3::new(1.0, 0.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Vec3::new(0.0, 1.0, 0.0);
    /// Unit vector along the Z axis.
    pub const Z: Self = Vec3::new(0.0, 0.0, 1.0);

    /// Constructs a vector from its components.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }
    /// Returns a unit vector along an axis.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= 3`.
    pub fn unit(axis: u8) -> Self {
        match axis {
            0 => Self::X,
            1 => Self::Y,
            2 => Self::Z,
            _ => panic!("axis {axis} out of range for 3D vector"),
        }
    }

    /// Returns a component of the vector by axis number.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= 3`.
    pub fn get(&self, axis: u8) -> Float {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("axis {axis} out of range for 3D vector"),
        }
    }
    /// Returns the components as an array.
    pub fn to_array(self) -> [Float; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the dot product of this vector with another.
    pub fn dot(&self, rhs: &Vec3) -> Float {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
    /// Returns the cross product of this vector with another.
    pub fn cross(&self, rhs: &Vec3) -> Vec3 {
        Vec3 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Returns the magnitude of the vector.
    pub fn mag(&self) -> Float {
        self.mag2().sqrt()
    }
    /// Returns the squared magnitude of the vector.
    pub fn mag2(&self) -> Float {
        self.dot(self)
    }

    /// Returns a normalized copy of the vector, or `None` if the vector is
    /// approximately zero.
    #[must_use]
    pub fn normalize(&self) -> Option<Vec3> {
        let mag = self.mag();
        if mag < EPSILON {
            return None;
        }
        Some(*self / mag)
    }
    /// Returns a scaled copy of the vector.
    #[must_use]
    pub fn scale(&self, scalar: Float) -> Vec3 {
        *self * scalar
    }

    /// Returns whether every component is within `EPSILON` of zero.
    pub fn is_approx_zero(&self) -> bool {
        self.to_array().iter().all(|x| x.abs() <= EPSILON)
    }

    /// Returns the component of the vector that is parallel to `other`.
    ///
    /// Returns `None` if `other` is zero.
    pub fn projected_to(&self, other: &Vec3) -> Option<Vec3> {
        let scale_factor = util::try_div(self.dot(other), other.mag2())?;
        Some(*other * scale_factor)
    }
    /// Returns the component of the vector that is perpendicular to `other`.
    ///
    /// Returns `None` if `other` is zero.
    pub fn rejected_from(&self, other: &Vec3) -> Option<Vec3> {
        Some(*self - self.projected_to(other)?)
    }

    /// Returns the unsigned angle between two vectors in radians, in the range
    /// `[0, π]`. Returns `None` if either vector is zero.
    pub fn angle_to(&self, other: &Vec3) -> Option<Float> {
        let a = self.normalize()?;
        let b = other.normalize()?;
        // `atan2` stays accurate near 0 and π, where `acos` does not
        Some(a.cross(&b).mag().atan2(a.dot(&b)))
    }

    /// Returns some unit vector perpendicular to this one, or `None` if this
    /// vector is zero.
    pub fn any_perpendicular(&self) -> Option<Vec3> {
        let n = self.normalize()?;
        // cross with whichever axis is least aligned with `n`
        let axis = if n.x.abs() <= n.y.abs() && n.x.abs() <= n.z.abs() {
            Vec3::X
        } else if n.y.abs() <= n.z.abs() {
            Vec3::Y
        } else {
            Vec3::Z
        };
        n.cross(&axis).normalize()
    }
}

macro_rules! impl_vec3_ops {
    (impl for $type_name:ty) => {
        impl Add<Vec3> for $type_name {
            type Output = Vec3;

            fn add(self, rhs: Vec3) -> Vec3 {
                Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
            }
        }
        impl Add<&Vec3> for $type_name {
            type Output = Vec3;

            fn add(self, rhs: &Vec3) -> Vec3 {
                Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
            }
        }
        impl Sub<Vec3> for $type_name {
            type Output = Vec3;

            fn sub(self, rhs: Vec3) -> Vec3 {
                Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
            }
        }
        impl Sub<&Vec3> for $type_name {
            type Output = Vec3;

            fn sub(self, rhs: &Vec3) -> Vec3 {
                Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
            }
        }

        impl Neg for $type_name {
            type Output = Vec3;

            fn neg(self) -> Vec3 {
                Vec3::new(-self.x, -self.y, -self.z)
            }
        }

        impl Mul<Float> for $type_name {
            type Output = Vec3;

            fn mul(self, rhs: Float) -> Vec3 {
                Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
            }
        }
        impl Div<Float> for $type_name {
            type Output = Vec3;

            #[allow(clippy::suspicious_arithmetic_impl)]
            fn div(self, rhs: Float) -> Vec3 {
                let mult = 1.0 / rhs;
                Vec3::new(self.x * mult, self.y * mult, self.z * mult)
            }
        }
    };
}
impl_vec3_ops!(impl for Vec3);
impl_vec3_ops!(impl for &'_ Vec3);

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}
impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

impl std::iter::Sum for Vec3 {
    fn sum<I: Iterator<Item = Vec3>>(iter: I) -> Self {
        iter.fold(Vec3::ZERO, |a, b| a + b)
    }
}

impl approx::AbsDiffEq for Vec3 {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        std::iter::zip(self.to_array(), other.to_array())
            .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(&a, &b, epsilon))
    }
}
