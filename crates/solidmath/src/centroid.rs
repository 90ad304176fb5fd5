//! Area- or volume-weighted centroid accumulation.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::{Float, Point, Vec3, approx_eq, is_approx_positive};

/// Centroid and measure of a shape. In simpler terms: the "center of mass"
/// and "mass" of a triangle, polygon, tetrahedron, or solid.
///
/// The weight is an area or volume in base units. Summing centroids of
/// non-overlapping pieces gives the centroid of their union.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Centroid {
    /// Center of mass, scaled by `weight`.
    weighted_center: Vec3,
    /// Area or volume.
    weight: Float,
}

impl fmt::Display for Centroid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Add for Centroid {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<&Centroid> for Centroid {
    fn add_assign(&mut self, rhs: &Centroid) {
        self.weighted_center += rhs.weighted_center;
        self.weight += rhs.weight;
    }
}

impl AddAssign<Centroid> for Centroid {
    fn add_assign(&mut self, rhs: Centroid) {
        *self += &rhs;
    }
}

impl Sum<Centroid> for Centroid {
    fn sum<I: Iterator<Item = Centroid>>(iter: I) -> Self {
        iter.fold(Centroid::ZERO, |a, b| a + b)
    }
}

impl Centroid {
    /// Zero centroid.
    pub const ZERO: Self = Centroid {
        weighted_center: Vec3::ZERO,
        weight: 0.0,
    };

    /// Constructs a new weighted centroid. `weight` may be negative, which
    /// subtracts the shape when summed.
    pub fn new(center: Vec3, weight: Float) -> Self {
        Centroid {
            weighted_center: center * weight,
            weight,
        }
    }
    /// Returns the centroid of a tetrahedron, weighted by its signed volume.
    pub fn tetrahedron(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Self {
        let volume = (b - a).dot(&(c - a).cross(&(d - a))) / 6.0;
        Self::new((a + b + c + d) / 4.0, volume)
    }

    /// Returns the centroid point, or the origin if the weight is not
    /// positive.
    pub fn center(&self) -> Point {
        if is_approx_positive(&self.weight) {
            Point::from_vec3(self.weighted_center / self.weight)
        } else {
            Point::ORIGIN
        }
    }
    /// Returns the weight.
    pub fn weight(&self) -> Float {
        self.weight
    }
    /// Returns whether the weight is zero.
    pub fn is_zero(&self) -> bool {
        approx_eq(&self.weight, &0.0)
    }
    /// Returns the same centroid with a nonnegative weight.
    #[must_use]
    pub fn abs(self) -> Self {
        if self.weight < 0.0 {
            Centroid {
                weighted_center: -self.weighted_center,
                weight: -self.weight,
            }
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    #[test]
    fn test_centroid_sum() {
        // a 2x1 rectangle with a 1x1 square cut out of its right half
        let c: Centroid = [
            Centroid::new(vec3![1.0, 0.5, 0.0], 2.0),
            Centroid::new(vec3![1.5, 0.5, 0.0], -1.0),
        ]
        .into_iter()
        .sum();
        assert_approx_eq!(c.weight(), 1.0);
        assert_approx_eq!(c.center(), Point::from_base(0.5, 0.5, 0.0));
    }

    #[test]
    fn test_centroid_signed_tetrahedron() {
        let t = Centroid::tetrahedron(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z);
        assert_approx_eq!(t.weight(), 1.0 / 6.0);
        let flipped = Centroid::tetrahedron(Vec3::ZERO, Vec3::Y, Vec3::X, Vec3::Z);
        assert_approx_eq!(flipped.weight(), -1.0 / 6.0);
        assert_approx_eq!(flipped.abs().center(), t.center());
        assert!(Centroid::ZERO.is_zero());
    }
}
