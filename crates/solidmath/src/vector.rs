//! Directed magnitudes anchored at a point.

use crate::{
    Area, Direction, EPSILON, Float, GeometryError, HasBasePoint, HasDirection, Length, Point,
    Rotation, Segment, Transform, Vec3,
};

/// Vector with a base point, a direction, and a nonnegative magnitude.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector {
    base_point: Point,
    direction: Direction,
    magnitude: Length,
}

impl HasBasePoint for Vector {
    fn base_point(&self) -> Point {
        self.base_point
    }
}
impl HasDirection for Vector {
    fn direction(&self) -> Direction {
        self.direction
    }
}

impl Vector {
    /// Constructs a vector. A negative magnitude reverses the direction.
    pub fn new(base_point: Point, direction: Direction, magnitude: Length) -> Self {
        let (direction, magnitude) = match magnitude < Length::ZERO {
            true => (direction.reversed(), -magnitude),
            false => (direction, magnitude),
        };
        Self {
            base_point,
            direction,
            magnitude,
        }
    }
    /// Constructs the vector from `a` to `b`.
    ///
    /// Returns [`GeometryError::CoincidentPoints`] if the points are the same.
    pub fn from_points(a: Point, b: Point) -> Result<Self, GeometryError> {
        let direction = Direction::between(a, b).ok_or(GeometryError::CoincidentPoints)?;
        Ok(Self::new(a, direction, a.distance_to(b)))
    }
    /// Constructs a vector from its components in base units.
    ///
    /// Returns [`GeometryError::ZeroVector`] if `v` is zero.
    pub fn from_vec3(base_point: Point, v: Vec3) -> Result<Self, GeometryError> {
        let direction = Direction::from_vec3(v).ok_or(GeometryError::ZeroVector)?;
        Ok(Self::new(base_point, direction, Length::from_base(v.mag())))
    }

    /// Returns the magnitude.
    pub fn magnitude(&self) -> Length {
        self.magnitude
    }
    /// Returns the point at the tip of the vector.
    pub fn end_point(&self) -> Point {
        self.base_point + self.to_vec3()
    }
    /// Returns the components of the vector in base units.
    pub fn to_vec3(&self) -> Vec3 {
        self.direction.unit_vec3() * self.magnitude.base()
    }

    /// Returns a vector with the same base point and direction and a
    /// magnitude of one base unit.
    #[must_use]
    pub fn unit(&self) -> Self {
        Self::new(self.base_point, self.direction, Length::from_base(1.0))
    }
    /// Returns the vector pointing the opposite way from the same base point.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.base_point, self.direction.reversed(), self.magnitude)
    }
    /// Returns the vector with its magnitude multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: Float) -> Self {
        Self::new(self.base_point, self.direction, self.magnitude * factor)
    }

    /// Returns the dot product of two vectors.
    pub fn dot(&self, other: &Vector) -> Area {
        Area::from_base(self.to_vec3().dot(&other.to_vec3()))
    }
    /// Returns the direction of the cross product of two vectors, or `None`
    /// if they are parallel or either is zero.
    pub fn cross(&self, other: &Vector) -> Option<Direction> {
        Direction::from_vec3(self.to_vec3().cross(&other.to_vec3()))
    }

    /// Returns the segment from the base point to the tip.
    ///
    /// Returns [`GeometryError::CoincidentPoints`] if the vector is zero.
    pub fn to_segment(&self) -> Result<Segment, GeometryError> {
        Segment::new(self.base_point, self.end_point())
    }
}

impl approx::AbsDiffEq for Vector {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.base_point, &other.base_point, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.to_vec3(), &other.to_vec3(), epsilon)
    }
}

impl Transform for Vector {
    fn rotate(&self, rotation: &Rotation) -> Self {
        Self::new(
            self.base_point.rotate(rotation),
            self.direction.rotate(rotation),
            self.magnitude,
        )
    }

    fn translate(&self, displacement: Vec3) -> Self {
        Self::new(self.base_point + displacement, self.direction, self.magnitude)
    }
}
