//! Unbounded lines.

use crate::{
    Direction, EPSILON, Float, GeometryError, HasBasePoint, HasDirection, Length, LineLike, Point,
    Rotation, Transform, Vec3, intersect,
};

/// Infinite line through a point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    base_point: Point,
    direction: Direction,
}

impl HasBasePoint for Line {
    fn base_point(&self) -> Point {
        self.base_point
    }
}
impl HasDirection for Line {
    fn direction(&self) -> Direction {
        self.direction
    }
}

impl Line {
    /// X axis.
    pub const X_AXIS: Self = Line::new(Point::ORIGIN, Direction::X);
    /// Y axis.
    pub const Y_AXIS: Self = Line::new(Point::ORIGIN, Direction::Y);
    /// Z axis.
    pub const Z_AXIS: Self = Line::new(Point::ORIGIN, Direction::Z);

    /// Constructs a line through a point.
    pub const fn new(base_point: Point, direction: Direction) -> Self {
        Self {
            base_point,
            direction,
        }
    }
    /// Constructs the line through two points, directed from `a` toward `b`.
    pub fn from_points(a: Point, b: Point) -> Result<Self, GeometryError> {
        let direction = Direction::between(a, b).ok_or(GeometryError::CoincidentPoints)?;
        Ok(Self::new(a, direction))
    }

    /// Returns the point at a signed distance along the line from its base
    /// point.
    pub fn point_at(&self, distance: Length) -> Point {
        self.base_point + self.direction.unit_vec3() * distance.base()
    }
    /// Returns the signed distance along the line from its base point to the
    /// projection of `p`.
    pub fn parameter_of(&self, p: Point) -> Float {
        (p - self.base_point).dot(&self.direction.unit_vec3())
    }
    /// Returns the point on the line closest to `p`.
    pub fn closest_point_to(&self, p: Point) -> Point {
        self.base_point + self.direction.unit_vec3() * self.parameter_of(p)
    }
    /// Returns the distance from `p` to the line.
    pub fn distance_to_point(&self, p: Point) -> Length {
        self.closest_point_to(p).distance_to(p)
    }
    /// Returns whether `p` lies on the line.
    pub fn contains_point(&self, p: Point) -> bool {
        self.distance_to_point(p).base() < EPSILON
    }

    /// Returns the foot of the perpendicular dropped from the origin onto the
    /// line.
    pub fn foot_from_origin(&self) -> Point {
        self.closest_point_to(Point::ORIGIN)
    }
    /// Returns whether the line passes through the origin.
    pub fn passes_through_origin(&self) -> bool {
        self.contains_point(Point::ORIGIN)
    }

    /// Returns whether the line is parallel to another line-like object.
    pub fn is_parallel_to(&self, other: &impl LineLike) -> bool {
        intersect::are_parallel(self, other)
    }
    /// Returns whether the line lies in a common plane with another
    /// line-like object.
    pub fn is_coplanar_with(&self, other: &impl LineLike) -> bool {
        intersect::are_coplanar(self, other)
    }
    /// Returns the point where two lines cross, or `None` if they are
    /// parallel, skew, or identical.
    pub fn intersection(&self, other: &impl LineLike) -> Option<Point> {
        intersect::line_intersection(self, other)
    }
}

impl approx::AbsDiffEq for Line {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    /// Lines are equal if they contain the same points, regardless of base
    /// point or orientation.
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.direction.unit_vec3().cross(&other.direction.unit_vec3()).mag() <= epsilon
            && self.distance_to_point(other.base_point).base() <= epsilon
    }
}

impl Transform for Line {
    fn rotate(&self, rotation: &Rotation) -> Self {
        Self::new(
            self.base_point.rotate(rotation),
            self.direction.rotate(rotation),
        )
    }

    fn translate(&self, displacement: Vec3) -> Self {
        Self::new(self.base_point + displacement, self.direction)
    }
}
