//! Infinite oriented planes.

use crate::{
    Direction, EPSILON, Float, GeometryError, HasBasePoint, HasDirection, Length, Line, LineLike,
    Point, PointWhichSide, Rotation, Segment, Transform, Vec3, WhichSide, intersect,
    is_approx_zero,
};

/// Infinite plane through a point, oriented by its normal.
///
/// Points on the side the normal points toward are
/// [`PointWhichSide::Outside`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    base_point: Point,
    normal: Direction,
}

impl Plane {
    /// Plane containing the X and Y axes, with normal +Z.
    pub const XY: Self = Plane::new(Point::ORIGIN, Direction::Z);
    /// Plane containing the X and Z axes, with normal +Y.
    pub const XZ: Self = Plane::new(Point::ORIGIN, Direction::Y);
    /// Plane containing the Y and Z axes, with normal +X.
    pub const YZ: Self = Plane::new(Point::ORIGIN, Direction::X);

    /// Constructs a plane through a point with the given normal.
    pub const fn new(base_point: Point, normal: Direction) -> Self {
        Self { base_point, normal }
    }
    /// Constructs the plane through three points. The normal follows the
    /// right-hand rule for `a`, `b`, `c`.
    ///
    /// Returns [`GeometryError::CollinearPoints`] if the points do not span a
    /// plane.
    pub fn from_points(a: Point, b: Point, c: Point) -> Result<Self, GeometryError> {
        let normal = Direction::from_vec3((b - a).cross(&(c - a)))
            .ok_or(GeometryError::CollinearPoints)?;
        Ok(Self::new(a, normal))
    }
    /// Constructs the plane containing two lines.
    ///
    /// Returns [`GeometryError::CoincidentLines`] if the lines are the same
    /// line and [`GeometryError::SkewLines`] if no plane contains both.
    pub fn from_lines(a: &impl LineLike, b: &impl LineLike) -> Result<Self, GeometryError> {
        let (line_a, line_b) = (a.to_line(), b.to_line());
        if approx::AbsDiffEq::abs_diff_eq(&line_a, &line_b, EPSILON) {
            return Err(GeometryError::CoincidentLines);
        }
        if line_a.is_parallel_to(&line_b) {
            return Self::from_line_and_point(&line_a, line_b.base_point());
        }
        if !line_a.is_coplanar_with(&line_b) {
            return Err(GeometryError::SkewLines);
        }
        let normal = line_a
            .direction()
            .cross(line_b.direction())
            .ok_or(GeometryError::CoincidentLines)?;
        Ok(Self::new(line_a.base_point(), normal))
    }
    /// Constructs the plane containing a line and a point.
    ///
    /// Returns [`GeometryError::CollinearPoints`] if the point is on the
    /// line.
    pub fn from_line_and_point(line: &impl LineLike, p: Point) -> Result<Self, GeometryError> {
        let base = line.base_point();
        Self::from_points(base, base + line.direction().unit_vec3(), p)
    }

    /// Returns the base point of the plane.
    pub fn base_point(&self) -> Point {
        self.base_point
    }
    /// Returns the unit normal of the plane.
    pub fn normal(&self) -> Direction {
        self.normal
    }
    /// Returns the same plane with the opposite orientation.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::new(self.base_point, self.normal.reversed())
    }

    /// Returns the signed distance from the plane to `p`, positive on the
    /// side the normal points toward.
    pub fn signed_distance_to_point(&self, p: Point) -> Length {
        Length::from_base((p - self.base_point).dot(&self.normal.unit_vec3()))
    }
    /// Returns which side of the plane `p` is on.
    pub fn location_of_point(&self, p: Point) -> PointWhichSide {
        let distance = self.signed_distance_to_point(p).base();
        if is_approx_zero(&distance) {
            PointWhichSide::On
        } else if distance > 0.0 {
            PointWhichSide::Outside
        } else {
            PointWhichSide::Inside
        }
    }
    /// Returns which side of the plane a set of points is on.
    pub fn which_side_of_points(&self, points: impl IntoIterator<Item = Point>) -> WhichSide {
        WhichSide::from_points(points.into_iter().map(|p| self.location_of_point(p)))
    }
    /// Returns whether `p` is on the plane.
    pub fn contains_point(&self, p: Point) -> bool {
        self.location_of_point(p) == PointWhichSide::On
    }
    /// Returns whether an entire line lies in the plane.
    pub fn contains_line(&self, line: &impl LineLike) -> bool {
        self.contains_point(line.base_point()) && line.direction().is_perpendicular_to(self.normal)
    }
    /// Returns whether `test` and `reference` are strictly on the same side of
    /// the plane. If either point is on the plane, returns `false`.
    pub fn point_is_on_same_side_as(&self, test: Point, reference: Point) -> bool {
        match (self.location_of_point(test), self.location_of_point(reference)) {
            (PointWhichSide::Inside, PointWhichSide::Inside) => true,
            (PointWhichSide::Outside, PointWhichSide::Outside) => true,
            _ => false,
        }
    }

    /// Returns the point where a line crosses the plane. See
    /// [`intersect::plane_line_intersection()`].
    pub fn intersection_with_line(&self, line: &impl LineLike) -> Option<Point> {
        intersect::plane_line_intersection(self, line)
    }
    /// Returns the point where a segment crosses the plane, or `None` if the
    /// segment does not reach it or lies in it.
    pub fn intersection_with_segment(&self, segment: &Segment) -> Option<Point> {
        if self.contains_line(segment) {
            return None;
        }
        intersect::plane_bounded_intersection(self, segment, segment.length().base())
    }
    /// Returns the line where two planes meet. See
    /// [`intersect::plane_intersection()`].
    pub fn intersection(&self, other: &Plane) -> Option<Line> {
        intersect::plane_intersection(self, other)
    }

    /// Returns the projection of `p` onto the plane.
    pub fn project_point(&self, p: Point) -> Point {
        let distance = self.signed_distance_to_point(p).base();
        p - self.normal.unit_vec3() * distance
    }
    /// Returns whether two planes have the same or opposite normals.
    pub fn is_parallel_to(&self, other: &Plane) -> bool {
        self.normal.is_parallel_to(other.normal)
    }
}

impl approx::AbsDiffEq for Plane {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    /// Planes are equal if they contain the same points, regardless of
    /// orientation.
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.normal.unit_vec3().cross(&other.normal.unit_vec3()).mag() <= epsilon
            && self.signed_distance_to_point(other.base_point).base().abs() <= epsilon
    }
}

impl Transform for Plane {
    fn rotate(&self, rotation: &Rotation) -> Self {
        Self::new(self.base_point.rotate(rotation), self.normal.rotate(rotation))
    }

    fn translate(&self, displacement: Vec3) -> Self {
        Self::new(self.base_point + displacement, self.normal)
    }
}
