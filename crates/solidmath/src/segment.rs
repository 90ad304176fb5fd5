//! Bounded line segments.

use crate::{
    Direction, EPSILON, Float, GeometryError, HasBasePoint, HasDirection, Length, Line, LineLike,
    Point, Rotation, Transform, Vec3, intersect,
};

/// Line segment between two distinct points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    base_point: Point,
    end_point: Point,
    /// Direction from `base_point` toward `end_point`.
    direction: Direction,
}

impl HasBasePoint for Segment {
    fn base_point(&self) -> Point {
        self.base_point
    }
}
impl HasDirection for Segment {
    fn direction(&self) -> Direction {
        self.direction
    }
}

impl Segment {
    /// Constructs the segment from `base_point` to `end_point`.
    ///
    /// Returns [`GeometryError::CoincidentPoints`] if the endpoints are the
    /// same.
    pub fn new(base_point: Point, end_point: Point) -> Result<Self, GeometryError> {
        if approx::AbsDiffEq::abs_diff_eq(&base_point, &end_point, EPSILON) {
            return Err(GeometryError::CoincidentPoints);
        }
        let direction =
            Direction::between(base_point, end_point).ok_or(GeometryError::CoincidentPoints)?;
        Ok(Self {
            base_point,
            end_point,
            direction,
        })
    }

    /// Returns the endpoint the segment ends at.
    pub fn end_point(&self) -> Point {
        self.end_point
    }
    /// Returns both endpoints.
    pub fn endpoints(&self) -> [Point; 2] {
        [self.base_point, self.end_point]
    }
    /// Returns the length of the segment.
    pub fn length(&self) -> Length {
        self.base_point.distance_to(self.end_point)
    }
    /// Returns the point halfway along the segment.
    pub fn midpoint(&self) -> Point {
        self.base_point.midpoint(self.end_point)
    }
    /// Returns the infinite line containing the segment.
    pub fn line(&self) -> Line {
        self.to_line()
    }
    /// Returns the same segment, traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            base_point: self.end_point,
            end_point: self.base_point,
            direction: self.direction.reversed(),
        }
    }

    /// Returns whether `p` is on the segment, including its endpoints.
    pub fn contains_point(&self, p: Point) -> bool {
        let line = self.line();
        let t = line.parameter_of(p);
        line.contains_point(p) && (-EPSILON..=self.length().base() + EPSILON).contains(&t)
    }
    /// Returns whether `p` is approximately one of the endpoints.
    pub fn has_endpoint(&self, p: Point) -> bool {
        self.endpoints()
            .iter()
            .any(|q| approx::AbsDiffEq::abs_diff_eq(q, &p, EPSILON))
    }
    /// Returns an endpoint of this segment that is also an endpoint of
    /// `other`, if there is one.
    pub fn shared_endpoint(&self, other: &Segment) -> Option<Point> {
        self.endpoints().into_iter().find(|&p| other.has_endpoint(p))
    }
    /// Returns whether the segments share an endpoint.
    pub fn shares_endpoint_with(&self, other: &Segment) -> bool {
        self.shared_endpoint(other).is_some()
    }
    /// Given one endpoint, returns the other one. Returns `None` if `p` is
    /// not an endpoint.
    pub fn other_endpoint(&self, p: Point) -> Option<Point> {
        if approx::AbsDiffEq::abs_diff_eq(&self.base_point, &p, EPSILON) {
            Some(self.end_point)
        } else if approx::AbsDiffEq::abs_diff_eq(&self.end_point, &p, EPSILON) {
            Some(self.base_point)
        } else {
            None
        }
    }

    /// Returns the point where two segments cross, or `None` if they do not
    /// cross at a single point.
    pub fn intersection_with_segment(&self, other: &Segment) -> Option<Point> {
        let p = intersect::line_intersection(self, other)?;
        (self.contains_point(p) && other.contains_point(p)).then_some(p)
    }
    /// Returns the point where the segment crosses a line, or `None` if it
    /// does not cross at a single point.
    pub fn intersection_with_line(&self, line: &impl LineLike) -> Option<Point> {
        let p = intersect::line_intersection(self, line)?;
        self.contains_point(p).then_some(p)
    }
    /// Returns the endpoints of the overlap of two collinear segments. The
    /// two points are the same if the segments only touch.
    ///
    /// Returns `None` if the segments are not collinear or do not overlap.
    pub fn overlap_endpoints(&self, other: &Segment) -> Option<[Point; 2]> {
        let line = self.line();
        if !intersect::are_parallel(self, other) || !line.contains_point(other.base_point) {
            return None;
        }
        let t0 = line.parameter_of(other.base_point);
        let t1 = line.parameter_of(other.end_point);
        let lo = Float::max(t0.min(t1), 0.0);
        let hi = Float::min(t0.max(t1), self.length().base());
        if lo > hi + EPSILON {
            return None;
        }
        Some([
            line.point_at(Length::from_base(lo)),
            line.point_at(Length::from_base(hi.max(lo))),
        ])
    }

    /// Returns the projection of the segment onto a line, or `None` if the
    /// projection is a single point.
    pub fn projected_onto(&self, line: &Line) -> Option<Segment> {
        Segment::new(
            line.closest_point_to(self.base_point),
            line.closest_point_to(self.end_point),
        )
        .ok()
    }
}

impl approx::AbsDiffEq for Segment {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    /// Segments are equal if they have the same endpoints, in either order.
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let same = |a: &Point, b: &Point| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon);
        (same(&self.base_point, &other.base_point) && same(&self.end_point, &other.end_point))
            || (same(&self.base_point, &other.end_point)
                && same(&self.end_point, &other.base_point))
    }
}

impl Transform for Segment {
    fn rotate(&self, rotation: &Rotation) -> Self {
        Self {
            base_point: self.base_point.rotate(rotation),
            end_point: self.end_point.rotate(rotation),
            direction: self.direction.rotate(rotation),
        }
    }

    fn translate(&self, displacement: Vec3) -> Self {
        Self {
            base_point: self.base_point + displacement,
            end_point: self.end_point + displacement,
            direction: self.direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    fn seg(a: [Float; 3], b: [Float; 3]) -> Segment {
        Segment::new(Point::from_base(a[0], a[1], a[2]), Point::from_base(b[0], b[1], b[2])).unwrap()
    }

    #[test]
    fn test_segment_basics() {
        let s = seg([0.0, 0.0, 0.0], [3.0, 4.0, 0.0]);
        assert_approx_eq!(s.length(), Length::inches(5.0));
        assert_approx_eq!(s.midpoint(), Point::from_base(1.5, 2.0, 0.0));
        assert!(s.contains_point(Point::from_base(0.6, 0.8, 0.0)));
        assert!(!s.contains_point(Point::from_base(6.0, 8.0, 0.0)));
        assert_approx_eq!(s.reversed(), s);
        assert_eq!(
            Segment::new(Point::ORIGIN, Point::ORIGIN),
            Err(GeometryError::CoincidentPoints),
        );
    }

    #[test]
    fn test_segment_endpoints() {
        let a = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = seg([1.0, 0.0, 0.0], [1.0, 1.0, 0.0]);
        let c = seg([5.0, 0.0, 0.0], [6.0, 0.0, 0.0]);
        assert!(a.shares_endpoint_with(&b));
        assert!(!a.shares_endpoint_with(&c));
        assert_approx_eq!(a.other_endpoint(Point::from_base(1.0, 0.0, 0.0)).unwrap(), Point::ORIGIN);
        assert_eq!(a.other_endpoint(Point::from_base(0.5, 0.0, 0.0)), None);
    }

    #[test]
    fn test_segment_intersections() {
        let a = seg([0.0, 0.0, 0.0], [4.0, 0.0, 0.0]);
        let b = seg([2.0, -1.0, 0.0], [2.0, 1.0, 0.0]);
        let c = seg([6.0, -1.0, 0.0], [6.0, 1.0, 0.0]);
        assert_approx_eq!(a.intersection_with_segment(&b).unwrap(), Point::from_base(2.0, 0.0, 0.0));
        // lines cross, but beyond the end of `a`
        assert_eq!(a.intersection_with_segment(&c), None);
        assert_eq!(a.intersection_with_line(&c.line()), None);
        assert_approx_eq!(a.intersection_with_line(&b.line()).unwrap(), Point::from_base(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_segment_overlap() {
        let a = seg([0.0, 0.0, 0.0], [4.0, 0.0, 0.0]);
        let b = seg([6.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
        let [p, q] = a.overlap_endpoints(&b).unwrap();
        assert_approx_eq!(p, Point::from_base(2.0, 0.0, 0.0));
        assert_approx_eq!(q, Point::from_base(4.0, 0.0, 0.0));

        let far = seg([5.0, 0.0, 0.0], [7.0, 0.0, 0.0]);
        assert_eq!(a.overlap_endpoints(&far), None);
        let offset = seg([0.0, 1.0, 0.0], [4.0, 1.0, 0.0]);
        assert_eq!(a.overlap_endpoints(&offset), None);
    }

    #[test]
    fn test_segment_projection() {
        let s = seg([1.0, 5.0, 0.0], [3.0, 2.0, 7.0]);
        let projected = s.projected_onto(&Line::X_AXIS).unwrap();
        assert_approx_eq!(projected, seg([1.0, 0.0, 0.0], [3.0, 0.0, 0.0]));
        let vertical = seg([1.0, 5.0, 0.0], [1.0, 2.0, 0.0]);
        assert_eq!(vertical.projected_onto(&Line::X_AXIS), None);
    }
}
