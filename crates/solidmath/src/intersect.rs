//! Intersection predicates over lines, segments, vectors, and planes.
//!
//! These return `None` when the relationship does not exist (parallel lines,
//! a line parallel to a plane, etc.). That is not an error.

use crate::{
    Direction, EPSILON, Float, HasBasePoint, HasDirection, Line, LineLike, MAX_LINE_PLANE_DISTANCE,
    Matrix, Plane, Point, Vec3, is_approx_zero, util,
};

/// Returns whether two objects have the same or opposite directions.
pub fn are_parallel(a: &impl HasDirection, b: &impl HasDirection) -> bool {
    a.direction().is_parallel_to(b.direction())
}

/// Returns whether two line-like objects lie in a common plane.
///
/// Parallel lines are always coplanar.
pub fn are_coplanar(a: &impl LineLike, b: &impl LineLike) -> bool {
    let normal = a.direction().unit_vec3().cross(&b.direction().unit_vec3());
    let between = b.base_point() - a.base_point();
    is_approx_zero(&between.dot(&normal))
}

/// Returns the point where the infinite lines through two line-like objects
/// cross.
///
/// Returns `None` if the lines are skew, parallel, or identical.
pub fn line_intersection(a: &impl LineLike, b: &impl LineLike) -> Option<Point> {
    if are_parallel(a, b) || !are_coplanar(a, b) {
        return None;
    }
    let dir_a = a.direction().unit_vec3();
    let dir_b = b.direction().unit_vec3();
    let between = b.base_point() - a.base_point();
    let a_cross_b = dir_a.cross(&dir_b);
    let s = between.cross(&dir_b).dot(&a_cross_b) / a_cross_b.mag2();
    Some(a.base_point() + dir_a * s)
}

/// Returns the signed distance along `line` from its base point to where it
/// crosses `plane`, or `None` if the line is parallel to the plane.
fn line_plane_parameter(plane: &Plane, line: &impl LineLike) -> Option<Float> {
    let base = line.base_point();
    if plane.contains_point(base) {
        return Some(0.0);
    }
    let normal = plane.normal().unit_vec3();
    let denominator = normal.dot(&line.direction().unit_vec3());
    if is_approx_zero(&denominator) {
        return None;
    }
    Some((plane.base_point() - base).dot(&normal) / denominator)
}

/// Returns the point where the infinite line through a line-like object
/// crosses a plane.
///
/// If the line's base point is on the plane, returns the base point. Returns
/// `None` if the line is parallel to the plane, or if the intersection is
/// more than [`MAX_LINE_PLANE_DISTANCE`] from the line's base point.
pub fn plane_line_intersection(plane: &Plane, line: &impl LineLike) -> Option<Point> {
    let t = line_plane_parameter(plane, line)?;
    if t.abs() > MAX_LINE_PLANE_DISTANCE {
        log::trace!("discarding line-plane intersection at distance {t}");
        return None;
    }
    Some(line.base_point() + line.direction().unit_vec3() * t)
}

/// Returns the point where a bounded line-like object crosses a plane, given
/// the object's extent along its direction.
///
/// The distance bound of [`plane_line_intersection()`] does not apply.
pub(crate) fn plane_bounded_intersection(
    plane: &Plane,
    line: &impl LineLike,
    length: Float,
) -> Option<Point> {
    let t = line_plane_parameter(plane, line)?;
    (-EPSILON..=length + EPSILON)
        .contains(&t)
        .then(|| line.base_point() + line.direction().unit_vec3() * t.clamp(0.0, length))
}

/// Returns the line where two planes meet.
///
/// If the planes are the same, returns some line in that plane through its
/// base point. Returns `None` if the planes are parallel and distinct.
pub fn plane_intersection(a: &Plane, b: &Plane) -> Option<Line> {
    if approx::AbsDiffEq::abs_diff_eq(a, b, EPSILON) {
        return Some(Line::new(a.base_point(), a.normal().any_perpendicular()));
    }
    let normal_a = a.normal().unit_vec3();
    let normal_b = b.normal().unit_vec3();
    let direction = Direction::from_vec3(normal_a.cross(&normal_b))?;

    // Pick a coordinate to set to zero. The 2x2 system for the other two is
    // solvable when the line's component along the dropped axis is nonzero.
    // Prefer Z, then Y, then X.
    let dir = direction.unit_vec3();
    let dropped = util::max_by_key([2_u8, 1, 0], |&axis| dir.get(axis).abs()).unwrap_or(2);
    let [i, j] = match dropped {
        0 => [1, 2],
        1 => [0, 2],
        _ => [0, 1],
    };
    let m = Matrix::from_fn(2, 2, |row, col| {
        let n = if row == 0 { normal_a } else { normal_b };
        n.get([i, j][col])
    });
    let rhs = [
        normal_a.dot(&a.base_point().to_vec3()),
        normal_b.dot(&b.base_point().to_vec3()),
    ];
    let solution = match m.system_solve(&rhs) {
        Ok(solution) => solution,
        Err(e) => {
            log::debug!("plane intersection system failed: {e}");
            return None;
        }
    };
    let mut coords = [0.0; 3];
    coords[i as usize] = solution[0];
    coords[j as usize] = solution[1];
    let [x, y, z] = coords;
    Some(Line::new(Point::from_vec3(Vec3::new(x, y, z)), direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    #[test]
    fn test_plane_line_intersection() {
        let plane = Plane::new(Point::from_base(0.0, 0.0, 2.0), Direction::Z);
        let line = Line::new(Point::from_base(1.0, 1.0, 10.0), Direction::NEG_Z);
        assert_approx_eq!(
            plane_line_intersection(&plane, &line).unwrap(),
            Point::from_base(1.0, 1.0, 2.0),
        );

        // base point already on the plane
        let on_plane = Line::new(Point::from_base(4.0, 4.0, 2.0), Direction::X);
        assert_eq!(
            plane_line_intersection(&plane, &on_plane),
            Some(Point::from_base(4.0, 4.0, 2.0)),
        );

        // parallel
        let parallel = Line::new(Point::ORIGIN, Direction::Y);
        assert_eq!(plane_line_intersection(&plane, &parallel), None);

        // implausibly far away
        let nearly_parallel = Line::new(
            Point::ORIGIN,
            Direction::new(Angle::ZERO, Angle::from_degrees(89.99)),
        );
        assert_eq!(plane_line_intersection(&plane, &nearly_parallel), None);
    }

    #[test]
    fn test_plane_intersection() {
        let xy = Plane::new(Point::from_base(0.0, 0.0, 3.0), Direction::Z);
        let xz = Plane::new(Point::from_base(0.0, 5.0, 0.0), Direction::Y);
        let line = plane_intersection(&xy, &xz).unwrap();
        assert!(line.direction().is_parallel_to(Direction::X));
        assert!(line.contains_point(Point::from_base(17.0, 5.0, 3.0)));

        // line lies in the XY plane, so Z cannot be dropped
        let tilted = Plane::from_points(
            Point::from_base(1.0, 0.0, 0.0),
            Point::from_base(0.0, 1.0, 0.0),
            Point::from_base(1.0, 0.0, 1.0),
        )
        .unwrap();
        let line = plane_intersection(&Plane::XY, &tilted).unwrap();
        assert!(line.contains_point(Point::from_base(0.5, 0.5, 0.0)));
        assert!(line.contains_point(Point::from_base(2.0, -1.0, 0.0)));

        // parallel and distinct
        assert_eq!(plane_intersection(&Plane::XY, &xy), None);

        // coincident
        let same = plane_intersection(&xy, &xy.flipped()).unwrap();
        assert!(xy.contains_line(&same));
    }
}
