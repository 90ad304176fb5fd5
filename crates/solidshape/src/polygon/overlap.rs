//! Overlap of coplanar polygons.

use float_ord::FloatOrd;
use itertools::Itertools;
use solidmath::prelude::*;

use super::Polygon;

impl Polygon {
    /// Returns the region shared by two coplanar polygons, or `None` if they
    /// are not coplanar or do not overlap in a region with positive area.
    ///
    /// The result is the convex hull of every edge crossing, every endpoint
    /// of collinear edge overlaps, and every vertex of one polygon contained
    /// in the other. This is exact for convex polygons.
    pub fn overlapping_polygon(&self, other: &Polygon) -> Option<Polygon> {
        if !approx_eq(&self.plane, &other.plane) {
            return None;
        }

        let mut points = vec![];
        for (a, b) in self.edges.iter().cartesian_product(&other.edges) {
            match a.overlap_endpoints(b) {
                Some(endpoints) => points.extend(endpoints),
                None => points.extend(a.intersection_with_segment(b)),
            }
        }
        points.extend(self.vertices.iter().filter(|&&v| other.contains_point(v)));
        points.extend(other.vertices.iter().filter(|&&v| self.contains_point(v)));

        let mut unique: Vec<Point> = vec![];
        for p in points {
            if !unique.iter().any(|q| approx_eq(q, &p)) {
                unique.push(p);
            }
        }

        let hull = convex_hull_in_plane(&self.plane, unique);
        if hull.len() < 3 {
            return None;
        }
        Polygon::from_vertices(hull).ok()
    }
}

/// Returns the convex hull of coplanar points, counterclockwise around the
/// plane's normal. Collinear points along the hull are omitted.
fn convex_hull_in_plane(plane: &Plane, points: Vec<Point>) -> Vec<Point> {
    let u = plane.normal().any_perpendicular().unit_vec3();
    let w = plane.normal().unit_vec3().cross(&u);
    let origin = plane.base_point();
    let coords = |p: &Point| {
        let offset = *p - origin;
        (offset.dot(&u), offset.dot(&w))
    };
    let turn = |o: &Point, a: &Point, b: &Point| {
        let (ox, oy) = coords(o);
        let (ax, ay) = coords(a);
        let (bx, by) = coords(b);
        (ax - ox) * (by - oy) - (ay - oy) * (bx - ox)
    };

    // Andrew's monotone chain
    let sorted = points
        .into_iter()
        .sorted_by_key(|p| {
            let (x, y) = coords(p);
            (FloatOrd(x), FloatOrd(y))
        })
        .collect_vec();
    let mut lower: Vec<Point> = vec![];
    for &p in &sorted {
        while let [.., o, a] = lower.as_slice()
            && !is_approx_positive(&turn(o, a, &p))
        {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Point> = vec![];
    for &p in sorted.iter().rev() {
        while let [.., o, a] = upper.as_slice()
            && !is_approx_positive(&turn(o, a, &p))
        {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
