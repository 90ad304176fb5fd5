//! Cutting and slicing polygons by planes.

use std::cmp::Reverse;

use float_ord::FloatOrd;
use itertools::Itertools;
use solidmath::prelude::*;

use super::{Polygon, PolygonCutOutput};

impl Polygon {
    /// Cuts the polygon by a plane.
    ///
    /// If the plane crosses the polygon but the pieces do not form valid
    /// polygons, the whole polygon is reported on the side of its centroid.
    #[tracing::instrument(skip(self))]
    pub fn cut(&self, plane: &Plane) -> PolygonCutOutput {
        match self.which_side_of(plane) {
            WhichSide::Flush => PolygonCutOutput::Flush,
            WhichSide::Inside => {
                PolygonCutOutput::all_inside(self.clone(), self.edge_in_plane(plane))
            }
            WhichSide::Outside => {
                PolygonCutOutput::all_outside(self.clone(), self.edge_in_plane(plane))
            }
            WhichSide::Split => match self.split(plane) {
                Some((inside, outside, intersection)) => PolygonCutOutput::NonFlush {
                    inside: Some(inside),
                    outside: Some(outside),
                    intersection: Some(intersection),
                },
                None => match plane.location_of_point(self.centroid) {
                    PointWhichSide::Inside => PolygonCutOutput::all_inside(self.clone(), None),
                    _ => PolygonCutOutput::all_outside(self.clone(), None),
                },
            },
        }
    }

    /// Slices the polygon by a plane, returning the pieces ordered by
    /// descending area.
    ///
    /// Returns the polygon unchanged if it lies in the plane or does not
    /// cross it.
    pub fn slice(&self, plane: &Plane) -> Vec<Polygon> {
        let output = self.cut(plane);
        if !output.is_split() {
            return vec![self.clone()];
        }
        output
            .into_pieces()
            .sorted_by_key(|p| Reverse(FloatOrd(p.area().base())))
            .collect()
    }

    /// Slices the polygon by a line in its plane.
    ///
    /// Returns the polygon unchanged if the line is not in its plane.
    pub fn slice_by_line(&self, line: &Line) -> Vec<Polygon> {
        if !self.plane.contains_line(line) {
            return vec![self.clone()];
        }
        match self.normal().cross(line.direction()) {
            Some(normal) => self.slice(&Plane::new(line.base_point(), normal)),
            None => vec![self.clone()],
        }
    }

    /// Splits the polygon into its inside piece, its outside piece, and the
    /// segment between them. Returns `None` if either piece is not a valid
    /// polygon.
    fn split(&self, plane: &Plane) -> Option<(Polygon, Polygon, Segment)> {
        let line = self.plane.intersection(plane)?;

        // Indexed by `side_index()`.
        let mut boundaries: [Vec<Segment>; 2] = [vec![], vec![]];
        let mut closing_candidates: [Vec<Segment>; 2] = [vec![], vec![]];
        let mut in_plane = vec![];
        let mut keep = |side: PointWhichSide, segment: Segment| {
            let i = side_index(side);
            closing_candidates[1 - i].extend(segment.projected_onto(&line));
            boundaries[i].push(segment);
        };

        for edge in &self.edges {
            let start = plane.location_of_point(edge.base_point());
            let end = plane.location_of_point(edge.end_point());
            match (start, end) {
                (PointWhichSide::On, PointWhichSide::On) => in_plane.push(*edge),
                (PointWhichSide::On, side) | (side, PointWhichSide::On) => keep(side, *edge),
                _ if start == end => keep(start, *edge),
                _ => {
                    let Some(crossing) = plane.intersection_with_segment(edge) else {
                        tracing::debug!(?edge, "edge crosses plane without an intersection");
                        return None;
                    };
                    if let Ok(first) = Segment::new(edge.base_point(), crossing) {
                        keep(start, first);
                    }
                    if let Ok(second) = Segment::new(crossing, edge.end_point()) {
                        keep(end, second);
                    }
                }
            }
        }

        // An edge in the plane borders both pieces. Merging it into each side's
        // candidates leaves only the part of the cut that side still needs.
        for candidates in &mut closing_candidates {
            candidates.extend_from_slice(&in_plane);
        }

        let [inside_closing, outside_closing] =
            closing_candidates.map(merge_touching_collinear_segments);
        let [inside_edges, outside_edges] = boundaries;
        let (&[inside_closing], &[outside_closing]) =
            (inside_closing.as_slice(), outside_closing.as_slice())
        else {
            tracing::debug!(
                ?inside_closing,
                ?outside_closing,
                "expected one closing segment per side"
            );
            return None;
        };

        let build = |mut edges: Vec<Segment>, closing: Segment| {
            edges.push(closing);
            Polygon::new(edges)
                .inspect_err(|e| tracing::debug!("discarding slice piece: {e}"))
                .ok()
        };
        let inside = build(inside_edges, inside_closing)?;
        let outside = build(outside_edges, outside_closing)?;
        Some((inside, outside, inside_closing))
    }
}

fn side_index(side: PointWhichSide) -> usize {
    match side {
        PointWhichSide::Inside => 0,
        _ => 1,
    }
}

/// Repeatedly replaces two segments that share an endpoint with the segment
/// between their other endpoints, until no two segments share an endpoint.
fn merge_touching_collinear_segments(mut segments: Vec<Segment>) -> Vec<Segment> {
    'merge: loop {
        for (i, j) in (0..segments.len()).tuple_combinations() {
            let (a, b) = (segments[i], segments[j]);
            let Some(shared) = a.shared_endpoint(&b) else {
                continue;
            };
            let (Some(p), Some(q)) = (a.other_endpoint(shared), b.other_endpoint(shared)) else {
                continue;
            };
            tracing::trace!(?a, ?b, "merging closing segments");
            segments.swap_remove(j);
            segments.swap_remove(i);
            segments.extend(Segment::new(p, q).ok());
            continue 'merge;
        }
        return segments;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::polygon::tests::{polygon, square_10};

    fn point(x: Float, y: Float, z: Float) -> Point {
        Point::from_base(x, y, z)
    }

    #[test]
    fn test_slice_square_by_line() {
        let square = square_10();
        let line = Line::from_points(point(5.0, 0.0, 0.0), point(5.0, 10.0, 0.0)).unwrap();
        let pieces = square.slice_by_line(&line);
        assert_eq!(pieces.len(), 2);
        for piece in &pieces {
            assert_approx_eq!(piece.area(), Area::square_inches(50.0));
            assert_eq!(piece.edges().len(), 4);
        }
        let xs = pieces
            .iter()
            .map(|p| p.centroid().x.base())
            .sorted_by_key(|&x| FloatOrd(x))
            .collect_vec();
        assert_approx_eq!(xs[0], 2.5);
        assert_approx_eq!(xs[1], 7.5);
    }

    #[test]
    fn test_slice_orders_by_area() {
        let square = square_10();
        let plane = Plane::new(point(3.0, 0.0, 0.0), Direction::X);
        let pieces = square.slice(&plane);
        assert_eq!(pieces.len(), 2);
        assert_approx_eq!(pieces[0].area(), Area::square_inches(70.0));
        assert_approx_eq!(pieces[1].area(), Area::square_inches(30.0));
    }

    #[test]
    fn test_slice_through_vertices() {
        let square = square_10();
        let diagonal = Line::from_points(point(0.0, 0.0, 0.0), point(10.0, 10.0, 0.0)).unwrap();
        let pieces = square.slice_by_line(&diagonal);
        assert_eq!(pieces.len(), 2);
        for piece in &pieces {
            assert_eq!(piece.edges().len(), 3);
            assert_approx_eq!(piece.area(), Area::square_inches(50.0));
        }
    }

    #[test]
    fn test_slice_unchanged() {
        let square = square_10();

        // line not in the polygon's plane
        let raised = Line::new(point(5.0, 0.0, 1.0), Direction::Y);
        assert_eq!(square.slice_by_line(&raised), vec![square.clone()]);

        // plane that misses the polygon
        let far = Plane::new(point(20.0, 0.0, 0.0), Direction::X);
        assert_eq!(square.slice(&far), vec![square.clone()]);

        // plane that touches an edge
        let touching = Plane::new(point(10.0, 0.0, 0.0), Direction::X);
        assert_eq!(square.slice(&touching), vec![square.clone()]);

        // the polygon's own plane
        assert_eq!(square.slice(&Plane::XY), vec![square.clone()]);
    }

    #[test]
    fn test_cut_output() {
        let square = square_10();
        assert_eq!(square.cut(&Plane::XY), PolygonCutOutput::Flush);

        let touching = Plane::new(point(10.0, 0.0, 0.0), Direction::X);
        let output = square.cut(&touching);
        assert!(output.outside().is_none());
        assert_eq!(output.inside(), Some(&square));
        let edge = output.intersection().unwrap();
        assert_approx_eq!(edge.length(), Length::inches(10.0));

        let output = square.cut(&Plane::new(point(4.0, 0.0, 0.0), Direction::X));
        assert!(output.is_split());
        assert_approx_eq!(output.inside().unwrap().area(), Area::square_inches(40.0));
        assert_approx_eq!(output.outside().unwrap().area(), Area::square_inches(60.0));
        let seam = output.intersection().unwrap();
        assert!(seam.has_endpoint(point(4.0, 0.0, 0.0)));
        assert!(seam.has_endpoint(point(4.0, 10.0, 0.0)));
    }

    #[test]
    fn test_slice_tilted_plane() {
        // a plane that is not perpendicular to the polygon still slices it
        // along their line of intersection
        let triangle = polygon(&[[0.0, 0.0, 0.0], [6.0, 0.0, 0.0], [0.0, 6.0, 0.0]]);
        let normal = Direction::from_vec3(vec3![1, 0, 1]).unwrap();
        let pieces = triangle.slice(&Plane::new(point(3.0, 0.0, 0.0), normal));
        assert_eq!(pieces.len(), 2);
        let total: Area = pieces.iter().map(|p| p.area()).sum();
        assert_approx_eq!(total, triangle.area());
        for piece in &pieces {
            assert_approx_eq!(piece.normal(), Direction::Z);
        }
    }

    fn l_shape() -> Polygon {
        polygon(&[
            [0.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [2.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 2.0, 0.0],
            [0.0, 2.0, 0.0],
        ])
    }

    #[test]
    fn test_slice_along_inner_edge() {
        // the cut runs along the edge (1,1)-(1,2)
        let l = l_shape();
        let pieces = l.slice_by_line(&Line::new(point(1.0, 0.0, 0.0), Direction::Y));
        assert_eq!(pieces.len(), 2);
        assert_approx_eq!(pieces[0].area(), Area::square_inches(2.0));
        assert_approx_eq!(pieces[1].area(), Area::square_inches(1.0));
        assert_eq!(pieces[0].edges().len(), 4);
        assert_eq!(pieces[1].edges().len(), 4);
        assert_approx_eq!(pieces[0].centroid(), point(0.5, 1.0, 0.0));
        assert_approx_eq!(pieces[1].centroid(), point(1.5, 0.5, 0.0));
    }

    #[test]
    fn test_merge_touching_collinear_segments() {
        let seg = |a: Float, b: Float| Segment::new(point(a, 0.0, 0.0), point(b, 0.0, 0.0)).unwrap();
        let merged = merge_touching_collinear_segments(vec![seg(2.0, 3.0), seg(0.0, 1.0), seg(1.0, 2.0)]);
        assert_eq!(merged.len(), 1);
        assert_approx_eq!(merged[0], seg(0.0, 3.0));

        let apart = merge_touching_collinear_segments(vec![seg(0.0, 1.0), seg(2.0, 3.0)]);
        assert_eq!(apart.len(), 2);
    }

    proptest! {
        #[test]
        fn proptest_slice_conserves_area(
            x in 1.0..9.0_f64,
            y in 1.0..9.0_f64,
            angle in 0.0..std::f64::consts::TAU,
            tilt in -1.0..1.0_f64,
        ) {
            let square = square_10();
            let normal = Direction::from_vec3(Vec3::new(angle.cos(), angle.sin(), tilt)).unwrap();
            let plane = Plane::new(point(x, y, 0.0), normal);
            let pieces = square.slice(&plane);
            prop_assert_eq!(pieces.len(), 2);
            let total: Area = pieces.iter().map(|p| p.area()).sum();
            prop_assert!(approx::abs_diff_eq!(total, square.area(), epsilon = 1e-6));
            for (a, b) in pieces.iter().tuple_windows() {
                prop_assert!(a.area() >= b.area());
            }
        }

        #[test]
        fn proptest_slice_concave_conserves_area(x in 0.1..1.9_f64) {
            let l = l_shape();
            let pieces = l.slice_by_line(&Line::new(point(x, 0.0, 0.0), Direction::Y));
            prop_assert_eq!(pieces.len(), 2);
            let total: Area = pieces.iter().map(|p| p.area()).sum();
            prop_assert!(approx::abs_diff_eq!(total, l.area(), epsilon = 1e-6));
        }
    }
}
