//! Slicing polyhedra by planes.

use std::cmp::Reverse;

use float_ord::FloatOrd;
use itertools::Itertools;
use solidmath::prelude::*;

use super::Polyhedron;
use crate::{Polygon, PolygonCutOutput};

impl Polyhedron {
    /// Slices the polyhedron into two solids by a plane.
    ///
    /// Each face is sliced on its own. The pieces are then sorted into two
    /// solids by walking shared edges outward from the first face that was
    /// split. Faces lying in the plane are dropped, and each solid is closed
    /// by its own cross-section.
    ///
    /// Returns the polyhedron unchanged if the plane does not split it, or
    /// if either resulting solid is invalid.
    #[tracing::instrument(skip(self))]
    pub fn slice(&self, plane: &Plane) -> Vec<Polyhedron> {
        if !self.which_side_of(plane).is_split() {
            return vec![self.clone()];
        }

        let mut groups: Vec<Vec<Polygon>> = vec![];
        for face in &self.faces {
            let output = face.cut(plane);
            let pieces = match output {
                PolygonCutOutput::Flush => {
                    let centroid = face.centroid();
                    tracing::debug!(?centroid, "dropping face in the cutting plane");
                    continue;
                }
                _ if output.is_split() => output
                    .into_pieces()
                    .sorted_by_key(|p| Reverse(FloatOrd(p.area().base())))
                    .collect(),
                _ => vec![face.clone()],
            };
            groups.push(pieces);
        }

        // Indexed by solid.
        let mut solids: [Vec<Polygon>; 2] = [vec![], vec![]];
        let Some(seed_index) = groups.iter().position(|g| g.len() == 2) else {
            tracing::debug!("no face was split");
            return vec![self.clone()];
        };
        let mut seed = groups.remove(seed_index).into_iter();
        solids[0].extend(seed.next());
        solids[1].extend(seed.next());
        let seed_side = solids[0][0].which_side_of(plane);

        let mut worklist = groups;
        while !worklist.is_empty() {
            let len_before = worklist.len();
            worklist.retain(|group| {
                let adjacent = group.iter().enumerate().find_map(|(i, piece)| {
                    (0..2)
                        .find(|&k| {
                            solids[k]
                                .iter()
                                .any(|placed| shares_edge_off_plane(piece, placed, plane))
                        })
                        .map(|k| (i, k))
                });
                let Some((i, k)) = adjacent else {
                    return true;
                };
                for (j, piece) in group.iter().enumerate() {
                    let solid = if i == j { k } else { 1 - k };
                    solids[solid].push(piece.clone());
                }
                false
            });
            if worklist.len() == len_before {
                break;
            }
        }

        for piece in worklist.into_iter().flatten() {
            tracing::debug!(centroid = ?piece.centroid(), "placing unconnected face by side");
            let solid = if piece.which_side_of(plane) == seed_side { 0 } else { 1 };
            solids[solid].push(piece);
        }

        for solid in &mut solids {
            match cross_section(solid, plane) {
                Ok(cut_face) => solid.push(cut_face),
                Err(e) => tracing::debug!("omitting cut face: {e}"),
            }
        }

        let [first, second] = solids;
        match (Polyhedron::new(first), Polyhedron::new(second)) {
            (Ok(a), Ok(b)) => vec![a, b],
            (Err(e), _) | (_, Err(e)) => {
                tracing::debug!("slice produced an invalid solid: {e}");
                vec![self.clone()]
            }
        }
    }

    /// Slices the polyhedron by each plane in turn, slicing every solid
    /// produced by earlier planes.
    pub fn slice_by_planes(&self, planes: &[Plane]) -> Vec<Polyhedron> {
        planes.iter().fold(vec![self.clone()], |solids, plane| {
            solids.iter().flat_map(|solid| solid.slice(plane)).collect()
        })
    }
}

/// Returns the face that closes `faces` along `plane`, bounded by the edges in
/// the plane that belong to exactly one of `faces`.
fn cross_section(faces: &[Polygon], plane: &Plane) -> Result<Polygon, GeometryError> {
    let in_plane = faces
        .iter()
        .flat_map(|face| face.edges())
        .filter(|e| plane.contains_line(*e))
        .collect_vec();
    let unmatched = in_plane
        .iter()
        .filter(|e| in_plane.iter().filter(|f| approx_eq(**e, **f)).count() == 1)
        .map(|&&e| e)
        .collect_vec();
    Polygon::new(unmatched)
}

/// Returns whether two polygons share an edge that does not lie in `plane`.
fn shares_edge_off_plane(a: &Polygon, b: &Polygon, plane: &Plane) -> bool {
    a.edges()
        .iter()
        .filter(|e| !plane.contains_line(*e))
        .any(|e| b.edges().iter().any(|f| approx_eq(e, f)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::polyhedron::tests::cube_10;

    fn point(x: Float, y: Float, z: Float) -> Point {
        Point::from_base(x, y, z)
    }

    #[test]
    fn test_slice_cube_in_half() {
        let cube = cube_10();
        let solids = cube.slice(&Plane::new(point(0.0, 0.0, 5.0), Direction::Z));
        assert_eq!(solids.len(), 2);
        for solid in &solids {
            assert_eq!(solid.faces().len(), 6);
            assert!(solid.is_watertight());
            assert_approx_eq!(solid.volume(), Volume::cubic_inches(500.0));
        }
        let heights = solids
            .iter()
            .map(|s| s.centroid().z.base())
            .sorted_by_key(|&z| FloatOrd(z))
            .collect_vec();
        assert_approx_eq!(heights[0], 2.5);
        assert_approx_eq!(heights[1], 7.5);
    }

    #[test]
    fn test_slice_cube_off_center() {
        let cube = cube_10();
        let solids = cube.slice(&Plane::new(point(3.0, 0.0, 0.0), Direction::NEG_X));
        let volumes = solids
            .iter()
            .map(|s| s.volume().base())
            .sorted_by_key(|&v| FloatOrd(v))
            .collect_vec();
        assert_eq!(volumes.len(), 2);
        assert_approx_eq!(volumes[0], 300.0);
        assert_approx_eq!(volumes[1], 700.0);
    }

    #[test]
    fn test_slice_cube_through_edges() {
        // the diagonal plane contains two vertical edges of the cube
        let cube = cube_10();
        let normal = Direction::from_vec3(vec3![1, -1, 0]).unwrap();
        let solids = cube.slice(&Plane::new(Point::ORIGIN, normal));
        assert_eq!(solids.len(), 2);
        for solid in &solids {
            assert_eq!(solid.faces().len(), 5);
            assert!(solid.is_watertight());
            assert_approx_eq!(solid.volume(), Volume::cubic_inches(500.0));
        }
    }

    #[test]
    fn test_slice_unchanged() {
        let cube = cube_10();
        let touching = Plane::new(point(0.0, 0.0, 10.0), Direction::Z);
        assert_eq!(cube.slice(&touching), vec![cube.clone()]);
        let far = Plane::new(point(0.0, 0.0, 50.0), Direction::Z);
        assert_eq!(cube.slice(&far), vec![cube.clone()]);
    }

    #[test]
    fn test_slice_by_planes() {
        let cube = cube_10();
        let planes = [
            Plane::new(point(5.0, 0.0, 0.0), Direction::X),
            Plane::new(point(0.0, 5.0, 0.0), Direction::Y),
            Plane::new(point(0.0, 0.0, 5.0), Direction::Z),
        ];
        let solids = cube.slice_by_planes(&planes);
        assert_eq!(solids.len(), 8);
        for solid in &solids {
            assert_approx_eq!(solid.volume(), Volume::cubic_inches(125.0));
        }

        // a plane that misses everything does not multiply the solids
        let far = Plane::new(point(50.0, 0.0, 0.0), Direction::X);
        assert_eq!(cube.slice_by_planes(&[planes[0], far]).len(), 2);
    }

    fn l_prism() -> Polyhedron {
        let l = crate::polygon::tests::polygon(&[
            [0.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [2.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 2.0, 0.0],
            [0.0, 2.0, 0.0],
        ]);
        l.extrude(&Vector::new(Point::ORIGIN, Direction::Z, Length::inches(1.0)))
            .unwrap()
    }

    #[test]
    fn test_slice_along_inner_face() {
        // the face at x = 1 between y = 1 and y = 2 lies in the plane
        let prism = l_prism();
        let solids = prism.slice(&Plane::new(point(1.0, 0.0, 0.0), Direction::X));
        assert_eq!(solids.len(), 2);
        let solids = solids
            .into_iter()
            .sorted_by_key(|s| FloatOrd(s.volume().base()))
            .collect_vec();
        assert_approx_eq!(solids[0].volume(), Volume::cubic_inches(1.0));
        assert_approx_eq!(solids[1].volume(), Volume::cubic_inches(2.0));
        for solid in &solids {
            assert_eq!(solid.faces().len(), 6);
            assert!(solid.is_watertight());
        }
        assert_approx_eq!(solids[0].centroid(), point(1.5, 0.5, 0.5));
        assert_approx_eq!(solids[1].centroid(), point(0.5, 1.0, 0.5));
    }

    proptest! {
        #[test]
        fn proptest_slice_conserves_volume(
            x in 2.0..8.0_f64,
            y in 2.0..8.0_f64,
            z in 2.0..8.0_f64,
            nx in -1.0..1.0_f64,
            ny in -1.0..1.0_f64,
            nz in -1.0..1.0_f64,
        ) {
            let normal = Direction::from_vec3(Vec3::new(nx, ny, nz));
            prop_assume!(normal.is_some());
            let cube = cube_10();
            let plane = Plane::new(point(x, y, z), normal.unwrap());
            let solids = cube.slice(&plane);
            prop_assert_eq!(solids.len(), 2);
            prop_assert!(solids.iter().all(|s| s.is_watertight()));
            let total: Volume = solids.iter().map(|s| s.volume()).sum();
            prop_assert!(approx::abs_diff_eq!(total, cube.volume(), epsilon = 1e-6));
        }

        #[test]
        fn proptest_slice_concave_conserves_volume(x in 0.1..1.9_f64) {
            let prism = l_prism();
            let solids = prism.slice(&Plane::new(point(x, 0.0, 0.0), Direction::X));
            prop_assert_eq!(solids.len(), 2);
            prop_assert!(solids.iter().all(|s| s.is_watertight()));
            let total: Volume = solids.iter().map(|s| s.volume()).sum();
            prop_assert!(approx::abs_diff_eq!(total, Volume::cubic_inches(3.0), epsilon = 1e-6));
        }
    }
}
