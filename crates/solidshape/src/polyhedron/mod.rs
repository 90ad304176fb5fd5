//! Polyhedra bounded by planar polygons.

use std::collections::VecDeque;

use itertools::Itertools;
use solidmath::prelude::*;

use crate::{Polygon, ShapeError};

mod cut;

/// Solid bounded by polygonal faces.
///
/// Faces may be oriented either way; volume and centroid computations orient
/// them consistently by walking shared edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    faces: Vec<Polygon>,
}

impl Polyhedron {
    /// Constructs a polyhedron from its faces.
    ///
    /// Returns [`ShapeError::TooFewFaces`] if there are fewer than four
    /// faces. The faces are not required to close up; see
    /// [`Polyhedron::is_watertight()`].
    pub fn new(faces: Vec<Polygon>) -> Result<Self, ShapeError> {
        if faces.len() < 4 {
            return Err(ShapeError::TooFewFaces(faces.len()));
        }
        Ok(Self { faces })
    }

    /// Returns the faces.
    pub fn faces(&self) -> &[Polygon] {
        &self.faces
    }
    /// Returns every distinct vertex.
    pub fn vertices(&self) -> Vec<Point> {
        let mut ret: Vec<Point> = vec![];
        for &v in self.faces.iter().flat_map(|f| f.vertices()) {
            if !ret.iter().any(|u| approx_eq(u, &v)) {
                ret.push(v);
            }
        }
        ret
    }
    /// Returns every distinct edge.
    pub fn edges(&self) -> Vec<Segment> {
        let mut ret: Vec<Segment> = vec![];
        for &e in self.faces.iter().flat_map(|f| f.edges()) {
            if !ret.iter().any(|f| approx_eq(f, &e)) {
                ret.push(e);
            }
        }
        ret
    }

    /// Returns whether every edge is shared by exactly two faces.
    pub fn is_watertight(&self) -> bool {
        let all_edges = self.faces.iter().flat_map(|f| f.edges()).copied().collect_vec();
        all_edges
            .iter()
            .all(|e| all_edges.iter().filter(|f| approx_eq(*f, e)).count() == 2)
    }

    /// Returns the total area of the faces.
    pub fn surface_area(&self) -> Area {
        self.faces.iter().map(|f| f.area()).sum()
    }
    /// Returns the enclosed volume.
    pub fn volume(&self) -> Volume {
        Volume::from_base(self.volume_centroid().weight())
    }
    /// Returns the center of mass of the enclosed volume.
    pub fn centroid(&self) -> Point {
        self.volume_centroid().center()
    }

    /// Returns which side of a plane the polyhedron is on.
    pub fn which_side_of(&self, plane: &Plane) -> WhichSide {
        plane.which_side_of_points(self.vertices())
    }

    /// Moves the polyhedron from one coordinate system to another.
    #[must_use]
    pub fn change_frame(&self, from: &CoordinateSystem, to: &CoordinateSystem) -> Self {
        self.shift(&from.shift_to_world()).shift(&to.shift_from_world())
    }

    /// Sums signed tetrahedra from each consistently oriented face to a
    /// reference point, one connected group of faces at a time.
    fn volume_centroid(&self) -> Centroid {
        self.oriented_components()
            .into_iter()
            .filter_map(|component| {
                let &(first, _) = component.first()?;
                let reference = self.faces[first].vertices()[0].to_vec3();
                let signed: Centroid = component
                    .into_iter()
                    .map(|(i, flipped)| {
                        let mut vertices =
                            self.faces[i].vertices().iter().map(|v| v.to_vec3()).collect_vec();
                        if flipped {
                            vertices.reverse();
                        }
                        let v0 = vertices[0];
                        vertices[1..]
                            .iter()
                            .tuple_windows()
                            .map(|(&b, &c)| Centroid::tetrahedron(reference, v0, b, c))
                            .sum::<Centroid>()
                    })
                    .sum();
                Some(signed.abs())
            })
            .sum()
    }

    /// Groups faces connected by shared edges. Each face is paired with
    /// whether it must be reversed to agree with the first face of its
    /// group.
    fn oriented_components(&self) -> Vec<Vec<(usize, bool)>> {
        let n = self.faces.len();
        let mut flips: Vec<Option<bool>> = vec![None; n];
        let mut components = vec![];
        for start in 0..n {
            if flips[start].is_some() {
                continue;
            }
            flips[start] = Some(false);
            let mut component = vec![];
            let mut queue = VecDeque::from([(start, false)]);
            while let Some((i, flipped)) = queue.pop_front() {
                component.push((i, flipped));
                for j in 0..n {
                    if flips[j].is_some() {
                        continue;
                    }
                    let Some(same_direction) =
                        shared_edge_direction(&self.faces[i], &self.faces[j])
                    else {
                        continue;
                    };
                    // Adjacent faces agree when they traverse their shared
                    // edge in opposite directions.
                    let flip_j = same_direction != flipped;
                    flips[j] = Some(flip_j);
                    queue.push_back((j, flip_j));
                }
            }
            components.push(component);
        }
        components
    }
}

/// If two faces share an edge, returns whether they traverse it in the same
/// direction.
fn shared_edge_direction(a: &Polygon, b: &Polygon) -> Option<bool> {
    a.edges()
        .iter()
        .cartesian_product(b.edges())
        .find(|(ea, eb)| approx_eq(*ea, *eb))
        .map(|(ea, eb)| approx_eq(&ea.base_point(), &eb.base_point()))
}

impl Transform for Polyhedron {
    fn rotate(&self, rotation: &Rotation) -> Self {
        Self {
            faces: self.faces.iter().map(|f| f.rotate(rotation)).collect(),
        }
    }

    fn translate(&self, displacement: Vec3) -> Self {
        Self {
            faces: self.faces.iter().map(|f| f.translate(displacement)).collect(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::polygon::tests::{polygon, square_10};

    pub(crate) fn cube_10() -> Polyhedron {
        let up = Vector::new(Point::ORIGIN, Direction::Z, Length::inches(10.0));
        square_10().extrude(&up).unwrap()
    }

    fn tetrahedron() -> Polyhedron {
        let [o, x, y, z] = [[0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 3.0]];
        Polyhedron::new(vec![
            polygon(&[o, y, x]),
            polygon(&[o, x, z]),
            polygon(&[o, z, y]),
            polygon(&[x, y, z]),
        ])
        .unwrap()
    }

    #[test]
    fn test_cube_metrics() {
        let cube = cube_10();
        assert_eq!(cube.faces().len(), 6);
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.edges().len(), 12);
        assert!(cube.is_watertight());
        assert_approx_eq!(cube.volume(), Volume::cubic_inches(1000.0));
        assert_approx_eq!(cube.surface_area(), Area::square_inches(600.0));
        assert_approx_eq!(cube.centroid(), Point::from_base(5.0, 5.0, 5.0));
    }

    #[test]
    fn test_tetrahedron_metrics() {
        let tetra = tetrahedron();
        assert!(tetra.is_watertight());
        assert_approx_eq!(tetra.volume(), Volume::cubic_inches(4.5));
        assert_approx_eq!(tetra.centroid(), Point::from_base(0.75, 0.75, 0.75));
    }

    #[test]
    fn test_volume_ignores_face_orientation() {
        // every face wound the same way around its own normal, regardless of
        // whether that normal points out of the solid
        let [o, x, y, z] = [[0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 3.0]];
        let tetra = Polyhedron::new(vec![
            polygon(&[o, x, y]),
            polygon(&[o, x, z]),
            polygon(&[o, y, z]),
            polygon(&[x, y, z]),
        ])
        .unwrap();
        assert_approx_eq!(tetra.volume(), Volume::cubic_inches(4.5));
    }

    #[test]
    fn test_too_few_faces() {
        let faces = cube_10().faces()[..3].to_vec();
        assert_eq!(Polyhedron::new(faces), Err(ShapeError::TooFewFaces(3)));
    }

    #[test]
    fn test_open_polyhedron() {
        let faces = cube_10().faces()[..5].to_vec();
        let open = Polyhedron::new(faces).unwrap();
        assert!(!open.is_watertight());
    }

    #[test]
    fn test_which_side() {
        let cube = cube_10();
        let plane = |z: Float| Plane::new(Point::from_base(0.0, 0.0, z), Direction::Z);
        assert_eq!(cube.which_side_of(&plane(5.0)), WhichSide::Split);
        assert_eq!(cube.which_side_of(&plane(10.0)), WhichSide::Inside);
        assert_eq!(cube.which_side_of(&plane(-1.0)), WhichSide::Outside);
    }

    #[test]
    fn test_transform() {
        let cube = cube_10();
        let moved = cube.translate(vec3![1, 2, 3]);
        assert_approx_eq!(moved.centroid(), Point::from_base(6.0, 7.0, 8.0));

        let turned = cube.rotate(&Rotation::about_z(Angle::QUARTER_TURN));
        assert_approx_eq!(turned.volume(), cube.volume());
        assert_approx_eq!(turned.centroid(), Point::from_base(-5.0, 5.0, 5.0));
    }

    #[test]
    fn test_change_frame() {
        let cube = cube_10();
        let frame = CoordinateSystem::new(
            Point::from_base(100.0, 0.0, 0.0),
            Angle::ZERO,
            Angle::ZERO,
            Angle::QUARTER_TURN,
        );
        let in_world = cube.change_frame(&frame, &CoordinateSystem::WORLD);
        assert_approx_eq!(in_world.centroid(), frame.point_to_world(cube.centroid()));
        assert_approx_eq!(in_world.centroid(), Point::from_base(95.0, 5.0, 5.0));
        assert_approx_eq!(in_world.volume(), cube.volume());

        let back = in_world.change_frame(&CoordinateSystem::WORLD, &frame);
        assert_approx_eq!(back.centroid(), cube.centroid());
    }
}
