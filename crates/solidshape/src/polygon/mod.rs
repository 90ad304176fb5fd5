//! Planar polygons.

use itertools::Itertools;
use solidmath::prelude::*;

mod cut;
mod cut_output;
mod overlap;

pub use cut_output::PolygonCutOutput;

use crate::{Polyhedron, ShapeError};

/// Closed planar polygon, stored as a loop of edges.
///
/// Each edge ends where the next one begins, and the last edge ends where
/// the first one begins. The vertices, area, centroid, and convexity are
/// computed once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    edges: Vec<Segment>,
    /// Plane of the polygon, oriented so that the edges wind counterclockwise
    /// around the normal.
    plane: Plane,
    vertices: Vec<Point>,
    area: Area,
    centroid: Point,
    is_convex: bool,
}

impl Polygon {
    /// Constructs a polygon from its edges, which may be given in any order
    /// and orientation.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::TooFewEdges`] if there are fewer than three edges
    /// - [`GeometryError::NotClosed`] if the edges do not form exactly one
    ///   closed loop
    /// - [`GeometryError::CollinearPoints`] if the polygon has no area
    /// - [`GeometryError::NonCoplanar`] if the edges do not lie in one plane
    pub fn new(edges: Vec<Segment>) -> Result<Self, GeometryError> {
        if edges.len() < 3 {
            return Err(GeometryError::TooFewEdges(edges.len()));
        }
        let edges = chain_edges(edges)?;
        let vertices = edges.iter().map(|e| e.base_point()).collect_vec();

        // Newell's method, relative to the first vertex
        let origin = vertices[0];
        let twice_area_vector: Vec3 = vertices
            .iter()
            .circular_tuple_windows()
            .map(|(&a, &b)| (a - origin).cross(&(b - origin)))
            .sum();
        let normal =
            Direction::from_vec3(twice_area_vector).ok_or(GeometryError::CollinearPoints)?;
        let plane = Plane::new(origin, normal);
        if !vertices.iter().all(|&v| plane.contains_point(v)) {
            return Err(GeometryError::NonCoplanar);
        }

        let n = normal.unit_vec3();
        let centroid = vertices[1..]
            .iter()
            .tuple_windows()
            .map(|(&b, &c)| {
                let signed_area = (b - origin).cross(&(c - origin)).dot(&n) / 2.0;
                let center = (origin.to_vec3() + b.to_vec3() + c.to_vec3()) / 3.0;
                Centroid::new(center, signed_area)
            })
            .sum::<Centroid>()
            .center();

        let is_convex = edges
            .iter()
            .circular_tuple_windows()
            .all(|(e1, e2)| {
                let turn = e1.direction().unit_vec3().cross(&e2.direction().unit_vec3());
                approx_gt_eq(&turn.dot(&n), &0.0)
            });

        Ok(Self {
            edges,
            plane,
            vertices,
            area: Area::from_base(twice_area_vector.mag() / 2.0),
            centroid,
            is_convex,
        })
    }

    /// Constructs the polygon through a sequence of vertices. The last vertex
    /// connects back to the first.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoincidentPoints`] if two consecutive
    /// vertices are the same. See [`Polygon::new()`] for other errors.
    pub fn from_vertices(vertices: impl IntoIterator<Item = Point>) -> Result<Self, GeometryError> {
        let edges = vertices
            .into_iter()
            .collect_vec()
            .into_iter()
            .circular_tuple_windows()
            .map(|(a, b)| Segment::new(a, b))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(edges)
    }

    /// Returns the edges, in loop order.
    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }
    /// Returns the vertices, in loop order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    /// Returns the plane containing the polygon.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }
    /// Returns the normal of the polygon's plane.
    pub fn normal(&self) -> Direction {
        self.plane.normal()
    }
    /// Returns the area enclosed by the polygon.
    pub fn area(&self) -> Area {
        self.area
    }
    /// Returns the center of mass of the polygon's area.
    pub fn centroid(&self) -> Point {
        self.centroid
    }
    /// Returns whether the polygon is convex. Collinear consecutive edges are
    /// allowed.
    pub fn is_convex(&self) -> bool {
        self.is_convex
    }
    /// Returns the total length of the edges.
    pub fn perimeter(&self) -> Length {
        self.edges.iter().map(|e| e.length()).sum()
    }

    /// Returns whether the polygon contains a point, including points on its
    /// boundary.
    ///
    /// This is a winding-number test: the signed angles subtended by each
    /// edge sum to 360 degrees per loop around the point, and any nonzero
    /// number of loops counts as inside. Self-intersecting polygons are
    /// handled the same way.
    pub fn contains_point(&self, p: Point) -> bool {
        if !self.plane.contains_point(p) {
            return false;
        }
        if self.edges.iter().any(|e| e.contains_point(p)) {
            return true;
        }
        let n = self.normal().unit_vec3();
        let total_degrees: Float = self
            .edges
            .iter()
            .map(|edge| {
                let to_prev = edge.base_point() - p;
                let to_next = edge.end_point() - p;
                let angle = to_prev.angle_to(&to_next).unwrap_or(0.0);
                match to_prev.cross(&to_next).dot(&n) < 0.0 {
                    true => -angle,
                    false => angle,
                }
            })
            .sum::<Float>()
            .to_degrees();
        let winding_number = (total_degrees / 360.0).round();
        winding_number != 0.0
    }

    /// Returns which side of a plane the polygon is on.
    pub fn which_side_of(&self, plane: &Plane) -> WhichSide {
        plane.which_side_of_points(self.vertices.iter().copied())
    }

    /// Returns the edge lying in `plane`, if there is one.
    fn edge_in_plane(&self, plane: &Plane) -> Option<Segment> {
        self.edges.iter().find(|e| plane.contains_line(*e)).copied()
    }

    /// Sweeps the polygon along a vector to form a prism.
    ///
    /// Returns [`GeometryError::ParallelExtrusion`] if the vector lies in the
    /// polygon's plane.
    pub fn extrude(&self, vector: &Vector) -> Result<Polyhedron, ShapeError> {
        let offset = vector.to_vec3();
        if is_approx_zero(&offset.dot(&self.normal().unit_vec3())) {
            return Err(GeometryError::ParallelExtrusion.into());
        }
        let top = self.translate(offset);
        let sides: Vec<Polygon> = self
            .edges
            .iter()
            .map(|e| {
                Polygon::from_vertices([
                    e.base_point(),
                    e.end_point(),
                    e.end_point() + offset,
                    e.base_point() + offset,
                ])
            })
            .collect::<Result<_, _>>()?;
        Polyhedron::new(itertools::chain([self.clone(), top], sides).collect())
    }

    /// Moves every point of the polygon by an isometry that takes its plane
    /// to `new_plane`.
    fn map_isometry(
        &self,
        new_plane: Plane,
        map_point: impl Fn(Point) -> Point,
        map_edge: impl Fn(&Segment) -> Segment,
    ) -> Self {
        Self {
            edges: self.edges.iter().map(map_edge).collect(),
            plane: new_plane,
            vertices: self.vertices.iter().map(|&v| map_point(v)).collect(),
            area: self.area,
            centroid: map_point(self.centroid),
            is_convex: self.is_convex,
        }
    }
}

/// Reorders and reorients edges so that each one ends where the next one
/// begins.
fn chain_edges(edges: Vec<Segment>) -> Result<Vec<Segment>, GeometryError> {
    let mut remaining = edges;
    let first = remaining.swap_remove(0);
    let mut chain = vec![first];
    let mut tip = first.end_point();
    while !remaining.is_empty() {
        let i = remaining
            .iter()
            .position(|e| e.has_endpoint(tip))
            .ok_or(GeometryError::NotClosed)?;
        let edge = remaining.swap_remove(i);
        let edge = match approx_eq(&edge.base_point(), &tip) {
            true => edge,
            false => edge.reversed(),
        };
        tip = edge.end_point();
        chain.push(edge);
    }
    if !approx_eq(&tip, &first.base_point()) {
        return Err(GeometryError::NotClosed);
    }
    Ok(chain)
}

impl approx::AbsDiffEq for Polygon {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    /// Polygons are equal if they have the same edges, in any order and
    /// orientation.
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.edges.len() == other.edges.len()
            && self.edges.iter().all(|e| {
                other
                    .edges
                    .iter()
                    .any(|f| approx::AbsDiffEq::abs_diff_eq(e, f, epsilon))
            })
    }
}

impl Transform for Polygon {
    fn rotate(&self, rotation: &Rotation) -> Self {
        self.map_isometry(
            self.plane.rotate(rotation),
            |p| p.rotate(rotation),
            |e| e.rotate(rotation),
        )
    }

    fn translate(&self, displacement: Vec3) -> Self {
        self.map_isometry(
            self.plane.translate(displacement),
            |p| p + displacement,
            |e| e.translate(displacement),
        )
    }
}
