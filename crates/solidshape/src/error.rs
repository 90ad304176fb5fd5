use solidmath::GeometryError;

/// Error constructing a polyhedron.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A polyhedron has fewer than four faces.
    #[error("polyhedron needs at least 4 faces; got {0}")]
    TooFewFaces(usize),
    /// Error constructing one of the faces.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
