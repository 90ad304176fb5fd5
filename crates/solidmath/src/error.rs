//! Error types for structurally impossible inputs.
//!
//! Absence of a geometric relationship (parallel lines, a plane that misses
//! a polygon, etc.) is never an error; those operations return `None` or an
//! unchanged result instead.

/// Error from a matrix operation.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("dimension mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
    #[error("incompatible shapes for multiplication: {lhs_rows}x{lhs_cols} * {rhs_rows}x{rhs_cols}")]
    IncompatibleShape {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },
    #[error("operation requires a square matrix but got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix is not invertible")]
    NotInvertible,
    #[error("matrix cannot be factored: no nonzero pivot in column {column}")]
    Unfactorable { column: usize },
}

/// Error constructing a geometric object.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Two points that must be distinct are the same.
    #[error("points are coincident")]
    CoincidentPoints,
    /// Points that must span a plane all lie on one line.
    #[error("points are collinear")]
    CollinearPoints,
    /// Points or edges that must lie in one plane do not.
    #[error("points are not coplanar")]
    NonCoplanar,
    /// Two lines that must be distinct are the same line.
    #[error("lines are coincident")]
    CoincidentLines,
    /// Two lines that must share a plane are skew.
    #[error("lines are skew")]
    SkewLines,
    /// A vector that must have a direction is zero.
    #[error("vector is zero")]
    ZeroVector,
    /// A polygon has fewer than three edges.
    #[error("polygon needs at least 3 edges; got {0}")]
    TooFewEdges(usize),
    /// Edges do not form a single closed loop.
    #[error("edges do not form a closed loop")]
    NotClosed,
    /// An extrusion vector lies in the plane of the polygon being extruded.
    #[error("extrusion vector is parallel to the polygon")]
    ParallelExtrusion,
    /// Error from the underlying matrix engine.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
