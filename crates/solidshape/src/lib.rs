//! Polygon and polyhedron slicing.
//!
//! Every shape is an immutable value. Slicing and transforming return new
//! shapes.

mod error;
pub mod polygon;
pub mod polyhedron;

pub use error::ShapeError;
pub use polygon::{Polygon, PolygonCutOutput};
pub use polyhedron::Polyhedron;

/// Structs, traits, and constants.
pub mod prelude {
    pub use solidmath::prelude::*;

    pub use crate::{Polygon, PolygonCutOutput, Polyhedron, ShapeError};
}
