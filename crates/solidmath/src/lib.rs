//! Matrix algebra, units, and 3D geometric primitives.
//!
//! Everything here is an immutable value type. Transforms such as
//! [`Transform::rotate()`] and [`Transform::shift()`] return new values
//! instead of mutating in place.

pub use {approx, num_traits as num};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons and tiny offsets.
pub const EPSILON: Float = 0.000001;

/// Maximum distance, in base length units, between a line's base point and
/// its intersection with a plane before the intersection is discarded as
/// numerically implausible.
pub const MAX_LINE_PLANE_DISTANCE: Float = 1000.0;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

#[macro_use]
mod impl_macros;
#[macro_use]
mod vec3;
#[macro_use]
pub mod matrix;

pub mod approx_cmp;
pub mod capability;
pub mod centroid;
pub mod coordinate_system;
pub mod direction;
pub mod error;
pub mod intersect;
pub mod line;
pub mod lu;
pub mod plane;
pub mod point;
pub mod rotation;
pub mod rotation_matrix;
pub mod segment;
pub mod shift;
pub mod transform;
pub mod units;
pub mod util;
pub mod vector;
pub mod which_side;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::approx_cmp::*;
    pub use crate::centroid::Centroid;
    pub use crate::coordinate_system::CoordinateSystem;
    pub use crate::direction::Direction;
    pub use crate::error::{GeometryError, MatrixError};
    pub use crate::intersect;
    pub use crate::line::Line;
    pub use crate::lu::LuDecomposition;
    pub use crate::matrix::Matrix;
    pub use crate::plane::Plane;
    pub use crate::point::Point;
    pub use crate::rotation::Rotation;
    pub use crate::segment::Segment;
    pub use crate::shift::Shift;
    pub use crate::traits::*;
    pub use crate::units::{Angle, Area, Length, Volume};
    pub use crate::vec3::Vec3;
    pub use crate::vector::Vector;
    pub use crate::which_side::*;
    pub use crate::{EPSILON, Float, MAX_LINE_PLANE_DISTANCE, assert_approx_eq, row_matrix, vec3};
}
pub use prelude::*;

/// Traits only.
pub mod traits {
    pub use approx::AbsDiffEq;

    pub use crate::capability::{HasBasePoint, HasDirection, LineLike};
    pub use crate::transform::Transform;
}
