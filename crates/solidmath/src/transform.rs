//! Rigid transformations of geometric values.

use crate::{Rotation, Shift, Vec3};

/// Geometric value that can be rotated and translated.
///
/// Every method returns a new value; nothing is modified in place.
pub trait Transform: Clone {
    /// Rotates the object about the rotation's axis.
    #[must_use]
    fn rotate(&self, rotation: &Rotation) -> Self;
    /// Moves the object by a displacement in base units.
    #[must_use]
    fn translate(&self, displacement: Vec3) -> Self;

    /// Applies a [`Shift`].
    ///
    /// A forward shift applies each rotation in order and then translates. A
    /// negated shift translates first and then applies each rotation, so
    /// that applying a shift followed by its negation is the identity.
    #[must_use]
    fn shift(&self, shift: &Shift) -> Self {
        let displacement = shift.displacement().to_vec3();
        let rotate_all = |start: Self| {
            shift
                .rotations()
                .iter()
                .fold(start, |obj, rotation| obj.rotate(rotation))
        };
        if shift.is_negated() {
            rotate_all(self.translate(displacement))
        } else {
            rotate_all(self.clone()).translate(displacement)
        }
    }
}
