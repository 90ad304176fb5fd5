//! Common mathematical utility functions that didn't fit anywhere else.

use std::ops::Mul;

use crate::Float;

/// Divides `lhs` by `rhs` if the reciprocal of `rhs` is finite; otherwise
/// returns `None`.
pub fn try_div<T>(lhs: T, rhs: Float) -> Option<T::Output>
where
    T: Mul<Float>,
{
    let recip_rhs = rhs.recip();
    recip_rhs.is_finite().then(|| lhs * recip_rhs)
}

/// Returns the element of an iterator with the maximum value, allowing floats
/// or other `PartialOrd` types. Earlier elements win ties.
pub fn max_by_key<T, K: PartialOrd>(
    elems: impl IntoIterator<Item = T>,
    mut f: impl FnMut(&T) -> K,
) -> Option<T> {
    let mut iter = elems.into_iter();
    let mut max_elem = iter.next()?;
    let mut max_key = f(&max_elem);
    for elem in iter {
        let key = f(&elem);
        if key > max_key {
            max_elem = elem;
            max_key = key;
        }
    }
    Some(max_elem)
}
