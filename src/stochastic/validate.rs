//! Sample count consistency checks

use super::elements::RandomElement;
use crate::error::{RotorError, RotorResult};

/// Common sample length of one category of elements
///
/// Returns `None` when no element of the category is random.
pub fn category_sample_size<E: RandomElement>(elements: &[E]) -> RotorResult<Option<usize>> {
    single_length(elements.iter().filter_map(|e| e.sample_len()))
        .ok_or(RotorError::InconsistentCategory(E::CATEGORY))
}

/// Sample count shared by all random elements of an assembly
///
/// Categories are checked in order (shaft, disk, bearing, point mass) before
/// lengths are compared across categories.
pub fn sample_size<S, D, B, P>(
    shafts: &[S],
    disks: &[D],
    bearings: &[B],
    point_masses: &[P],
) -> RotorResult<Option<usize>>
where
    S: RandomElement,
    D: RandomElement,
    B: RandomElement,
    P: RandomElement,
{
    let sizes = [
        category_sample_size(shafts)?,
        category_sample_size(disks)?,
        category_sample_size(bearings)?,
        category_sample_size(point_masses)?,
    ];
    single_length(sizes.into_iter().flatten()).ok_or(RotorError::InconsistentSamples)
}

/// `Some(None)` for no lengths, `Some(Some(n))` when all equal `n`, `None` otherwise
fn single_length(lengths: impl Iterator<Item = usize>) -> Option<Option<usize>> {
    let mut first = None;
    for len in lengths {
        match first {
            None => first = Some(len),
            Some(n) if n != len => return None,
            Some(_) => {}
        }
    }
    Some(first)
}
