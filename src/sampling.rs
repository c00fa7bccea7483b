//! Random selection over generic value sets.
//!
//! All helpers take the generator as a parameter (see [`RandomSource`]) and
//! validate their input before drawing or mutating anything.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{SamplingError, SamplingResult};
use crate::random::RandomSource;

/// A value paired with its selection weight.
#[derive(Clone, Debug, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub struct WeightedValue<T> {
    /// The value returned when this entry is picked.
    pub value: T,
    /// Relative weight for selection (higher = more likely, 0 = never).
    pub weight: u32,
}

impl<T> WeightedValue<T> {
    /// Create a new weighted value.
    pub fn new(value: T, weight: u32) -> Self {
        Self { value, weight }
    }
}

/// Pick a random element and move it to the front of the slice.
///
/// The pick is drawn from indices `1..len`, never from index 0, and swapped
/// into index 0. The previous front element takes the picked element's old
/// place. Feeding the same slice back in makes an immediate repeat unlikely,
/// but it is not ruled out.
///
/// A single-element slice is returned as-is without drawing.
pub fn pick_and_shuffle<'a, T>(
    list: &'a mut [T],
    rng: &mut impl RandomSource,
) -> SamplingResult<&'a T> {
    match list.len() {
        0 => Err(SamplingError::EmptyCollection),
        1 => Ok(&list[0]),
        len => {
            let n = rng.int_in_inclusive(1..=(len as u64 - 1)) as usize;
            list.swap(0, n);
            Ok(&list[0])
        }
    }
}

/// Pick a value with probability proportional to its weight.
///
/// `values` and `weights` are parallel slices. A value with weight 0 is never
/// returned.
pub fn weighted_random<'a, T>(
    values: &'a [T],
    weights: &[u32],
    rng: &mut impl RandomSource,
) -> SamplingResult<&'a T> {
    let index = weighted_index(values.len(), weights, rng)?;
    Ok(&values[index])
}

/// Pick from `(value, weight)` pairs, e.g. the entries of a map.
///
/// Pairs are consumed in iteration order, so the weight stays aligned with its
/// value whatever the source collection is. For a `HashMap` that order is
/// arbitrary but consistent within one call.
pub fn weighted_random_from_pairs<T>(
    pairs: impl IntoIterator<Item = (T, u32)>,
    rng: &mut impl RandomSource,
) -> SamplingResult<T> {
    let (mut values, weights): (Vec<T>, Vec<u32>) = pairs.into_iter().unzip();
    let index = weighted_index(values.len(), &weights, rng)?;
    Ok(values.swap_remove(index))
}

/// Pick from a slice of [`WeightedValue`]s.
pub fn weighted_pick<'a, T>(
    entries: &'a [WeightedValue<T>],
    rng: &mut impl RandomSource,
) -> SamplingResult<&'a T> {
    let weights: Vec<u32> = entries.iter().map(|entry| entry.weight).collect();
    let index = weighted_index(entries.len(), &weights, rng)?;
    Ok(&entries[index].value)
}

/// Pick any element with equal probability, leaving the slice untouched.
pub fn pick_uniform<'a, T>(values: &'a [T], rng: &mut impl RandomSource) -> SamplingResult<&'a T> {
    if values.is_empty() {
        return Err(SamplingError::EmptyCollection);
    }

    let index = rng.int_in(0..values.len() as u64) as usize;
    Ok(&values[index])
}

/// Validate the weights and walk the running sum until the draw falls inside.
fn weighted_index(
    len: usize,
    weights: &[u32],
    rng: &mut impl RandomSource,
) -> SamplingResult<usize> {
    if len == 0 {
        return Err(SamplingError::EmptyCollection);
    }
    if weights.len() != len {
        return Err(SamplingError::LengthMismatch {
            values: len,
            weights: weights.len(),
        });
    }

    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if total == 0 {
        return Err(SamplingError::InvalidWeight);
    }

    let r = rng.int_in(0..total);
    let mut acc = 0u64;
    weights
        .iter()
        .position(|&weight| {
            acc += u64::from(weight);
            r < acc
        })
        .ok_or(SamplingError::InvalidWeight)
}
