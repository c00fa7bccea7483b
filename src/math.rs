//! Small numeric helpers that `bevy::math` does not provide.

use bevy::prelude::*;

/// Remaps `value` from the range `from_min..from_max` to `to_min..to_max`.
///
/// Values outside the source range are extrapolated, not clamped.
pub fn remap(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    (value - from_min) / (from_max - from_min) * (to_max - to_min) + to_min
}

/// Rounds `value` to the nearest multiple of `step`. A zero step returns `value`.
pub fn round_to_step(value: f32, step: f32) -> f32 {
    if step == 0.0 {
        value
    } else {
        (value / step).round() * step
    }
}

/// Integer flavour of [`round_to_step`].
pub fn round_to_step_int(value: f32, step: i32) -> i32 {
    round_to_step(value, step as f32).round() as i32
}

/// Mean of `values`, or `None` when empty.
pub fn average(values: &[f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f32>() / values.len() as f32)
}

/// Mean of the non-degenerate vectors in `vectors`.
///
/// Vectors whose length is below `f32::EPSILON` carry no direction and are
/// skipped. Returns `None` if nothing is left to average.
pub fn average_direction(vectors: &[Vec3]) -> Option<Vec3> {
    let (sum, count) = vectors
        .iter()
        .filter(|v| v.length() > f32::EPSILON)
        .fold((Vec3::ZERO, 0u32), |(sum, count), v| (sum + *v, count + 1));

    (count > 0).then(|| sum / count as f32)
}

/// Inclusive range test.
pub fn in_range<T: PartialOrd>(target: T, min: T, max: T) -> bool {
    target >= min && target <= max
}
