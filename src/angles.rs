//! Angle arithmetic on the circular degree domain.
//!
//! Directions use the convention that 0° points along `(0, 1)` and angles grow
//! towards `(1, 0)`, i.e. compass-style rather than the usual math-style.
//! Intermediate trigonometry runs in `f64` so that a direction/angle round
//! trip stays within 1e-4°.

use bevy::prelude::*;

/// Degrees in a full turn.
pub const FULL_TURN: f32 = 360.0;

/// Wrap any angle into `[0, 360)`.
///
/// Uses `((x % 360) + 360) % 360`, which also handles negative input.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let turn = f64::from(FULL_TURN);
    let wrapped = ((f64::from(degrees) % turn) + turn) % turn;
    let wrapped = wrapped as f32;
    // Tiny negative inputs can round up to exactly 360 in f32.
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Returns true if `angle` lies in the range going clockwise from `min` to `max`.
///
/// All three angles are wrapped into `[0, 360)` first. When `min > max` the
/// range crosses 0°, so `angle_is_between(350.0, 340.0, 10.0)` is true. Both
/// bounds are inclusive and `min == max` denotes a single angle.
pub fn angle_is_between(angle: f32, min: f32, max: f32) -> bool {
    let angle = normalize_degrees(angle);
    let min = normalize_degrees(min);
    let max = normalize_degrees(max);

    if min <= max {
        min <= angle && angle <= max
    } else {
        angle >= min || angle <= max
    }
}

/// Angle in degrees of the direction `(x, y)`, with 0° corresponding to `(0, 1)`.
///
/// The result is in `(-180, 180]` and is not wrapped; pass it through
/// [`normalize_degrees`] when a `[0, 360)` value is needed.
pub fn direction_to_angle(x: f32, y: f32) -> f32 {
    f64::from(x).atan2(f64::from(y)).to_degrees() as f32
}

/// [`direction_to_angle`] for a vector.
pub fn vec_to_angle(direction: Vec2) -> f32 {
    direction_to_angle(direction.x, direction.y)
}

/// Unit direction for an angle in degrees, with 0° corresponding to `(0, 1)`.
pub fn angle_to_direction(degrees: f32) -> Vec2 {
    let (sin, cos) = f64::from(degrees).to_radians().sin_cos();
    Vec2::new(sin as f32, cos as f32)
}

/// Shortest unsigned distance between two angles, in `[0, 180]`.
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let diff = (normalize_degrees(a) - normalize_degrees(b)).abs();
    diff.min(FULL_TURN - diff)
}
