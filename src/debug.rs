//! Gizmo rendering for cone queries.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::color::palette;
use crate::physics::{ConeOverlap, ConeQuery};

/// Default length of the cone axis ray
const DIRECTION_LENGTH: f32 = 2.0;

/// Settings for cone debug drawing
#[derive(Resource, Clone, Debug, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
pub struct ConeDebugSettings {
    /// Draw rays for every cone sensor update
    pub enabled: bool,
    /// Length of the ray drawn along the cone axis
    pub direction_length: f32,
    /// Cone axis ray
    pub direction_color: Color,
    /// Rays to candidates inside the cone
    pub inside_color: Color,
    /// Rays to candidates outside the cone
    pub outside_color: Color,
}

impl Default for ConeDebugSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            direction_length: DIRECTION_LENGTH,
            direction_color: palette::CYAN,
            inside_color: palette::LIME,
            outside_color: palette::RED,
        }
    }
}

/// Draw the cone axis and one ray per broad-phase candidate.
pub fn draw_cone_overlap<F, E>(
    gizmos: &mut Gizmos,
    settings: &ConeDebugSettings,
    cone: &ConeQuery<F>,
    overlap: &ConeOverlap<E>,
) {
    let axis = cone.direction().normalize_or_zero() * settings.direction_length;
    gizmos.ray(cone.origin(), axis, settings.direction_color);

    for (_, position) in &overlap.inside {
        gizmos.line(cone.origin(), *position, settings.inside_color);
    }
    for (_, position) in &overlap.outside {
        gizmos.line(cone.origin(), *position, settings.outside_color);
    }
}
