//! Cone sensors: entities that track what lies in front of them.
//!
//! ```ignore
//! commands.spawn((
//!     Transform::from_xyz(0.0, 1.0, 0.0),
//!     ConeSensor::new(12.0, 60.0),
//! ));
//!
//! fn react(sensors: Query<&ConeSensorHits>) {
//!     for hits in &sensors {
//!         info!("{} colliders in sight", hits.len());
//!     }
//! }
//! ```

use avian3d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::debug::{draw_cone_overlap, ConeDebugSettings};
use crate::physics::{ConeQuery, PhysicsSphereQuery};

/// A cone pointing along the entity's forward axis (-Z).
#[derive(Component, Clone, Debug, Reflect, Serialize, Deserialize)]
#[reflect(Component, Default)]
#[require(ConeSensorHits)]
pub struct ConeSensor {
    /// Length of the cone.
    pub radius: f32,
    /// Full opening angle in degrees.
    pub angle: f32,
    /// Collision layers to consider (not serialized).
    #[serde(skip)]
    pub collision_layers: Option<LayerMask>,
    /// Whether the sensor is updated.
    pub enabled: bool,
}

impl Default for ConeSensor {
    fn default() -> Self {
        Self {
            radius: 10.0,
            angle: 90.0,
            collision_layers: None,
            enabled: true,
        }
    }
}

impl ConeSensor {
    /// Create a sensor from its length and full opening angle in degrees.
    pub fn new(radius: f32, angle: f32) -> Self {
        Self {
            radius,
            angle,
            ..default()
        }
    }

    /// Only sense colliders on these layers.
    pub fn with_layers(mut self, layers: impl Into<LayerMask>) -> Self {
        self.collision_layers = Some(layers.into());
        self
    }

    /// The query this sensor runs from `transform`, never matching `owner`.
    pub fn cone(
        &self,
        owner: Entity,
        transform: &GlobalTransform,
    ) -> ConeQuery<SpatialQueryFilter> {
        let filter = match self.collision_layers {
            Some(layers) => SpatialQueryFilter::from_mask(layers),
            None => SpatialQueryFilter::default(),
        }
        .with_excluded_entities([owner]);

        ConeQuery::from_full_angle(
            transform.translation(),
            transform.forward().into(),
            self.radius,
            self.angle,
            filter,
        )
    }
}

/// Collider entities inside the sensor's cone, sorted, as of the last update.
#[derive(Component, Clone, Debug, Default, PartialEq, Eq, Deref, Reflect)]
#[reflect(Component, Default)]
pub struct ConeSensorHits(pub Vec<Entity>);

/// System updating every enabled [`ConeSensor`].
pub(crate) fn update_cone_sensors(
    physics: PhysicsSphereQuery,
    mut sensors: Query<(Entity, &ConeSensor, &GlobalTransform, &mut ConeSensorHits)>,
) {
    for (entity, sensor, transform, mut hits) in &mut sensors {
        if !sensor.enabled {
            hits.set_if_neq(ConeSensorHits::default());
            continue;
        }

        let mut inside = physics.overlap_cone(&sensor.cone(entity, transform));
        inside.sort();
        if hits.set_if_neq(ConeSensorHits(inside)) {
            debug!("Cone sensor {entity} now senses {} colliders", hits.len());
        }
    }
}

/// Draws every enabled [`ConeSensor`]'s cone and broad-phase candidates.
pub(crate) fn draw_cone_sensors(
    physics: PhysicsSphereQuery,
    settings: Res<ConeDebugSettings>,
    mut gizmos: Gizmos,
    sensors: Query<(Entity, &ConeSensor, &GlobalTransform)>,
) {
    for (entity, sensor, transform) in &sensors {
        if !sensor.enabled {
            continue;
        }

        let cone = sensor.cone(entity, transform);
        draw_cone_overlap(&mut gizmos, &settings, &cone, &physics.partition_cone(&cone));
    }
}
