use avian3d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::{overlap_cone, overlap_cone_with, partition_cone, ConeOverlap, ConeQuery, SphereQuery};

/// [`SphereQuery`] backed by the avian3d spatial query pipeline.
///
/// Candidates are the collider entities intersecting a sphere collider; their
/// position is taken from their `GlobalTransform`. Colliders without one are
/// skipped.
///
/// # Example
/// ```ignore
/// fn sense(physics: PhysicsSphereQuery, eyes: Query<&GlobalTransform, With<Eyes>>) {
///     for eyes in &eyes {
///         let cone = ConeQuery::new(
///             eyes.translation(),
///             eyes.forward().into(),
///             15.0,
///             45.0,
///             SpatialQueryFilter::default(),
///         );
///         let seen = physics.overlap_cone(&cone);
///     }
/// }
/// ```
#[derive(SystemParam)]
pub struct PhysicsSphereQuery<'w, 's> {
    spatial_query: SpatialQuery<'w, 's>,
    transforms: Query<'w, 's, &'static GlobalTransform>,
}

impl SphereQuery for PhysicsSphereQuery<'_, '_> {
    type Entity = Entity;
    type Filter = SpatialQueryFilter;

    fn entities_in_sphere(
        &self,
        center: Vec3,
        radius: f32,
        filter: &SpatialQueryFilter,
    ) -> Vec<(Entity, Vec3)> {
        let sphere = Collider::sphere(radius);
        self.spatial_query
            .shape_intersections(&sphere, center, Quat::IDENTITY, filter)
            .into_iter()
            .filter_map(|entity| {
                let transform = self.transforms.get(entity).ok()?;
                Some((entity, transform.translation()))
            })
            .collect()
    }
}

impl PhysicsSphereQuery<'_, '_> {
    /// Collider entities touching or inside the cone.
    pub fn overlap_cone(&self, cone: &ConeQuery<SpatialQueryFilter>) -> Vec<Entity> {
        overlap_cone(self, cone)
    }

    /// Candidates split into inside and outside the cone, e.g. for debug drawing.
    pub fn partition_cone(&self, cone: &ConeQuery<SpatialQueryFilter>) -> ConeOverlap<Entity> {
        partition_cone(self, cone)
    }

    /// Components of type `T` on the colliders inside the cone.
    ///
    /// Colliders without a `T` are skipped.
    pub fn overlap_cone_components<'a, T: Component>(
        &self,
        cone: &ConeQuery<SpatialQueryFilter>,
        components: &'a Query<'_, '_, &T>,
    ) -> Vec<&'a T> {
        overlap_cone_with(self, cone, |entity| components.get(*entity).ok())
    }
}
