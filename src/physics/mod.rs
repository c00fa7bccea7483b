//! Cone-shaped overlap queries.
//!
//! A cone query runs in two phases: a sphere query gathers everything within
//! the cone's radius (broad phase), then each candidate's offset from the
//! origin is tested against the cone's half-angle (narrow phase).
//!
//! The broad phase is abstracted behind [`SphereQuery`] so the narrow phase
//! can run against any spatial index. [`PhysicsSphereQuery`] backs it with
//! avian3d.

mod avian;

pub use avian::PhysicsSphereQuery;

use bevy::prelude::*;

/// Broad-phase provider: everything intersecting a sphere.
pub trait SphereQuery {
    /// Handle identifying a result, e.g. an [`Entity`].
    type Entity;
    /// Opaque filter passed through untouched, e.g. a layer mask.
    type Filter;

    /// Every indexed entity intersecting the sphere, with its world position.
    ///
    /// Order is up to the implementation.
    fn entities_in_sphere(
        &self,
        center: Vec3,
        radius: f32,
        filter: &Self::Filter,
    ) -> Vec<(Self::Entity, Vec3)>;
}

/// Parameters of a cone overlap.
///
/// Built through [`ConeQuery::new`] or [`ConeQuery::from_full_angle`], which
/// keep the radius non-negative and the half-angle within 0..=180.
#[derive(Clone, Debug)]
pub struct ConeQuery<F> {
    origin: Vec3,
    direction: Vec3,
    radius: f32,
    half_angle: f32,
    filter: F,
}

impl<F> ConeQuery<F> {
    /// Create a cone from its half-angle in degrees.
    pub fn new(origin: Vec3, direction: Vec3, radius: f32, half_angle: f32, filter: F) -> Self {
        Self {
            origin,
            direction,
            radius: radius.max(0.0),
            half_angle: half_angle.clamp(0.0, 180.0),
            filter,
        }
    }

    /// Create a cone from its full opening angle in degrees.
    pub fn from_full_angle(
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        angle: f32,
        filter: F,
    ) -> Self {
        Self::new(origin, direction, radius, angle * 0.5, filter)
    }

    /// Apex of the cone.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Axis of the cone. Not necessarily normalized.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Length of the cone, i.e. the broad-phase sphere radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Maximum angle in degrees between the axis and a target.
    pub fn half_angle(&self) -> f32 {
        self.half_angle
    }

    /// Filter passed through to the [`SphereQuery`].
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Returns true if a target at `position` lies within the half-angle.
    ///
    /// Targets at the origin, and every target of a cone without a direction,
    /// are outside.
    pub fn contains_direction_to(&self, position: Vec3) -> bool {
        angle_between_degrees(self.direction, position - self.origin)
            .is_some_and(|angle| angle <= self.half_angle)
    }
}

/// Broad-phase candidates split by the narrow-phase test.
#[derive(Clone, Debug)]
pub struct ConeOverlap<E> {
    /// Candidates within the cone.
    pub inside: Vec<(E, Vec3)>,
    /// Candidates within the radius but outside the half-angle.
    pub outside: Vec<(E, Vec3)>,
}

impl<E> Default for ConeOverlap<E> {
    fn default() -> Self {
        Self {
            inside: Vec::new(),
            outside: Vec::new(),
        }
    }
}

impl<E> ConeOverlap<E> {
    /// Entities within the cone, dropping positions.
    pub fn into_inside(self) -> Vec<E> {
        self.inside.into_iter().map(|(entity, _)| entity).collect()
    }
}

/// Angle in degrees between two vectors, or `None` if either has no direction.
///
/// Computed as `atan2(|a x b|, a . b)` in `f64`, so collinear vectors come out
/// at exactly 0° instead of the few hundredths `acos` of an `f32` dot gives.
pub fn angle_between_degrees(a: Vec3, b: Vec3) -> Option<f32> {
    if a.length() < f32::EPSILON || b.length() < f32::EPSILON {
        return None;
    }

    let (a, b) = (a.as_dvec3(), b.as_dvec3());
    let angle = a.cross(b).length().atan2(a.dot(b));
    Some(angle.to_degrees() as f32)
}

/// Run both phases and keep every candidate, split by the angle test.
pub fn partition_cone<Q: SphereQuery>(
    query: &Q,
    cone: &ConeQuery<Q::Filter>,
) -> ConeOverlap<Q::Entity> {
    let candidates = query.entities_in_sphere(cone.origin, cone.radius, &cone.filter);
    let total = candidates.len();

    let mut overlap = ConeOverlap::default();
    for (entity, position) in candidates {
        if cone.contains_direction_to(position) {
            overlap.inside.push((entity, position));
        } else {
            overlap.outside.push((entity, position));
        }
    }

    trace!(
        "cone overlap at {}: {} of {} candidates inside",
        cone.origin,
        overlap.inside.len(),
        total
    );
    overlap
}

/// Entities touching or inside the cone. Order is unspecified.
pub fn overlap_cone<Q: SphereQuery>(query: &Q, cone: &ConeQuery<Q::Filter>) -> Vec<Q::Entity> {
    if cone.direction.length() < f32::EPSILON {
        debug!("cone overlap at {} has no direction, nothing is inside", cone.origin);
        return Vec::new();
    }

    partition_cone(query, cone).into_inside()
}

/// Capabilities of the entities inside the cone.
///
/// `resolve` maps each entity to the capability of interest, e.g. a component
/// lookup. Entities it returns `None` for are dropped.
pub fn overlap_cone_with<Q, C>(
    query: &Q,
    cone: &ConeQuery<Q::Filter>,
    resolve: impl FnMut(&Q::Entity) -> Option<C>,
) -> Vec<C>
where
    Q: SphereQuery,
{
    overlap_cone(query, cone).iter().filter_map(resolve).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Brute-force sphere query over a fixed list of points.
    struct Points {
        points: Vec<(u32, Vec3)>,
    }

    impl SphereQuery for Points {
        type Entity = u32;
        type Filter = ();

        fn entities_in_sphere(&self, center: Vec3, radius: f32, _filter: &()) -> Vec<(u32, Vec3)> {
            self.points
                .iter()
                .filter(|(_, p)| p.distance(center) <= radius)
                .copied()
                .collect()
        }
    }

    /// Points identified by a layer, filtered by the query's layer.
    struct Layered {
        points: Vec<(u32, u8, Vec3)>,
    }

    impl SphereQuery for Layered {
        type Entity = u32;
        type Filter = u8;

        fn entities_in_sphere(&self, center: Vec3, radius: f32, layer: &u8) -> Vec<(u32, Vec3)> {
            self.points
                .iter()
                .filter(|(_, l, p)| l == layer && p.distance(center) <= radius)
                .map(|(id, _, p)| (*id, *p))
                .collect()
        }
    }

    fn ids(entities: Vec<u32>) -> HashSet<u32> {
        entities.into_iter().collect()
    }

    fn scattered(seed: u64, count: u32) -> Points {
        let mut rng = fastrand::Rng::with_seed(seed);
        let points = (0..count)
            .map(|id| {
                let p = Vec3::new(rng.f32(), rng.f32(), rng.f32()) * 20.0 - 10.0;
                (id, p)
            })
            .collect();
        Points { points }
    }

    #[test]
    fn narrow_phase_keeps_points_in_front() {
        let points = Points {
            points: vec![
                (0, Vec3::new(0.0, 0.0, 5.0)),
                (1, Vec3::new(1.0, 0.0, 5.0)),
                (2, Vec3::new(5.0, 0.0, 0.0)),
                (3, Vec3::new(0.0, 0.0, -5.0)),
                (4, Vec3::new(0.0, 0.0, 50.0)),
            ],
        };
        let cone = ConeQuery::new(Vec3::ZERO, Vec3::Z, 10.0, 30.0, ());

        assert_eq!(ids(overlap_cone(&points, &cone)), HashSet::from([0, 1]));
    }

    #[test]
    fn boundary_angle_is_inclusive() {
        // A zero half-angle still admits targets exactly on the axis.
        let points = Points {
            points: vec![
                (0, Vec3::new(0.0, 0.0, 4.0)),
                (1, Vec3::new(0.0, 0.0, 0.5)),
                (2, Vec3::new(0.0, 0.1, 4.0)),
            ],
        };
        let cone = ConeQuery::new(Vec3::ZERO, Vec3::Z, 5.0, 0.0, ());

        assert_eq!(ids(overlap_cone(&points, &cone)), HashSet::from([0, 1]));
    }

    #[test]
    fn zero_half_angle_admits_targets_on_a_skewed_axis() {
        let mut points = Vec::new();
        for i in 1..=12u16 {
            let axis = Vec3::new(f32::from(i), f32::from(2 * i + 1), 3.0);
            for j in 1..=12u16 {
                points.push((u32::from(i) * 100 + u32::from(j), axis * f32::from(j)));
            }
        }
        let points = Points { points };

        for i in 1..=12u16 {
            let axis = Vec3::new(f32::from(i), f32::from(2 * i + 1), 3.0);
            let cone = ConeQuery::new(Vec3::ZERO, axis, 1000.0, 0.0, ());
            let expected: HashSet<u32> = (1..=12).map(|j| u32::from(i) * 100 + j).collect();

            assert_eq!(ids(overlap_cone(&points, &cone)), expected, "axis {axis}");
        }

        let cone = ConeQuery::new(Vec3::ZERO, Vec3::new(1.0, 3.0, 3.0), 100.0, 0.0, ());
        assert!(cone.contains_direction_to(Vec3::new(7.0, 21.0, 21.0)));
    }

    #[test]
    fn constructors_clamp_parameters() {
        let cone = ConeQuery::from_full_angle(Vec3::ZERO, Vec3::Z, 1.0, 90.0, ());
        assert_eq!(cone.half_angle(), 45.0);

        let cone = ConeQuery::new(Vec3::ZERO, Vec3::Z, -1.0, 270.0, ());
        assert_eq!(cone.radius(), 0.0);
        assert_eq!(cone.half_angle(), 180.0);

        let cone = ConeQuery::new(Vec3::ZERO, Vec3::Z, 3.0, -15.0, ());
        assert_eq!(cone.half_angle(), 0.0);
    }

    #[test]
    fn half_angle_180_matches_sphere_query() {
        let mut points = scattered(7, 200);
        points.points.push((1000, Vec3::new(1.0, 2.0, 3.0)));
        let origin = Vec3::new(1.0, 2.0, 3.0);

        let cone = ConeQuery::new(origin, Vec3::new(0.3, -1.0, 0.2), 8.0, 180.0, ());
        let sphere: HashSet<u32> = points
            .entities_in_sphere(origin, 8.0, &())
            .into_iter()
            .map(|(id, _)| id)
            .filter(|&id| id != 1000)
            .collect();

        assert_eq!(ids(overlap_cone(&points, &cone)), sphere);
    }

    #[test]
    fn half_angle_zero_is_empty_for_scattered_points() {
        let points = scattered(21, 500);
        let cone = ConeQuery::new(Vec3::ZERO, Vec3::new(0.2, 0.7, -0.4), 20.0, 0.0, ());

        assert!(overlap_cone(&points, &cone).is_empty());
    }

    #[test]
    fn point_at_origin_is_excluded() {
        let points = Points {
            points: vec![(0, Vec3::ONE), (1, Vec3::new(1.0, 1.0, 3.0))],
        };
        let cone = ConeQuery::new(Vec3::ONE, Vec3::Z, 5.0, 180.0, ());

        assert_eq!(ids(overlap_cone(&points, &cone)), HashSet::from([1]));
    }

    #[test]
    fn zero_direction_matches_nothing() {
        let points = scattered(3, 50);
        let cone = ConeQuery::new(Vec3::ZERO, Vec3::ZERO, 20.0, 180.0, ());

        assert!(overlap_cone(&points, &cone).is_empty());
    }

    #[test]
    fn direction_needs_no_normalization() {
        let points = scattered(5, 300);
        let short = ConeQuery::new(Vec3::ZERO, Vec3::new(0.0, 0.1, 0.1), 12.0, 40.0, ());
        let long = ConeQuery::new(Vec3::ZERO, Vec3::new(0.0, 30.0, 30.0), 12.0, 40.0, ());

        assert_eq!(ids(overlap_cone(&points, &short)), ids(overlap_cone(&points, &long)));
    }

    #[test]
    fn filter_is_passed_through() {
        let layered = Layered {
            points: vec![
                (0, 1, Vec3::new(0.0, 0.0, 2.0)),
                (1, 2, Vec3::new(0.0, 0.0, 3.0)),
            ],
        };

        let cone = ConeQuery::new(Vec3::ZERO, Vec3::Z, 5.0, 10.0, 2u8);
        assert_eq!(overlap_cone(&layered, &cone), vec![1]);
    }

    #[test]
    fn partition_covers_every_candidate() {
        let points = scattered(11, 300);
        let cone = ConeQuery::new(Vec3::ZERO, Vec3::X, 9.0, 60.0, ());

        let overlap = partition_cone(&points, &cone);
        let in_sphere = points.entities_in_sphere(Vec3::ZERO, 9.0, &()).len();
        assert_eq!(overlap.inside.len() + overlap.outside.len(), in_sphere);

        let inside: HashSet<u32> = overlap.inside.iter().map(|(id, _)| *id).collect();
        assert!(overlap.outside.iter().all(|(id, _)| !inside.contains(id)));
        assert!(overlap.inside.iter().all(|(_, p)| cone.contains_direction_to(*p)));
    }

    #[test]
    fn typed_variant_drops_unresolved() {
        let points = Points {
            points: vec![
                (0, Vec3::new(0.0, 0.0, 1.0)),
                (1, Vec3::new(0.0, 0.0, 2.0)),
                (2, Vec3::new(0.0, 0.0, 3.0)),
            ],
        };
        let cone = ConeQuery::new(Vec3::ZERO, Vec3::Z, 5.0, 15.0, ());

        let mut names: Vec<&str> = overlap_cone_with(&points, &cone, |id| match id {
            0 => Some("crate"),
            2 => Some("barrel"),
            _ => None,
        });
        names.sort();
        assert_eq!(names, vec!["barrel", "crate"]);
    }

    #[test]
    fn angle_between_handles_degenerate_vectors() {
        assert_eq!(angle_between_degrees(Vec3::ZERO, Vec3::X), None);
        assert_eq!(angle_between_degrees(Vec3::X, Vec3::ZERO), None);
        assert!((angle_between_degrees(Vec3::X, Vec3::Y).unwrap() - 90.0).abs() < 1e-4);
        assert!((angle_between_degrees(Vec3::X, Vec3::NEG_X).unwrap() - 180.0).abs() < 1e-4);
        assert_eq!(angle_between_degrees(Vec3::Z, Vec3::Z * 4.0), Some(0.0));
        assert_eq!(
            angle_between_degrees(Vec3::new(1.0, 3.0, 3.0), Vec3::new(7.0, 21.0, 21.0)),
            Some(0.0)
        );
        assert_eq!(
            angle_between_degrees(Vec3::new(2.0, 5.0, 3.0), Vec3::new(-4.0, -10.0, -6.0)),
            Some(180.0)
        );
    }
}
