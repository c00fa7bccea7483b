//! A rotating cone sensor sweeping over a ring of props.
//!
//! Run with: `cargo run --example cone_sensor`
//!
//! Props are picked with weighted random selection from a seeded generator,
//! so the layout is the same on every run. Rays from the sensor are green for
//! props inside the cone and red for props in range but outside it.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy_scripting_tools::angles::angle_to_direction;
use bevy_scripting_tools::color::palette;
use bevy_scripting_tools::prelude::*;

/// Degrees per second the sensor turns
const SWEEP_SPEED: f32 = 45.0;
const PROP_COUNT: usize = 16;
const RING_RADIUS: f32 = 6.0;

#[derive(Component)]
struct Sweeping;

#[derive(Clone, Copy)]
enum Prop {
    Crate,
    Barrel,
    Pillar,
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Scripting Tools - Cone Sensor".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins(ScriptingToolsPlugin {
            seed: Some(7),
            debug_draw: true,
        })
        .add_systems(Startup, setup)
        .add_systems(Update, (sweep, report_hits))
        .run();
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rng: ResMut<ToolsRng>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 14.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight::default(),
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -1.0, 0.4, 0.0)),
    ));

    let props = [
        WeightedValue::new(Prop::Crate, 5),
        WeightedValue::new(Prop::Barrel, 3),
        WeightedValue::new(Prop::Pillar, 1),
    ];
    let tints = [palette::ORANGE, palette::TEAL, palette::SILVER, palette::MAROON];

    for i in 0..PROP_COUNT {
        let Ok(prop) = weighted_pick(&props, &mut *rng) else {
            continue;
        };
        let tint = pick_uniform(&tints, &mut *rng).copied().unwrap_or(palette::GREY);

        let angle = i as f32 * 360.0 / PROP_COUNT as f32;
        let ring = angle_to_direction(angle) * RING_RADIUS;
        let (mesh, collider, height) = match prop {
            Prop::Crate => (
                Mesh::from(Cuboid::from_length(1.0)),
                Collider::cuboid(1.0, 1.0, 1.0),
                0.5,
            ),
            Prop::Barrel => (
                Mesh::from(Cylinder::new(0.4, 1.2)),
                Collider::cylinder(0.4, 1.2),
                0.6,
            ),
            Prop::Pillar => (
                Mesh::from(Cylinder::new(0.3, 3.0)),
                Collider::cylinder(0.3, 3.0),
                1.5,
            ),
        };

        commands.spawn((
            Name::new(format!("Prop {i}")),
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(materials.add(tint)),
            Transform::from_xyz(ring.x, height, ring.y),
            RigidBody::Static,
            collider,
        ));
    }

    commands.spawn((
        Name::new("Sensor"),
        Sweeping,
        Transform::from_xyz(0.0, 0.5, 0.0),
        ConeSensor::new(RING_RADIUS + 1.0, 60.0),
    ));
}

fn sweep(time: Res<Time>, mut sensors: Query<&mut Transform, With<Sweeping>>) {
    for mut transform in &mut sensors {
        transform.rotate_y((SWEEP_SPEED * time.delta_secs()).to_radians());
    }
}

fn report_hits(
    sensors: Query<(&Name, &ConeSensorHits), Changed<ConeSensorHits>>,
    names: Query<&Name>,
) {
    for (sensor, hits) in &sensors {
        let seen: Vec<&str> = hits
            .iter()
            .filter_map(|entity| names.get(*entity).ok().map(Name::as_str))
            .collect();
        info!("{sensor} sees {seen:?}");
    }
}
