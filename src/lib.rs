//! # bevy_scripting_tools
//!
//! Small helpers for gameplay scripts in Bevy apps using Avian3D physics.
//!
//! - [`sampling`]: weighted and shuffle-on-pick random selection
//! - [`angles`]: wraparound angle ranges and direction/angle conversion
//! - [`physics`]: cone-shaped overlap queries on top of a sphere query
//! - [`math`], [`color`], [`text`]: numeric, color and string shortcuts
//!
//! ## Quick Start
//!
//! ```no_run
//! use avian3d::prelude::*;
//! use bevy::prelude::*;
//! use bevy_scripting_tools::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(PhysicsPlugins::default())
//!         .add_plugins(ScriptingToolsPlugin {
//!             seed: Some(42),
//!             debug_draw: true,
//!         })
//!         .run();
//! }
//! ```
//!
//! Every random helper takes its generator as a parameter. Systems can borrow
//! the shared one:
//!
//! ```ignore
//! fn pick_loot(mut rng: ResMut<ToolsRng>) {
//!     let loot = [("coin", 10), ("gem", 2), ("relic", 1)];
//!     if let Ok(item) = weighted_random_from_pairs(loot, &mut *rng) {
//!         info!("Dropped {item}");
//!     }
//! }
//! ```

pub mod angles;
pub mod color;
pub mod debug;
pub mod error;
pub mod math;
pub mod physics;
pub mod random;
pub mod sampling;
pub mod sensor;
pub mod text;

use bevy::gizmos::config::GizmoConfigStore;
use bevy::prelude::*;

pub use debug::ConeDebugSettings;
pub use error::{ColorError, SamplingError};
pub use physics::{ConeOverlap, ConeQuery, PhysicsSphereQuery, SphereQuery};
pub use random::{RandomSource, ToolsRng};
pub use sampling::WeightedValue;
pub use sensor::{ConeSensor, ConeSensorHits};

/// Convenient re-exports of commonly used types.
pub mod prelude {
    pub use crate::angles::{
        angle_is_between, angle_to_direction, direction_to_angle, normalize_degrees,
    };
    pub use crate::debug::ConeDebugSettings;
    pub use crate::error::{ColorError, SamplingError};
    pub use crate::physics::{
        overlap_cone, overlap_cone_with, ConeOverlap, ConeQuery, PhysicsSphereQuery, SphereQuery,
    };
    pub use crate::random::{RandomSource, ToolsRng};
    pub use crate::sampling::{
        pick_and_shuffle, pick_uniform, weighted_pick, weighted_random, weighted_random_from_pairs,
        WeightedValue,
    };
    pub use crate::sensor::{ConeSensor, ConeSensorHits};
    pub use crate::ScriptingToolsPlugin;
}

/// Plugin installing the shared generator, cone debug settings and cone sensors.
///
/// Physics is not added here; add `PhysicsPlugins` alongside it. Cone sensor
/// drawing needs gizmos (part of `DefaultPlugins`) and is skipped in apps
/// without them, e.g. headless servers on `MinimalPlugins`.
#[derive(Clone, Debug, Default)]
pub struct ScriptingToolsPlugin {
    /// Seed for [`ToolsRng`]. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Start with cone debug drawing enabled.
    pub debug_draw: bool,
}

impl Plugin for ScriptingToolsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ToolsRng::new(self.seed))
            .insert_resource(ConeDebugSettings {
                enabled: self.debug_draw,
                ..default()
            })
            .register_type::<ConeDebugSettings>()
            .register_type::<ConeSensor>()
            .register_type::<ConeSensorHits>()
            .add_systems(Update, sensor::update_cone_sensors);

        match self.seed {
            Some(seed) => info!("Scripting tools: random source seeded with {seed}"),
            None => debug!("Scripting tools: random source seeded from entropy"),
        }
    }

    fn finish(&self, app: &mut App) {
        if !app.world().contains_resource::<GizmoConfigStore>() {
            debug!("Scripting tools: no gizmos in this app, cone debug drawing disabled");
            return;
        }

        app.add_systems(
            Update,
            sensor::draw_cone_sensors
                .after(sensor::update_cone_sensors)
                .run_if(|settings: Res<ConeDebugSettings>| settings.enabled),
        );
    }
}
