//! Per-frame driver. Bevy's winit runner calls it once per display refresh:
//! pointer events are drained in `Update`, Rapier steps a fixed `dt` in
//! `PostUpdate`, then visuals are synced before transform propagation and
//! rendering.

pub mod sync;

use bevy::prelude::*;
use bevy::transform::TransformSystem;
use bevy_rapier3d::prelude::PhysicsSet;

use crate::core::system::system_order::PostPhysicsSyncSet;
pub use sync::{sync_visuals_from_bodies, SimulationClock};

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .configure_sets(
                PostUpdate,
                PostPhysicsSyncSet
                    .after(PhysicsSet::Writeback)
                    .before(TransformSystem::TransformPropagate),
            )
            .add_systems(
                PostUpdate,
                sync_visuals_from_bodies.in_set(PostPhysicsSyncSet),
            );
    }
}
