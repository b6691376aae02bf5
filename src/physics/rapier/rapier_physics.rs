use std::num::NonZeroUsize;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::config::CradleConfig;
use crate::physics::contact::ContactRules;
use crate::physics::world::spawn_boundaries;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & the static world

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let rapier_debug = app
            .world()
            .get_resource::<CradleConfig>()
            .is_some_and(|c| c.rapier_debug);
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .init_resource::<ContactRules>()
            .add_systems(Startup, (configure_world, spawn_boundaries));
        if rapier_debug {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

/// Physics step advanced on every frame: fixed `dt`, one substep.
pub fn fixed_timestep(cfg: &CradleConfig) -> TimestepMode {
    TimestepMode::Fixed {
        dt: cfg.solver.dt(),
        substeps: 1,
    }
}

fn configure_world(
    mut commands: Commands,
    mut q_ctx: Query<
        (&mut RapierConfiguration, &mut RapierContextSimulation),
        With<DefaultRapierContext>,
    >,
    cfg: Res<CradleConfig>,
) {
    let timestep = fixed_timestep(&cfg);
    commands.insert_resource(timestep);
    // Frame time is not fed back into the step; slow frames slow the simulation down.
    info!(
        dt = cfg.solver.dt(),
        "physics advances a fixed {:.4}s per frame regardless of frame duration",
        cfg.solver.dt()
    );

    let Ok((mut rapier_cfg, mut sim)) = q_ctx.single_mut() else {
        warn!("default Rapier context missing; gravity and solver left at engine defaults");
        return;
    };
    rapier_cfg.gravity = Vect::new(0.0, cfg.gravity.y, 0.0);
    let iterations = NonZeroUsize::new(cfg.solver.iterations).unwrap_or(NonZeroUsize::MIN);
    sim.integration_parameters.num_solver_iterations = iterations;
    info!(
        gravity = cfg.gravity.y,
        iterations = iterations.get(),
        "physics world configured"
    );
}
