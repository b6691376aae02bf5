use bevy::prelude::*;

use crate::core::system::system_order::PointerInputSet;
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::gameplay::spawn::spawn::BallSpawnPlugin;
use crate::interaction::input::input_interaction::InputInteractionPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::rapier::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::camera::camera::CameraPlugin;
use crate::rendering::materials::materials::MaterialsPlugin;
use crate::simulation::SimulationPlugin;

/// Outcome of layered config loading, reported once at startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub struct CradlePlugin;

impl Plugin for CradlePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, PointerInputSet)
            .add_plugins((
                CameraPlugin,
                MaterialsPlugin,
                PhysicsSetupPlugin,
                BallSpawnPlugin,
                InputInteractionPlugin,
                SimulationPlugin,
                AutoClosePlugin,
                #[cfg(feature = "debug")]
                DebugPlugin,
            ))
            .add_systems(Startup, log_config_report);
    }
}

fn log_config_report(report: Option<Res<ConfigReport>>) {
    let Some(report) = report else {
        return;
    };
    if report.used.is_empty() {
        info!("no config layers loaded; using defaults");
    } else {
        info!("config layers: {}", report.used.join(", "));
    }
    for e in &report.errors {
        warn!("config error: {e}");
    }
    for w in &report.warnings {
        warn!("config warning: {w}");
    }
}
