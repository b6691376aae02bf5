use bevy::prelude::*;

use crate::core::components::{BallBody, BallVisual};
use crate::core::config::CradleConfig;
use crate::core::registry::CradleRegistry;

/// Counts completed physics-to-render synchronizations.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    pub ticks: u64,
    pub simulated_secs: f64,
}

impl SimulationClock {
    pub fn advance(&mut self, dt: f32) {
        self.ticks += 1;
        self.simulated_secs += dt as f64;
    }
}

/// Copies every body translation verbatim onto its visual. Rotation is not copied.
pub fn sync_visuals_from_bodies(
    registry: Res<CradleRegistry>,
    bodies: Query<&Transform, (With<BallBody>, Without<BallVisual>)>,
    mut visuals: Query<&mut Transform, (With<BallVisual>, Without<BallBody>)>,
    mut clock: ResMut<SimulationClock>,
    cfg: Res<CradleConfig>,
) {
    for entry in registry.iter() {
        let (Ok(body), Ok(mut visual)) = (bodies.get(entry.body), visuals.get_mut(entry.visual))
        else {
            continue;
        };
        visual.translation = body.translation;
    }
    clock.advance(cfg.solver.dt());
}
