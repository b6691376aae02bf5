use crate::core::components::BallVisual;
use crate::interaction::input::input_interaction::DragState;
use crate::simulation::SimulationClock;
use bevy::prelude::*;

#[derive(Resource)]
pub struct DebugState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[derive(Resource, Default, Debug, Clone)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub ticks: u64,
    pub simulated_secs: f64,
    pub drag: Option<u8>,
    pub min_height: f32,
    pub max_height: f32,
}

pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    clock: Res<SimulationClock>,
    drag: Res<DragState>,
    q_visuals: Query<&Transform, With<BallVisual>>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
    }
    let inst_ms = dt * 1000.0;
    if stats.frame_time_ms == 0.0 {
        stats.frame_time_ms = inst_ms;
    } else {
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    stats.ticks = clock.ticks;
    stats.simulated_secs = clock.simulated_secs;
    stats.drag = drag.dragging().map(|id| id.0);
    let (min_h, max_h) = q_visuals
        .iter()
        .map(|tf| tf.translation.y)
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });
    stats.min_height = min_h;
    stats.max_height = max_h;
}
