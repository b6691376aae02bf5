use super::stats::{DebugState, DebugStats};
use bevy::prelude::*;

pub fn debug_logging_system(time: Res<Time>, mut state: ResMut<DebugState>, stats: Res<DebugStats>) {
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(
            "SIM frame={} ticks={} sim_t={:.2}s wall_t={:.2}s fps={:.1} ft_ms={:.1} drag={:?} height=[{:.2}, {:.2}]",
            state.frame_counter,
            stats.ticks,
            stats.simulated_secs,
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            stats.drag,
            stats.min_height,
            stats.max_height
        );
    }
}
