//! Debug module: feature gated stats collection & periodic logging.
//! Built only when compiled with `--features debug` (on by default).

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use logging::debug_logging_system;
#[cfg(feature = "debug")]
pub use stats::{debug_stats_collect_system, DebugState, DebugStats};

#[cfg(feature = "debug")]
use crate::core::system::system_order::PostPhysicsSyncSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .init_resource::<DebugStats>()
            .add_systems(
                PostUpdate,
                (debug_stats_collect_system, debug_logging_system)
                    .chain()
                    .after(PostPhysicsSyncSet),
            );
    }
}
