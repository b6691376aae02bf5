//! Unattended runs: ends the session after `window.autoClose` seconds of
//! wall-clock time (disabled when <= 0) and reports how far the simulation got.

use crate::core::config::CradleConfig;
use crate::simulation::SimulationClock;
use bevy::prelude::*;

/// Wall-clock budget of the current session.
#[derive(Resource, Debug)]
pub struct SessionDeadline {
    timer: Timer,
}

impl SessionDeadline {
    pub fn after_secs(secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(secs, TimerMode::Once),
        }
    }

    pub fn remaining_secs(&self) -> f32 {
        self.timer.remaining_secs()
    }
}

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_session_deadline).add_systems(
            Update,
            end_session_at_deadline.run_if(resource_exists::<SessionDeadline>),
        );
    }
}

fn arm_session_deadline(mut commands: Commands, cfg: Res<CradleConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "session ends automatically after {secs}s");
        commands.insert_resource(SessionDeadline::after_secs(secs));
    }
}

fn end_session_at_deadline(
    mut commands: Commands,
    time: Res<Time>,
    mut deadline: ResMut<SessionDeadline>,
    clock: Option<Res<SimulationClock>>,
    mut exit: EventWriter<AppExit>,
) {
    if !deadline.timer.tick(time.delta()).just_finished() {
        return;
    }
    match clock {
        Some(clock) => info!(
            ticks = clock.ticks,
            simulated_secs = clock.simulated_secs,
            "session deadline reached; exiting"
        ),
        None => info!("session deadline reached; exiting"),
    }
    exit.write(AppExit::Success);
    commands.remove_resource::<SessionDeadline>();
}
