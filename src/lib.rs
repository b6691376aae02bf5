pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;
pub mod simulation;

// Curated re-exports
pub use crate::app::game::{ConfigReport, CradlePlugin};
pub use crate::core::components::{BallBody, BallId, BallRadius, BallVisual, Boundary, SurfaceMaterial};
pub use crate::core::config::CradleConfig;
pub use crate::core::registry::{CradleEntry, CradleRegistry};
pub use crate::interaction::input::input_interaction::{DragState, PointerEvent, PointerQueue};
pub use crate::simulation::SimulationClock;
