//! Central system ordering labels to make the per-tick sequence explicit.
//! Stages (high-level):
//! 1. PointerInput (Update: collect window events, drain queue, mutate bodies)
//! 2. Rapier (PostUpdate, handled by plugin; fixed 1/60 s step)
//! 3. PostPhysicsSync (PostUpdate: body translation -> visual translation)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PointerInputSet; // pointer queue drained before the physics step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsSyncSet; // copy of physics state onto meshes after writeback
