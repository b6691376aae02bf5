use bevy::prelude::*;

/// Stable identifier shared by a ball's physics body and its visual mesh.
#[derive(Component, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BallId(pub u8);

/// Marker for the physics half of a ball (rigid body + collider).
#[derive(Component, Debug, Copy, Clone)]
pub struct BallBody(pub BallId);

/// Marker for the rendered sphere. Its transform is written only by the sync step.
#[derive(Component, Debug, Copy, Clone)]
pub struct BallVisual(pub BallId);

/// Logical radius used both for the collider and for ray picking against the mesh.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BallRadius(pub f32);

/// Surface tag used to look up the contact rule between two touching bodies.
#[derive(Component, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SurfaceMaterial {
    Ball,
    Ground,
    Wall,
}

/// Tag for immovable bodies bounding the balls' travel range.
#[derive(Component, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Boundary {
    Ground,
    Bottom,
    Left,
    Right,
}
