//! Static part of the physics world: ground plane plus the three boxes that
//! keep the balls in range. None of these bodies has a visual mesh.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::contact::ContactRules;
use crate::core::components::{Boundary, SurfaceMaterial};

/// Depth (Z extent) of every boundary box.
pub const BOUNDARY_THICKNESS: f32 = 0.2;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundarySpec {
    pub kind: Boundary,
    pub center: Vec3,
    pub width: f32,
    pub height: f32,
}

impl BoundarySpec {
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.width / 2.0, self.height / 2.0, BOUNDARY_THICKNESS / 2.0)
    }
}

pub const BOUNDARIES: [BoundarySpec; 3] = [
    BoundarySpec {
        kind: Boundary::Bottom,
        center: Vec3::new(0.0, 0.2, 0.0),
        width: 10.0,
        height: 1.0,
    },
    BoundarySpec {
        kind: Boundary::Left,
        center: Vec3::new(-5.0, 1.0, 0.0),
        width: 1.0,
        height: 5.0,
    },
    BoundarySpec {
        kind: Boundary::Right,
        center: Vec3::new(5.0, 1.0, 0.0),
        width: 1.0,
        height: 5.0,
    },
];

/// Plane collider facing +Z, turned so its normal points up (+Y).
pub fn ground_rotation() -> Quat {
    Quat::from_rotation_x(-FRAC_PI_2)
}

pub fn spawn_boundaries(mut commands: Commands, rules: Res<ContactRules>) {
    match Collider::halfspace(Vec3::Z) {
        Some(plane) => {
            let (restitution, friction) = rules.collider_coefficients(SurfaceMaterial::Ground);
            commands.spawn((
                Name::new("Ground"),
                Boundary::Ground,
                SurfaceMaterial::Ground,
                RigidBody::Fixed,
                plane,
                restitution,
                friction,
                Transform::from_rotation(ground_rotation()),
            ));
        }
        None => warn!("ground half-space normal rejected; balls will fall forever"),
    }

    let (restitution, friction) = rules.collider_coefficients(SurfaceMaterial::Wall);
    for spec in BOUNDARIES {
        let he = spec.half_extents();
        commands.spawn((
            Name::new(format!("Boundary{:?}", spec.kind)),
            spec.kind,
            SurfaceMaterial::Wall,
            RigidBody::Fixed,
            Collider::cuboid(he.x, he.y, he.z),
            restitution,
            friction,
            Transform::from_translation(spec.center),
        ));
    }
    debug!(count = BOUNDARIES.len() + 1, "static boundaries spawned");
}
