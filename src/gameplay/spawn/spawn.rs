use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::{BallBody, BallId, BallRadius, BallVisual, SurfaceMaterial};
use crate::core::config::{BallConfig, CradleConfig};
use crate::core::registry::{CradleEntry, CradleRegistry};
use crate::physics::contact::ContactRules;
use crate::rendering::materials::materials::{BallDisplayMaterials, BallMaterialsInitSet, BallMesh};
use crate::rendering::palette::palette::BALL_COUNT;

pub struct BallSpawnPlugin;

impl Plugin for BallSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CradleRegistry>()
            .init_resource::<ContactRules>()
            .add_systems(Startup, spawn_cradle.after(BallMaterialsInitSet));
    }
}

/// Resting row: evenly spaced along X, all at the same height, z = 0.
#[inline]
pub fn ball_start_position(cfg: &BallConfig, id: BallId) -> Vec3 {
    Vec3::new(id.0 as f32 * cfg.spacing + cfg.first_x, cfg.start_y, 0.0)
}

/// Spawns the physics body and the visual mesh of one ball at the same position.
pub fn spawn_ball_pair(
    commands: &mut Commands,
    id: BallId,
    cfg: &BallConfig,
    rules: &ContactRules,
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
) -> CradleEntry {
    let pos = ball_start_position(cfg, id);
    let (restitution, friction) = rules.collider_coefficients(SurfaceMaterial::Ball);

    let body = commands
        .spawn((
            Name::new(format!("BallBody{}", id.0)),
            BallBody(id),
            BallRadius(cfg.radius),
            SurfaceMaterial::Ball,
            RigidBody::Dynamic,
            Collider::ball(cfg.radius),
            ColliderMassProperties::Mass(cfg.mass),
            Velocity::zero(),
            Damping {
                linear_damping: cfg.linear_damping,
                angular_damping: cfg.angular_damping,
            },
            restitution,
            friction,
            Transform::from_translation(pos),
        ))
        .id();

    let visual = commands
        .spawn((
            Name::new(format!("BallVisual{}", id.0)),
            BallVisual(id),
            BallRadius(cfg.radius),
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(pos),
        ))
        .id();

    CradleEntry { id, body, visual }
}

fn spawn_cradle(
    mut commands: Commands,
    mesh: Res<BallMesh>,
    materials: Res<BallDisplayMaterials>,
    rules: Res<ContactRules>,
    cfg: Res<CradleConfig>,
) {
    let mut registry = CradleRegistry::default();
    for (i, material) in materials.0.iter().take(BALL_COUNT).enumerate() {
        let id = BallId(i as u8);
        let entry = spawn_ball_pair(
            &mut commands,
            id,
            &cfg.balls,
            &rules,
            mesh.0.clone(),
            material.clone(),
        );
        registry.insert(entry);
    }
    info!(balls = registry.len(), "cradle spawned");
    commands.insert_resource(registry);
}
