use crate::core::config::CradleConfig;
use crate::rendering::palette::palette::{color_for_index, BALL_COUNT};
use bevy::prelude::*;

// System set to ensure the shared mesh and palette materials exist before balls spawn.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct BallMaterialsInitSet;

/// One standard material per palette entry, indexed like `CRADLE_COLORS`.
#[derive(Resource)]
pub struct BallDisplayMaterials(pub Vec<Handle<StandardMaterial>>);

/// Sphere geometry shared by every ball visual.
#[derive(Resource)]
pub struct BallMesh(pub Handle<Mesh>);

pub struct MaterialsPlugin;

impl Plugin for MaterialsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ball_materials.in_set(BallMaterialsInitSet));
    }
}

fn setup_ball_materials(
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<CradleConfig>,
    mut commands: Commands,
) {
    let res = cfg.balls.mesh_resolution.max(3);
    let sphere = Sphere::new(cfg.balls.radius).mesh().uv(res, res);
    commands.insert_resource(BallMesh(meshes.add(sphere)));

    let display_handles = (0..BALL_COUNT)
        .map(|i| {
            materials.add(StandardMaterial {
                base_color: color_for_index(i),
                ..default()
            })
        })
        .collect();
    commands.insert_resource(BallDisplayMaterials(display_handles));
}
