use bevy::prelude::*;

use crate::core::config::CradleConfig;

/// Marker for the camera pointer rays are cast from.
#[derive(Component, Debug, Default)]
pub struct CradleCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, (setup_camera, setup_lighting));
    }
}

pub fn camera_projection(cfg: &CradleConfig) -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: cfg.camera.fov_degrees.to_radians(),
        near: cfg.camera.near,
        far: cfg.camera.far,
        ..default()
    })
}

fn setup_camera(mut commands: Commands, cfg: Res<CradleConfig>) {
    // Looks down -Z from its position; no look-at target.
    commands.spawn((
        Name::new("CradleCamera"),
        CradleCamera,
        Camera3d::default(),
        camera_projection(&cfg),
        Transform::from_translation(cfg.camera.translation()),
    ));
}

fn setup_lighting(mut commands: Commands, cfg: Res<CradleConfig>) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: cfg.camera.ambient_brightness,
        ..default()
    });
}
