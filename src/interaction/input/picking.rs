//! Pointer ray construction and sphere picking.
//!
//! The ray is built the same way the renderer unprojects a viewport point:
//! Bevy's perspective projection is reverse-Z with an infinite far plane, so
//! NDC depth 1 is the near plane and depth approaching 0 is far away.

use bevy::math::bounding::{BoundingSphere, RayCast3d};
use bevy::prelude::*;
use bevy::render::camera::CameraProjection;

use crate::core::components::BallId;

/// Window (client) coordinates, origin top-left, to normalized device coordinates.
#[inline]
pub fn client_to_ndc(client: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(
        (client.x / size.x) * 2.0 - 1.0,
        -((client.y / size.y) * 2.0 - 1.0),
    )
}

pub fn clip_from_view(projection: &Projection) -> Option<Mat4> {
    match projection {
        Projection::Perspective(p) => Some(p.get_clip_from_view()),
        Projection::Orthographic(o) => Some(o.get_clip_from_view()),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

/// Ray from the camera's near plane through `ndc`. `None` for degenerate matrices.
pub fn pointer_ray(ndc: Vec2, camera_tf: &GlobalTransform, clip_from_view: Mat4) -> Option<Ray3d> {
    let world_from_ndc = camera_tf.compute_matrix() * clip_from_view.inverse();
    let near = world_from_ndc.project_point3(ndc.extend(1.0));
    let far = world_from_ndc.project_point3(ndc.extend(f32::EPSILON));
    if !near.is_finite() || !far.is_finite() {
        return None;
    }
    let dir = Dir3::new(far - near).ok()?;
    Some(Ray3d::new(near, dir))
}

/// Nearest sphere hit by `ray`. Equal distances keep the earlier candidate.
pub fn pick_nearest<I>(ray: Ray3d, spheres: I) -> Option<(BallId, f32)>
where
    I: IntoIterator<Item = (BallId, Vec3, f32)>,
{
    let cast = RayCast3d::from_ray(ray, f32::MAX);
    let mut nearest: Option<(BallId, f32)> = None;
    for (id, center, radius) in spheres {
        let Some(d) = cast.sphere_intersection_at(&BoundingSphere::new(center, radius)) else {
            continue;
        };
        if nearest.is_none_or(|(_, best)| d < best) {
            nearest = Some((id, d));
        }
    }
    nearest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> (GlobalTransform, Mat4) {
        let tf = GlobalTransform::from(Transform::from_xyz(0.0, 3.0, 10.0));
        let proj = PerspectiveProjection {
            fov: 75f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            aspect_ratio: 16.0 / 9.0,
            ..default()
        };
        (tf, proj.get_clip_from_view())
    }

    fn world_to_ndc(p: Vec3, tf: &GlobalTransform, clip_from_view: Mat4) -> Vec2 {
        (clip_from_view * tf.compute_matrix().inverse())
            .project_point3(p)
            .truncate()
    }

    #[test]
    fn ndc_corners() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(client_to_ndc(Vec2::ZERO, size), Vec2::new(-1.0, 1.0));
        assert_eq!(client_to_ndc(size, size), Vec2::new(1.0, -1.0));
        assert_eq!(client_to_ndc(size / 2.0, size), Vec2::ZERO);
        assert!((client_to_ndc(Vec2::new(560.0, 0.0), size).x - 0.4).abs() < 1e-6);
    }

    #[test]
    fn center_ray_looks_down_negative_z() {
        let (tf, clip) = camera();
        let ray = pointer_ray(Vec2::ZERO, &tf, clip).unwrap();
        assert!((*ray.direction - Vec3::NEG_Z).length() < 1e-4, "{:?}", ray.direction);
        assert!((ray.origin - Vec3::new(0.0, 3.0, 9.9)).length() < 1e-3, "{:?}", ray.origin);
    }

    #[test]
    fn ray_through_projected_point_hits_it() {
        let (tf, clip) = camera();
        let target = Vec3::new(-0.6, 3.0, 0.0);
        let ndc = world_to_ndc(target, &tf, clip);
        let ray = pointer_ray(ndc, &tf, clip).unwrap();
        let hit = pick_nearest(ray, [(BallId(3), target, 0.5)]);
        assert_eq!(hit.map(|(id, _)| id), Some(BallId(3)));
    }

    #[test]
    fn nearest_sphere_wins() {
        let (tf, clip) = camera();
        let ray = pointer_ray(Vec2::ZERO, &tf, clip).unwrap();
        let far = (BallId(0), Vec3::new(0.0, 3.0, -5.0), 0.5);
        let near = (BallId(1), Vec3::new(0.0, 3.0, 0.0), 0.5);
        let (id, d) = pick_nearest(ray, [far, near]).unwrap();
        assert_eq!(id, BallId(1));
        assert!((d - 9.4).abs() < 1e-3, "distance {d}");
    }

    #[test]
    fn tie_keeps_first_candidate() {
        let (tf, clip) = camera();
        let ray = pointer_ray(Vec2::ZERO, &tf, clip).unwrap();
        let c = Vec3::new(0.0, 3.0, 0.0);
        let hit = pick_nearest(ray, [(BallId(4), c, 0.5), (BallId(2), c, 0.5)]);
        assert_eq!(hit.map(|(id, _)| id), Some(BallId(4)));
    }

    #[test]
    fn miss_returns_none() {
        let (tf, clip) = camera();
        let ray = pointer_ray(Vec2::new(0.95, 0.95), &tf, clip).unwrap();
        assert!(pick_nearest(ray, [(BallId(0), Vec3::new(0.0, 3.0, 0.0), 0.5)]).is_none());
    }
}
