use std::collections::VecDeque;

use bevy::input::touch::TouchPhase;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::WindowEvent;
use bevy_rapier3d::prelude::*;

use super::picking::{clip_from_view, client_to_ndc, pick_nearest, pointer_ray};
use crate::core::components::{BallBody, BallId, BallRadius, BallVisual};
use crate::core::config::CradleConfig;
use crate::core::registry::CradleRegistry;
use crate::core::system::system_order::PointerInputSet;
use crate::rendering::camera::camera::CradleCamera;

pub struct InputInteractionPlugin;

impl Plugin for InputInteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<WindowEvent>()
            .init_resource::<PointerQueue>()
            .init_resource::<DragState>()
            .add_systems(
                Update,
                (collect_pointer_events, drain_pointer_events)
                    .chain()
                    .in_set(PointerInputSet),
            );
    }
}

/// Pointer input in normalized device coordinates (x right, y up, -1..1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { ndc: Vec2 },
    Move { ndc: Vec2 },
    Up,
}

/// FIFO of pointer events, drained once per frame before the physics step.
#[derive(Resource, Default, Debug)]
pub struct PointerQueue {
    incoming: VecDeque<PointerEvent>,
}

impl PointerQueue {
    pub fn push(&mut self, ev: PointerEvent) {
        self.incoming.push_back(ev);
    }
    pub fn drain(&mut self) -> impl Iterator<Item = PointerEvent> + '_ {
        self.incoming.drain(..)
    }
    pub fn len(&self) -> usize {
        self.incoming.len()
    }
    pub fn is_empty(&self) -> bool {
        self.incoming.is_empty()
    }
}

#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(BallId),
}

impl DragState {
    /// A hit always selects the hit ball; a miss leaves the state as it was.
    pub fn on_down(&mut self, hit: Option<BallId>) {
        if let Some(id) = hit {
            *self = DragState::Dragging(id);
        }
    }
    pub fn on_up(&mut self) {
        *self = DragState::Idle;
    }
    pub fn dragging(&self) -> Option<BallId> {
        match *self {
            DragState::Dragging(id) => Some(id),
            DragState::Idle => None,
        }
    }
}

/// Translates window events into [`PointerEvent`]s, preserving arrival order.
pub fn collect_pointer_events(
    mut window_events: EventReader<WindowEvent>,
    windows: Query<&Window>,
    mut last_cursor: Local<Option<Vec2>>,
    mut queue: ResMut<PointerQueue>,
) {
    let ndc_in = |window: Entity, pos: Vec2| -> Option<Vec2> {
        let w = windows.get(window).ok()?;
        let size = Vec2::new(w.width(), w.height());
        (size.x > 0.0 && size.y > 0.0).then(|| client_to_ndc(pos, size))
    };
    for ev in window_events.read() {
        match ev {
            WindowEvent::CursorMoved(m) => {
                *last_cursor = Some(m.position);
                if let Some(ndc) = ndc_in(m.window, m.position) {
                    queue.push(PointerEvent::Move { ndc });
                }
            }
            WindowEvent::MouseButtonInput(b) => match b.state {
                ButtonState::Pressed => {
                    let pos = last_cursor.or_else(|| {
                        windows.get(b.window).ok().and_then(Window::cursor_position)
                    });
                    match pos.and_then(|p| ndc_in(b.window, p)) {
                        Some(ndc) => queue.push(PointerEvent::Down { ndc }),
                        None => trace!("pointer down without a known cursor position"),
                    }
                }
                ButtonState::Released => queue.push(PointerEvent::Up),
            },
            WindowEvent::TouchInput(t) => {
                let ndc = ndc_in(t.window, t.position);
                match (t.phase, ndc) {
                    (TouchPhase::Started, Some(ndc)) => {
                        *last_cursor = Some(t.position);
                        queue.push(PointerEvent::Down { ndc });
                    }
                    (TouchPhase::Moved, Some(ndc)) => {
                        *last_cursor = Some(t.position);
                        queue.push(PointerEvent::Move { ndc });
                    }
                    (TouchPhase::Ended | TouchPhase::Canceled, _) => queue.push(PointerEvent::Up),
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

/// Applies queued pointer events: pick on down, drag override on move, release on up.
pub fn drain_pointer_events(
    mut queue: ResMut<PointerQueue>,
    mut drag: ResMut<DragState>,
    registry: Res<CradleRegistry>,
    cfg: Res<CradleConfig>,
    camera_q: Query<(&GlobalTransform, &Projection), With<CradleCamera>>,
    visuals: Query<(&Transform, &BallRadius), (With<BallVisual>, Without<BallBody>)>,
    mut bodies: Query<(&mut Transform, &mut Velocity), (With<BallBody>, Without<BallVisual>)>,
) {
    if queue.is_empty() {
        return;
    }
    let drag_cfg = &cfg.interactions.drag;
    for ev in queue.drain() {
        match ev {
            PointerEvent::Down { ndc } => {
                if !drag_cfg.enabled {
                    continue;
                }
                let Ok((cam_tf, projection)) = camera_q.single() else {
                    warn!("pointer down ignored: no cradle camera");
                    continue;
                };
                let Some(ray) = clip_from_view(projection).and_then(|m| pointer_ray(ndc, cam_tf, m))
                else {
                    continue;
                };
                let candidates = registry.iter().filter_map(|e| {
                    visuals
                        .get(e.visual)
                        .ok()
                        .map(|(tf, r)| (e.id, tf.translation, r.0))
                });
                let hit = pick_nearest(ray, candidates);
                if let Some((id, distance)) = hit {
                    debug!(ball = id.0, distance, "drag started");
                }
                drag.on_down(hit.map(|(id, _)| id));
            }
            PointerEvent::Move { ndc } => {
                let Some(id) = drag.dragging() else {
                    continue;
                };
                let Some(entry) = registry.get(id) else {
                    continue;
                };
                if let Ok((mut tf, mut vel)) = bodies.get_mut(entry.body) {
                    tf.translation.x = ndc.x * drag_cfg.scale;
                    vel.linvel = Vec3::ZERO;
                }
            }
            PointerEvent::Up => {
                if let Some(id) = drag.dragging() {
                    debug!(ball = id.0, "drag released");
                }
                drag.on_up();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_hit_enters_dragging() {
        let mut s = DragState::Idle;
        s.on_down(Some(BallId(3)));
        assert_eq!(s, DragState::Dragging(BallId(3)));
    }

    #[test]
    fn down_miss_keeps_state() {
        let mut s = DragState::Idle;
        s.on_down(None);
        assert_eq!(s, DragState::Idle);
        let mut s = DragState::Dragging(BallId(1));
        s.on_down(None);
        assert_eq!(s, DragState::Dragging(BallId(1)));
    }

    #[test]
    fn up_is_idempotent() {
        let mut s = DragState::Dragging(BallId(2));
        s.on_up();
        assert_eq!(s, DragState::Idle);
        s.on_up();
        assert_eq!(s, DragState::Idle);
    }

    #[test]
    fn queue_drains_in_order() {
        let mut q = PointerQueue::default();
        q.push(PointerEvent::Down { ndc: Vec2::ZERO });
        q.push(PointerEvent::Move { ndc: Vec2::X });
        q.push(PointerEvent::Up);
        let got: Vec<_> = q.drain().collect();
        assert_eq!(
            got,
            vec![
                PointerEvent::Down { ndc: Vec2::ZERO },
                PointerEvent::Move { ndc: Vec2::X },
                PointerEvent::Up
            ]
        );
        assert!(q.is_empty());
    }
}
