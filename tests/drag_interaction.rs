use bevy::input::mouse::{MouseButton, MouseButtonInput};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::{CursorMoved, WindowEvent, WindowResolution};
use bevy_rapier3d::prelude::Velocity;
use newtons_cradle::core::components::BallId;
use newtons_cradle::gameplay::spawn::spawn::BallSpawnPlugin;
use newtons_cradle::interaction::input::input_interaction::InputInteractionPlugin;
use newtons_cradle::interaction::input::picking::clip_from_view;
use newtons_cradle::rendering::camera::camera::{CameraPlugin, CradleCamera};
use newtons_cradle::rendering::materials::materials::MaterialsPlugin;
use newtons_cradle::simulation::SimulationPlugin;
use newtons_cradle::{CradleConfig, CradleRegistry, DragState, PointerEvent, PointerQueue};

// No Rapier here: bodies only move when the drag override writes them.
fn drag_app(cfg: CradleConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, TransformPlugin))
        .init_resource::<Assets<Mesh>>()
        .init_resource::<Assets<StandardMaterial>>()
        .insert_resource(cfg)
        .add_plugins((
            CameraPlugin,
            MaterialsPlugin,
            BallSpawnPlugin,
            InputInteractionPlugin,
            SimulationPlugin,
        ));
    // Startup, then one frame so the camera has a propagated GlobalTransform.
    app.update();
    app
}

fn world_to_ndc(app: &mut App, p: Vec3) -> Vec2 {
    let mut q = app
        .world_mut()
        .query_filtered::<(&GlobalTransform, &Projection), With<CradleCamera>>();
    let (tf, projection) = q.single(app.world()).expect("one camera");
    let clip_from_view = clip_from_view(projection).expect("perspective camera");
    (clip_from_view * tf.compute_matrix().inverse())
        .project_point3(p)
        .truncate()
}

fn ball_center(app: &App, id: u8) -> Vec3 {
    let entry = *app
        .world()
        .resource::<CradleRegistry>()
        .get(BallId(id))
        .expect("registered ball");
    app.world()
        .get::<Transform>(entry.visual)
        .expect("visual transform")
        .translation
}

fn body_state(app: &App, id: u8) -> (Vec3, Vec3) {
    let entry = *app
        .world()
        .resource::<CradleRegistry>()
        .get(BallId(id))
        .expect("registered ball");
    let tf = app.world().get::<Transform>(entry.body).expect("body transform");
    let vel = app.world().get::<Velocity>(entry.body).expect("body velocity");
    (tf.translation, vel.linvel)
}

fn push(app: &mut App, ev: PointerEvent) {
    app.world_mut().resource_mut::<PointerQueue>().push(ev);
}

#[test]
fn down_on_ball_then_move_sets_x_and_zeroes_velocity() {
    let mut app = drag_app(CradleConfig::default());
    let target = ball_center(&app, 3);
    let ndc = world_to_ndc(&mut app, target);
    push(&mut app, PointerEvent::Down { ndc });
    app.update();
    assert_eq!(*app.world().resource::<DragState>(), DragState::Dragging(BallId(3)));

    // Give the body some velocity; the move must clear it.
    {
        let entry = *app.world().resource::<CradleRegistry>().get(BallId(3)).unwrap();
        let mut vel = app.world_mut().get_mut::<Velocity>(entry.body).unwrap();
        vel.linvel = Vec3::new(1.0, -2.0, 0.5);
    }
    push(&mut app, PointerEvent::Move { ndc: Vec2::new(0.4, -0.9) });
    app.update();
    let (pos, linvel) = body_state(&app, 3);
    assert!((pos.x - 2.0).abs() < 1e-5, "x = {}", pos.x);
    assert_eq!(pos.y, target.y, "drag only writes x");
    assert_eq!(linvel, Vec3::ZERO);
    // Visual follows the body within the same frame.
    assert_eq!(ball_center(&app, 3), pos);
    assert_eq!(app.world().resource::<PointerQueue>().len(), 0);
}

#[test]
fn move_while_idle_changes_nothing() {
    let mut app = drag_app(CradleConfig::default());
    let before: Vec<_> = (0..7).map(|i| body_state(&app, i)).collect();
    push(&mut app, PointerEvent::Move { ndc: Vec2::new(0.8, 0.0) });
    app.update();
    let after: Vec<_> = (0..7).map(|i| body_state(&app, i)).collect();
    assert_eq!(before, after);
    assert_eq!(*app.world().resource::<DragState>(), DragState::Idle);
}

#[test]
fn miss_leaves_drag_state_untouched() {
    let mut app = drag_app(CradleConfig::default());
    // Straight ahead from the camera falls in the gap between balls 3 and 4.
    push(&mut app, PointerEvent::Down { ndc: Vec2::ZERO });
    app.update();
    assert_eq!(*app.world().resource::<DragState>(), DragState::Idle);

    let target = ball_center(&app, 5);
    let ndc = world_to_ndc(&mut app, target);
    push(&mut app, PointerEvent::Down { ndc });
    push(&mut app, PointerEvent::Down { ndc: Vec2::new(0.0, 0.95) });
    app.update();
    assert_eq!(*app.world().resource::<DragState>(), DragState::Dragging(BallId(5)));
}

#[test]
fn up_releases_and_is_idempotent() {
    let mut app = drag_app(CradleConfig::default());
    let target = ball_center(&app, 0);
    let ndc = world_to_ndc(&mut app, target);
    push(&mut app, PointerEvent::Down { ndc });
    push(&mut app, PointerEvent::Up);
    push(&mut app, PointerEvent::Up);
    app.update();
    assert_eq!(*app.world().resource::<DragState>(), DragState::Idle);

    let (before, _) = body_state(&app, 0);
    push(&mut app, PointerEvent::Move { ndc: Vec2::new(0.5, 0.0) });
    app.update();
    assert_eq!(body_state(&app, 0).0, before);
}

#[test]
fn drag_disabled_ignores_down() {
    let mut cfg = CradleConfig::default();
    cfg.interactions.drag.enabled = false;
    let mut app = drag_app(cfg);
    let target = ball_center(&app, 2);
    let ndc = world_to_ndc(&mut app, target);
    push(&mut app, PointerEvent::Down { ndc });
    app.update();
    assert_eq!(*app.world().resource::<DragState>(), DragState::Idle);
}

#[test]
fn window_events_drive_the_same_drag() {
    let mut app = drag_app(CradleConfig::default());
    let window = app
        .world_mut()
        .spawn(Window {
            resolution: WindowResolution::new(800.0, 600.0),
            ..default()
        })
        .id();
    let size = Vec2::new(800.0, 600.0);
    let to_client = |ndc: Vec2| Vec2::new((ndc.x + 1.0) * 0.5 * size.x, (1.0 - ndc.y) * 0.5 * size.y);

    let target = ball_center(&app, 4);
    let ndc = world_to_ndc(&mut app, target);
    let world = app.world_mut();
    world.send_event(WindowEvent::from(CursorMoved {
        window,
        position: to_client(ndc),
        delta: None,
    }));
    world.send_event(WindowEvent::from(MouseButtonInput {
        button: MouseButton::Left,
        state: ButtonState::Pressed,
        window,
    }));
    // ndc x = 560 / 800 * 2 - 1 = 0.4
    world.send_event(WindowEvent::from(CursorMoved {
        window,
        position: Vec2::new(560.0, 300.0),
        delta: None,
    }));
    app.update();
    assert_eq!(*app.world().resource::<DragState>(), DragState::Dragging(BallId(4)));
    let (pos, linvel) = body_state(&app, 4);
    assert!((pos.x - 2.0).abs() < 1e-4, "x = {}", pos.x);
    assert_eq!(linvel, Vec3::ZERO);

    app.world_mut().send_event(WindowEvent::from(MouseButtonInput {
        button: MouseButton::Left,
        state: ButtonState::Released,
        window,
    }));
    app.update();
    assert_eq!(*app.world().resource::<DragState>(), DragState::Idle);
}
