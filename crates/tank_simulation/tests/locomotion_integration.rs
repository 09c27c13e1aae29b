//! Locomotion integration test
//!
//! Headless App + SimulationPlugin: input events → sanitize → locomotion → Transform.
//!
//! Проверяем:
//! - idle танк не двигается
//! - turn-then-move по диагонали
//! - reverse (цель сзади → едем задом)
//! - sanitize сбрасывает input каждый tick
//! - sync позы в Transform (root + TankDirection)

use bevy::prelude::*;
use tank_simulation::*;

const TOLERANCE: f32 = 1.0e-3;

/// Helper: headless App со всеми plugins
fn create_tank_app() -> App {
    let mut app = create_headless_app(SimulationConfig::default());
    app.add_plugins(SimulationPlugin);
    app
}

/// Helper: spawn танка + warm-up update (первый update не двигает время)
fn spawn_and_warm_up(app: &mut App, position: Vec2, params: LocomotionParams) -> Entity {
    let tank = spawn_tank(&mut app.world_mut().commands(), position, params);
    app.world_mut().flush();
    app.update();
    tank
}

/// Helper: держим оси `ticks` тиков подряд
fn drive(app: &mut App, tank: Entity, move_x: f32, move_y: f32, ticks: usize) {
    for _ in 0..ticks {
        app.world_mut().send_event(TankAxisInput::x(tank, move_x));
        app.world_mut().send_event(TankAxisInput::y(tank, move_y));
        app.update();
    }
}

fn pose(app: &App, tank: Entity) -> TankPose {
    *app.world().get::<TankPose>(tank).expect("TankPose missing")
}

fn phase(app: &App, tank: Entity) -> LocomotionPhase {
    *app.world().get::<LocomotionPhase>(tank).expect("LocomotionPhase missing")
}

/// Raw input, который даёт heading `degrees`: heading = angle(-y, x)
fn input_for_heading(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.sin(), -radians.cos())
}

#[test]
fn test_idle_tank_stays_put() {
    let mut app = create_tank_app();
    let start = Vec2::new(10.0, -4.0);
    let tank = spawn_and_warm_up(&mut app, start, LocomotionParams::default());

    for _ in 0..120 {
        app.update();
    }

    assert_eq!(pose(&app, tank), TankPose::at(start));
    assert_eq!(phase(&app, tank), LocomotionPhase::Idle);
}

#[test]
fn test_turn_then_move_diagonal() {
    let mut app = create_tank_app();
    let tank = spawn_and_warm_up(&mut app, Vec2::ZERO, LocomotionParams::new(180.0, 120.0));

    // MoveX = 1, MoveY = -1 → heading 45°
    drive(&mut app, tank, 1.0, -1.0, 120);

    let pose = pose(&app, tank);
    assert!((pose.facing_degrees - 45.0).abs() < TOLERANCE, "facing {}", pose.facing_degrees);
    assert!(pose.position.x > 0.0);
    assert!((pose.position.x - pose.position.y).abs() < TOLERANCE, "position {:?}", pose.position);
    assert_eq!(phase(&app, tank), LocomotionPhase::Moving);
}

#[test]
fn test_partial_turn_gates_translation() {
    let mut app = create_tank_app();
    let start = Vec2::new(1.0, 1.0);
    // 30°/s → 0.5° за tick, до 45° не доедем за 10 тиков
    let tank = spawn_and_warm_up(&mut app, start, LocomotionParams::new(30.0, 120.0));

    drive(&mut app, tank, 1.0, -1.0, 10);

    let pose = pose(&app, tank);
    assert!((pose.facing_degrees - 5.0).abs() < TOLERANCE, "facing {}", pose.facing_degrees);
    assert_eq!(pose.position, start);
    assert_eq!(phase(&app, tank), LocomotionPhase::Turning);
}

#[test]
fn test_reverse_drives_backwards() {
    let mut app = create_tank_app();
    let tank = spawn_and_warm_up(&mut app, Vec2::ZERO, LocomotionParams::new(180.0, 120.0));

    let input = input_for_heading(170.0);
    drive(&mut app, tank, input.x, input.y, 60);

    let pose = pose(&app, tank);
    // Корпус развёрнут на -10°, а не на 170°
    assert!((pose.facing_degrees + 10.0).abs() < TOLERANCE, "facing {}", pose.facing_degrees);
    // Но едем в сторону 170°
    let travelled = pose.position.normalize();
    let expected = Vec2::from_angle(170f32.to_radians());
    assert!((travelled - expected).length() < TOLERANCE, "travelled {:?}", travelled);
}

#[test]
fn test_input_resets_every_tick() {
    let mut app = create_tank_app();
    let tank = spawn_and_warm_up(&mut app, Vec2::ZERO, LocomotionParams::new(10_000.0, 60.0));

    // Один tick с input
    drive(&mut app, tank, 1.0, -1.0, 1);
    let moved = pose(&app, tank);
    assert_eq!(phase(&app, tank), LocomotionPhase::Moving);
    assert!(moved.position.length() > 0.0);

    // Следующий tick без input → sanitize дал ноль → Idle
    app.update();
    assert_eq!(phase(&app, tank), LocomotionPhase::Idle);
    assert_eq!(pose(&app, tank), moved);

    let input = app.world().get::<TankInput>(tank).expect("TankInput missing");
    assert_eq!(input.movement, Vec2::ZERO);
    assert_eq!(input.raw_movement(), Vec2::ZERO);
}

#[test]
fn test_direct_axis_calls_match_events() {
    let mut app = create_tank_app();
    let tank = spawn_and_warm_up(&mut app, Vec2::ZERO, LocomotionParams::new(10_000.0, 60.0));

    // Host может писать в TankInput напрямую (last write wins)
    for _ in 0..30 {
        if let Some(mut input) = app.world_mut().get_mut::<TankInput>(tank) {
            input.move_x(-5.0);
            input.move_x(1.0);
            input.move_y(-1.0);
        }
        app.update();
    }

    let direct = pose(&app, tank);

    let mut reference = create_tank_app();
    let other = spawn_and_warm_up(&mut reference, Vec2::ZERO, LocomotionParams::new(10_000.0, 60.0));
    drive(&mut reference, other, 1.0, -1.0, 30);

    assert_eq!(direct, pose(&reference, other));
}

#[test]
fn test_axis_event_for_unknown_entity_is_ignored() {
    let mut app = create_tank_app();
    let tank = spawn_and_warm_up(&mut app, Vec2::ZERO, LocomotionParams::default());
    let not_a_tank = app.world_mut().spawn_empty().id();

    drive(&mut app, not_a_tank, 1.0, 0.0, 10);

    assert_eq!(pose(&app, tank), TankPose::at(Vec2::ZERO));
}

#[test]
fn test_pose_synced_to_transforms() {
    let mut app = create_tank_app();
    let tank = spawn_and_warm_up(&mut app, Vec2::ZERO, LocomotionParams::new(180.0, 120.0));

    drive(&mut app, tank, 1.0, -1.0, 60);

    let pose = pose(&app, tank);
    let world = app.world();

    let root = world.get::<Transform>(tank).expect("root Transform missing");
    assert_eq!(root.translation, pose.position.extend(0.0));
    // Root не вращается: rotation живёт на TankDirection
    assert_eq!(root.rotation, Quat::IDENTITY);

    let parts = world.get::<TankParts>(tank).expect("TankParts missing");
    let direction = world
        .get::<Transform>(parts.direction)
        .expect("direction Transform missing");
    let expected = Quat::from_rotation_z(pose.facing_degrees.to_radians());
    assert!(direction.rotation.angle_between(expected) < TOLERANCE);
}

#[test]
fn test_custom_tick_rate() {
    let config = SimulationConfig {
        tick_hz: 30.0,
        ..default()
    };
    let mut app = create_headless_app(config);
    app.add_plugins(SimulationPlugin);

    let tank = spawn_and_warm_up(&mut app, Vec2::ZERO, LocomotionParams::new(10_000.0, 30.0));

    // 30 Hz, 30 u/s → 1 unit за tick
    drive(&mut app, tank, 1.0, -1.0, 3);

    let pose = pose(&app, tank);
    assert!((pose.position.length() - 3.0).abs() < TOLERANCE, "position {:?}", pose.position);
    assert_eq!(app.world().resource::<SimulationConfig>().tick_hz, 30.0);
}
