//! Keyboard binding: клавиши → MoveX / MoveY оси танка
//!
//! Оси пишутся каждый fixed tick (как axis binding движка: 0 если не нажато),
//! sanitize внутри симуляции сбрасывает их после каждого tick.
//!
//! Heading = угол вектора (-MoveY, MoveX), поэтому:
//! - W/↑ → MoveX +1 → 90° (вверх по экрану)
//! - S/↓ → MoveX -1 → -90°
//! - D/→ → MoveY -1 → 0° (вправо)
//! - A/← → MoveY +1 → 180°

use bevy::prelude::*;
use tank_simulation::{Tank, TankInput};

pub struct InputBindingPlugin;

impl Plugin for InputBindingPlugin {
    fn build(&self, app: &mut App) {
        // FixedPreUpdate: input на каждый fixed tick, а не на каждый frame
        app.add_systems(FixedPreUpdate, bind_tank_axes);
    }
}

fn axis_value(keyboard: &ButtonInput<KeyCode>, positive: [KeyCode; 2], negative: [KeyCode; 2]) -> f32 {
    let mut value = 0.0;
    if keyboard.any_pressed(positive) {
        value += 1.0;
    }
    if keyboard.any_pressed(negative) {
        value -= 1.0;
    }
    value
}

fn bind_tank_axes(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut tanks: Query<&mut TankInput, With<Tank>>,
) {
    let move_x = axis_value(
        &keyboard,
        [KeyCode::KeyW, KeyCode::ArrowUp],
        [KeyCode::KeyS, KeyCode::ArrowDown],
    );
    let move_y = axis_value(
        &keyboard,
        [KeyCode::KeyA, KeyCode::ArrowLeft],
        [KeyCode::KeyD, KeyCode::ArrowRight],
    );

    for mut input in tanks.iter_mut() {
        input.move_x(move_x);
        input.move_y(move_y);
    }
}
