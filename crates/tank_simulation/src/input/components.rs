//! TankInput: все input-схемы танка сводятся к этой структуре

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Порог "нулевого" вектора (squared length), как у engine safe-normal
pub const SANITIZE_EPSILON: f32 = 1.0e-8;

/// Input одного танка за кадр
///
/// Смысл inputs зависит от танка, но сами inputs одинаковы у всех.
///
/// # Lifecycle
/// - `move_x` / `move_y` пишут `raw_movement` сколько угодно раз за кадр
///   (last write wins по каждой оси)
/// - `sanitize()` ровно один раз за кадр, ДО locomotion
/// - locomotion читает только `movement`
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct TankInput {
    /// Sanitized movement: либо `Vec2::ZERO`, либо unit length
    pub movement: Vec2,

    /// Накопленный raw input с последнего sanitize (без валидации)
    raw_movement: Vec2,
}

impl TankInput {
    /// Raw X axis (MoveX binding)
    pub fn move_x(&mut self, axis_value: f32) {
        self.raw_movement.x = axis_value;
    }

    /// Raw Y axis (MoveY binding)
    pub fn move_y(&mut self, axis_value: f32) {
        self.raw_movement.y = axis_value;
    }

    pub fn raw_movement(&self) -> Vec2 {
        self.raw_movement
    }

    /// Clamp → normalize → store → reset raw
    ///
    /// Значения вне [-1, 1] клампятся, не отвергаются.
    pub fn sanitize(&mut self) {
        let clamped = self.raw_movement.clamp(Vec2::NEG_ONE, Vec2::ONE);

        self.movement = safe_normal(clamped);
        self.raw_movement = Vec2::ZERO;
    }

    /// true если sanitized input пустой (танк стоит)
    pub fn is_idle(&self) -> bool {
        self.movement == Vec2::ZERO
    }
}

/// Normalize без деления на near-zero: короткий вектор → ровно ZERO
pub fn safe_normal(v: Vec2) -> Vec2 {
    let length_squared = v.length_squared();
    if length_squared < SANITIZE_EPSILON {
        return Vec2::ZERO;
    }

    v / length_squared.sqrt()
}
