//! Input events от host (device axis → ECS)

use bevy::prelude::*;

/// Ось движения танка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum TankAxis {
    /// "MoveX" binding
    X,
    /// "MoveY" binding
    Y,
}

/// Event: host прислал значение оси для конкретного танка
///
/// Генерируется:
/// - client keyboard binding
/// - headless runner / тесты (scripted input)
///
/// Обрабатывается:
/// - `apply_axis_input`: пишет в `TankInput` raw accumulator
#[derive(Event, Debug, Clone, Copy)]
pub struct TankAxisInput {
    pub entity: Entity,
    pub axis: TankAxis,
    pub value: f32,
}

impl TankAxisInput {
    pub fn x(entity: Entity, value: f32) -> Self {
        Self {
            entity,
            axis: TankAxis::X,
            value,
        }
    }

    pub fn y(entity: Entity, value: f32) -> Self {
        Self {
            entity,
            axis: TankAxis::Y,
            value,
        }
    }
}
