//! Locomotion компоненты: поза, тюнинг, фаза движения

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::steering::wrap_degrees;

/// Поза танка в ground plane
///
/// Владелец: host actor; locomotion читает и перезаписывает.
/// Инвариант: `facing_degrees` ∈ [-180, 180)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct TankPose {
    /// Yaw в градусах (0° = +X, против часовой)
    pub facing_degrees: f32,
    /// Позиция на плоскости (вертикаль host Transform не трогаем)
    pub position: Vec2,
}

impl TankPose {
    pub fn new(position: Vec2, facing_degrees: f32) -> Self {
        Self {
            facing_degrees: wrap_degrees(facing_degrees),
            position,
        }
    }

    pub fn at(position: Vec2) -> Self {
        Self::new(position, 0.0)
    }

    /// Unit forward vector текущего facing
    pub fn forward(&self) -> Vec2 {
        super::steering::forward_vector(self.facing_degrees)
    }
}

/// Тюнинг locomotion (static, в runtime не меняется)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct LocomotionParams {
    /// Максимальная скорость поворота (degrees/second)
    pub yaw_speed: f32,
    /// Максимальная линейная скорость (units/second)
    pub move_speed: f32,
}

impl Default for LocomotionParams {
    fn default() -> Self {
        Self {
            yaw_speed: 180.0,
            move_speed: 200.0,
        }
    }
}

impl LocomotionParams {
    /// Отрицательные значения клампятся в 0
    pub fn new(yaw_speed: f32, move_speed: f32) -> Self {
        Self {
            yaw_speed: yaw_speed.max(0.0),
            move_speed: move_speed.max(0.0),
        }
    }
}

/// Фаза locomotion за последний tick (implicit state machine)
///
/// Idle → Turning → Moving.
/// Не хранит состояние между кадрами: пересчитывается каждый tick.
/// Компонент нужен только наблюдателям (логи, debug overlay).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub enum LocomotionPhase {
    /// Нет input
    #[default]
    Idle,
    /// Поворот не успевает завершиться за кадр: только rotation
    Turning,
    /// Поворот завершён за кадр: snap + translation
    Moving,
}
