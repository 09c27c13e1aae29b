//! Steering math: turn-then-move locomotion танка
//!
//! Чистые функции, без ECS: systems.rs только прокидывает данные.
//!
//! Конвенция углов: градусы, 0° = +X, положительный yaw против часовой,
//! forward(θ) = (cos θ, sin θ).

use bevy::prelude::*;

use super::components::{LocomotionParams, LocomotionPhase, TankPose};
use crate::input::SANITIZE_EPSILON;

/// Порог reverse-оптимизации: дальше 90° выгоднее ехать задом
pub const REVERSE_THRESHOLD_DEGREES: f32 = 90.0;

/// Результат одного tick locomotion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionStep {
    pub pose: TankPose,
    pub phase: LocomotionPhase,
    /// Танк едет задом к цели (turn ≤ 90° вместо > 90°)
    pub reverse: bool,
}

impl LocomotionStep {
    fn idle(pose: TankPose) -> Self {
        Self {
            pose,
            phase: LocomotionPhase::Idle,
            reverse: false,
        }
    }
}

/// Угол → [-180, 180)
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid может вернуть ровно 360.0 на округлении
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Кратчайшая знаковая разница `to - from`, в (-180, 180]
pub fn find_delta_angle_degrees(from: f32, to: f32) -> f32 {
    let delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Heading для sanitized movement input
///
/// Локальный "forward" танка повёрнут на 90° относительно raw axes:
/// heading = угол вектора (-movement.y, movement.x).
pub fn heading_from_movement(movement: Vec2) -> f32 {
    movement.x.atan2(-movement.y).to_degrees()
}

pub fn forward_vector(facing_degrees: f32) -> Vec2 {
    Vec2::from_angle(facing_degrees.to_radians())
}

/// Reverse-оптимизация: turn > 90° заменяется turn'ом к развороту цели
///
/// Возвращает (adjusted delta, reverse).
pub fn apply_reverse(delta_yaw: f32) -> (f32, bool) {
    if delta_yaw < -REVERSE_THRESHOLD_DEGREES {
        (delta_yaw + 180.0, true)
    } else if delta_yaw > REVERSE_THRESHOLD_DEGREES {
        (delta_yaw - 180.0, true)
    } else {
        (delta_yaw, false)
    }
}

/// Один tick locomotion по sanitized movement input
///
/// Zero input → Idle, поза без изменений.
pub fn step(pose: TankPose, movement: Vec2, params: LocomotionParams, dt: f32) -> LocomotionStep {
    if movement.length_squared() <= SANITIZE_EPSILON {
        return LocomotionStep::idle(pose);
    }

    steer_towards(pose, heading_from_movement(movement), params, dt)
}

/// Один tick locomotion к заданному heading (градусы)
///
/// 1. delta к цели, reverse если |delta| > 90°
/// 2. успеваем повернуть за кадр (включая delta == 0) → snap на цель
///    (или её разворот) + translation
/// 3. не успеваем → поворот на max_yaw, БЕЗ translation
pub fn steer_towards(
    pose: TankPose,
    desired_degrees: f32,
    params: LocomotionParams,
    dt: f32,
) -> LocomotionStep {
    let delta_yaw = find_delta_angle_degrees(pose.facing_degrees, desired_degrees);
    let (adjusted_delta, reverse) = apply_reverse(delta_yaw);

    let max_yaw_this_frame = (params.yaw_speed * dt).max(0.0);

    if max_yaw_this_frame < adjusted_delta.abs() {
        // Не успеваем: поворачиваем частично, позиция на месте
        let facing = pose.facing_degrees + adjusted_delta.signum() * max_yaw_this_frame;
        return LocomotionStep {
            pose: TankPose {
                facing_degrees: wrap_degrees(facing),
                position: pose.position,
            },
            phase: LocomotionPhase::Turning,
            reverse,
        };
    }

    // Snap ровно на цель, без overshoot tracking
    let facing = if reverse {
        wrap_degrees(desired_degrees + 180.0)
    } else {
        wrap_degrees(desired_degrees)
    };

    let direction = if reverse {
        -forward_vector(facing)
    } else {
        forward_vector(facing)
    };

    let distance = params.move_speed * dt;
    let position = Vec2::new(
        pose.position.x + direction.x * distance,
        pose.position.y + direction.y * distance,
    );

    LocomotionStep {
        pose: TankPose {
            facing_degrees: facing,
            position,
        },
        phase: LocomotionPhase::Moving,
        reverse,
    }
}
