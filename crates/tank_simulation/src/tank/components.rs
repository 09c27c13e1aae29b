//! Tank actor: marker + визуальные части

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::input::TankInput;
use crate::locomotion::{LocomotionParams, LocomotionPhase, TankPose};

/// Танк: root entity
///
/// Автоматически добавляет input, позу, тюнинг и фазу через Required Components.
/// Root только перемещается; facing живёт на дочернем TankDirection.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(TankInput, TankPose, LocomotionParams, LocomotionPhase, Transform)]
pub struct Tank;

/// Стрелка направления: несёт rotation корпуса
///
/// Sprite и турель висят под ней, поэтому поворачиваются вместе с ней.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct TankDirection;

/// Спрайт корпуса (размер в world units)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct TankSprite {
    pub size: Vec2,
}

impl Default for TankSprite {
    fn default() -> Self {
        Self {
            size: Vec2::new(64.0, 48.0),
        }
    }
}

/// Турель: отдельный дочерний актор
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct TankTurret {
    pub size: Vec2,
}

impl Default for TankTurret {
    fn default() -> Self {
        Self {
            size: Vec2::new(40.0, 12.0),
        }
    }
}

/// Ссылки root → части (избегаем обхода Children каждый tick)
#[derive(Component, Debug, Clone, Copy)]
pub struct TankParts {
    pub direction: Entity,
    pub sprite: Entity,
    pub turret: Entity,
}

/// Camera rig (spring arm) над танком
///
/// Камера смотрит строго вниз; rotation lag выключен,
/// lag только по позиции.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct CameraRig {
    /// Длина spring arm (высота камеры над плоскостью)
    pub arm_length: f32,
    /// Скорость догоняния позиции (1/s)
    pub lag_speed: f32,
    /// Ширина orthographic view в world units
    pub ortho_width: f32,
    pub aspect_ratio: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            arm_length: 500.0,
            lag_speed: 2.0,
            ortho_width: 1024.0,
            aspect_ratio: 3.0 / 4.0,
        }
    }
}

impl CameraRig {
    /// Следующая позиция камеры при lag: двигаемся к target на долю lag_speed * dt
    ///
    /// lag_speed <= 0 → камера прилипает к target.
    pub fn follow(&self, current: Vec2, target: Vec2, dt: f32) -> Vec2 {
        if self.lag_speed <= 0.0 {
            return target;
        }

        let alpha = (dt * self.lag_speed).clamp(0.0, 1.0);
        current + (target - current) * alpha
    }
}
