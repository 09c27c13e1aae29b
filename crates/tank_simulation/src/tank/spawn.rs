//! Spawn helper для танка

use bevy::prelude::*;

use super::components::*;
use crate::locomotion::{LocomotionParams, TankPose};

/// Спавнит танк со всеми частями
///
/// Иерархия:
/// ```text
/// Tank (root: TankInput, TankPose, LocomotionParams, LocomotionPhase, CameraRig)
///   └─ TankDirection (rotation корпуса)
///        ├─ TankSprite
///        └─ TankTurret
/// ```
pub fn spawn_tank(commands: &mut Commands, position: Vec2, params: LocomotionParams) -> Entity {
    let root = commands
        .spawn((
            Name::new("Tank"),
            Tank,
            TankPose::at(position),
            params,
            CameraRig::default(),
            Transform::from_translation(position.extend(0.0)),
        ))
        .id();

    let direction = commands
        .spawn((
            Name::new("TankDirection"),
            TankDirection,
            Transform::default(),
            ChildOf(root),
        ))
        .id();

    let sprite = commands
        .spawn((
            Name::new("TankSprite"),
            TankSprite::default(),
            Transform::default(),
            ChildOf(direction),
        ))
        .id();

    // Турель поверх корпуса
    let turret = commands
        .spawn((
            Name::new("TankTurret"),
            TankTurret::default(),
            Transform::from_xyz(0.0, 0.0, 1.0),
            ChildOf(direction),
        ))
        .id();

    commands.entity(root).insert(TankParts {
        direction,
        sprite,
        turret,
    });

    crate::log_info(&format!(
        "Spawned tank {:?} at ({:.1}, {:.1}), yaw {:.0}°/s, move {:.0} u/s",
        root, position.x, position.y, params.yaw_speed, params.move_speed
    ));

    root
}
