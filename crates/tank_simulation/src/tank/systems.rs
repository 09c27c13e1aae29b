//! Pose → Transform sync

use bevy::prelude::*;

use super::components::{Tank, TankDirection, TankParts};
use crate::locomotion::TankPose;

/// Система: TankPose → Transform
///
/// - root: translation x/y (z не трогаем)
/// - TankDirection: rotation вокруг Z
/// - танк без TankParts: rotation прямо на root
pub fn sync_pose_to_transform(
    mut tanks: Query<(&TankPose, Option<&TankParts>, &mut Transform), (With<Tank>, Changed<TankPose>)>,
    mut directions: Query<&mut Transform, (With<TankDirection>, Without<Tank>)>,
) {
    for (pose, parts, mut transform) in tanks.iter_mut() {
        transform.translation.x = pose.position.x;
        transform.translation.y = pose.position.y;

        let rotation = Quat::from_rotation_z(pose.facing_degrees.to_radians());

        match parts {
            Some(parts) => {
                if let Ok(mut direction) = directions.get_mut(parts.direction) {
                    direction.rotation = rotation;
                }
            }
            None => transform.rotation = rotation,
        }
    }
}
