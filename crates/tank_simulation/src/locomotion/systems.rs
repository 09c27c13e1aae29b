//! Locomotion systems (FixedUpdate)

use bevy::prelude::*;

use super::components::{LocomotionParams, LocomotionPhase, TankPose};
use super::steering;
use crate::input::TankInput;

/// Система: sanitized input → новая поза
///
/// Работает в FixedUpdate, после sanitize_tank_input.
/// Поза пишется только при изменении (иначе Changed<TankPose> спамит).
pub fn tank_locomotion(
    mut query: Query<(
        Entity,
        &TankInput,
        &LocomotionParams,
        &mut TankPose,
        &mut LocomotionPhase,
    )>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, input, params, mut pose, mut phase) in query.iter_mut() {
        let step = steering::step(*pose, input.movement, *params, delta);

        pose.set_if_neq(step.pose);

        if *phase != step.phase {
            crate::log(&format!(
                "Tank {:?}: {:?} → {:?} (facing {:.1}°, reverse: {})",
                entity, *phase, step.phase, step.pose.facing_degrees, step.reverse
            ));
            *phase = step.phase;
        }
    }
}
