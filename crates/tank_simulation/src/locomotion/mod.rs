//! Locomotion domain: turn-then-move контроллер танка
//!
//! Содержит:
//! - TankPose (facing + position)
//! - LocomotionParams (yaw/move speed)
//! - LocomotionPhase (Idle / Turning / Moving)
//! - steering (чистая математика шага)

use bevy::prelude::*;

use crate::TankSet;

pub mod components;
pub mod steering;
pub mod systems;


pub use components::*;
pub use steering::{find_delta_angle_degrees, step, steer_towards, wrap_degrees, LocomotionStep};
pub use systems::*;

/// Locomotion Plugin
///
/// tank_locomotion в TankSet::Locomotion (после sanitize, до sync в Transform).
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<TankPose>()
            .register_type::<LocomotionParams>()
            .register_type::<LocomotionPhase>();

        app.add_systems(FixedUpdate, tank_locomotion.in_set(TankSet::Locomotion));
    }
}
