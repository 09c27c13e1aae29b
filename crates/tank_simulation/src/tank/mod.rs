//! Tank actor: сборка entity и sync позы в Transform

use bevy::prelude::*;

use crate::TankSet;

pub mod components;
pub mod spawn;
pub mod systems;


pub use components::*;
pub use spawn::spawn_tank;
pub use systems::*;

/// Tank Plugin
///
/// sync_pose_to_transform в TankSet::Presentation (после locomotion).
pub struct TankPlugin;

impl Plugin for TankPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Tank>()
            .register_type::<TankDirection>()
            .register_type::<TankSprite>()
            .register_type::<TankTurret>()
            .register_type::<CameraRig>();

        app.add_systems(
            FixedUpdate,
            sync_pose_to_transform.in_set(TankSet::Presentation),
        );
    }
}
