use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use tank_simulation::{CameraRig, TankPose};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, follow_tank);
    }
}

/// Top-down камера, привязанная к танку через его CameraRig
#[derive(Component)]
pub struct TankCamera {
    pub target: Entity,
}

/// Orthographic камера строго сверху (rig берётся default, позиция догонит в follow_tank)
pub fn spawn_tank_camera(commands: &mut Commands, target: Entity) -> Entity {
    let rig = CameraRig::default();

    commands
        .spawn((
            Camera2d,
            Projection::Orthographic(OrthographicProjection {
                scaling_mode: ScalingMode::FixedHorizontal {
                    viewport_width: rig.ortho_width,
                },
                ..OrthographicProjection::default_2d()
            }),
            Transform::from_xyz(0.0, 0.0, rig.arm_length),
            TankCamera { target },
        ))
        .id()
}

/// Позиционный lag за танком, rotation не меняем
fn follow_tank(
    time: Res<Time>,
    tanks: Query<(&TankPose, &CameraRig)>,
    mut cameras: Query<(&TankCamera, &mut Transform)>,
) {
    let delta = time.delta_secs();

    for (camera, mut transform) in cameras.iter_mut() {
        let Ok((pose, rig)) = tanks.get(camera.target) else {
            continue;
        };

        let next = rig.follow(transform.translation.truncate(), pose.position, delta);
        transform.translation = next.extend(rig.arm_length);
    }
}
