use bevy::prelude::*;
use tank_simulation::{LocomotionPhase, Tank, TankDirection, TankPose, TankSprite, TankTurret};

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (attach_visibility, attach_sprites, draw_direction_arrows).chain(),
        );
    }
}

const BODY_COLOR: Color = Color::srgb(0.35, 0.42, 0.25);
const TURRET_COLOR: Color = Color::srgb(0.22, 0.27, 0.15);
const ARROW_LENGTH: f32 = 60.0;

/// Root и TankDirection без Visibility ломают propagation к спрайтам
fn attach_visibility(
    mut commands: Commands,
    query: Query<Entity, (Or<(Added<Tank>, Added<TankDirection>)>, Without<Visibility>)>,
) {
    for entity in query.iter() {
        commands.entity(entity).insert(Visibility::default());
    }
}

/// Sprite-квады для корпуса и турели
fn attach_sprites(
    mut commands: Commands,
    bodies: Query<(Entity, &TankSprite), Added<TankSprite>>,
    turrets: Query<(Entity, &TankTurret), Added<TankTurret>>,
) {
    for (entity, body) in bodies.iter() {
        commands
            .entity(entity)
            .insert(Sprite::from_color(BODY_COLOR, body.size));
    }

    for (entity, turret) in turrets.iter() {
        // Ствол торчит вперёд (+X) от центра корпуса
        let mut sprite = Sprite::from_color(TURRET_COLOR, turret.size);
        sprite.anchor = bevy::sprite::Anchor::CenterLeft;
        commands.entity(entity).insert(sprite);
    }
}

/// Debug стрелка направления (цвет по фазе locomotion)
fn draw_direction_arrows(mut gizmos: Gizmos, tanks: Query<(&TankPose, &LocomotionPhase)>) {
    for (pose, phase) in tanks.iter() {
        let color = match phase {
            LocomotionPhase::Idle => Color::srgb(0.6, 0.6, 0.6),
            LocomotionPhase::Turning => Color::srgb(0.95, 0.7, 0.1),
            LocomotionPhase::Moving => Color::srgb(0.2, 0.8, 0.3),
        };

        let end = pose.position + pose.forward() * ARROW_LENGTH;
        gizmos.arrow_2d(pose.position, end, color);
    }
}
