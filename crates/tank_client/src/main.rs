use bevy::prelude::*;
use tank_simulation::{init_logger, spawn_tank, SimulationConfig, SimulationPlugin};

mod camera;
mod input;
mod rendering;

use camera::CameraPlugin;
use input::InputBindingPlugin;
use rendering::RenderingSyncPlugin;

fn main() {
    init_logger();

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Tank - top-down movement".to_string(),
                resolution: (768., 1024.).into(), // aspect 3:4
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.18, 0.22, 0.16)))
        // Simulation (headless ECS logic)
        .add_plugins(SimulationPlugin)
        // Keyboard → MoveX / MoveY
        .add_plugins(InputBindingPlugin)
        // Rendering sync (simulation → visuals)
        .add_plugins(RenderingSyncPlugin)
        // Top-down camera с lag
        .add_plugins(CameraPlugin)
        .add_systems(Startup, setup_scene)
        .run();
}

/// Spawn танка и камеры над ним
fn setup_scene(mut commands: Commands, config: Res<SimulationConfig>) {
    let tank = spawn_tank(&mut commands, Vec2::ZERO, config.default_params);
    camera::spawn_tank_camera(&mut commands, tank);
}
