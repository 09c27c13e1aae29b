//! Headless симуляция танка
//!
//! Прогоняет scripted input без рендера и логирует позу.

use bevy::prelude::*;
use tank_simulation::{
    create_headless_app, log_info, spawn_tank, LocomotionPhase, SimulationConfig, SimulationPlugin,
    TankAxisInput, TankPose,
};

/// (ticks, MoveX, MoveY)
const SCRIPT: &[(u32, f32, f32)] = &[
    (60, 1.0, 0.0),   // вперёд по heading 90°
    (60, 1.0, -1.0),  // диагональ
    (90, -1.0, 0.0),  // цель сзади → едем задом
    (30, 0.0, 0.0),   // idle
    (120, 0.0, 1.0),  // поворот на 180° и обратно
];

const LOG_EVERY: u32 = 30;

fn main() {
    let config = SimulationConfig::default();
    let mut app = create_headless_app(config);
    app.add_plugins(SimulationPlugin);

    let tank = spawn_tank(
        &mut app.world_mut().commands(),
        Vec2::ZERO,
        config.default_params,
    );
    app.world_mut().flush();
    // Warm-up: первый update не двигает время
    app.update();

    log_info(&format!("Starting headless tank simulation ({} Hz)", config.tick_hz));

    let mut tick = 0u32;
    for &(ticks, move_x, move_y) in SCRIPT {
        for _ in 0..ticks {
            app.world_mut().send_event(TankAxisInput::x(tank, move_x));
            app.world_mut().send_event(TankAxisInput::y(tank, move_y));
            app.update();
            tick += 1;

            if tick % LOG_EVERY == 0 {
                let world = app.world();
                let (Some(pose), Some(phase)) = (
                    world.get::<TankPose>(tank),
                    world.get::<LocomotionPhase>(tank),
                ) else {
                    continue;
                };

                log_info(&format!(
                    "Tick {}: pos ({:.1}, {:.1}), facing {:.1}°, {:?}",
                    tick, pose.position.x, pose.position.y, pose.facing_degrees, phase
                ));
            }
        }
    }

    log_info("Simulation complete!");
}
