//! Tank Simulation Core
//!
//! ECS-симуляция танка на Bevy 0.16 (top-down 2D)
//!
//! Per-frame flow (FixedUpdate):
//! - TankSet::Input: device axes → TankInput (sanitize)
//! - TankSet::Locomotion: TankInput + TankPose + dt → новая TankPose
//! - TankSet::Presentation: TankPose → Transform (root + TankDirection)
//!
//! Рендер, камера и binding клавиш: забота host (tank_client).

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use serde::{Deserialize, Serialize};

// Публичные модули
pub mod input;
pub mod locomotion;
pub mod logger;
pub mod tank;

// Re-export базовых типов для удобства
pub use input::{TankAxis, TankAxisInput, TankInput, TankInputPlugin};
pub use locomotion::{
    LocomotionParams, LocomotionPhase, LocomotionPlugin, LocomotionStep, TankPose,
};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel,
    LogPrinter,
};
pub use tank::{spawn_tank, CameraRig, Tank, TankDirection, TankParts, TankPlugin, TankSprite, TankTurret};

/// Порядок фаз tick'а танка (FixedUpdate)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TankSet {
    /// Axis events + sanitize
    Input,
    /// Поворот и перемещение
    Locomotion,
    /// Pose → Transform
    Presentation,
}

/// Конфигурация симуляции
///
/// Вставьте ДО SimulationPlugin, чтобы переопределить defaults.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Частота FixedUpdate (Hz)
    pub tick_hz: f64,
    /// Тюнинг для танков, заспавненных host'ом без явных параметров
    pub default_params: LocomotionParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            default_params: LocomotionParams::default(),
        }
    }
}

impl SimulationConfig {
    /// Длительность одного fixed tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_hz)
    }
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<SimulationConfig>()
            .copied()
            .unwrap_or_default();

        app
            // Fixed timestep для simulation tick
            .insert_resource(config)
            .insert_resource(Time::<Fixed>::from_hz(config.tick_hz))
            // sanitize строго до locomotion, sync строго после
            .configure_sets(
                FixedUpdate,
                (TankSet::Input, TankSet::Locomotion, TankSet::Presentation).chain(),
            )
            .add_plugins((TankInputPlugin, LocomotionPlugin, TankPlugin));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается вручную: после первого (warm-up) update каждый
/// `app.update()` = ровно один fixed tick, независимо от wall clock.
pub fn create_headless_app(config: SimulationConfig) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(config)
        .insert_resource(TimeUpdateStrategy::ManualDuration(config.tick_duration()))
        .insert_resource(Time::<Fixed>::from_hz(config.tick_hz));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Debug-формат как сериализация (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
