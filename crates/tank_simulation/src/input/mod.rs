//! Input domain: input sanitizer танка
//!
//! # Архитектура
//!
//! ```text
//! Device axes (host)
//!     ↓
//! TankAxisInput event / TankInput::move_x, move_y
//!     ↓
//! apply_axis_input → raw accumulator
//!     ↓
//! sanitize_tank_input → TankInput::movement (zero или unit)
//!     ↓
//! locomotion
//! ```

use bevy::prelude::*;

use crate::TankSet;

pub mod components;
pub mod events;
pub mod systems;


pub use components::*;
pub use events::*;
pub use systems::*;

/// Input Plugin
///
/// Порядок выполнения (TankSet::Input, FixedUpdate):
/// 1. apply_axis_input: events → raw accumulator
/// 2. sanitize_tank_input: raw → movement, reset raw
pub struct TankInputPlugin;

impl Plugin for TankInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TankAxisInput>()
            .register_type::<TankInput>();

        app.add_systems(
            FixedUpdate,
            (apply_axis_input, sanitize_tank_input)
                .chain()
                .in_set(TankSet::Input),
        );
    }
}
