//! Input systems (FixedUpdate)

use bevy::prelude::*;

use super::components::TankInput;
use super::events::{TankAxis, TankAxisInput};

/// Система: TankAxisInput events → raw accumulator
///
/// Events в порядке доставки, поэтому last write wins детерминированно.
/// Event для entity без TankInput игнорируется.
pub fn apply_axis_input(
    mut axis_events: EventReader<TankAxisInput>,
    mut inputs: Query<&mut TankInput>,
) {
    for event in axis_events.read() {
        let Ok(mut input) = inputs.get_mut(event.entity) else {
            continue;
        };

        match event.axis {
            TankAxis::X => input.move_x(event.value),
            TankAxis::Y => input.move_y(event.value),
        }
    }
}

/// Система: sanitize всех TankInput
///
/// Должна идти ДО tank_locomotion (порядок задаёт `.chain()` в SimulationPlugin).
pub fn sanitize_tank_input(mut inputs: Query<&mut TankInput>) {
    for mut input in inputs.iter_mut() {
        input.sanitize();
    }
}
