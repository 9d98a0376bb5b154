//! Robot-wide constants.

use roulette_commands::RouletteGoal;
use roulette_devices::controller::{ControllerButton, DRIVER_CONTROLLER_PORT};

/// Driver station port of the driver's controller.
pub const CONTROLLER_PORT: u8 = DRIVER_CONTROLLER_PORT;

/// Button that starts the control panel sequence.
pub const ROULETTE_BUTTON: ControllerButton = ControllerButton::Triangle;

/// How far the control panel is spun once the arm is up.
pub const ROULETTE_GOAL: RouletteGoal = RouletteGoal::Revolutions(3);
