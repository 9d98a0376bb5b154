//! # roulette
//!
//! Control program for a swerve-drive robot that spins the control panel. The program wires three
//! subsystems (the spinner arm, the color sensor and the rotation wheel) to the driver's controller
//! and exposes the drivetrain's tuned and derived constants.
//!
//! ```no_run
//! use roulette::prelude::*;
//!
//! let world = SimWorld::new();
//! let container = RobotContainer::new(RobotHardware::simulated(&world));
//! let mut robot = Robot::new(container, SystemClock::new());
//!
//! loop {
//!     robot.tick(RobotMode::Teleop);
//!     std::thread::sleep(CONTROL_PERIOD);
//! }
//! ```

pub mod constants;
pub mod container;
pub mod robot;

#[doc(inline)]
pub use roulette_commands as commands;
#[doc(inline)]
pub use roulette_core::{competition, handle, logger, time};
#[doc(inline)]
pub use roulette_devices::{color, controller, sim, subsystems};
#[doc(inline)]
pub use roulette_drivetrain as drivetrain;

/// Commonly used items.
///
/// This module is meant to be glob imported.
pub mod prelude {
    pub use crate::{
        commands::{Command, RouletteGoal, Scheduler, Stage, Trigger},
        competition::RobotMode,
        container::{RobotContainer, RobotHardware},
        controller::{Buttons, ControllerButton},
        robot::Robot,
        sim::SimWorld,
        time::{CONTROL_PERIOD, Clock, ManualClock, SystemClock},
    };
}
