//! Raising the spinner arm.

use core::time::Duration;

use log::{info, warn};
use roulette_core::handle::Handle;
use roulette_devices::subsystems::ArmMover;

use crate::Command;

/// Drives the arm open and finishes once the open limit switch trips.
///
/// A failed motor command or switch read is logged and the command simply keeps waiting: it does
/// not retry, and it never reports finished until the switch is seen high.
#[derive(Debug)]
pub struct OpenArm {
    arm: Handle<ArmMover>,
    opened: bool,
}

impl OpenArm {
    /// Creates the command for the given arm.
    #[must_use]
    pub const fn new(arm: Handle<ArmMover>) -> Self {
        Self { arm, opened: false }
    }
}

impl Command for OpenArm {
    fn name(&self) -> &'static str {
        "OpenArm"
    }

    fn initialize(&mut self, _now: Duration) {
        self.opened = false;
        if let Err(err) = self.arm.borrow_mut().open() {
            warn!("could not start opening the arm: {err}");
        }
    }

    fn execute(&mut self, _now: Duration) {
        match self.arm.borrow().is_open() {
            Ok(opened) => self.opened = opened,
            Err(err) => warn!("could not read the arm's open switch: {err}"),
        }
    }

    fn is_finished(&self) -> bool {
        self.opened
    }

    fn end(&mut self, interrupted: bool) {
        if let Err(err) = self.arm.borrow_mut().stop() {
            warn!("could not stop the arm: {err}");
        }

        if !interrupted {
            info!("arm is open");
        }
    }
}

#[cfg(test)]
mod test {
    use roulette_core::time::CONTROL_PERIOD;
    use roulette_devices::sim::SimWorld;

    use super::*;

    fn arm(world: &SimWorld) -> Handle<ArmMover> {
        Handle::new(ArmMover::new(Box::new(world.arm_motor()), Box::new(world.arm_open_switch())))
    }

    #[test]
    fn finishes_once_the_arm_is_open() {
        let world = SimWorld::new();
        let mut command = OpenArm::new(arm(&world));

        command.initialize(Duration::ZERO);
        command.execute(Duration::ZERO);
        assert!(!command.is_finished());

        for _ in 0..200 {
            world.step(CONTROL_PERIOD);
            command.execute(Duration::ZERO);
            if command.is_finished() {
                break;
            }
        }

        assert!(command.is_finished());
        command.end(false);
        assert_eq!(world.arm_voltage(), 0.0);
    }

    #[test]
    fn never_finishes_with_a_dead_motor() {
        let world = SimWorld::new();
        world.set_arm_connected(false);
        let mut command = OpenArm::new(arm(&world));

        command.initialize(Duration::ZERO);
        for _ in 0..500 {
            world.step(CONTROL_PERIOD);
            command.execute(Duration::ZERO);
        }

        assert!(!command.is_finished());
        assert_eq!(world.arm_position(), 0.0);
    }
}
