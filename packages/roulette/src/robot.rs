//! The control loop.

use log::info;
use roulette_core::{
    competition::{ModeUpdates, RobotMode},
    time::Clock,
};

use crate::container::RobotContainer;

/// Drives a [`RobotContainer`] once per control cycle.
///
/// The caller reports the current [`RobotMode`] on every [`Robot::tick`]; mode changes are
/// forwarded to the container before the cycle runs.
#[derive(Debug)]
pub struct Robot<C: Clock> {
    container: RobotContainer,
    clock: C,
    modes: ModeUpdates,
}

impl<C: Clock> Robot<C> {
    /// Creates a robot that has not run any cycle yet.
    #[must_use]
    pub const fn new(container: RobotContainer, clock: C) -> Self {
        Self {
            container,
            clock,
            modes: ModeUpdates::new(),
        }
    }

    /// Runs one control cycle in `mode`.
    pub fn tick(&mut self, mode: RobotMode) {
        let now = self.clock.uptime();

        if let Some(mode) = self.modes.observe(mode) {
            info!("entering {mode:?} at {now:?}");
            self.container.mode_changed(mode);
        }

        self.container.periodic(mode, now);
    }

    /// The mode reported on the last cycle.
    #[must_use]
    pub fn mode(&self) -> RobotMode {
        self.modes.last()
    }

    /// The robot's subsystems and bindings.
    #[must_use]
    pub const fn container(&self) -> &RobotContainer {
        &self.container
    }
}
