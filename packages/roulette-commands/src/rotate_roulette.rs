//! Spinning the control panel.

use core::time::Duration;

use log::{debug, info, warn};
use roulette_core::handle::Handle;
use roulette_devices::{
    color::{PANEL_WEDGES, WheelColor},
    subsystems::{ColorSensor, RotationWheel},
};

use crate::Command;

/// When [`RotateRoulette`] should stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouletteGoal {
    /// Stop after the panel has turned this many full revolutions.
    Revolutions(u32),

    /// Stop as soon as the sensor sees this color.
    Color(WheelColor),
}

impl RouletteGoal {
    /// Number of color changes the sensor sees over `revolutions` full turns of the panel.
    #[must_use]
    pub const fn transitions_for(revolutions: u32) -> u32 {
        revolutions.saturating_mul(PANEL_WEDGES as u32)
    }
}

/// Spins the control panel while sampling the color sensor every cycle.
///
/// Revolutions are counted as color changes under the sensor; readings the sensor cannot
/// classify are ignored rather than counted.
#[derive(Debug)]
pub struct RotateRoulette {
    wheel: Handle<RotationWheel>,
    sensor: Handle<ColorSensor>,
    goal: RouletteGoal,
    last_color: Option<WheelColor>,
    transitions: u32,
    reached: bool,
}

impl RotateRoulette {
    /// Creates the command.
    #[must_use]
    pub const fn new(
        wheel: Handle<RotationWheel>,
        sensor: Handle<ColorSensor>,
        goal: RouletteGoal,
    ) -> Self {
        Self {
            wheel,
            sensor,
            goal,
            last_color: None,
            transitions: 0,
            reached: false,
        }
    }

    /// Color changes seen since the command was initialized.
    #[must_use]
    pub const fn transitions(&self) -> u32 {
        self.transitions
    }

    /// Reads the sensor, returning `None` if it failed or saw nothing recognizable.
    fn sample(&self) -> Option<WheelColor> {
        match self.sensor.borrow().color() {
            Ok(WheelColor::Unknown) => None,
            Ok(color) => Some(color),
            Err(err) => {
                warn!("could not read the color sensor: {err}");
                None
            }
        }
    }

    fn goal_reached(&self, color: WheelColor) -> bool {
        match self.goal {
            RouletteGoal::Revolutions(revolutions) => {
                self.transitions >= RouletteGoal::transitions_for(revolutions)
            }
            RouletteGoal::Color(target) => color == target,
        }
    }
}

impl Command for RotateRoulette {
    fn name(&self) -> &'static str {
        "RotateRoulette"
    }

    fn initialize(&mut self, _now: Duration) {
        self.transitions = 0;
        self.reached = false;
        self.last_color = self.sample();

        if let Err(err) = self.wheel.borrow_mut().spin() {
            warn!("could not start the rotation wheel: {err}");
        }
    }

    fn execute(&mut self, _now: Duration) {
        let Some(color) = self.sample() else {
            return;
        };

        if self.last_color.is_some_and(|last| last != color) {
            self.transitions += 1;
            debug!("saw {color:?}, {} color changes so far", self.transitions);
        }
        self.last_color = Some(color);

        self.reached = self.goal_reached(color);
    }

    fn is_finished(&self) -> bool {
        self.reached
    }

    fn end(&mut self, interrupted: bool) {
        if let Err(err) = self.wheel.borrow_mut().stop() {
            warn!("could not stop the rotation wheel: {err}");
        }

        if !interrupted {
            info!(
                "control panel done after {} color changes, last saw {:?}",
                self.transitions, self.last_color
            );
        }
    }
}

#[cfg(test)]
mod test {
    use roulette_core::time::CONTROL_PERIOD;
    use roulette_devices::sim::SimWorld;

    use super::*;

    fn command(world: &SimWorld, goal: RouletteGoal) -> RotateRoulette {
        RotateRoulette::new(
            Handle::new(RotationWheel::new(Box::new(world.wheel_motor()))),
            Handle::new(ColorSensor::new(Box::new(world.color_sensor()))),
            goal,
        )
    }

    fn run(world: &SimWorld, command: &mut RotateRoulette) -> usize {
        command.initialize(Duration::ZERO);
        for tick in 1..=2000 {
            world.step(CONTROL_PERIOD);
            command.execute(Duration::ZERO);
            if command.is_finished() {
                command.end(false);
                return tick;
            }
        }
        panic!("command never finished");
    }

    #[test]
    fn huge_revolution_goals_saturate() {
        assert_eq!(RouletteGoal::transitions_for(3), 24);
        assert_eq!(RouletteGoal::transitions_for(u32::MAX), u32::MAX);
    }

    #[test]
    fn three_revolutions_is_twenty_four_color_changes() {
        let world = SimWorld::new();
        let mut command = command(&world, RouletteGoal::Revolutions(3));

        run(&world, &mut command);

        assert_eq!(command.transitions(), 24);
        assert!(world.panel_angle() >= 3.0 * 360.0);
        assert!(world.panel_angle() < 3.0 * 360.0 + 45.0);
        assert_eq!(world.wheel_voltage(), 0.0);
    }

    #[test]
    fn stops_on_the_target_color() {
        let world = SimWorld::new();
        let mut command = command(&world, RouletteGoal::Color(WheelColor::Red));

        run(&world, &mut command);

        assert_eq!(world.color_under_sensor(), WheelColor::Red);
        assert_eq!(command.transitions(), 2);
    }

    #[test]
    fn a_dead_sensor_never_counts() {
        let world = SimWorld::new();
        world.set_sensor_connected(false);
        let mut command = command(&world, RouletteGoal::Revolutions(1));

        command.initialize(Duration::ZERO);
        for _ in 0..1000 {
            world.step(CONTROL_PERIOD);
            command.execute(Duration::ZERO);
        }

        assert!(!command.is_finished());
        assert_eq!(command.transitions(), 0);
        assert!(world.wheel_voltage() > 0.0);
    }
}
