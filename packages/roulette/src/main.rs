//! Runs the control program against the simulated robot.
//!
//! The match starts disabled, switches to teleop, and the driver taps the control panel button
//! once. The program exits after the sequence finishes or the teleop period runs out.

use std::{rc::Rc, time::Duration};

use log::{LevelFilter, SetLoggerError, info, warn};
use roulette::{constants::ROULETTE_BUTTON, logger, prelude::*};

/// How long the robot sits disabled before teleop.
const DISABLED_PERIOD: Duration = Duration::from_secs(1);

/// Length of the teleop period.
const TELEOP_PERIOD: Duration = Duration::from_secs(135);

struct Match {
    world: SimWorld,
    clock: Rc<ManualClock>,
    robot: Robot<Rc<ManualClock>>,
}

impl Match {
    fn cycle(&mut self, mode: RobotMode) {
        self.robot.tick(mode);
        self.world.step(CONTROL_PERIOD);
        self.clock.advance(CONTROL_PERIOD);
    }

    fn run_for(&mut self, mode: RobotMode, period: Duration) {
        let start = self.clock.uptime();
        while self.clock.uptime() - start < period {
            self.cycle(mode);
        }
    }
}

fn main() -> Result<(), SetLoggerError> {
    logger::init(LevelFilter::Info)?;

    let world = SimWorld::new();
    let clock = Rc::new(ManualClock::new());
    let container = RobotContainer::new(RobotHardware::simulated(&world));
    let timeline = container.roulette_timeline();

    let mut game = Match {
        robot: Robot::new(container, Rc::clone(&clock)),
        world,
        clock,
    };

    game.run_for(RobotMode::Disabled, DISABLED_PERIOD);

    game.world.set_buttons(ROULETTE_BUTTON.flag());
    game.cycle(RobotMode::Teleop);
    game.world.set_buttons(Buttons::empty());

    let teleop_end = game.clock.uptime() + TELEOP_PERIOD;
    while game.robot.container().is_roulette_running() && game.clock.uptime() < teleop_end {
        game.cycle(RobotMode::Teleop);
    }

    game.cycle(RobotMode::Disabled);

    match timeline.borrow().last() {
        Some(run) if run.finished_at.is_some() => info!(
            "arm open at {:?}, wheel started at {:?}, panel done at {:?} ({:.0} degrees)",
            run.first_finished_at,
            run.second_started_at,
            run.finished_at,
            game.world.panel_angle(),
        ),
        Some(run) => warn!("control panel sequence did not finish: {run:?}"),
        None => warn!("control panel sequence never started"),
    }

    Ok(())
}
