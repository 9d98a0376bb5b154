use std::rc::Rc;

use approx::assert_relative_eq;
use roulette::{
    commands::Timeline,
    constants::ROULETTE_BUTTON,
    drivetrain::{BaseParameters, DERIVED, EncoderResolution, ModuleConfiguration},
    handle::Handle,
    prelude::*,
};

/// Upper bound on cycles for one run of the sequence.
const MAX_CYCLES: usize = 2_000;

struct Harness {
    world: SimWorld,
    clock: Rc<ManualClock>,
    robot: Robot<Rc<ManualClock>>,
    timeline: Handle<Timeline>,
}

impl Harness {
    fn new() -> Self {
        let world = SimWorld::new();
        let clock = Rc::new(ManualClock::new());
        let container = RobotContainer::new(RobotHardware::simulated(&world));
        let timeline = container.roulette_timeline();

        Self {
            robot: Robot::new(container, Rc::clone(&clock)),
            world,
            clock,
            timeline,
        }
    }

    fn cycle(&mut self, mode: RobotMode) {
        self.robot.tick(mode);
        self.world.step(CONTROL_PERIOD);
        self.clock.advance(CONTROL_PERIOD);
    }

    fn tap(&mut self) {
        self.world.set_buttons(ROULETTE_BUTTON.flag());
        self.cycle(RobotMode::Teleop);
        self.world.set_buttons(Buttons::empty());
    }

    /// Cycles in teleop until the sequence is no longer scheduled, returning the cycles spent.
    fn run_to_completion(&mut self) -> usize {
        let mut cycles = 0;
        while self.robot.container().is_roulette_running() {
            assert!(cycles < MAX_CYCLES, "sequence did not finish");
            self.cycle(RobotMode::Teleop);
            cycles += 1;
        }
        cycles
    }
}

#[test]
fn subsystems_are_acquired_once() {
    let harness = Harness::new();
    let container = harness.robot.container();

    assert!(container.arm_mover().ptr_eq(&container.arm_mover()));
    assert!(container.color_sensor().ptr_eq(&container.color_sensor()));
    assert!(container.rotation_wheel().ptr_eq(&container.rotation_wheel()));
    assert!(container.roulette_timeline().ptr_eq(&harness.timeline));
}

#[test]
fn wheel_starts_only_after_the_arm_is_open() {
    let mut harness = Harness::new();
    harness.cycle(RobotMode::Disabled);

    for _ in 0..3 {
        harness.tap();
        harness.run_to_completion();
        harness.cycle(RobotMode::Teleop);
    }

    let timeline = harness.timeline.borrow();
    assert_eq!(timeline.len(), 3);
    for run in timeline.iter() {
        let opened = run.first_finished_at.expect("arm never opened");
        let started = run.second_started_at.expect("wheel never started");
        let finished = run.finished_at.expect("wheel never finished");

        assert!(run.triggered_at <= opened);
        assert!(opened < started);
        assert!(started <= finished);
        assert!(!run.interrupted);
    }

    assert_relative_eq!(harness.world.arm_position(), 1.0);
    assert_relative_eq!(harness.world.wheel_voltage(), 0.0);
    assert!(harness.world.panel_angle() > 2.0 * 3.0 * 360.0);
}

#[test]
fn pressing_during_a_run_does_not_restart_it() {
    let mut harness = Harness::new();

    harness.tap();
    for _ in 0..10 {
        harness.cycle(RobotMode::Teleop);
    }
    harness.tap();
    harness.run_to_completion();

    assert_eq!(harness.timeline.borrow().len(), 1);
}

#[test]
fn disabling_cancels_the_sequence() {
    let mut harness = Harness::new();

    harness.tap();
    for _ in 0..MAX_CYCLES {
        if harness.timeline.borrow()[0].second_started_at.is_some() {
            break;
        }
        harness.cycle(RobotMode::Teleop);
    }
    assert!(harness.world.wheel_voltage() > 0.0);
    harness.cycle(RobotMode::Disabled);

    assert!(!harness.robot.container().is_roulette_running());
    assert_relative_eq!(harness.world.wheel_voltage(), 0.0);

    let timeline = harness.timeline.borrow();
    let run = timeline.last().expect("sequence never ran");
    assert!(run.interrupted);
    assert!(run.finished_at.is_none());
}

#[test]
fn a_broken_arm_never_spins_the_wheel() {
    let mut harness = Harness::new();
    harness.world.set_arm_connected(false);

    harness.tap();
    for _ in 0..500 {
        harness.cycle(RobotMode::Teleop);
        assert_relative_eq!(harness.world.wheel_voltage(), 0.0);
    }

    assert!(harness.robot.container().is_roulette_running());
    assert_eq!(harness.robot.container().scheduler().len(), 1);

    let timeline = harness.timeline.borrow();
    assert_eq!(timeline[0].first_finished_at, None);
    assert_eq!(timeline[0].second_started_at, None);
}

#[test]
fn robot_constants_follow_the_configured_module() {
    let reduction = ModuleConfiguration::MK4_L2.drive_reduction;
    let expected = 6380.0 / 60.0 * reduction * 10.16 * core::f64::consts::PI;
    assert_relative_eq!(DERIVED.max_chassis_velocity, expected);

    let base = BaseParameters::ROBOT;
    let radius = (base.track_width / 2.0).hypot(base.wheelbase / 2.0);
    assert_relative_eq!(DERIVED.max_angular_velocity, expected / radius);

    assert_eq!(
        DERIVED.cancoder_degrees_per_tick * EncoderResolution::CANCODER.ticks_per_revolution(),
        360.0
    );
}
