//! The robot's composition root.
//!
//! [`RobotContainer`] owns the driver's controller, constructs every subsystem exactly once and
//! binds commands to controller buttons. Subsystems are handed out as [`Handle`]s, so repeated
//! acquisition always yields the same instance.

use core::time::Duration;

use log::{debug, info, warn};
use roulette_commands::{
    BindingId, OpenArm, RotateRoulette, RouletteSequence, Scheduler, Timeline, Trigger,
};
use roulette_core::{competition::RobotMode, handle::Handle};
use roulette_devices::{
    controller::{Controller, ControllerState, InputSource},
    digital::DigitalIn,
    motor::Motor,
    optical::ColorSource,
    sim::SimWorld,
    subsystems::{ArmMover, ColorSensor, RotationWheel},
};

use crate::constants::{CONTROLLER_PORT, ROULETTE_BUTTON, ROULETTE_GOAL};

/// The devices the robot is built from.
pub struct RobotHardware {
    /// The driver's controller.
    pub input: Box<dyn InputSource>,
    /// The motor raising the spinner arm.
    pub arm_motor: Box<dyn Motor>,
    /// Limit switch that reads high once the arm is fully open.
    pub arm_open_switch: Box<dyn DigitalIn>,
    /// The motor spinning the control panel.
    pub wheel_motor: Box<dyn Motor>,
    /// The color sensor facing the control panel.
    pub color_sensor: Box<dyn ColorSource>,
}

impl RobotHardware {
    /// Devices backed by a simulated robot.
    #[must_use]
    pub fn simulated(world: &SimWorld) -> Self {
        Self {
            input: Box::new(world.input()),
            arm_motor: Box::new(world.arm_motor()),
            arm_open_switch: Box::new(world.arm_open_switch()),
            wheel_motor: Box::new(world.wheel_motor()),
            color_sensor: Box::new(world.color_sensor()),
        }
    }
}

impl core::fmt::Debug for RobotHardware {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RobotHardware").finish_non_exhaustive()
    }
}

/// Holds the subsystems and the button bindings of the robot.
#[derive(Debug)]
pub struct RobotContainer {
    controller: Controller,
    arm: Handle<ArmMover>,
    sensor: Handle<ColorSensor>,
    wheel: Handle<RotationWheel>,
    scheduler: Scheduler,
    roulette_binding: BindingId,
    roulette_timeline: Handle<Timeline>,
}

impl RobotContainer {
    /// Builds every subsystem from `hardware` and registers the button bindings.
    #[must_use]
    pub fn new(hardware: RobotHardware) -> Self {
        let arm = Handle::new(ArmMover::new(hardware.arm_motor, hardware.arm_open_switch));
        let sensor = Handle::new(ColorSensor::new(hardware.color_sensor));
        let wheel = Handle::new(RotationWheel::new(hardware.wheel_motor));

        let mut scheduler = Scheduler::new();
        let (roulette_binding, roulette_timeline) =
            configure_button_bindings(&mut scheduler, &arm, &sensor, &wheel);
        set_default_commands();

        Self {
            controller: Controller::new(CONTROLLER_PORT, hardware.input),
            arm,
            sensor,
            wheel,
            scheduler,
            roulette_binding,
            roulette_timeline,
        }
    }

    /// The spinner arm.
    #[must_use]
    pub fn arm_mover(&self) -> Handle<ArmMover> {
        self.arm.clone()
    }

    /// The color sensor facing the control panel.
    #[must_use]
    pub fn color_sensor(&self) -> Handle<ColorSensor> {
        self.sensor.clone()
    }

    /// The control panel spinner.
    #[must_use]
    pub fn rotation_wheel(&self) -> Handle<RotationWheel> {
        self.wheel.clone()
    }

    /// Every run of the control panel sequence so far.
    #[must_use]
    pub fn roulette_timeline(&self) -> Handle<Timeline> {
        self.roulette_timeline.clone()
    }

    /// Returns `true` while the control panel sequence is scheduled.
    #[must_use]
    pub fn is_roulette_running(&self) -> bool {
        self.scheduler.is_scheduled(self.roulette_binding)
    }

    /// The command scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Reacts to the robot entering `mode`.
    ///
    /// Disabling the robot interrupts every running command.
    pub fn mode_changed(&mut self, mode: RobotMode) {
        if !mode.is_enabled() {
            self.scheduler.cancel_all();
        }
    }

    /// Runs one control cycle in `mode`.
    ///
    /// The controller is read every cycle so a button held while the robot is not in teleop is
    /// never seen as a fresh press, but its state only reaches the triggers in teleop. A failed
    /// read is treated as every button being released.
    pub fn periodic(&mut self, mode: RobotMode, now: Duration) {
        let read = self.controller.update();

        let state = match (mode, read) {
            (RobotMode::Disabled, _) => return,
            (RobotMode::Autonomous, _) => ControllerState::default(),
            (RobotMode::Teleop, Ok(state)) => state,
            (RobotMode::Teleop, Err(err)) => {
                warn!("controller {}: {err}", self.controller.port());
                ControllerState::default()
            }
        };

        self.scheduler.run(&state, now);
    }
}

/// Binds the control panel sequence to [`ROULETTE_BUTTON`].
fn configure_button_bindings(
    scheduler: &mut Scheduler,
    arm: &Handle<ArmMover>,
    sensor: &Handle<ColorSensor>,
    wheel: &Handle<RotationWheel>,
) -> (BindingId, Handle<Timeline>) {
    let sequence = RouletteSequence::new(
        OpenArm::new(arm.clone()),
        RotateRoulette::new(wheel.clone(), sensor.clone(), ROULETTE_GOAL),
    );
    let timeline = sequence.timeline();
    let id = scheduler.bind(Trigger::button(ROULETTE_BUTTON), sequence);

    info!("control panel sequence bound to {ROULETTE_BUTTON:?}");
    (id, timeline)
}

/// No subsystem has a default command.
fn set_default_commands() {
    debug!("no default commands");
}
