//! Simulated hardware.
//!
//! A [`SimWorld`] holds the state of every simulated mechanism. Device views handed out by the
//! world ([`SimMotor`], [`SimSwitch`], [`SimColorSensor`], [`SimInput`]) implement the same traits
//! as real hardware and read or write that shared state. [`SimWorld::step`] advances the physics
//! by one control period.

use core::{cell::RefCell, time::Duration};
use std::rc::Rc;

use rgb::Rgb;

use crate::{
    DeviceError,
    color::{PANEL_WEDGES, WheelColor},
    controller::{Buttons, InputSource},
    digital::DigitalIn,
    motor::{MAX_VOLTAGE, Motor, validate_voltage},
    optical::ColorSource,
};

/// Arm travel per second at full voltage, as a fraction of its range.
const ARM_TRAVEL_PER_SECOND: f64 = 2.0;

/// Control panel rotation per second at full voltage, in degrees.
const PANEL_DEGREES_PER_SECOND: f64 = 360.0;

#[derive(Debug)]
struct SimState {
    arm_voltage: f64,
    /// 0.0 is fully closed, 1.0 is fully open.
    arm_position: f64,
    arm_connected: bool,
    wheel_voltage: f64,
    panel_angle: f64,
    wheel_connected: bool,
    sensor_connected: bool,
    buttons: Buttons,
    controller_connected: bool,
}

impl Default for SimState {
    fn default() -> Self {
        Self {
            arm_voltage: 0.0,
            arm_position: 0.0,
            arm_connected: true,
            wheel_voltage: 0.0,
            panel_angle: 0.0,
            wheel_connected: true,
            sensor_connected: true,
            buttons: Buttons::empty(),
            controller_connected: true,
        }
    }
}

/// Which simulated motor a [`SimMotor`] drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MotorChannel {
    Arm,
    Wheel,
}

/// The simulated robot and control panel.
#[derive(Debug, Clone, Default)]
pub struct SimWorld {
    state: Rc<RefCell<SimState>>,
}

impl SimWorld {
    /// Creates a world with the arm closed, the panel at zero degrees and every device connected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The motor that opens and closes the arm.
    #[must_use]
    pub fn arm_motor(&self) -> SimMotor {
        SimMotor {
            state: Rc::clone(&self.state),
            channel: MotorChannel::Arm,
        }
    }

    /// The limit switch that closes when the arm is fully open.
    #[must_use]
    pub fn arm_open_switch(&self) -> SimSwitch {
        SimSwitch {
            state: Rc::clone(&self.state),
        }
    }

    /// The motor that spins the control panel.
    #[must_use]
    pub fn wheel_motor(&self) -> SimMotor {
        SimMotor {
            state: Rc::clone(&self.state),
            channel: MotorChannel::Wheel,
        }
    }

    /// The color sensor looking at the control panel.
    #[must_use]
    pub fn color_sensor(&self) -> SimColorSensor {
        SimColorSensor {
            state: Rc::clone(&self.state),
        }
    }

    /// The driver's controller.
    #[must_use]
    pub fn input(&self) -> SimInput {
        SimInput {
            state: Rc::clone(&self.state),
        }
    }

    /// Sets which controller buttons are held.
    pub fn set_buttons(&self, buttons: Buttons) {
        self.state.borrow_mut().buttons = buttons;
    }

    /// Plugs or unplugs the controller.
    pub fn set_controller_connected(&self, connected: bool) {
        self.state.borrow_mut().controller_connected = connected;
    }

    /// Connects or disconnects the arm motor.
    pub fn set_arm_connected(&self, connected: bool) {
        self.state.borrow_mut().arm_connected = connected;
    }

    /// Connects or disconnects the wheel motor.
    pub fn set_wheel_connected(&self, connected: bool) {
        self.state.borrow_mut().wheel_connected = connected;
    }

    /// Connects or disconnects the color sensor.
    pub fn set_sensor_connected(&self, connected: bool) {
        self.state.borrow_mut().sensor_connected = connected;
    }

    /// How far open the arm is, from 0.0 (closed) to 1.0 (open).
    #[must_use]
    pub fn arm_position(&self) -> f64 {
        self.state.borrow().arm_position
    }

    /// Total rotation of the control panel in degrees since the world was created.
    #[must_use]
    pub fn panel_angle(&self) -> f64 {
        self.state.borrow().panel_angle
    }

    /// Voltage currently applied to the wheel motor.
    #[must_use]
    pub fn wheel_voltage(&self) -> f64 {
        self.state.borrow().wheel_voltage
    }

    /// Voltage currently applied to the arm motor.
    #[must_use]
    pub fn arm_voltage(&self) -> f64 {
        self.state.borrow().arm_voltage
    }

    /// The color under the sensor at the panel's current angle.
    #[must_use]
    pub fn color_under_sensor(&self) -> WheelColor {
        panel_color(self.state.borrow().panel_angle)
    }

    /// Advances every mechanism by `dt`.
    pub fn step(&self, dt: Duration) {
        let mut state = self.state.borrow_mut();
        let seconds = dt.as_secs_f64();

        let arm_travel = state.arm_voltage / MAX_VOLTAGE * ARM_TRAVEL_PER_SECOND * seconds;
        state.arm_position = (state.arm_position + arm_travel).clamp(0.0, 1.0);

        state.panel_angle += state.wheel_voltage / MAX_VOLTAGE * PANEL_DEGREES_PER_SECOND * seconds;
    }
}

/// Color of the wedge at `angle` degrees.
fn panel_color(angle: f64) -> WheelColor {
    let wedge_width = 360.0 / PANEL_WEDGES as f64;
    let wedge = (angle.rem_euclid(360.0) / wedge_width) as usize % PANEL_WEDGES;
    WheelColor::PANEL_ORDER[wedge % WheelColor::PANEL_ORDER.len()]
}

/// A simulated motor controller.
#[derive(Debug, Clone)]
pub struct SimMotor {
    state: Rc<RefCell<SimState>>,
    channel: MotorChannel,
}

impl SimMotor {
    const fn name(&self) -> &'static str {
        match self.channel {
            MotorChannel::Arm => "arm motor",
            MotorChannel::Wheel => "wheel motor",
        }
    }

    fn connected(&self) -> bool {
        let state = self.state.borrow();
        match self.channel {
            MotorChannel::Arm => state.arm_connected,
            MotorChannel::Wheel => state.wheel_connected,
        }
    }

    fn ensure_connected(&self) -> Result<(), DeviceError> {
        if self.connected() {
            Ok(())
        } else {
            Err(DeviceError::Disconnected {
                device: self.name(),
            })
        }
    }
}

impl Motor for SimMotor {
    fn set_voltage(&mut self, volts: f64) -> Result<(), DeviceError> {
        self.ensure_connected()?;
        let volts = validate_voltage(volts)?;

        let mut state = self.state.borrow_mut();
        match self.channel {
            MotorChannel::Arm => state.arm_voltage = volts,
            MotorChannel::Wheel => state.wheel_voltage = volts,
        }

        Ok(())
    }

    fn voltage(&self) -> Result<f64, DeviceError> {
        self.ensure_connected()?;

        let state = self.state.borrow();
        Ok(match self.channel {
            MotorChannel::Arm => state.arm_voltage,
            MotorChannel::Wheel => state.wheel_voltage,
        })
    }
}

/// A simulated limit switch that reads high once the arm is fully open.
#[derive(Debug, Clone)]
pub struct SimSwitch {
    state: Rc<RefCell<SimState>>,
}

impl DigitalIn for SimSwitch {
    fn is_high(&self) -> Result<bool, DeviceError> {
        Ok(self.state.borrow().arm_position >= 1.0)
    }
}

/// A simulated color sensor aimed at the control panel.
#[derive(Debug, Clone)]
pub struct SimColorSensor {
    state: Rc<RefCell<SimState>>,
}

impl ColorSource for SimColorSensor {
    fn rgb(&self) -> Result<Rgb<u8>, DeviceError> {
        let state = self.state.borrow();
        if !state.sensor_connected {
            return Err(DeviceError::Disconnected {
                device: "color sensor",
            });
        }

        Ok(panel_color(state.panel_angle).nominal_rgb())
    }
}

/// A simulated driver controller.
#[derive(Debug, Clone)]
pub struct SimInput {
    state: Rc<RefCell<SimState>>,
}

impl InputSource for SimInput {
    fn buttons(&self) -> Result<Buttons, DeviceError> {
        let state = self.state.borrow();
        if !state.controller_connected {
            return Err(DeviceError::Disconnected {
                device: "controller",
            });
        }

        Ok(state.buttons)
    }
}
