//! The arm that lifts the spinner up to the control panel.

use crate::{DeviceError, digital::DigitalIn, motor::Motor};

/// Raises the spinner arm against the control panel.
pub struct ArmMover {
    motor: Box<dyn Motor>,
    open_switch: Box<dyn DigitalIn>,
}

impl ArmMover {
    /// Voltage applied while the arm is opening.
    pub const OPEN_VOLTAGE: f64 = 6.0;

    /// Creates the arm from its motor and the limit switch that closes when it is fully open.
    #[must_use]
    pub fn new(motor: Box<dyn Motor>, open_switch: Box<dyn DigitalIn>) -> Self {
        Self { motor, open_switch }
    }

    /// Starts driving the arm open.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the arm motor rejects the command.
    pub fn open(&mut self) -> Result<(), DeviceError> {
        self.motor.set_voltage(Self::OPEN_VOLTAGE)
    }

    /// Stops the arm where it is.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the arm motor rejects the command.
    pub fn stop(&mut self) -> Result<(), DeviceError> {
        self.motor.brake()
    }

    /// Returns `true` once the open limit switch has tripped.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the switch cannot be read.
    pub fn is_open(&self) -> Result<bool, DeviceError> {
        self.open_switch.is_high()
    }
}

impl core::fmt::Debug for ArmMover {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArmMover").finish_non_exhaustive()
    }
}
