//! The wheel that spins the control panel.

use crate::{DeviceError, motor::Motor};

/// Spins the control panel by friction against its rim.
pub struct RotationWheel {
    motor: Box<dyn Motor>,
}

impl RotationWheel {
    /// Voltage applied while spinning. Kept low so the sensor sees every wedge.
    pub const SPIN_VOLTAGE: f64 = 4.0;

    /// Wraps the wheel motor.
    #[must_use]
    pub fn new(motor: Box<dyn Motor>) -> Self {
        Self { motor }
    }

    /// Starts spinning the panel.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the wheel motor rejects the command.
    pub fn spin(&mut self) -> Result<(), DeviceError> {
        self.motor.set_voltage(Self::SPIN_VOLTAGE)
    }

    /// Stops the wheel.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the wheel motor rejects the command.
    pub fn stop(&mut self) -> Result<(), DeviceError> {
        self.motor.brake()
    }

    /// Returns `true` if the wheel is being driven.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the wheel motor is not responding.
    pub fn is_spinning(&self) -> Result<bool, DeviceError> {
        Ok(self.motor.voltage()? != 0.0)
    }
}

impl core::fmt::Debug for RotationWheel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RotationWheel").finish_non_exhaustive()
    }
}
