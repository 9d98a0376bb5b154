//! Voltage-controlled motors.

use snafu::ensure;

use crate::{DeviceError, OutputOutOfRangeSnafu};

/// A motor driven by a voltage command.
pub trait Motor {
    /// Commands the motor to the given voltage. Negative values spin in reverse.
    ///
    /// # Errors
    ///
    /// - A [`DeviceError::Disconnected`] error is returned if the motor controller is not
    ///   responding.
    /// - A [`DeviceError::OutputOutOfRange`] error is returned if `volts` is not finite or its
    ///   magnitude exceeds [`MAX_VOLTAGE`].
    fn set_voltage(&mut self, volts: f64) -> Result<(), DeviceError>;

    /// Returns the voltage the motor was last commanded to.
    ///
    /// # Errors
    ///
    /// A [`DeviceError::Disconnected`] error is returned if the motor controller is not responding.
    fn voltage(&self) -> Result<f64, DeviceError>;

    /// Stops the motor by commanding zero volts.
    ///
    /// # Errors
    ///
    /// See [`Motor::set_voltage`].
    fn brake(&mut self) -> Result<(), DeviceError> {
        self.set_voltage(0.0)
    }
}

/// The largest voltage magnitude a motor controller accepts.
pub const MAX_VOLTAGE: f64 = 12.0;

/// Checks that `volts` is a command a motor controller would accept.
///
/// # Errors
///
/// A [`DeviceError::OutputOutOfRange`] error is returned if `volts` is not finite or its
/// magnitude exceeds [`MAX_VOLTAGE`].
pub fn validate_voltage(volts: f64) -> Result<f64, DeviceError> {
    ensure!(
        volts.is_finite() && volts.abs() <= MAX_VOLTAGE,
        OutputOutOfRangeSnafu {
            value: volts,
            limit: MAX_VOLTAGE,
        }
    );

    Ok(volts)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_commands_within_supply() {
        assert_eq!(validate_voltage(12.0).unwrap(), 12.0);
        assert_eq!(validate_voltage(-3.5).unwrap(), -3.5);
    }

    #[test]
    fn rejects_commands_outside_supply() {
        assert!(matches!(
            validate_voltage(12.5),
            Err(DeviceError::OutputOutOfRange { .. })
        ));
        assert!(validate_voltage(f64::NAN).is_err());
        assert!(validate_voltage(f64::NEG_INFINITY).is_err());
    }
}
