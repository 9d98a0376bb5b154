//! Digital inputs.

use crate::DeviceError;

/// A two-state input such as a limit switch.
pub trait DigitalIn {
    /// Returns `true` if the input is reading high.
    ///
    /// # Errors
    ///
    /// A [`DeviceError::Disconnected`] error is returned if the input cannot be read.
    fn is_high(&self) -> Result<bool, DeviceError>;

    /// Returns `true` if the input is reading low.
    ///
    /// # Errors
    ///
    /// See [`DigitalIn::is_high`].
    fn is_low(&self) -> Result<bool, DeviceError> {
        Ok(!self.is_high()?)
    }
}
