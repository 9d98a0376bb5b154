//! Color sensors.

pub use rgb::Rgb;

use crate::DeviceError;

/// A sensor that reports the color of the surface in front of it.
pub trait ColorSource {
    /// Returns the most recent RGB reading, scaled to `0..=255` per channel.
    ///
    /// # Errors
    ///
    /// A [`DeviceError::Disconnected`] error is returned if the sensor is not responding.
    fn rgb(&self) -> Result<Rgb<u8>, DeviceError>;
}
