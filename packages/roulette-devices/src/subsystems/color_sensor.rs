//! The color sensor aimed at the control panel.

use rgb::Rgb;

use crate::{DeviceError, color::WheelColor, optical::ColorSource};

/// Reads the control panel wedge currently under the sensor.
pub struct ColorSensor {
    source: Box<dyn ColorSource>,
}

impl ColorSensor {
    /// Wraps a color source.
    #[must_use]
    pub fn new(source: Box<dyn ColorSource>) -> Self {
        Self { source }
    }

    /// The raw reading.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the sensor is not responding.
    pub fn rgb(&self) -> Result<Rgb<u8>, DeviceError> {
        self.source.rgb()
    }

    /// The classified color of the wedge under the sensor.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the sensor is not responding.
    pub fn color(&self) -> Result<WheelColor, DeviceError> {
        Ok(WheelColor::from_rgb(self.rgb()?))
    }
}

impl core::fmt::Debug for ColorSensor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ColorSensor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sim::SimWorld;

    #[test]
    fn reads_the_wedge_under_the_sensor() {
        let world = SimWorld::new();
        let sensor = ColorSensor::new(Box::new(world.color_sensor()));

        assert_eq!(sensor.color().unwrap(), world.color_under_sensor());
    }
}
