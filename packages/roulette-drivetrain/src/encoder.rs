//! Encoder tick conversion.
//!
//! Two encoders report steering and drive positions:
//!
//! - The CANCoder on each module reports the absolute steering angle with 4096 ticks per turn.
//! - The Falcon 500's integrated encoder reports motor shaft position with 2048 ticks per turn.

/// The resolution of a rotary encoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncoderResolution {
    ticks_per_revolution: f64,
}

impl EncoderResolution {
    /// CTRE CANCoder absolute encoder.
    pub const CANCODER: Self = Self::new(4096.0);

    /// Falcon 500 integrated encoder.
    pub const INTEGRATED: Self = Self::new(2048.0);

    /// Creates a resolution from a tick count per revolution.
    ///
    /// The count is kept as a float so the conversions below never truncate.
    #[must_use]
    pub const fn new(ticks_per_revolution: f64) -> Self {
        Self {
            ticks_per_revolution,
        }
    }

    /// Number of ticks in one full revolution.
    #[must_use]
    pub const fn ticks_per_revolution(&self) -> f64 {
        self.ticks_per_revolution
    }

    /// Degrees of rotation represented by one tick.
    #[must_use]
    pub const fn degrees_per_tick(&self) -> f64 {
        360.0 / self.ticks_per_revolution
    }

    /// Converts a raw tick count into degrees.
    #[must_use]
    pub const fn ticks_to_degrees(&self, ticks: f64) -> f64 {
        ticks * self.degrees_per_tick()
    }

    /// Converts degrees into a raw tick count.
    #[must_use]
    pub const fn degrees_to_ticks(&self, degrees: f64) -> f64 {
        degrees / self.degrees_per_tick()
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
#[must_use]
pub fn wrap_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn factor_times_resolution_is_a_full_turn() {
        for encoder in [EncoderResolution::CANCODER, EncoderResolution::INTEGRATED] {
            assert_eq!(encoder.degrees_per_tick() * encoder.ticks_per_revolution(), 360.0);
        }
    }

    #[test]
    fn converts_ticks_to_degrees() {
        assert_eq!(EncoderResolution::CANCODER.ticks_to_degrees(1024.0), 90.0);
        assert_eq!(EncoderResolution::INTEGRATED.ticks_to_degrees(1024.0), 180.0);
        assert_relative_eq!(EncoderResolution::CANCODER.degrees_to_ticks(45.0), 512.0);
    }

    #[test]
    fn wraps_into_one_turn() {
        assert_relative_eq!(wrap_degrees(-74.6), 285.4, epsilon = 1e-9);
        assert_relative_eq!(wrap_degrees(725.0), 5.0, epsilon = 1e-9);
        assert_eq!(wrap_degrees(360.0), 0.0);
    }
}
