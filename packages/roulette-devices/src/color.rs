//! Control panel colors.
//!
//! The control panel is a wheel of eight wedges, two of each color. A reading is classified by its
//! hue; readings that are too dark or too washed out to trust are [`WheelColor::Unknown`].

use rgb::Rgb;

/// Number of wedges printed on the control panel.
pub const PANEL_WEDGES: usize = 8;

/// A color printed on the control panel.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelColor {
    /// Red wedge.
    Red,
    /// Yellow wedge.
    Yellow,
    /// Green wedge.
    Green,
    /// Blue (cyan) wedge.
    Blue,
    /// Nothing recognizable is in front of the sensor.
    #[default]
    Unknown,
}

impl WheelColor {
    /// The colors printed on the panel, in the order they pass a fixed sensor as the panel spins.
    pub const PANEL_ORDER: [Self; 4] = [Self::Blue, Self::Green, Self::Red, Self::Yellow];

    /// Readings with less saturation than this are treated as white or grey.
    pub const MIN_SATURATION: f64 = 0.3;

    /// Readings with less brightness than this are treated as black.
    pub const MIN_VALUE: f64 = 0.1;

    /// Classifies an RGB reading.
    #[must_use]
    pub fn from_rgb(reading: Rgb<u8>) -> Self {
        let (hue, saturation, value) = hsv(reading);

        if saturation < Self::MIN_SATURATION || value < Self::MIN_VALUE {
            return Self::Unknown;
        }

        match hue {
            h if !(30.0..330.0).contains(&h) => Self::Red,
            h if h < 90.0 => Self::Yellow,
            h if h < 150.0 => Self::Green,
            h if h < 270.0 => Self::Blue,
            _ => Self::Unknown,
        }
    }

    /// A pure reading of this color, as printed on the panel.
    #[must_use]
    pub const fn nominal_rgb(self) -> Rgb<u8> {
        match self {
            Self::Red => Rgb { r: 255, g: 0, b: 0 },
            Self::Yellow => Rgb { r: 255, g: 255, b: 0 },
            Self::Green => Rgb { r: 0, g: 255, b: 0 },
            Self::Blue => Rgb { r: 0, g: 255, b: 255 },
            Self::Unknown => Rgb { r: 0, g: 0, b: 0 },
        }
    }
}

/// Converts a reading to hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
fn hsv(reading: Rgb<u8>) -> (f64, f64, f64) {
    let r = f64::from(reading.r) / 255.0;
    let g = f64::from(reading.g) / 255.0;
    let b = f64::from(reading.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    (hue, saturation, max)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nominal_colors_classify_as_themselves() {
        for color in WheelColor::PANEL_ORDER {
            assert_eq!(WheelColor::from_rgb(color.nominal_rgb()), color);
        }
    }

    #[test]
    fn classifies_real_sensor_readings() {
        assert_eq!(WheelColor::from_rgb(Rgb::new(180, 60, 40)), WheelColor::Red);
        assert_eq!(WheelColor::from_rgb(Rgb::new(170, 160, 50)), WheelColor::Yellow);
        assert_eq!(WheelColor::from_rgb(Rgb::new(50, 150, 70)), WheelColor::Green);
        assert_eq!(WheelColor::from_rgb(Rgb::new(40, 120, 140)), WheelColor::Blue);
    }

    #[test]
    fn washed_out_or_dark_readings_are_unknown() {
        assert_eq!(WheelColor::from_rgb(Rgb::new(200, 200, 200)), WheelColor::Unknown);
        assert_eq!(WheelColor::from_rgb(Rgb::new(10, 0, 0)), WheelColor::Unknown);
        assert_eq!(WheelColor::from_rgb(Rgb::new(200, 0, 200)), WheelColor::Unknown);
    }
}
