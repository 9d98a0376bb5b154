//! Base drivetrain parameters and the chassis limits derived from them.
//!
//! The theoretical maximum velocity of the chassis is
//!
//! ```text
//! <motor free speed RPM> / 60 * <drive reduction> * <wheel diameter> * pi
//! ```
//!
//! and the maximum angular velocity is that velocity divided by the distance from the center of
//! the robot to a module, `hypot(track width / 2, wheelbase / 2)`.
//!
//! The wheel diameter is tuned in centimeters, so linear velocities come out in centimeters per
//! second.

use core::f64::consts::PI;
use std::sync::LazyLock;

use crate::{encoder::EncoderResolution, gearing::ModuleConfiguration};

/// Free speed of a Falcon 500 in RPM.
pub const FALCON_FREE_SPEED_RPM: f64 = 6380.0;

/// Motor speed used when computing the autonomous velocity cap, in RPM.
pub const AUTONOMOUS_FREE_SPEED_RPM: f64 = 6000.0;

/// Wheel diameter in centimeters.
pub const WHEEL_DIAMETER_CM: f64 = 10.16;

/// Left-to-right distance between the wheels, measured center to center.
pub const TRACK_WIDTH: f64 = 5.903;

/// Front-to-back distance between the wheels, measured center to center.
pub const WHEELBASE: f64 = 5.903;

/// Can be lowered to cap the robot's speed, typically during initial testing.
pub const MAX_VOLTAGE: f64 = 11.0;

/// Maximum linear acceleration of the chassis.
// TODO: measure the real maximum acceleration; 2.5 is a placeholder.
pub const MAX_CHASSIS_ACCELERATION: f64 = 2.5;

/// The physical inputs to every derived drivetrain limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseParameters {
    /// Free speed of the drive motor in RPM.
    pub free_speed_rpm: f64,
    /// Wheel diameter.
    pub wheel_diameter: f64,
    /// Wheel turns per drive motor turn.
    pub drive_reduction: f64,
    /// Left-to-right wheel spacing.
    pub track_width: f64,
    /// Front-to-back wheel spacing.
    pub wheelbase: f64,
}

impl BaseParameters {
    /// The parameters of the competition robot.
    pub const ROBOT: Self = Self {
        free_speed_rpm: FALCON_FREE_SPEED_RPM,
        wheel_diameter: WHEEL_DIAMETER_CM,
        drive_reduction: ModuleConfiguration::MK4_L2.drive_reduction,
        track_width: TRACK_WIDTH,
        wheelbase: WHEELBASE,
    };

    /// Returns a copy of these parameters with a different motor free speed.
    #[must_use]
    pub const fn with_free_speed(self, free_speed_rpm: f64) -> Self {
        Self {
            free_speed_rpm,
            ..self
        }
    }

    /// Distance covered by one wheel revolution.
    #[must_use]
    pub const fn wheel_circumference(&self) -> f64 {
        self.wheel_diameter * PI
    }

    /// How fast the robot can drive in a straight line.
    #[must_use]
    pub const fn max_linear_velocity(&self) -> f64 {
        self.free_speed_rpm / 60.0 * self.drive_reduction * self.wheel_diameter * PI
    }

    /// Distance from the center of the chassis to each module.
    #[must_use]
    pub fn module_radius(&self) -> f64 {
        (self.track_width / 2.0).hypot(self.wheelbase / 2.0)
    }

    /// How fast the robot can rotate in place, in radians per unit time.
    #[must_use]
    pub fn max_angular_velocity(&self) -> f64 {
        self.max_linear_velocity() / self.module_radius()
    }
}

/// Every value derived from [`BaseParameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedConstants {
    /// Distance covered by one wheel revolution.
    pub wheel_circumference: f64,
    /// Straight-line velocity limit at full motor free speed.
    pub max_chassis_velocity: f64,
    /// Straight-line velocity limit used while following autonomous paths.
    pub max_chassis_velocity_auto: f64,
    /// Rotational velocity limit.
    pub max_angular_velocity: f64,
    /// Velocity limit handed to the profiled heading controller.
    pub angle_controller_max_velocity: f64,
    /// Degrees per CANCoder tick.
    pub cancoder_degrees_per_tick: f64,
    /// Degrees per integrated Falcon encoder tick.
    pub integrated_degrees_per_tick: f64,
}

impl DerivedConstants {
    /// Derives every limit from `base`, using `auto_free_speed_rpm` for the autonomous cap.
    #[must_use]
    pub fn derive(base: &BaseParameters, auto_free_speed_rpm: f64) -> Self {
        let max_angular_velocity = base.max_angular_velocity();

        Self {
            wheel_circumference: base.wheel_circumference(),
            max_chassis_velocity: base.max_linear_velocity(),
            max_chassis_velocity_auto: base.with_free_speed(auto_free_speed_rpm).max_linear_velocity(),
            max_angular_velocity,
            angle_controller_max_velocity: max_angular_velocity,
            cancoder_degrees_per_tick: EncoderResolution::CANCODER.degrees_per_tick(),
            integrated_degrees_per_tick: EncoderResolution::INTEGRATED.degrees_per_tick(),
        }
    }
}

/// The competition robot's derived limits, computed on first access.
pub static DERIVED: LazyLock<DerivedConstants> = LazyLock::new(|| {
    let derived = DerivedConstants::derive(&BaseParameters::ROBOT, AUTONOMOUS_FREE_SPEED_RPM);
    log::debug!("derived drivetrain limits: {derived:?}");
    derived
});
