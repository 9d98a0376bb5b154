//! Holonomic drive controller tuning.
//!
//! The X and Y controllers correct field-relative translation error: with `kp = 1.0`, the
//! controller adds one unit of velocity for every unit of position error on that axis. The angle
//! controller is profiled, so it also needs [`TrapezoidConstraints`]. These bound the heading
//! controller only, not the trajectory.

use core::time::Duration;

use mint::Point2;

use crate::constants::DERIVED;

/// Proportional, integral and derivative gains for one controller.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct PidGains {
    /// Proportional gain.
    pub kp: f64,
    /// Integral gain.
    pub ki: f64,
    /// Derivative gain.
    pub kd: f64,
}

impl PidGains {
    /// Gains that produce no output. Used for modules that have not been tuned yet.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new set of gains.
    #[must_use]
    pub const fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }

    /// Returns `true` if every gain is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Velocity and acceleration limits for a profiled controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapezoidConstraints {
    /// Radians per second.
    pub max_velocity: f64,
    /// Radians per second squared.
    pub max_acceleration: f64,
}

/// A field-relative target pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPose {
    /// Position on the field in meters.
    pub position: Point2<f64>,
    /// Direction of travel when arriving at the pose, in degrees.
    pub heading_degrees: f64,
    /// Facing of the chassis at the pose, in degrees.
    pub rotation_degrees: f64,
}

/// How close the robot must get to a target before it counts as arrived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseTolerance {
    /// Allowed error along the field X axis in meters.
    pub x: f64,
    /// Allowed error along the field Y axis in meters.
    pub y: f64,
    /// Allowed heading error in degrees.
    pub degrees: f64,
}

impl PoseTolerance {
    /// Returns `true` if the given errors are all within tolerance.
    #[must_use]
    pub fn contains(&self, x_error: f64, y_error: f64, degrees_error: f64) -> bool {
        x_error.abs() <= self.x && y_error.abs() <= self.y && degrees_error.abs() <= self.degrees
    }
}

// FIXME: none of the holonomic gains below have been tuned on the competition carpet.

/// Field-relative X translation controller.
pub const X_CONTROLLER: PidGains = PidGains::new(0.002, 0.0, 0.0);

/// Field-relative Y translation controller.
pub const Y_CONTROLLER: PidGains = PidGains::new(0.002, 0.0, 0.0);

/// Profiled heading controller.
pub const ANGLE_CONTROLLER: PidGains = PidGains::new(0.50, 0.0, 0.0);

/// Maximum acceleration of the heading controller in radians per second squared.
pub const ANGLE_CONTROLLER_MAX_ACCELERATION: f64 = 3.0;

/// Constraints for the profiled heading controller.
///
/// The velocity limit is the chassis' maximum angular velocity.
#[must_use]
pub fn angle_controller_constraints() -> TrapezoidConstraints {
    TrapezoidConstraints {
        max_velocity: DERIVED.angle_controller_max_velocity,
        max_acceleration: ANGLE_CONTROLLER_MAX_ACCELERATION,
    }
}

/// End of the autonomous trajectory. The start is always the robot's current pose.
pub const TRAJECTORY_END: FieldPose = FieldPose {
    position: Point2 { x: 0.50, y: 0.50 },
    heading_degrees: 0.0,
    rotation_degrees: 90.0,
};

/// Arrival tolerance used by the drive controller in autonomous.
pub const POSITION_TOLERANCE: PoseTolerance = PoseTolerance {
    x: 0.25,
    y: 0.25,
    degrees: 10.0,
};

/// Standard gravity, used to turn accelerometer readings in G into meters per second squared.
pub const GRAVITY: f64 = 9.806_65;

/// Timeout applied to configuration calls on the motor controllers.
pub const TALON_TIMEOUT: Duration = Duration::from_millis(10);

/// Converts an acceleration measured in G into meters per second squared.
#[must_use]
pub const fn gravity_to_mps2(g: f64) -> f64 {
    g * GRAVITY
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn untuned_gains_are_zero() {
        assert!(PidGains::ZERO.is_zero());
        assert!(!ANGLE_CONTROLLER.is_zero());
    }

    #[test]
    fn heading_constraints_follow_derived_limit() {
        let constraints = angle_controller_constraints();
        assert_eq!(constraints.max_velocity, DERIVED.max_angular_velocity);
        assert_eq!(constraints.max_acceleration, 3.0);
    }

    #[test]
    fn tolerance_is_inclusive() {
        assert!(POSITION_TOLERANCE.contains(0.25, -0.25, 10.0));
        assert!(!POSITION_TOLERANCE.contains(0.26, 0.0, 0.0));
        assert!(!POSITION_TOLERANCE.contains(0.0, 0.0, -10.5));
    }

    #[test]
    fn one_g_is_standard_gravity() {
        assert_eq!(gravity_to_mps2(1.0), 9.806_65);
        assert_eq!(gravity_to_mps2(0.0), 0.0);
    }
}
