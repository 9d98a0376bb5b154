//! Swerve module kits.
//!
//! Ratios are expressed as output turns per input turn, so a drive reduction of `0.147` means the
//! wheel turns 0.147 times for every turn of the drive motor.

/// Mechanical description of one swerve module kit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleConfiguration {
    /// Wheel diameter in meters.
    pub wheel_diameter: f64,
    /// Wheel turns per drive motor turn.
    pub drive_reduction: f64,
    /// Whether the drive motor must be inverted so positive output drives forward.
    pub drive_inverted: bool,
    /// Module turns per steer motor turn.
    pub steer_reduction: f64,
    /// Whether the steer motor must be inverted so positive output turns counter-clockwise.
    pub steer_inverted: bool,
}

/// Every MK3 and MK4 kit shares the same steering gears.
const STEER_REDUCTION: f64 = (15.0 / 32.0) * (10.0 / 60.0);

impl ModuleConfiguration {
    /// SDS MK3, standard gearing.
    pub const MK3_STANDARD: Self = Self {
        wheel_diameter: 0.1016,
        drive_reduction: (14.0 / 50.0) * (28.0 / 16.0) * (15.0 / 60.0),
        drive_inverted: true,
        steer_reduction: STEER_REDUCTION,
        steer_inverted: true,
    };

    /// SDS MK3, fast gearing.
    pub const MK3_FAST: Self = Self {
        wheel_diameter: 0.1016,
        drive_reduction: (16.0 / 48.0) * (28.0 / 16.0) * (15.0 / 60.0),
        drive_inverted: true,
        steer_reduction: STEER_REDUCTION,
        steer_inverted: true,
    };

    /// SDS MK4, L1 gearing.
    pub const MK4_L1: Self = Self {
        wheel_diameter: 0.10033,
        drive_reduction: (14.0 / 50.0) * (25.0 / 19.0) * (15.0 / 45.0),
        drive_inverted: true,
        steer_reduction: STEER_REDUCTION,
        steer_inverted: true,
    };

    /// SDS MK4, L2 gearing. This is what the robot runs.
    pub const MK4_L2: Self = Self {
        wheel_diameter: 0.10033,
        drive_reduction: (14.0 / 50.0) * (27.0 / 17.0) * (15.0 / 45.0),
        drive_inverted: true,
        steer_reduction: STEER_REDUCTION,
        steer_inverted: true,
    };

    /// SDS MK4, L3 gearing.
    pub const MK4_L3: Self = Self {
        wheel_diameter: 0.10033,
        drive_reduction: (14.0 / 50.0) * (28.0 / 16.0) * (15.0 / 45.0),
        drive_inverted: true,
        steer_reduction: STEER_REDUCTION,
        steer_inverted: true,
    };

    /// SDS MK4, L4 gearing.
    pub const MK4_L4: Self = Self {
        wheel_diameter: 0.10033,
        drive_reduction: (16.0 / 48.0) * (28.0 / 16.0) * (15.0 / 45.0),
        drive_inverted: true,
        steer_reduction: STEER_REDUCTION,
        steer_inverted: true,
    };

    /// Motor turns needed for one full turn of the wheel.
    #[must_use]
    pub const fn drive_gear_ratio(&self) -> f64 {
        1.0 / self.drive_reduction
    }
}
