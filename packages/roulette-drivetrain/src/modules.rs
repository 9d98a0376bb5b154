//! Per-module configuration.
//!
//! # Angle offsets
//!
//! To find the offsets, set them to zero, deploy, then straighten the modules with a straightedge
//! while disabled and copy the absolute encoder angles in. The wheels should all point forwards
//! with the bevel gears facing right.
//!
//! # CANCoder IDs
//!
//! The CANCoders are used as remote feedback devices for the steer motors, which only accept
//! remote sensor IDs of 15 or less. This is checked at compile time.

use mint::Vector2;

use crate::{encoder::wrap_degrees, tuning::PidGains};

/// The corner of the chassis a module is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModulePosition {
    /// Front left.
    FrontLeft,
    /// Front right.
    FrontRight,
    /// Back left.
    BackLeft,
    /// Back right.
    BackRight,
}

impl ModulePosition {
    /// All four corners, in the order used by [`MODULES`].
    pub const ALL: [Self; 4] = [
        Self::FrontLeft,
        Self::FrontRight,
        Self::BackLeft,
        Self::BackRight,
    ];

    /// The module's configuration.
    #[must_use]
    pub const fn config(self) -> SwerveModuleConfig {
        MODULES[self as usize]
    }

    /// Location of the module relative to the chassis center, X forward and Y left.
    #[must_use]
    pub fn location(self, track_width: f64, wheelbase: f64) -> Vector2<f64> {
        let (x, y) = match self {
            Self::FrontLeft => (wheelbase, track_width),
            Self::FrontRight => (wheelbase, -track_width),
            Self::BackLeft => (-wheelbase, track_width),
            Self::BackRight => (-wheelbase, -track_width),
        };

        Vector2 { x: x / 2.0, y: y / 2.0 }
    }
}

/// Hardware IDs and tuning for one swerve module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwerveModuleConfig {
    /// CAN ID of the drive Falcon.
    pub drive_motor_id: u8,
    /// CAN ID of the steer Falcon.
    pub steer_motor_id: u8,
    /// CAN ID of the CANCoder.
    pub cancoder_id: u8,
    /// Added to the raw absolute angle so that zero points forward, in degrees.
    pub angle_offset_degrees: f64,
    /// Drive velocity loop gains.
    pub drive_gains: PidGains,
    /// Steer position loop gains.
    pub steer_gains: PidGains,
    /// Steering angle used when the wheels are cross-locked to resist pushing, in degrees.
    pub cross_lock_degrees: f64,
}

impl SwerveModuleConfig {
    /// Highest CANCoder ID a steer motor can use as a remote sensor.
    pub const MAX_REMOTE_SENSOR_ID: u8 = 15;

    /// Applies this module's offset to a raw absolute encoder angle, wrapping into `[0, 360)`.
    #[must_use]
    pub fn absolute_angle(&self, raw_degrees: f64) -> f64 {
        wrap_degrees(raw_degrees + self.angle_offset_degrees)
    }
}

/// Every module, indexed by [`ModulePosition`].
pub const MODULES: [SwerveModuleConfig; 4] = [
    SwerveModuleConfig {
        drive_motor_id: 20,
        steer_motor_id: 21,
        cancoder_id: 10,
        angle_offset_degrees: -74.6,
        drive_gains: PidGains::ZERO,
        steer_gains: PidGains::ZERO,
        cross_lock_degrees: 45.0,
    },
    SwerveModuleConfig {
        drive_motor_id: 22,
        steer_motor_id: 23,
        cancoder_id: 11,
        angle_offset_degrees: -346.0,
        drive_gains: PidGains::ZERO,
        steer_gains: PidGains::ZERO,
        cross_lock_degrees: 135.0,
    },
    SwerveModuleConfig {
        drive_motor_id: 24,
        steer_motor_id: 25,
        cancoder_id: 12,
        angle_offset_degrees: -352.6,
        drive_gains: PidGains::ZERO,
        steer_gains: PidGains::ZERO,
        cross_lock_degrees: 135.0,
    },
    SwerveModuleConfig {
        drive_motor_id: 26,
        steer_motor_id: 27,
        cancoder_id: 13,
        angle_offset_degrees: -40.42,
        drive_gains: PidGains::ZERO,
        steer_gains: PidGains::ZERO,
        cross_lock_degrees: 45.0,
    },
];

const _: () = {
    let mut i = 0;
    while i < MODULES.len() {
        assert!(MODULES[i].cancoder_id <= SwerveModuleConfig::MAX_REMOTE_SENSOR_ID);
        i += 1;
    }
};
