//! Swerve drivetrain constants.
//!
//! # Overview
//!
//! The drivetrain is four swerve modules, each with a Falcon 500 driving the wheel, a second Falcon
//! steering it, and a CANCoder reporting the absolute steering angle. This crate holds the tuned
//! numbers for that hardware and the arithmetic that turns them into chassis limits:
//!
//! - [`gearing`]: gear ratios and wheel sizes of the supported module kits.
//! - [`constants`]: base physical parameters and the limits derived from them.
//! - [`encoder`]: tick/degree conversion for the absolute and integrated encoders.
//! - [`modules`]: per-corner motor IDs, angle offsets and gains.
//! - [`tuning`]: holonomic drive controller gains, constraints and tolerances.
//!
//! Nothing here drives a motor. The values are consumed by the motor-control and kinematics layer.

pub mod constants;
pub mod encoder;
pub mod gearing;
pub mod modules;
pub mod tuning;

pub use constants::{BaseParameters, DERIVED, DerivedConstants};
pub use encoder::EncoderResolution;
pub use gearing::ModuleConfiguration;
pub use modules::{ModulePosition, SwerveModuleConfig};
pub use tuning::PidGains;
