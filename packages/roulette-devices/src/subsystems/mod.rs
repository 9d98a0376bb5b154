//! Robot subsystems.
//!
//! A subsystem owns the devices of one mechanism and exposes what the mechanism can do. Each one is
//! constructed exactly once at startup and shared through a [`Handle`](roulette_core::handle::Handle).

pub mod arm_mover;
pub mod color_sensor;
pub mod rotation_wheel;

pub use arm_mover::ArmMover;
pub use color_sensor::ColorSensor;
pub use rotation_wheel::RotationWheel;
