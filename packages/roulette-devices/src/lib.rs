//! Hardware abstractions for the roulette robot.
//!
//! # Overview
//!
//! The robot program never talks to vendor libraries directly. Each kind of hardware it touches is
//! described by a small trait, and the subsystems are written against those traits:
//!
//! - [`controller`]: the driver's PS4 controller and per-button edge detection.
//! - [`motor`]: anything that accepts a voltage command.
//! - [`digital`]: digital inputs such as limit switches.
//! - [`optical`]: color sensors reporting RGB readings.
//! - [`color`]: classification of readings into control panel colors.
//! - [`subsystems`]: the arm mover, color sensor and rotation wheel.
//! - [`sim`]: simulated implementations of every trait, for running on a host.

pub mod color;
pub mod controller;
pub mod digital;
pub mod motor;
pub mod optical;
pub mod sim;
pub mod subsystems;

use snafu::Snafu;

#[derive(Debug, Snafu)]
/// Errors that can take place when talking to a device.
pub enum DeviceError {
    /// The device is not responding.
    #[snafu(display("{device} is disconnected"))]
    Disconnected {
        /// Name of the device that stopped responding.
        device: &'static str,
    },

    /// A commanded output was outside the range the device accepts.
    #[snafu(display("output {value} is outside [-{limit}, {limit}]"))]
    OutputOutOfRange {
        /// The rejected output.
        value: f64,
        /// Largest accepted magnitude.
        limit: f64,
    },
}
