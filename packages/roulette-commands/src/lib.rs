//! Commands and scheduling.
//!
//! A [`Command`] is a unit of robot behavior that runs over several control cycles. Commands are
//! bound to controller buttons with a [`Trigger`] and driven by the [`Scheduler`], which is ticked
//! once per control cycle by the robot loop.
//!
//! - [`OpenArm`] raises the spinner arm.
//! - [`RotateRoulette`] spins the control panel while watching its colors.
//! - [`RouletteSequence`] runs the two strictly one after the other.

pub mod command;
pub mod open_arm;
pub mod rotate_roulette;
pub mod scheduler;
pub mod sequence;
pub mod trigger;

pub use command::Command;
pub use open_arm::OpenArm;
pub use rotate_roulette::{RotateRoulette, RouletteGoal};
pub use scheduler::{BindingId, Scheduler};
pub use sequence::{Activation, RouletteSequence, SequenceEvent, Stage, Timeline};
pub use trigger::Trigger;
