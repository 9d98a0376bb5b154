//! The command lifecycle.

use core::time::Duration;

/// A unit of robot behavior that runs across control cycles.
///
/// The scheduler calls [`initialize`](Command::initialize) once when the command is scheduled,
/// then [`execute`](Command::execute) once per cycle until [`is_finished`](Command::is_finished)
/// returns `true`, then [`end`](Command::end). A command that is cancelled before finishing gets
/// `end(true)` instead.
///
/// `now` is the uptime at the start of the current control cycle.
pub trait Command {
    /// Name used in log messages.
    fn name(&self) -> &'static str;

    /// Called once when the command is scheduled.
    fn initialize(&mut self, _now: Duration) {}

    /// Called once per control cycle while the command is scheduled.
    fn execute(&mut self, now: Duration);

    /// Returns `true` once the command has done its job.
    fn is_finished(&self) -> bool;

    /// Called once when the command stops, either because it finished or because it was
    /// interrupted.
    fn end(&mut self, _interrupted: bool) {}
}
