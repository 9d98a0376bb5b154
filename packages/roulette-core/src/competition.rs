//! Match phase tracking.

/// Represents a possible mode that the robot can be placed in during a match.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotMode {
    /// The disabled mode.
    ///
    /// Outputs to motors are not allowed. Robots start in this mode and return to it between
    /// match periods.
    #[default]
    Disabled,

    /// The autonomous mode.
    ///
    /// Motors and sensors may be accessed, but driver input must not be read.
    Autonomous,

    /// The teleoperated (driver control) mode.
    ///
    /// All device access is available, including controller buttons and joysticks.
    Teleop,
}

impl RobotMode {
    /// Returns `true` if outputs to actuators are allowed in this mode.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Tracks the last observed [`RobotMode`] and reports changes to it.
#[derive(Default, Debug, Clone, Copy)]
pub struct ModeUpdates {
    last: Option<RobotMode>,
}

impl ModeUpdates {
    /// Creates a tracker that has not observed any mode yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Records `current` and returns it if it differs from the previously observed mode.
    ///
    /// The first observation always counts as a change.
    pub fn observe(&mut self, current: RobotMode) -> Option<RobotMode> {
        if self.last == Some(current) {
            None
        } else {
            self.last = Some(current);
            Some(current)
        }
    }

    /// Returns the last observed mode, or [`RobotMode::Disabled`] if nothing was observed yet.
    #[must_use]
    pub fn last(&self) -> RobotMode {
        self.last.unwrap_or_default()
    }
}
