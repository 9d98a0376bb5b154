//! Button triggers.

use roulette_devices::controller::{ControllerButton, ControllerState};

/// Fires on the rising edge of a controller button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    button: ControllerButton,
}

impl Trigger {
    /// Creates a trigger that fires the cycle `button` goes from released to pressed.
    #[must_use]
    pub const fn button(button: ControllerButton) -> Self {
        Self { button }
    }

    /// The button this trigger watches.
    #[must_use]
    pub const fn watched(&self) -> ControllerButton {
        self.button
    }

    /// Returns `true` if the trigger fires for this controller snapshot.
    #[must_use]
    pub const fn fired(&self, state: &ControllerState) -> bool {
        state.button(self.button).is_now_pressed()
    }
}
