//! PS4 controller.
//!
//! This module reads the buttons of the driver's controller and tracks their previous state so that
//! presses and releases can be detected as edges rather than levels.

use bitflags::bitflags;

use crate::DeviceError;

/// USB port the driver station assigns to the driver's controller.
pub const DRIVER_CONTROLLER_PORT: u8 = 0;

bitflags! {
    /// The raw button bits reported by a PS4 controller.
    #[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
    pub struct Buttons: u16 {
        /// Square face button.
        const SQUARE = 1 << 0;
        /// Cross face button.
        const CROSS = 1 << 1;
        /// Circle face button.
        const CIRCLE = 1 << 2;
        /// Triangle face button.
        const TRIANGLE = 1 << 3;
        /// Left bumper.
        const L1 = 1 << 4;
        /// Right bumper.
        const R1 = 1 << 5;
        /// Left trigger, fully pressed.
        const L2 = 1 << 6;
        /// Right trigger, fully pressed.
        const R2 = 1 << 7;
        /// Share button.
        const SHARE = 1 << 8;
        /// Options button.
        const OPTIONS = 1 << 9;
        /// Left stick click.
        const L3 = 1 << 10;
        /// Right stick click.
        const R3 = 1 << 11;
        /// PlayStation button.
        const PS = 1 << 12;
        /// Touchpad click.
        const TOUCHPAD = 1 << 13;
    }
}

/// A single button on the controller.
///
/// The discriminants match the 1-based button indices the driver station reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ControllerButton {
    /// Square face button.
    Square = 1,
    /// Cross face button.
    Cross = 2,
    /// Circle face button.
    Circle = 3,
    /// Triangle face button.
    Triangle = 4,
    /// Left bumper.
    L1 = 5,
    /// Right bumper.
    R1 = 6,
    /// Left trigger.
    L2 = 7,
    /// Right trigger.
    R2 = 8,
    /// Share button.
    Share = 9,
    /// Options button.
    Options = 10,
    /// Left stick click.
    L3 = 11,
    /// Right stick click.
    R3 = 12,
    /// PlayStation button.
    Ps = 13,
    /// Touchpad click.
    Touchpad = 14,
}

impl ControllerButton {
    /// The bit this button occupies in [`Buttons`].
    #[must_use]
    pub const fn flag(self) -> Buttons {
        Buttons::from_bits_retain(1 << (self as u8 - 1))
    }
}

/// Represents the state of a button on the controller.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    prev_is_pressed: bool,
    is_pressed: bool,
}

impl ButtonState {
    /// Returns `true` if this button is currently being pressed.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Returns `true` if this button is currently released (not being pressed).
    #[must_use]
    pub const fn is_released(&self) -> bool {
        !self.is_pressed
    }

    /// Returns `true` if the button was released at the previous [`Controller::update`], but is now
    /// pressed.
    #[must_use]
    pub const fn is_now_pressed(&self) -> bool {
        !self.prev_is_pressed && self.is_pressed
    }

    /// Returns `true` if the button was pressed at the previous [`Controller::update`], but is now
    /// released.
    #[must_use]
    pub const fn is_now_released(&self) -> bool {
        self.prev_is_pressed && !self.is_pressed
    }
}

/// Holds a snapshot of the state of the controller.
/// Returned by [`Controller::update`].
///
/// The default state has every button released with no edges.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct ControllerState {
    previous: Buttons,
    current: Buttons,
}

impl ControllerState {
    /// Creates a snapshot from the button bits of two consecutive reads.
    #[must_use]
    pub const fn new(previous: Buttons, current: Buttons) -> Self {
        Self { previous, current }
    }

    /// Returns the state of a single button.
    #[must_use]
    pub const fn button(&self, button: ControllerButton) -> ButtonState {
        let flag = button.flag();
        ButtonState {
            prev_is_pressed: self.previous.contains(flag),
            is_pressed: self.current.contains(flag),
        }
    }

    /// Returns every button that is currently held.
    #[must_use]
    pub const fn pressed(&self) -> Buttons {
        self.current
    }
}

/// The transport a controller is read through.
pub trait InputSource {
    /// Reads the current button bits.
    ///
    /// # Errors
    ///
    /// A [`DeviceError::Disconnected`] error is returned if the controller is unplugged.
    fn buttons(&self) -> Result<Buttons, DeviceError>;
}

/// The driver's controller.
///
/// Each call to [`Controller::update`] reads the buttons once and remembers them, so the returned
/// [`ControllerState`] can report which buttons changed since the previous call.
pub struct Controller {
    port: u8,
    source: Box<dyn InputSource>,
    last: Buttons,
}

impl Controller {
    /// Creates a controller on the given driver station port.
    #[must_use]
    pub fn new(port: u8, source: Box<dyn InputSource>) -> Self {
        Self {
            port,
            source,
            last: Buttons::empty(),
        }
    }

    /// The driver station port this controller is plugged into.
    #[must_use]
    pub const fn port(&self) -> u8 {
        self.port
    }

    /// Reads the buttons and returns them alongside the previous read.
    ///
    /// # Errors
    ///
    /// A [`DeviceError::Disconnected`] error is returned if the controller is unplugged. The
    /// remembered button state is left untouched, so a button held across a dropout is not
    /// reported as a new press.
    pub fn update(&mut self) -> Result<ControllerState, DeviceError> {
        let current = self.source.buttons()?;
        let state = ControllerState::new(self.last, current);
        self.last = current;

        Ok(state)
    }
}

impl core::fmt::Debug for Controller {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("port", &self.port)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sim::SimWorld;

    #[test]
    fn button_indices_map_to_bits() {
        assert_eq!(ControllerButton::Square.flag(), Buttons::SQUARE);
        assert_eq!(ControllerButton::Triangle.flag(), Buttons::TRIANGLE);
        assert_eq!(ControllerButton::Touchpad.flag(), Buttons::TOUCHPAD);
    }

    #[test]
    fn reports_press_and_release_edges_once() {
        let world = SimWorld::new();
        let mut controller = Controller::new(DRIVER_CONTROLLER_PORT, Box::new(world.input()));

        let idle = controller.update().unwrap().button(ControllerButton::Triangle);
        assert!(idle.is_released() && !idle.is_now_pressed());

        world.set_buttons(Buttons::TRIANGLE);
        let pressed = controller.update().unwrap().button(ControllerButton::Triangle);
        assert!(pressed.is_now_pressed());

        let held = controller.update().unwrap().button(ControllerButton::Triangle);
        assert!(held.is_pressed() && !held.is_now_pressed());

        world.set_buttons(Buttons::empty());
        let released = controller.update().unwrap().button(ControllerButton::Triangle);
        assert!(released.is_now_released());
    }

    #[test]
    fn dropout_does_not_fake_a_press() {
        let world = SimWorld::new();
        let mut controller = Controller::new(DRIVER_CONTROLLER_PORT, Box::new(world.input()));

        world.set_buttons(Buttons::TRIANGLE);
        assert!(controller.update().unwrap().button(ControllerButton::Triangle).is_now_pressed());

        world.set_controller_connected(false);
        assert!(matches!(
            controller.update(),
            Err(DeviceError::Disconnected { .. })
        ));

        world.set_controller_connected(true);
        let state = controller.update().unwrap().button(ControllerButton::Triangle);
        assert!(state.is_pressed() && !state.is_now_pressed());
    }
}
