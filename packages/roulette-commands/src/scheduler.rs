//! The cooperative command scheduler.
//!
//! [`Scheduler::run`] is called once per control cycle. It first checks every binding's trigger
//! against the controller snapshot and initializes the commands whose trigger fired, then executes
//! every scheduled command once and ends the ones that finished. Triggering a command that is
//! already scheduled does nothing.

use core::time::Duration;

use log::{debug, info};
use roulette_devices::controller::ControllerState;

use crate::{Command, Trigger};

/// Identifies a binding registered with [`Scheduler::bind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(usize);

struct Binding {
    trigger: Trigger,
    command: Box<dyn Command>,
    scheduled: bool,
}

/// Owns every bound command and drives them once per control cycle.
#[derive(Default)]
pub struct Scheduler {
    bindings: Vec<Binding>,
}

impl Scheduler {
    /// Creates a scheduler with no bindings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Schedules `command` every time `trigger` fires.
    pub fn bind(&mut self, trigger: Trigger, command: impl Command + 'static) -> BindingId {
        info!("binding {} to {:?}", command.name(), trigger.watched());

        self.bindings.push(Binding {
            trigger,
            command: Box::new(command),
            scheduled: false,
        });

        BindingId(self.bindings.len() - 1)
    }

    /// Number of registered bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns `true` if the command behind `id` is currently scheduled.
    #[must_use]
    pub fn is_scheduled(&self, id: BindingId) -> bool {
        self.bindings.get(id.0).is_some_and(|binding| binding.scheduled)
    }

    /// Runs one control cycle.
    pub fn run(&mut self, state: &ControllerState, now: Duration) {
        for binding in &mut self.bindings {
            if !binding.trigger.fired(state) {
                continue;
            }

            if binding.scheduled {
                debug!("{} already scheduled, ignoring trigger", binding.command.name());
            } else {
                info!("scheduling {}", binding.command.name());
                binding.command.initialize(now);
                binding.scheduled = true;
            }
        }

        for binding in self.bindings.iter_mut().filter(|binding| binding.scheduled) {
            binding.command.execute(now);
            if binding.command.is_finished() {
                binding.command.end(false);
                binding.scheduled = false;
                info!("{} finished", binding.command.name());
            }
        }
    }

    /// Interrupts every scheduled command.
    pub fn cancel_all(&mut self) {
        for binding in self.bindings.iter_mut().filter(|binding| binding.scheduled) {
            info!("cancelling {}", binding.command.name());
            binding.command.end(true);
            binding.scheduled = false;
        }
    }
}

impl core::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.bindings.iter().map(|binding| {
                (
                    binding.trigger.watched(),
                    binding.command.name(),
                    binding.scheduled,
                )
            }))
            .finish()
    }
}
