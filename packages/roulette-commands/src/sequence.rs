//! The two-stage control panel sequence.
//!
//! The sequence is an explicit state machine:
//!
//! ```text
//!          Triggered            ArmOpened              WheelDone
//! Idle ─────────────> OpeningArm ─────────> RotatingWheel ─────────> Done
//!  ^                      │                      │                    │
//!  └──── Cancelled ───────┴──────────────────────┘      Triggered ────┘
//! ```
//!
//! Stage transitions are computed by [`Stage::next`]. The wheel stage is entered on the cycle the
//! arm reports open, but the wheel command is only initialized on the following cycle, so the
//! rotation always starts strictly after the arm finished. If the arm never reports open, the
//! rotation never starts.

use core::time::Duration;

use log::info;
use roulette_core::handle::Handle;

use crate::{Command, OpenArm, RotateRoulette};

/// Where the sequence is.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Not running.
    #[default]
    Idle,
    /// Waiting for the arm to open.
    OpeningArm,
    /// Spinning the control panel.
    RotatingWheel,
    /// Both stages completed.
    Done,
}

/// Something that moves the sequence between stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceEvent {
    /// The bound button was pressed.
    Triggered,
    /// The first stage reported finished.
    ArmOpened,
    /// The second stage reported finished.
    WheelDone,
    /// The sequence was interrupted.
    Cancelled,
}

impl Stage {
    /// The transition function. Events that do not apply to the current stage leave it unchanged.
    #[must_use]
    pub const fn next(self, event: SequenceEvent) -> Self {
        match (self, event) {
            (_, SequenceEvent::Cancelled) => Self::Idle,
            (Self::Idle | Self::Done, SequenceEvent::Triggered) => Self::OpeningArm,
            (Self::OpeningArm, SequenceEvent::ArmOpened) => Self::RotatingWheel,
            (Self::RotatingWheel, SequenceEvent::WheelDone) => Self::Done,
            (stage, _) => stage,
        }
    }

    /// Returns `true` while one of the two stages is in progress.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::OpeningArm | Self::RotatingWheel)
    }
}

/// Timestamps recorded for one run of the sequence.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    /// When the sequence was started.
    pub triggered_at: Duration,
    /// When the first stage reported finished.
    pub first_finished_at: Option<Duration>,
    /// When the second stage was initialized.
    pub second_started_at: Option<Duration>,
    /// When the second stage reported finished.
    pub finished_at: Option<Duration>,
    /// Whether the run was cancelled before reaching [`Stage::Done`].
    pub interrupted: bool,
}

/// Every run of a sequence, oldest first.
pub type Timeline = Vec<Activation>;

/// Runs a first command to completion, then a second one.
///
/// By default the first command is [`OpenArm`] and the second is [`RotateRoulette`].
#[derive(Debug)]
pub struct RouletteSequence<A = OpenArm, B = RotateRoulette> {
    first: A,
    second: B,
    stage: Stage,
    second_initialized: bool,
    timeline: Handle<Timeline>,
}

impl<A: Command, B: Command> RouletteSequence<A, B> {
    /// Creates an idle sequence.
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            stage: Stage::Idle,
            second_initialized: false,
            timeline: Handle::new(Timeline::new()),
        }
    }

    /// The current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// A handle to the recorded runs. Stays valid after the sequence is handed to a scheduler.
    #[must_use]
    pub fn timeline(&self) -> Handle<Timeline> {
        self.timeline.clone()
    }

    fn transition(&mut self, event: SequenceEvent) {
        let next = self.stage.next(event);
        if next != self.stage {
            info!("sequence {:?} -> {next:?} on {event:?}", self.stage);
            self.stage = next;
        }
    }

    fn record(&self, update: impl FnOnce(&mut Activation)) {
        if let Some(activation) = self.timeline.borrow_mut().last_mut() {
            update(activation);
        }
    }

    fn step_second(&mut self, now: Duration) {
        self.second.execute(now);
        if self.second.is_finished() {
            self.second.end(false);
            self.record(|activation| activation.finished_at = Some(now));
            self.transition(SequenceEvent::WheelDone);
        }
    }
}

impl<A: Command, B: Command> Command for RouletteSequence<A, B> {
    fn name(&self) -> &'static str {
        "RouletteSequence"
    }

    fn initialize(&mut self, now: Duration) {
        if self.stage.is_running() {
            return;
        }

        self.timeline.borrow_mut().push(Activation {
            triggered_at: now,
            ..Activation::default()
        });
        self.second_initialized = false;
        self.transition(SequenceEvent::Triggered);
        self.first.initialize(now);
    }

    fn execute(&mut self, now: Duration) {
        match self.stage {
            Stage::OpeningArm => {
                self.first.execute(now);
                if self.first.is_finished() {
                    self.first.end(false);
                    self.record(|activation| activation.first_finished_at = Some(now));
                    self.transition(SequenceEvent::ArmOpened);
                }
            }
            Stage::RotatingWheel if !self.second_initialized => {
                self.second.initialize(now);
                self.second_initialized = true;
                self.record(|activation| activation.second_started_at = Some(now));
                self.step_second(now);
            }
            Stage::RotatingWheel => self.step_second(now),
            Stage::Idle | Stage::Done => {}
        }
    }

    fn is_finished(&self) -> bool {
        self.stage == Stage::Done
    }

    fn end(&mut self, interrupted: bool) {
        if !interrupted {
            return;
        }

        match self.stage {
            Stage::OpeningArm => self.first.end(true),
            Stage::RotatingWheel if self.second_initialized => self.second.end(true),
            _ => {}
        }

        if self.stage.is_running() {
            self.record(|activation| activation.interrupted = true);
        }
        self.transition(SequenceEvent::Cancelled);
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    /// Records lifecycle calls and finishes after a fixed number of executes.
    #[derive(Debug)]
    struct Scripted {
        name: &'static str,
        executes_needed: Option<u32>,
        executes: u32,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Scripted {
        fn new(
            name: &'static str,
            executes_needed: Option<u32>,
            log: &Rc<RefCell<Vec<String>>>,
        ) -> Self {
            Self {
                name,
                executes_needed,
                executes: 0,
                log: Rc::clone(log),
            }
        }
    }

    impl Command for Scripted {
        fn name(&self) -> &'static str {
            self.name
        }

        fn initialize(&mut self, _now: Duration) {
            self.executes = 0;
            self.log.borrow_mut().push(format!("{} init", self.name));
        }

        fn execute(&mut self, _now: Duration) {
            self.executes += 1;
        }

        fn is_finished(&self) -> bool {
            self.executes_needed.is_some_and(|needed| self.executes >= needed)
        }

        fn end(&mut self, interrupted: bool) {
            self.log
                .borrow_mut()
                .push(format!("{} end interrupted={interrupted}", self.name));
        }
    }

    fn tick(n: u64) -> Duration {
        Duration::from_millis(20 * n)
    }

    #[test]
    fn transition_table() {
        use SequenceEvent::*;

        assert_eq!(Stage::Idle.next(Triggered), Stage::OpeningArm);
        assert_eq!(Stage::Idle.next(ArmOpened), Stage::Idle);
        assert_eq!(Stage::OpeningArm.next(Triggered), Stage::OpeningArm);
        assert_eq!(Stage::OpeningArm.next(WheelDone), Stage::OpeningArm);
        assert_eq!(Stage::OpeningArm.next(ArmOpened), Stage::RotatingWheel);
        assert_eq!(Stage::RotatingWheel.next(Triggered), Stage::RotatingWheel);
        assert_eq!(Stage::RotatingWheel.next(WheelDone), Stage::Done);
        assert_eq!(Stage::Done.next(Triggered), Stage::OpeningArm);
        assert_eq!(Stage::RotatingWheel.next(Cancelled), Stage::Idle);
    }

    #[test]
    fn second_stage_starts_strictly_after_the_first_finishes() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sequence = RouletteSequence::new(
            Scripted::new("arm", Some(3), &log),
            Scripted::new("wheel", Some(2), &log),
        );
        let timeline = sequence.timeline();

        for run in 0..3 {
            let start = run * 100;
            sequence.initialize(tick(start));
            let mut n = start;
            while !sequence.is_finished() {
                sequence.execute(tick(n));
                n += 1;
                assert!(n < start + 50);
            }
        }

        let timeline = timeline.borrow();
        assert_eq!(timeline.len(), 3);
        for activation in timeline.iter() {
            let first = activation.first_finished_at.unwrap();
            let second = activation.second_started_at.unwrap();
            assert!(second > first);
            assert!(activation.finished_at.unwrap() >= second);
            assert!(!activation.interrupted);
        }

        assert_eq!(
            log.borrow()[..4],
            [
                "arm init",
                "arm end interrupted=false",
                "wheel init",
                "wheel end interrupted=false"
            ]
        );
    }

    #[test]
    fn a_stuck_first_stage_blocks_the_second_forever() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sequence = RouletteSequence::new(
            Scripted::new("arm", None, &log),
            Scripted::new("wheel", Some(1), &log),
        );

        sequence.initialize(tick(0));
        for n in 0..10_000 {
            sequence.execute(tick(n));
        }

        assert_eq!(sequence.stage(), Stage::OpeningArm);
        assert_eq!(*log.borrow(), ["arm init"]);
        assert_eq!(sequence.timeline().borrow()[0].second_started_at, None);
    }

    #[test]
    fn retriggering_while_running_is_ignored() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sequence = RouletteSequence::new(
            Scripted::new("arm", Some(5), &log),
            Scripted::new("wheel", Some(5), &log),
        );

        sequence.initialize(tick(0));
        sequence.execute(tick(1));
        sequence.initialize(tick(2));

        assert_eq!(sequence.timeline().borrow().len(), 1);
        assert_eq!(*log.borrow(), ["arm init"]);
    }

    #[test]
    fn cancelling_interrupts_the_active_stage() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sequence = RouletteSequence::new(
            Scripted::new("arm", Some(1), &log),
            Scripted::new("wheel", None, &log),
        );

        sequence.initialize(tick(0));
        sequence.execute(tick(0));
        assert_eq!(sequence.stage(), Stage::RotatingWheel);
        sequence.execute(tick(1));

        sequence.end(true);

        assert_eq!(sequence.stage(), Stage::Idle);
        assert_eq!(
            log.borrow().last().map(String::as_str),
            Some("wheel end interrupted=true")
        );
        assert!(sequence.timeline().borrow()[0].interrupted);
    }
}
