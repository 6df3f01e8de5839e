// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pointing state machine.
//!
//! One [`Pointing`] drives one source→target run through four phases:
//! source flash, flight preparation, flight, target flash. The machine owns
//! no document resources: [`begin`](Pointing::begin) and
//! [`advance`](Pointing::advance) return [`Step`]s describing the host
//! effects to apply ([`Command`]) and the single completion signal to arm
//! next ([`Wait`]). The host applies the commands, arms a **one-shot**
//! listener (or a deferred tick), and feeds the resulting [`Signal`] back
//! in.
//!
//! # Phase sequencing
//!
//! Phases never overlap within a run: a phase begins only when the previous
//! phase's signal has fired, or synchronously when that phase cannot emit
//! one. Two conditions make a wait impossible and are handled as explicit
//! branches rather than trusting the host to emit an event:
//!
//! - **Zero duration** — the phase's visual effect still happens (the class
//!   toggles, the pointer spawns and flies) but completes in the same step;
//!   a zero-duration animation is not guaranteed to fire a completion event
//!   anywhere, so the machine never waits on one.
//! - **Missing signal support** — a [`SignalNames`] entry of `None` means
//!   the dependent phases can never complete, so they do not start at all:
//!   no class toggle, no pointer. The machine advances past them instead of
//!   hanging.
//!
//! Signals that do not match the current phase's armed wait are ignored;
//! each wait fires its transition exactly once per run.
//!
//! [`SignalNames`]: crate::config::SignalNames

use alloc::vec::Vec;

use crate::config::Config;

/// Which run-owned element a command or wait addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The invoking source element.
    Source,
    /// The resolved target element.
    Target,
}

/// A host effect requested by the machine.
///
/// Commands carry no coordinates: the host probes element centers at
/// execution time, so each phase boundary sees current layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Synthesize the scoped style block and inject it under the source
    /// element, retaining the node handle.
    InjectStyles,
    /// Add the scoped highlight class to the role's element.
    AddClass {
        /// Element to decorate.
        role: Role,
    },
    /// Remove the scoped highlight class from the role's element.
    RemoveClass {
        /// Element to restore.
        role: Role,
    },
    /// Create the pointer element at the source's current center and attach
    /// it to the document body.
    SpawnPointer,
    /// Reposition the pointer to the target's current center, engaging its
    /// transition.
    FlyPointer,
    /// Detach and destroy the pointer element.
    RemovePointer,
    /// Remove exactly the style node this run injected.
    RemoveStyles,
}

/// The single signal to arm after applying a step's commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wait {
    /// One-shot animation-completion listener on the role's element.
    FlashEnd(Role),
    /// One-shot transition-completion listener on the pointer element.
    OrbArrival,
    /// One deferred tick, letting the pointer's initial position take
    /// effect before its transition is engaged.
    Tick,
}

/// A completion notification fed back into [`Pointing::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    /// The armed flash animation finished.
    FlashEnded,
    /// The pointer's transition finished.
    OrbArrived,
    /// The deferred tick elapsed.
    Tick,
}

/// One increment of the run: host effects plus the next wait.
///
/// `wait` is `None` when the run has finished (or when a signal was
/// ignored); [`Pointing::is_done`] distinguishes the two.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Host effects to apply, in order.
    pub commands: Vec<Command>,
    /// The signal to arm once the commands have been applied.
    pub wait: Option<Wait>,
}

impl Step {
    fn ignored() -> Self {
        Self {
            commands: Vec::new(),
            wait: None,
        }
    }
}

/// Current phase of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not yet begun.
    Idle,
    /// Source highlight flashing; waiting for its animation to end.
    SourceFlash,
    /// Pointer spawned at the source center; waiting one tick before the
    /// flight is engaged.
    FlightPrep,
    /// Pointer in transit; waiting for its transition to end.
    Flight,
    /// Target highlight flashing; waiting for its animation to end.
    TargetFlash,
    /// Run complete; all listeners released.
    Done,
}

/// The state machine for one source→target run.
#[derive(Clone, Debug)]
pub struct Pointing {
    config: Config,
    phase: Phase,
}

impl Pointing {
    /// Creates a machine in [`Phase::Idle`] for the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    /// The run's resolved configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the run has finished and released its waits.
    #[inline]
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Starts the run: injects styles and enters the source flash.
    ///
    /// Calling `begin` more than once returns an empty step.
    pub fn begin(&mut self) -> Step {
        if self.phase != Phase::Idle {
            return Step::ignored();
        }
        let mut commands = Vec::new();
        commands.push(Command::InjectStyles);
        let wait = self.enter_source_flash(&mut commands);
        Step { commands, wait }
    }

    /// Feeds a completion signal into the machine.
    ///
    /// A signal that does not match the current phase's armed wait is
    /// ignored; each wait fires its transition exactly once per run.
    pub fn advance(&mut self, signal: Signal) -> Step {
        let mut commands = Vec::new();
        let wait = match (self.phase, signal) {
            (Phase::SourceFlash, Signal::FlashEnded) => self.leave_source_flash(&mut commands),
            (Phase::FlightPrep, Signal::Tick) => self.enter_flight(&mut commands),
            (Phase::Flight, Signal::OrbArrived) => self.leave_flight(&mut commands),
            (Phase::TargetFlash, Signal::FlashEnded) => self.leave_target_flash(&mut commands),
            _ => return Step::ignored(),
        };
        Step { commands, wait }
    }

    fn flash_supported(&self) -> bool {
        self.config.signals.animation_end.is_some()
    }

    fn orb_supported(&self) -> bool {
        self.config.signals.transition_end.is_some()
    }

    fn enter_source_flash(&mut self, commands: &mut Vec<Command>) -> Option<Wait> {
        if !self.flash_supported() {
            return self.enter_flight_prep(commands);
        }
        commands.push(Command::AddClass { role: Role::Source });
        self.phase = Phase::SourceFlash;
        if self.config.highlight_duration_ms > 0.0 {
            return Some(Wait::FlashEnd(Role::Source));
        }
        // Zero duration: the class has toggled; proceed synchronously.
        self.leave_source_flash(commands)
    }

    fn leave_source_flash(&mut self, commands: &mut Vec<Command>) -> Option<Wait> {
        commands.push(Command::RemoveClass { role: Role::Source });
        self.enter_flight_prep(commands)
    }

    fn enter_flight_prep(&mut self, commands: &mut Vec<Command>) -> Option<Wait> {
        if !self.orb_supported() {
            return self.enter_target_flash(commands, false);
        }
        commands.push(Command::SpawnPointer);
        self.phase = Phase::FlightPrep;
        Some(Wait::Tick)
    }

    fn enter_flight(&mut self, commands: &mut Vec<Command>) -> Option<Wait> {
        commands.push(Command::FlyPointer);
        self.phase = Phase::Flight;
        if self.config.pointer_duration_ms > 0.0 {
            return Some(Wait::OrbArrival);
        }
        self.leave_flight(commands)
    }

    fn leave_flight(&mut self, commands: &mut Vec<Command>) -> Option<Wait> {
        self.enter_target_flash(commands, true)
    }

    fn enter_target_flash(&mut self, commands: &mut Vec<Command>, pointer_alive: bool) -> Option<Wait> {
        if self.flash_supported() {
            commands.push(Command::AddClass { role: Role::Target });
        }
        if pointer_alive {
            commands.push(Command::RemovePointer);
        }
        if !self.flash_supported() {
            return self.finish(commands);
        }
        self.phase = Phase::TargetFlash;
        if self.config.highlight_duration_ms > 0.0 {
            return Some(Wait::FlashEnd(Role::Target));
        }
        self.leave_target_flash(commands)
    }

    fn leave_target_flash(&mut self, commands: &mut Vec<Command>) -> Option<Wait> {
        commands.push(Command::RemoveClass { role: Role::Target });
        self.finish(commands)
    }

    fn finish(&mut self, commands: &mut Vec<Command>) -> Option<Wait> {
        if !self.config.debug {
            commands.push(Command::RemoveStyles);
        }
        self.phase = Phase::Done;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::config::{NoOverrides, Options, SignalNames};

    struct RejectAll;

    impl crate::color::ColorInterpreter for RejectAll {
        fn interpret(&mut self, _spec: &str) -> Option<Rgb> {
            None
        }
    }

    fn pointing(mutate: impl FnOnce(&mut Options), signals: SignalNames) -> Pointing {
        let mut caller = Options::from("#target");
        mutate(&mut caller);
        let config = crate::config::Config::resolve(caller, &NoOverrides, signals, &mut RejectAll)
            .expect("test config resolves");
        Pointing::new(config)
    }

    #[test]
    fn default_run_walks_all_four_phases() {
        let mut run = pointing(|_| {}, SignalNames::standard());

        let step = run.begin();
        assert_eq!(
            step.commands,
            [
                Command::InjectStyles,
                Command::AddClass { role: Role::Source }
            ]
        );
        assert_eq!(step.wait, Some(Wait::FlashEnd(Role::Source)));
        assert_eq!(run.phase(), Phase::SourceFlash);

        let step = run.advance(Signal::FlashEnded);
        assert_eq!(
            step.commands,
            [
                Command::RemoveClass { role: Role::Source },
                Command::SpawnPointer
            ]
        );
        assert_eq!(step.wait, Some(Wait::Tick));

        let step = run.advance(Signal::Tick);
        assert_eq!(step.commands, [Command::FlyPointer]);
        assert_eq!(step.wait, Some(Wait::OrbArrival));

        let step = run.advance(Signal::OrbArrived);
        assert_eq!(
            step.commands,
            [
                Command::AddClass { role: Role::Target },
                Command::RemovePointer
            ]
        );
        assert_eq!(step.wait, Some(Wait::FlashEnd(Role::Target)));

        let step = run.advance(Signal::FlashEnded);
        assert_eq!(
            step.commands,
            [
                Command::RemoveClass { role: Role::Target },
                Command::RemoveStyles
            ]
        );
        assert_eq!(step.wait, None);
        assert!(run.is_done());
    }

    #[test]
    fn zero_highlight_duration_completes_without_an_animation_wait() {
        let mut run = pointing(
            |o| o.highlight_duration_ms = Some(0.0),
            SignalNames::standard(),
        );
        let step = run.begin();
        // The class still toggles, but the machine is already past the
        // source flash and waiting on the pointer tick.
        assert_eq!(
            step.commands,
            [
                Command::InjectStyles,
                Command::AddClass { role: Role::Source },
                Command::RemoveClass { role: Role::Source },
                Command::SpawnPointer,
            ]
        );
        assert_eq!(step.wait, Some(Wait::Tick));
        assert_eq!(run.phase(), Phase::FlightPrep);
    }

    #[test]
    fn zero_pointer_duration_completes_without_a_transition_wait() {
        let mut run = pointing(
            |o| o.pointer_duration_ms = Some(0.0),
            SignalNames::standard(),
        );
        run.begin();
        run.advance(Signal::FlashEnded);
        let step = run.advance(Signal::Tick);
        assert_eq!(
            step.commands,
            [
                Command::FlyPointer,
                Command::AddClass { role: Role::Target },
                Command::RemovePointer,
            ]
        );
        assert_eq!(step.wait, Some(Wait::FlashEnd(Role::Target)));
    }

    #[test]
    fn all_zero_durations_run_to_completion_in_two_steps() {
        let mut run = pointing(
            |o| {
                o.highlight_duration_ms = Some(0.0);
                o.pointer_duration_ms = Some(0.0);
            },
            SignalNames::standard(),
        );
        let step = run.begin();
        assert_eq!(step.wait, Some(Wait::Tick), "only the tick remains");
        let step = run.advance(Signal::Tick);
        assert_eq!(step.wait, None);
        assert!(run.is_done());
        assert_eq!(
            step.commands.last(),
            Some(&Command::RemoveStyles),
            "cleanup still runs"
        );
    }

    #[test]
    fn debug_mode_retains_the_style_node() {
        let mut run = pointing(|o| o.debug = true, SignalNames::standard());
        run.begin();
        run.advance(Signal::FlashEnded);
        run.advance(Signal::Tick);
        run.advance(Signal::OrbArrived);
        let step = run.advance(Signal::FlashEnded);
        assert!(run.is_done());
        assert!(
            !step.commands.contains(&Command::RemoveStyles),
            "debug keeps the injected style node for inspection"
        );
    }

    #[test]
    fn missing_animation_signal_skips_both_flashes() {
        let signals = SignalNames {
            animation_end: None,
            ..SignalNames::standard()
        };
        let mut run = pointing(|_| {}, signals);

        let step = run.begin();
        assert_eq!(step.commands, [Command::InjectStyles, Command::SpawnPointer]);
        assert_eq!(step.wait, Some(Wait::Tick));

        run.advance(Signal::Tick);
        let step = run.advance(Signal::OrbArrived);
        assert_eq!(
            step.commands,
            [Command::RemovePointer, Command::RemoveStyles],
            "no target class without a completion signal to clear it"
        );
        assert!(run.is_done());
    }

    #[test]
    fn missing_transition_signal_skips_the_pointer() {
        let signals = SignalNames {
            transition_end: None,
            ..SignalNames::standard()
        };
        let mut run = pointing(|_| {}, signals);

        run.begin();
        let step = run.advance(Signal::FlashEnded);
        assert_eq!(
            step.commands,
            [
                Command::RemoveClass { role: Role::Source },
                Command::AddClass { role: Role::Target },
            ]
        );
        assert_eq!(step.wait, Some(Wait::FlashEnd(Role::Target)));
    }

    #[test]
    fn no_signal_support_at_all_never_hangs() {
        let mut run = pointing(|_| {}, SignalNames::none());
        let step = run.begin();
        assert_eq!(step.commands, [Command::InjectStyles, Command::RemoveStyles]);
        assert_eq!(step.wait, None);
        assert!(run.is_done());
    }

    #[test]
    fn signals_are_one_shot_and_phase_checked() {
        let mut run = pointing(|_| {}, SignalNames::standard());
        run.begin();

        // Wrong signals for the source flash are ignored outright.
        assert_eq!(run.advance(Signal::Tick), Step::ignored());
        assert_eq!(run.advance(Signal::OrbArrived), Step::ignored());
        assert_eq!(run.phase(), Phase::SourceFlash);

        // The armed signal fires its transition exactly once.
        let step = run.advance(Signal::FlashEnded);
        assert_eq!(step.wait, Some(Wait::Tick));
        assert_eq!(run.advance(Signal::FlashEnded), Step::ignored());
        assert_eq!(run.phase(), Phase::FlightPrep);
    }

    #[test]
    fn begin_is_idempotent_after_start() {
        let mut run = pointing(|_| {}, SignalNames::standard());
        run.begin();
        assert_eq!(run.begin(), Step::ignored());
    }

    #[test]
    fn done_runs_ignore_everything() {
        let mut run = pointing(|_| {}, SignalNames::none());
        run.begin();
        assert!(run.is_done());
        assert_eq!(run.advance(Signal::Tick), Step::ignored());
        assert_eq!(run.advance(Signal::FlashEnded), Step::ignored());
    }
}
