// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Documentless pointing walkthroughs.
//!
//! [`dry_run`] drives a [`Pointing`] to completion with every wait answered
//! immediately, capturing the full command stream a live run would issue.
//! Useful for inspecting what a configuration does (pipe the events
//! through [`PrettyPrintSink`](crate::pretty::PrettyPrintSink), or record
//! and [`export`](crate::json::export) them) and for golden tests.
//!
//! Phase events report the machine's *resting* phases: phases crossed
//! synchronously within one step (zero durations, missing signals) are not
//! individually reported.

use leadline_core::config::Config;
use leadline_core::sequence::{Phase, Pointing, Signal, Step, Wait};
use leadline_core::trace::{
    PhaseEvent, PointSink, RunBeginEvent, RunEndEvent, SignalEvent, Tracer,
};

/// Walks a pointing to completion, answering every wait immediately.
///
/// `scope` stands in for the pair identifier a live run would derive from
/// the document. Returns the steps in order; every emitted trace event goes
/// to `sink`.
pub fn dry_run(config: Config, scope: &str, sink: &mut dyn PointSink) -> Vec<Step> {
    let mut machine = Pointing::new(config);
    let mut tracer = Tracer::new(sink);
    let target = machine.config().target.clone();
    tracer.run_begin(&RunBeginEvent {
        run: 0,
        scope,
        target: &target,
    });

    let mut steps = Vec::new();
    let mut resting = machine.phase();
    let mut step = machine.begin();
    loop {
        note_phase(&mut tracer, &mut resting, machine.phase());
        let wait = step.wait;
        steps.push(step);
        let signal = match wait {
            Some(Wait::FlashEnd(_)) => Signal::FlashEnded,
            Some(Wait::Tick) => Signal::Tick,
            Some(Wait::OrbArrival) => Signal::OrbArrived,
            None => break,
        };
        tracer.signal(&SignalEvent {
            run: 0,
            signal,
            consumed: true,
        });
        step = machine.advance(signal);
    }

    tracer.run_end(&RunEndEvent { run: 0 });
    steps
}

fn note_phase(tracer: &mut Tracer<'_>, resting: &mut Phase, current: Phase) {
    if *resting == current {
        return;
    }
    if *resting != Phase::Idle {
        tracer.phase_end(&PhaseEvent {
            run: 0,
            phase: *resting,
        });
    }
    if current != Phase::Done {
        tracer.phase_begin(&PhaseEvent {
            run: 0,
            phase: current,
        });
    }
    *resting = current;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::{RecordedEvent, RecorderSink};
    use leadline_core::color::{ColorInterpreter, Rgb};
    use leadline_core::config::{NoOverrides, Options, SignalNames};
    use leadline_core::sequence::Command;

    struct RejectAll;

    impl ColorInterpreter for RejectAll {
        fn interpret(&mut self, _spec: &str) -> Option<Rgb> {
            None
        }
    }

    fn config(mutate: impl FnOnce(&mut Options)) -> Config {
        let mut caller = Options::from("#target");
        mutate(&mut caller);
        Config::resolve(caller, &NoOverrides, SignalNames::standard(), &mut RejectAll)
            .expect("test config resolves")
    }

    #[test]
    fn default_run_issues_the_full_command_stream() {
        let mut sink = RecorderSink::new();
        let steps = dry_run(config(|_| {}), "dry", &mut sink);

        assert_eq!(steps.len(), 5, "begin plus four signals");
        let commands: Vec<Command> = steps.iter().flat_map(|s| s.commands.clone()).collect();
        let spawned = commands
            .iter()
            .filter(|c| **c == Command::SpawnPointer)
            .count();
        assert_eq!(spawned, 1, "exactly one pointer per run");
        assert_eq!(commands.first(), Some(&Command::InjectStyles));
        assert_eq!(commands.last(), Some(&Command::RemoveStyles));

        let events = sink.events();
        assert!(matches!(events.first(), Some(RecordedEvent::RunBegin { .. })));
        assert!(matches!(events.last(), Some(RecordedEvent::RunEnd { .. })));
    }

    #[test]
    fn resting_phases_are_reported_in_order() {
        let mut sink = RecorderSink::new();
        dry_run(config(|_| {}), "dry", &mut sink);

        let begun: Vec<Phase> = sink
            .events()
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::PhaseBegin { phase, .. } => Some(*phase),
                _ => None,
            })
            .collect();
        assert_eq!(
            begun,
            [
                Phase::SourceFlash,
                Phase::FlightPrep,
                Phase::Flight,
                Phase::TargetFlash,
            ]
        );
    }

    #[test]
    fn zero_duration_run_skips_resting_phases() {
        let mut sink = RecorderSink::new();
        let steps = dry_run(
            config(|o| {
                o.highlight_duration_ms = Some(0.0);
                o.pointer_duration_ms = Some(0.0);
            }),
            "dry",
            &mut sink,
        );
        assert_eq!(steps.len(), 2, "only the pointer tick interrupts the run");
        let begun = sink
            .events()
            .iter()
            .filter(|e| matches!(e, RecordedEvent::PhaseBegin { .. }))
            .count();
        assert_eq!(begun, 1, "flight-prep is the only resting phase");
    }

    #[test]
    fn debug_config_retains_styles_in_the_stream() {
        let mut sink = RecorderSink::new();
        let steps = dry_run(config(|o| o.debug = true), "dry", &mut sink);
        let commands: Vec<Command> = steps.iter().flat_map(|s| s.commands.clone()).collect();
        assert!(!commands.contains(&Command::RemoveStyles));
    }
}
