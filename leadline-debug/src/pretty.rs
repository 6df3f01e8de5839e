// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`PointSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use leadline_core::sequence::Phase;
use leadline_core::trace::{
    PhaseEvent, PointSink, RunBeginEvent, RunEndEvent, RunSkippedEvent, SignalEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::SourceFlash => "source-flash",
        Phase::FlightPrep => "flight-prep",
        Phase::Flight => "flight",
        Phase::TargetFlash => "target-flash",
        Phase::Done => "done",
    }
}

impl<W: Write> PointSink for PrettyPrintSink<W> {
    fn on_run_begin(&mut self, e: &RunBeginEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[run:begin] run={} target={} scope={}",
            e.run, e.target, e.scope,
        );
    }

    fn on_phase_begin(&mut self, e: &PhaseEvent) {
        let _ = writeln!(
            self.writer,
            "[phase:begin] run={} {}",
            e.run,
            phase_name(e.phase),
        );
    }

    fn on_phase_end(&mut self, e: &PhaseEvent) {
        let _ = writeln!(
            self.writer,
            "[phase:end] run={} {}",
            e.run,
            phase_name(e.phase),
        );
    }

    fn on_signal(&mut self, e: &SignalEvent) {
        let _ = writeln!(
            self.writer,
            "[signal] run={} {:?} consumed={}",
            e.run, e.signal, e.consumed,
        );
    }

    fn on_run_end(&mut self, e: &RunEndEvent) {
        let _ = writeln!(self.writer, "[run:end] run={}", e.run);
    }

    fn on_run_skipped(&mut self, e: &RunSkippedEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[run:skipped] run={} target={} matched nothing",
            e.run, e.target,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadline_core::sequence::Signal;

    #[test]
    fn one_line_per_event() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_run_begin(&RunBeginEvent {
            run: 1,
            scope: "body-a--body-b",
            target: "#b",
        });
        sink.on_phase_begin(&PhaseEvent {
            run: 1,
            phase: Phase::SourceFlash,
        });
        sink.on_signal(&SignalEvent {
            run: 1,
            signal: Signal::FlashEnded,
            consumed: true,
        });
        sink.on_run_end(&RunEndEvent { run: 1 });

        let out = String::from_utf8(sink.into_writer()).expect("utf8 output");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "[run:begin] run=1 target=#b scope=body-a--body-b");
        assert_eq!(lines[1], "[phase:begin] run=1 source-flash");
        assert!(lines[2].starts_with("[signal] run=1 FlashEnded"));
        assert_eq!(lines[3], "[run:end] run=1");
    }
}
