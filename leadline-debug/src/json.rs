// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded sessions.
//!
//! [`export`] turns a recorded event slice into a JSON array of event
//! objects, one per trace event, suitable for timeline tooling or test
//! golden files.

use std::io::{self, Write};

use serde_json::{Value, json};

use leadline_core::sequence::{Phase, Signal};

use crate::recorder::RecordedEvent;

/// Writes the recorded events as a JSON array to `writer`.
///
/// # Errors
///
/// Returns the underlying I/O error if the writer fails.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(event_value).collect();
    serde_json::to_writer_pretty(&mut *writer, &values)?;
    writer.write_all(b"\n")
}

fn event_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::RunBegin { run, scope, target } => json!({
            "event": "run_begin",
            "run": run,
            "scope": scope,
            "target": target,
        }),
        RecordedEvent::PhaseBegin { run, phase } => json!({
            "event": "phase_begin",
            "run": run,
            "phase": phase_str(*phase),
        }),
        RecordedEvent::PhaseEnd { run, phase } => json!({
            "event": "phase_end",
            "run": run,
            "phase": phase_str(*phase),
        }),
        RecordedEvent::Signal {
            run,
            signal,
            consumed,
        } => json!({
            "event": "signal",
            "run": run,
            "signal": signal_str(*signal),
            "consumed": consumed,
        }),
        RecordedEvent::RunEnd { run } => json!({
            "event": "run_end",
            "run": run,
        }),
        RecordedEvent::RunSkipped { run, target } => json!({
            "event": "run_skipped",
            "run": run,
            "target": target,
        }),
    }
}

fn phase_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::SourceFlash => "source_flash",
        Phase::FlightPrep => "flight_prep",
        Phase::Flight => "flight",
        Phase::TargetFlash => "target_flash",
        Phase::Done => "done",
    }
}

fn signal_str(signal: Signal) -> &'static str {
    match signal {
        Signal::FlashEnded => "flash_ended",
        Signal::OrbArrived => "orb_arrived",
        Signal::Tick => "tick",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_an_array_of_event_objects() {
        let events = [
            RecordedEvent::RunBegin {
                run: 0,
                scope: "body-a--body-b".into(),
                target: "#b".into(),
            },
            RecordedEvent::PhaseBegin {
                run: 0,
                phase: Phase::SourceFlash,
            },
            RecordedEvent::RunEnd { run: 0 },
        ];
        let mut out = Vec::new();
        export(&events, &mut out).expect("in-memory write succeeds");

        let parsed: Vec<Value> =
            serde_json::from_slice(&out).expect("exporter emits valid JSON");
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0]["event"], "run_begin");
        assert_eq!(parsed[0]["scope"], "body-a--body-b");
        assert_eq!(parsed[1]["phase"], "source_flash");
        assert_eq!(parsed[2]["event"], "run_end");
    }
}
