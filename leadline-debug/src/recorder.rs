// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`PointSink`] and stores events as owned
//! [`RecordedEvent`] values. Recording is bounded: once the capacity is
//! reached further events are counted but not stored, so a stalled page
//! cannot grow the buffer without limit.

use leadline_core::sequence::{Phase, Signal};
use leadline_core::trace::{
    PhaseEvent, PointSink, RunBeginEvent, RunEndEvent, RunSkippedEvent, SignalEvent,
};

/// Default event capacity for [`RecorderSink::new`].
const DEFAULT_CAPACITY: usize = 4096;

/// An owned copy of one trace event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A run began.
    RunBegin {
        /// Run index.
        run: u32,
        /// Pair scope identifier.
        scope: String,
        /// Resolved target selector.
        target: String,
    },
    /// A run entered a phase.
    PhaseBegin {
        /// Run index.
        run: u32,
        /// The phase entered.
        phase: Phase,
    },
    /// A run left a phase.
    PhaseEnd {
        /// Run index.
        run: u32,
        /// The phase left.
        phase: Phase,
    },
    /// A completion signal reached a run.
    Signal {
        /// Run index.
        run: u32,
        /// The signal.
        signal: Signal,
        /// Whether the machine acted on it.
        consumed: bool,
    },
    /// A run completed.
    RunEnd {
        /// Run index.
        run: u32,
    },
    /// A run was skipped before starting.
    RunSkipped {
        /// Run index.
        run: u32,
        /// The selector that matched nothing.
        target: String,
    },
}

/// A [`PointSink`] that buffers events in memory.
#[derive(Debug)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
    capacity: usize,
    dropped: u64,
}

impl Default for RecorderSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RecorderSink {
    /// Creates a recorder with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a recorder that stores at most `capacity` events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            capacity,
            dropped: 0,
        }
    }

    /// The recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Number of events discarded after the capacity was reached.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    fn push(&mut self, event: RecordedEvent) {
        if self.events.len() < self.capacity {
            self.events.push(event);
        } else {
            self.dropped += 1;
        }
    }
}

impl PointSink for RecorderSink {
    fn on_run_begin(&mut self, e: &RunBeginEvent<'_>) {
        self.push(RecordedEvent::RunBegin {
            run: e.run,
            scope: e.scope.to_owned(),
            target: e.target.to_owned(),
        });
    }

    fn on_phase_begin(&mut self, e: &PhaseEvent) {
        self.push(RecordedEvent::PhaseBegin {
            run: e.run,
            phase: e.phase,
        });
    }

    fn on_phase_end(&mut self, e: &PhaseEvent) {
        self.push(RecordedEvent::PhaseEnd {
            run: e.run,
            phase: e.phase,
        });
    }

    fn on_signal(&mut self, e: &SignalEvent) {
        self.push(RecordedEvent::Signal {
            run: e.run,
            signal: e.signal,
            consumed: e.consumed,
        });
    }

    fn on_run_end(&mut self, e: &RunEndEvent) {
        self.push(RecordedEvent::RunEnd { run: e.run });
    }

    fn on_run_skipped(&mut self, e: &RunSkippedEvent<'_>) {
        self.push(RecordedEvent::RunSkipped {
            run: e.run,
            target: e.target.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_events_in_order() {
        let mut sink = RecorderSink::new();
        sink.on_run_begin(&RunBeginEvent {
            run: 0,
            scope: "body-a--body-b",
            target: "#b",
        });
        sink.on_phase_begin(&PhaseEvent {
            run: 0,
            phase: Phase::SourceFlash,
        });
        sink.on_run_end(&RunEndEvent { run: 0 });

        assert_eq!(sink.events().len(), 3);
        assert_eq!(
            sink.events()[0],
            RecordedEvent::RunBegin {
                run: 0,
                scope: "body-a--body-b".into(),
                target: "#b".into(),
            }
        );
        assert_eq!(sink.dropped(), 0);
    }

    #[test]
    fn capacity_bounds_the_buffer() {
        let mut sink = RecorderSink::with_capacity(2);
        for run in 0..5 {
            sink.on_run_end(&RunEndEvent { run });
        }
        assert_eq!(sink.events().len(), 2, "stores up to capacity");
        assert_eq!(sink.dropped(), 3, "counts the rest");
    }
}
