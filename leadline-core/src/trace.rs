// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for pointing runs.
//!
//! This module provides a [`PointSink`] trait with per-event methods that
//! run instrumentation calls at each lifecycle step. All method bodies
//! default to no-ops, so implementing only the events you care about is
//! fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn PointSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::sequence::{Phase, Signal};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a run begins (styles injected, first phase entered).
#[derive(Clone, Copy, Debug)]
pub struct RunBeginEvent<'a> {
    /// Run index within the dispatching invocation.
    pub run: u32,
    /// The pair's scope identifier.
    pub scope: &'a str,
    /// The resolved target selector.
    pub target: &'a str,
}

/// Emitted when a run enters or leaves a phase.
#[derive(Clone, Copy, Debug)]
pub struct PhaseEvent {
    /// Run index.
    pub run: u32,
    /// The phase in question.
    pub phase: Phase,
}

/// Emitted when a completion signal reaches the machine.
#[derive(Clone, Copy, Debug)]
pub struct SignalEvent {
    /// Run index.
    pub run: u32,
    /// The signal that fired.
    pub signal: Signal,
    /// Whether the machine acted on it (`false`: ignored as out-of-phase).
    pub consumed: bool,
}

/// Emitted when a run completes and releases its waits.
#[derive(Clone, Copy, Debug)]
pub struct RunEndEvent {
    /// Run index.
    pub run: u32,
}

/// Emitted when a source element's run never starts (target selector
/// matched nothing).
#[derive(Clone, Copy, Debug)]
pub struct RunSkippedEvent<'a> {
    /// Run index the skipped source would have taken.
    pub run: u32,
    /// The selector that matched no element.
    pub target: &'a str,
}

// ---------------------------------------------------------------------------
// PointSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from pointing runs.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait PointSink {
    /// Called when a run begins.
    fn on_run_begin(&mut self, e: &RunBeginEvent<'_>) {
        _ = e;
    }

    /// Called when a run enters a phase.
    fn on_phase_begin(&mut self, e: &PhaseEvent) {
        _ = e;
    }

    /// Called when a run leaves a phase.
    fn on_phase_end(&mut self, e: &PhaseEvent) {
        _ = e;
    }

    /// Called when a completion signal reaches a run.
    fn on_signal(&mut self, e: &SignalEvent) {
        _ = e;
    }

    /// Called when a run completes.
    fn on_run_end(&mut self, e: &RunEndEvent) {
        _ = e;
    }

    /// Called when a run is skipped before starting.
    fn on_run_skipped(&mut self, e: &RunSkippedEvent<'_>) {
        _ = e;
    }
}

/// A [`PointSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl PointSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`PointSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn PointSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn PointSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn PointSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`RunBeginEvent`].
    #[inline]
    pub fn run_begin(&mut self, e: &RunBeginEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_run_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a phase-begin [`PhaseEvent`].
    #[inline]
    pub fn phase_begin(&mut self, e: &PhaseEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_phase_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a phase-end [`PhaseEvent`].
    #[inline]
    pub fn phase_end(&mut self, e: &PhaseEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_phase_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SignalEvent`].
    #[inline]
    pub fn signal(&mut self, e: &SignalEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_signal(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RunEndEvent`].
    #[inline]
    pub fn run_end(&mut self, e: &RunEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_run_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RunSkippedEvent`].
    #[inline]
    pub fn run_skipped(&mut self, e: &RunSkippedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_run_skipped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
