// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types and sequencing for signal-driven lead-pointing animations.
//!
//! `leadline_core` drives one *pointing*: a highlight flash on a source
//! element, an orb that travels from the source's center to a target's
//! center, and a closing flash on the target. It is `no_std` compatible
//! (with `alloc`) and never touches a document directly; every host fact
//! arrives as plain data, and every host effect leaves as plain data.
//!
//! # Architecture
//!
//! The crate is organized around a command loop that turns host completion
//! signals into incremental document updates:
//!
//! ```text
//!   Options + data-* overrides ──► Config::resolve() ──► Config
//!                                       │
//!            ┌──────────────────────────┘
//!            ▼
//!   Pointing::begin() ──► Step { commands, wait }
//!            ▲                        │
//!            │                        ▼
//!   Pointing::advance(signal) ◄── host applies commands,
//!                                 arms one-shot wait
//! ```
//!
//! **[`color`]** — Canonical RGB triple and the [`ColorInterpreter`] seam
//! through which the host's style engine normalizes arbitrary color input.
//!
//! **[`geometry`]** — Visual-center computation over document-coordinate
//! frames.
//!
//! **[`scope`]** — Deterministic per-pair scope identifiers derived from
//! structural element paths, so concurrent pointings never share style
//! rules.
//!
//! **[`style`]** — Pure synthesis of the scoped keyframe/transition style
//! block for one pointing.
//!
//! **[`config`]** — Option merging (defaults ← caller ← declarative
//! overrides) and color resolution into one immutable [`Config`].
//!
//! **[`sequence`]** — The [`Pointing`](sequence::Pointing) state machine
//! that sequences the three phases from completion signals, with explicit
//! zero-duration and missing-signal branches.
//!
//! **[`trace`]** — [`PointSink`](trace::PointSink) trait and event types
//! for run instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).
//!
//! [`ColorInterpreter`]: color::ColorInterpreter

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod color;
pub mod config;
pub mod geometry;
pub mod scope;
pub mod sequence;
pub mod style;
pub mod trace;
