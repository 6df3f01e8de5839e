// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for leadline.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`point_to`]: the entry point, dispatching one independent run per
//!   matched source element
//! - [`DocumentColors`]: computed-style color normalization through a
//!   shared hidden probe node
//! - [`detect_signals`]: completion-event capability detection
//! - [`Run`]: one in-flight pointing, driven by one-shot completion
//!   listeners
//!
//! # Crate boundaries
//!
//! `leadline_core` owns option resolution, scope naming, style synthesis,
//! and the phase machine; this crate owns everything that touches a live
//! document. Runs are fully independent: each owns its configuration, its
//! scope, its injected style node, and its pointer element, so a failure or
//! disabled phase in one run never affects another.

#![no_std]

extern crate alloc;

mod dom;
mod driver;
mod probe;

pub use dom::{AttrOverrides, center_of, frame_of, structural_path};
pub use driver::Run;
pub use probe::DocumentColors;

use alloc::format;
use alloc::string::String;

use js_sys::Reflect;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element, console};

use leadline_core::config::{Config, Options, SignalNames};
use leadline_core::sequence::Pointing;

/// Probes the host's completion-event support and returns the names to
/// listen for.
///
/// Detection checks which animation/transition style properties the engine
/// exposes, standard first and `webkit`-prefixed as fallback. A missing
/// capability yields `None` for that event, and phases depending on it will
/// not start.
#[must_use]
pub fn detect_signals(document: &Document) -> SignalNames {
    let Ok(scratch) = document.create_element("span") else {
        return SignalNames::none();
    };
    let scratch: web_sys::HtmlElement = scratch.unchecked_into();
    let style = scratch.style();

    let has = |property: &str| {
        Reflect::has(style.as_ref(), &JsValue::from_str(property)).unwrap_or(false)
    };
    let pick = |standard: &str, prefixed: &str, standard_event: &str, prefixed_event: &str| {
        if has(standard) {
            Some(String::from(standard_event))
        } else if has(prefixed) {
            Some(String::from(prefixed_event))
        } else {
            None
        }
    };

    SignalNames {
        animation_end: pick(
            "animation",
            "webkitAnimation",
            "animationend",
            "webkitAnimationEnd",
        ),
        transition_end: pick(
            "transition",
            "webkitTransition",
            "transitionend",
            "webkitTransitionEnd",
        ),
    }
}

/// Animates a lead from every element matched by `sources` to its
/// configured target.
///
/// `options` is either a target-selector string or an
/// [`Options`] record; per-element `data-lead-*` attributes overlay it.
/// Dispatches one independent, asynchronously-progressing run per source
/// element and returns immediately with the number dispatched.
///
/// A source whose target selector matches nothing is reported on the
/// console and skipped; the remaining runs proceed. Color input the style
/// engine rejects falls back to the default accent color.
///
/// # Errors
///
/// Only malformed `sources` selectors error out; per-run problems are
/// diagnostics, not failures.
pub fn point_to(
    document: &Document,
    sources: &str,
    options: impl Into<Options>,
) -> Result<u32, JsValue> {
    let options = options.into();
    let window = web_sys::window().expect("no global window");
    let signals = detect_signals(document);
    let mut colors = DocumentColors::new(document.clone(), window.clone());

    let matched = document.query_selector_all(sources)?;
    let mut dispatched = 0;
    for i in 0..matched.length() {
        let Some(source) = matched.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };

        let overrides = AttrOverrides::new(source.clone());
        let config = match Config::resolve(
            options.clone(),
            &overrides,
            signals.clone(),
            &mut colors,
        ) {
            Ok(config) => config,
            Err(err) => {
                console::warn_1(&JsValue::from_str(&format!("leadline: {err}")));
                continue;
            }
        };

        let target = match document.query_selector(&config.target) {
            Ok(Some(target)) => target,
            _ => {
                console::warn_1(&JsValue::from_str(&format!(
                    "leadline: target `{}` matched no element; run skipped",
                    config.target
                )));
                continue;
            }
        };

        let _run = Run::start(
            Pointing::new(config),
            document.clone(),
            window.clone(),
            source,
            target,
        );
        dispatched += 1;
    }
    Ok(dispatched)
}
