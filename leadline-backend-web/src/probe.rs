// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Computed-style color normalization.
//!
//! [`DocumentColors`] implements the core's
//! [`ColorInterpreter`](leadline_core::color::ColorInterpreter) by
//! delegating to the browser's own color parser: the specification is
//! written to a hidden probe node's `color` property and the computed value
//! is read back. Only the canonical computed form (`rgb()` / `rgba()`) is
//! parsed here, never author CSS.
//!
//! The probe node is keyed by id in the document itself, so it is created
//! lazily on first use, reused across resolutions and across
//! `DocumentColors` instances, and persists for the document's lifetime.
//! Execution is single-threaded and cooperative, so the transient write to
//! its `color` property is race-free.

use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement, Window};

use leadline_core::color::{ColorInterpreter, Rgb};

/// Id of the shared hidden probe node.
const PROBE_ID: &str = "leadline-color-probe";

/// Color interpreter backed by a document's style engine.
pub struct DocumentColors {
    document: Document,
    window: Window,
}

impl core::fmt::Debug for DocumentColors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DocumentColors").finish_non_exhaustive()
    }
}

impl DocumentColors {
    /// Creates an interpreter for the given document and window.
    #[must_use]
    pub fn new(document: Document, window: Window) -> Self {
        Self { document, window }
    }

    /// Returns the shared probe node, creating and attaching it on first
    /// use.
    fn probe(&self) -> Option<HtmlElement> {
        if let Some(el) = self.document.get_element_by_id(PROBE_ID) {
            return Some(el.unchecked_into());
        }
        let el: HtmlElement = self.document.create_element("span").ok()?.unchecked_into();
        el.set_id(PROBE_ID);
        let _ = el.style().set_property("display", "none");
        self.document.body()?.append_child(&el).ok()?;
        Some(el)
    }
}

impl ColorInterpreter for DocumentColors {
    fn interpret(&mut self, spec: &str) -> Option<Rgb> {
        let probe = self.probe()?;
        let style = probe.style();

        // Clear first: a rejected assignment leaves the property untouched,
        // and a stale value would masquerade as a successful parse.
        let _ = style.remove_property("color");
        style.set_property("color", spec).ok()?;
        if style.get_property_value("color").ok()?.is_empty() {
            // The style engine rejected the declaration.
            return None;
        }

        let computed = self.window.get_computed_style(&probe).ok()??;
        let value = computed.get_property_value("color").ok()?;
        parse_computed_rgb(&value)
    }
}

/// Parses the canonical computed color form: `rgb(r, g, b)` or
/// `rgba(r, g, b, a)` with integer channels.
#[must_use]
pub(crate) fn parse_computed_rgb(value: &str) -> Option<Rgb> {
    let value = value.trim();
    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let mut channels = inner.split(',');
    let mut next = || -> Option<u8> { channels.next()?.trim().parse().ok() };
    let r = next()?;
    let g = next()?;
    let b = next()?;
    Some(Rgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_rgb() {
        assert_eq!(
            parse_computed_rgb("rgb(255, 0, 0)"),
            Some(Rgb::new(255, 0, 0))
        );
    }

    #[test]
    fn parses_canonical_rgba_ignoring_alpha() {
        assert_eq!(
            parse_computed_rgb("rgba(12, 34, 56, 0.5)"),
            Some(Rgb::new(12, 34, 56))
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(
            parse_computed_rgb("  rgb(1,2,3)  "),
            Some(Rgb::new(1, 2, 3))
        );
    }

    #[test]
    fn rejects_non_canonical_forms() {
        assert_eq!(parse_computed_rgb(""), None);
        assert_eq!(parse_computed_rgb("red"), None);
        assert_eq!(parse_computed_rgb("hsl(0, 100%, 50%)"), None);
        assert_eq!(parse_computed_rgb("rgb(300, 0, 0)"), None, "channel range");
        assert_eq!(parse_computed_rgb("rgb(1, 2)"), None, "missing channel");
    }
}
