// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical colors and host-delegated color normalization.
//!
//! Callers hand the library arbitrary color input: named colors, hex
//! strings, `rgb()`/`rgba()` strings. Generated style rules need exact
//! channel values, so every color-bearing option is normalized to an
//! [`Rgb`] triple exactly once, at configuration time.
//!
//! Interpretation is **not** done by parsing CSS color syntax here. The host
//! environment already owns a full color parser (its style engine), so the
//! core delegates through the [`ColorInterpreter`] trait and only deals in
//! the canonical triple that comes back. Input the style engine rejects
//! falls back to [`Rgb::FALLBACK`] rather than failing the run.

use alloc::string::String;
use core::fmt;

/// A canonical color: integer channel values, 0–255 each.
///
/// This is the only color representation handed to style generation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// The accent color substituted when input cannot be interpreted:
    /// yellow, `(255, 255, 0)`.
    pub const FALLBACK: Self = Self::new(255, 255, 0);

    /// Creates a color from raw channel values.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Normalizes a color specification through the host's style engine.
///
/// The web backend implements this by writing the specification to a hidden
/// probe node's `color` property and reading the computed value back. Test
/// doubles answer from a table.
///
/// Returns `None` when the host rejects the specification; resolution then
/// substitutes [`Rgb::FALLBACK`].
pub trait ColorInterpreter {
    /// Interprets `spec` and returns its canonical channels, or `None` if
    /// the style engine rejects it.
    fn interpret(&mut self, spec: &str) -> Option<Rgb>;
}

/// A color-bearing option value: either already canonical, or a string still
/// awaiting interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorSpec {
    /// A CSS color string (named, hex, `rgb()`/`rgba()`).
    Css(String),
    /// An already-canonical triple.
    Rgb(Rgb),
}

impl ColorSpec {
    /// Resolves this specification to a canonical triple.
    ///
    /// String input the interpreter rejects yields [`Rgb::FALLBACK`]; a run
    /// never fails over an unparseable color.
    #[must_use]
    pub fn resolve(&self, interpreter: &mut dyn ColorInterpreter) -> Rgb {
        match self {
            Self::Css(spec) => interpreter.interpret(spec).unwrap_or(Rgb::FALLBACK),
            Self::Rgb(rgb) => *rgb,
        }
    }
}

impl From<Rgb> for ColorSpec {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<&str> for ColorSpec {
    fn from(spec: &str) -> Self {
        Self::Css(String::from(spec))
    }
}
