// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option merging and resolution into one per-run [`Config`].
//!
//! A pointing's configuration is assembled from three layers, later wins:
//!
//! 1. built-in defaults;
//! 2. the caller-supplied [`Options`] (a bare target-selector string
//!    converts via `From<&str>`);
//! 3. per-element declarative overrides, read from the host through
//!    [`OverrideSource`]; only keys in the [`OptionKey`] vocabulary are
//!    consulted, and only non-empty values apply. An absent, empty, or
//!    unparseable override never masks an earlier layer.
//!
//! Color-bearing fields still in string form after merging are normalized
//! through the [`ColorInterpreter`] exactly once. The resolved [`Config`]
//! is immutable for the run.

use alloc::string::String;
use core::fmt;

use crate::color::{ColorInterpreter, ColorSpec, Rgb};

/// Attribute namespace prefix for declarative overrides.
///
/// Each [`OptionKey`]'s attribute name is this prefix plus the key's
/// kebab-case name, e.g. `data-lead-pointer-size`.
pub const ATTR_PREFIX: &str = "data-lead-";

/// Completion-signal capability, supplied by the backend at configuration
/// time.
///
/// Orchestration never probes the environment itself; it receives the event
/// names as data. `None` means the host exposes no such event; phases that
/// would wait on it do not start, since they could never complete.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignalNames {
    /// Event name fired when a CSS animation finishes, e.g. `animationend`.
    pub animation_end: Option<String>,
    /// Event name fired when a CSS transition finishes, e.g.
    /// `transitionend`.
    pub transition_end: Option<String>,
}

impl SignalNames {
    /// The unprefixed standard event names.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            animation_end: Some(String::from("animationend")),
            transition_end: Some(String::from("transitionend")),
        }
    }

    /// No signal support at all; every waiting phase is skipped.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            animation_end: None,
            transition_end: None,
        }
    }
}

/// The declarative-override vocabulary.
///
/// Unrecognized attribute names are simply not in this enum and therefore
/// ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionKey {
    /// Target selector.
    Target,
    /// Base color for both flash and pointer.
    Color,
    /// Orb fill opacity, 0–1.
    Opacity,
    /// Highlight class-name stem.
    HighlightClass,
    /// Highlight flash duration in milliseconds.
    HighlightDuration,
    /// Flash color override.
    HighlightColor,
    /// Pointer class-name stem.
    PointerClass,
    /// Orb transition duration in milliseconds.
    PointerDuration,
    /// Orb fill color override.
    PointerColor,
    /// Orb diameter in pixels.
    PointerSize,
}

impl OptionKey {
    /// Every recognized key, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Target,
        Self::Color,
        Self::Opacity,
        Self::HighlightClass,
        Self::HighlightDuration,
        Self::HighlightColor,
        Self::PointerClass,
        Self::PointerDuration,
        Self::PointerColor,
        Self::PointerSize,
    ];

    /// The key's kebab-case name within the attribute namespace.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Target => "target",
            Self::Color => "color",
            Self::Opacity => "opacity",
            Self::HighlightClass => "highlight-class",
            Self::HighlightDuration => "highlight-duration",
            Self::HighlightColor => "highlight-color",
            Self::PointerClass => "pointer-class",
            Self::PointerDuration => "pointer-duration",
            Self::PointerColor => "pointer-color",
            Self::PointerSize => "pointer-size",
        }
    }
}

/// Reads per-element declarative overrides from the host.
///
/// The web backend answers from `data-lead-*` attributes; test doubles
/// answer from a table. Returning `None` (or an empty string, which
/// resolution discards) leaves the earlier layers in effect.
pub trait OverrideSource {
    /// Returns the raw override value for `key`, if the element carries
    /// one.
    fn get(&self, key: OptionKey) -> Option<String>;
}

/// An [`OverrideSource`] with no overrides.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOverrides;

impl OverrideSource for NoOverrides {
    fn get(&self, _key: OptionKey) -> Option<String> {
        None
    }
}

/// Caller-supplied partial configuration. Every field is optional; unset
/// fields fall back to the defaults layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    /// Target selector.
    pub target: Option<String>,
    /// Base color.
    pub color: Option<ColorSpec>,
    /// Orb fill opacity, 0–1.
    pub opacity: Option<f64>,
    /// Highlight class-name stem.
    pub highlight_class: Option<String>,
    /// Highlight flash duration in milliseconds; 0 completes the phase
    /// synchronously.
    pub highlight_duration_ms: Option<f64>,
    /// Flash color override; falls back to the base color.
    pub highlight_color: Option<ColorSpec>,
    /// Pointer class-name stem.
    pub pointer_class: Option<String>,
    /// Orb transition duration in milliseconds; 0 completes the phase
    /// synchronously.
    pub pointer_duration_ms: Option<f64>,
    /// Orb fill color override; falls back to the base color.
    pub pointer_color: Option<ColorSpec>,
    /// Orb diameter in pixels.
    pub pointer_size_px: Option<f64>,
    /// Retain the injected style node after the run for inspection.
    pub debug: bool,
}

impl From<&str> for Options {
    /// The target-selector shorthand: everything else defaulted.
    fn from(target: &str) -> Self {
        Self {
            target: Some(String::from(target)),
            ..Self::default()
        }
    }
}

impl Options {
    /// Applies one declarative override.
    ///
    /// Empty values and values that fail to parse for numeric keys are
    /// discarded; they never mask an earlier layer.
    pub fn apply_override(&mut self, key: OptionKey, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        match key {
            OptionKey::Target => self.target = Some(String::from(value)),
            OptionKey::Color => self.color = Some(ColorSpec::from(value)),
            OptionKey::Opacity => {
                if let Ok(v) = value.parse::<f64>() {
                    self.opacity = Some(v);
                }
            }
            OptionKey::HighlightClass => self.highlight_class = Some(String::from(value)),
            OptionKey::HighlightDuration => {
                if let Ok(v) = value.parse::<f64>() {
                    self.highlight_duration_ms = Some(v);
                }
            }
            OptionKey::HighlightColor => self.highlight_color = Some(ColorSpec::from(value)),
            OptionKey::PointerClass => self.pointer_class = Some(String::from(value)),
            OptionKey::PointerDuration => {
                if let Ok(v) = value.parse::<f64>() {
                    self.pointer_duration_ms = Some(v);
                }
            }
            OptionKey::PointerColor => self.pointer_color = Some(ColorSpec::from(value)),
            OptionKey::PointerSize => {
                if let Ok(v) = value.parse::<f64>() {
                    self.pointer_size_px = Some(v);
                }
            }
        }
    }

    fn overlay(&mut self, later: Self) {
        let Self {
            target,
            color,
            opacity,
            highlight_class,
            highlight_duration_ms,
            highlight_color,
            pointer_class,
            pointer_duration_ms,
            pointer_color,
            pointer_size_px,
            debug,
        } = later;
        if target.is_some() {
            self.target = target;
        }
        if color.is_some() {
            self.color = color;
        }
        if opacity.is_some() {
            self.opacity = opacity;
        }
        if highlight_class.is_some() {
            self.highlight_class = highlight_class;
        }
        if highlight_duration_ms.is_some() {
            self.highlight_duration_ms = highlight_duration_ms;
        }
        if highlight_color.is_some() {
            self.highlight_color = highlight_color;
        }
        if pointer_class.is_some() {
            self.pointer_class = pointer_class;
        }
        if pointer_duration_ms.is_some() {
            self.pointer_duration_ms = pointer_duration_ms;
        }
        if pointer_color.is_some() {
            self.pointer_color = pointer_color;
        }
        if pointer_size_px.is_some() {
            self.pointer_size_px = pointer_size_px;
        }
        self.debug |= debug;
    }
}

/// Configuration resolution failure.
///
/// The only hard failure: no layer supplied a target selector. A selector
/// that matches no element is a backend-side diagnostic, not a resolution
/// error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// No target selector in any layer.
    MissingTarget,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget => f.write_str("no target selector configured"),
        }
    }
}

impl core::error::Error for ResolveError {}

/// The resolved, immutable-for-the-run configuration of one pointing.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Target selector.
    pub target: String,
    /// Canonical base color.
    pub color: Rgb,
    /// Canonical flash color override.
    pub highlight_color: Option<Rgb>,
    /// Canonical orb color override.
    pub pointer_color: Option<Rgb>,
    /// Orb fill opacity, clamped to 0–1.
    pub opacity: f64,
    /// Flash duration in milliseconds; 0 means the phase completes
    /// synchronously.
    pub highlight_duration_ms: f64,
    /// Orb transition duration in milliseconds; 0 means the phase completes
    /// synchronously.
    pub pointer_duration_ms: f64,
    /// Orb diameter in pixels.
    pub pointer_size_px: f64,
    /// Highlight class-name stem (scoped per pair by style synthesis).
    pub highlight_class: String,
    /// Pointer class-name stem (scoped per pair by style synthesis).
    pub pointer_class: String,
    /// Host completion-signal capability.
    pub signals: SignalNames,
    /// Retain the injected style node after the run.
    pub debug: bool,
}

impl Config {
    /// The built-in defaults layer.
    #[must_use]
    pub fn default_options() -> Options {
        Options {
            target: None,
            color: Some(ColorSpec::Rgb(Rgb::FALLBACK)),
            opacity: Some(0.6),
            highlight_class: Some(String::from("leadline-flash")),
            highlight_duration_ms: Some(600.0),
            highlight_color: None,
            pointer_class: Some(String::from("leadline-pointer")),
            pointer_duration_ms: Some(700.0),
            pointer_color: None,
            pointer_size_px: Some(30.0),
            debug: false,
        }
    }

    /// Merges the three layers and normalizes colors into a [`Config`].
    ///
    /// `caller` is the invocation-level option object (or selector
    /// shorthand); `overrides` answers per-element declarative lookups;
    /// `signals` is the backend's completion-signal capability;
    /// `interpreter` normalizes any color field still in string form.
    pub fn resolve(
        caller: Options,
        overrides: &dyn OverrideSource,
        signals: SignalNames,
        interpreter: &mut dyn ColorInterpreter,
    ) -> Result<Self, ResolveError> {
        let mut merged = Self::default_options();
        merged.overlay(caller);
        for key in OptionKey::ALL {
            if let Some(value) = overrides.get(key) {
                merged.apply_override(key, &value);
            }
        }

        let target = merged.target.ok_or(ResolveError::MissingTarget)?;

        let color = match merged.color {
            Some(spec) => spec.resolve(interpreter),
            None => Rgb::FALLBACK,
        };
        let highlight_color = match merged.highlight_color {
            Some(spec) => Some(spec.resolve(interpreter)),
            None => None,
        };
        let pointer_color = match merged.pointer_color {
            Some(spec) => Some(spec.resolve(interpreter)),
            None => None,
        };

        Ok(Self {
            target,
            color,
            highlight_color,
            pointer_color,
            opacity: merged.opacity.unwrap_or(0.6).clamp(0.0, 1.0),
            highlight_duration_ms: merged.highlight_duration_ms.unwrap_or(0.0).max(0.0),
            pointer_duration_ms: merged.pointer_duration_ms.unwrap_or(0.0).max(0.0),
            pointer_size_px: merged.pointer_size_px.unwrap_or(0.0).max(0.0),
            highlight_class: merged
                .highlight_class
                .unwrap_or_else(|| String::from("leadline-flash")),
            pointer_class: merged
                .pointer_class
                .unwrap_or_else(|| String::from("leadline-pointer")),
            signals,
            debug: merged.debug,
        })
    }

    /// The flash color: the override when set, else the base color.
    #[inline]
    #[must_use]
    pub fn flash_rgb(&self) -> Rgb {
        self.highlight_color.unwrap_or(self.color)
    }

    /// The orb fill color: the override when set, else the base color.
    #[inline]
    #[must_use]
    pub fn orb_rgb(&self) -> Rgb {
        self.pointer_color.unwrap_or(self.color)
    }
}
