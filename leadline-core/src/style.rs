// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped style-block synthesis.
//!
//! One pointing injects one style block, scoped by the pair's identifier so
//! concurrent pointings never share keyframe or class names. The block
//! carries the flash keyframes (background color cycling through the
//! highlight color at half opacity and back), the flash class binding, and
//! the orb class whose `::after` pseudo-element draws the visible circle.
//!
//! This is pure string generation: no timing, no sequencing, no document
//! access. The backend injects the result as a `<style>` node under the
//! source element and retains the handle for cleanup.

use alloc::format;
use alloc::string::String;

use crate::config::Config;

/// The scoped highlight class applied to source and target during their
/// flash phases.
#[must_use]
pub fn flash_class(config: &Config, scope: &str) -> String {
    format!("{}--{scope}", config.highlight_class)
}

/// The scoped class of the transient orb element.
#[must_use]
pub fn orb_class(config: &Config, scope: &str) -> String {
    format!("{}--{scope}", config.pointer_class)
}

/// The scoped name of the flash keyframe animation.
#[must_use]
pub fn flash_keyframes(config: &Config, scope: &str) -> String {
    format!("{}-anim--{scope}", config.highlight_class)
}

/// Synthesizes the complete scoped style block for one pointing.
///
/// The keyframes declare only a midpoint frame, so the flash animates from
/// whatever background the element already has, through the flash color at
/// half opacity, and back. The orb element itself is a zero-size positioned
/// anchor; its `::after` pseudo-element draws the circle centered on the
/// anchor, in the orb color at the configured opacity and diameter.
#[must_use]
pub fn style_block(config: &Config, scope: &str) -> String {
    use core::fmt::Write as _;

    let kf = flash_keyframes(config, scope);
    let flash = flash_class(config, scope);
    let orb = orb_class(config, scope);
    let fc = config.flash_rgb();
    let oc = config.orb_rgb();
    let diameter = config.pointer_size_px;
    let radius = diameter / 2.0;

    // Writes to a String are infallible.
    let mut css = String::new();
    let _ = writeln!(css, "@keyframes {kf} {{");
    let _ = writeln!(
        css,
        "  50% {{ background-color: rgba({}, {}, {}, 0.5); }}",
        fc.r, fc.g, fc.b,
    );
    let _ = writeln!(css, "}}");
    let _ = writeln!(css, ".{flash} {{");
    let _ = writeln!(
        css,
        "  animation: {kf} {}ms ease-in-out 1;",
        config.highlight_duration_ms,
    );
    let _ = writeln!(css, "}}");
    let _ = writeln!(css, ".{orb} {{");
    let _ = writeln!(css, "  position: absolute;");
    let _ = writeln!(css, "  width: 0;");
    let _ = writeln!(css, "  height: 0;");
    let _ = writeln!(
        css,
        "  transition: left {d}ms ease-in-out, top {d}ms ease-in-out;",
        d = config.pointer_duration_ms,
    );
    let _ = writeln!(css, "}}");
    let _ = writeln!(css, ".{orb}::after {{");
    let _ = writeln!(css, "  content: \"\";");
    let _ = writeln!(css, "  display: block;");
    let _ = writeln!(css, "  width: {diameter}px;");
    let _ = writeln!(css, "  height: {diameter}px;");
    let _ = writeln!(css, "  margin-left: -{radius}px;");
    let _ = writeln!(css, "  margin-top: -{radius}px;");
    let _ = writeln!(css, "  border-radius: 50%;");
    let _ = writeln!(
        css,
        "  background-color: rgba({}, {}, {}, {});",
        oc.r, oc.g, oc.b, config.opacity,
    );
    let _ = writeln!(css, "}}");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::config::{Config, NoOverrides, Options, SignalNames};

    struct RejectAll;

    impl crate::color::ColorInterpreter for RejectAll {
        fn interpret(&mut self, _spec: &str) -> Option<Rgb> {
            None
        }
    }

    fn config() -> Config {
        let caller = Options {
            target: Some("#t".into()),
            color: Some(Rgb::new(20, 40, 60).into()),
            opacity: Some(0.75),
            highlight_duration_ms: Some(500.0),
            pointer_duration_ms: Some(250.0),
            pointer_size_px: Some(24.0),
            ..Options::default()
        };
        Config::resolve(caller, &NoOverrides, SignalNames::standard(), &mut RejectAll)
            .expect("resolves")
    }

    #[test]
    fn block_is_scoped_per_pair() {
        let config = config();
        let a = style_block(&config, "body-div-a--body-div-b");
        let b = style_block(&config, "body-div-c--body-div-b");
        assert!(a.contains("leadline-flash--body-div-a--body-div-b"));
        assert!(a.contains("leadline-pointer--body-div-a--body-div-b"));
        assert_ne!(a, b, "distinct scopes must produce distinct rules");
    }

    #[test]
    fn flash_rule_uses_half_opacity_color_and_duration() {
        let block = style_block(&config(), "s");
        assert!(block.contains("background-color: rgba(20, 40, 60, 0.5);"));
        assert!(
            block.contains("animation: leadline-flash-anim--s 500ms ease-in-out 1;"),
            "flash binds the scoped keyframes at the configured duration"
        );
    }

    #[test]
    fn orb_rule_carries_diameter_opacity_and_transition() {
        let block = style_block(&config(), "s");
        assert!(block.contains("transition: left 250ms ease-in-out, top 250ms ease-in-out;"));
        assert!(block.contains("width: 24px;"));
        assert!(block.contains("margin-left: -12px;"));
        assert!(block.contains("border-radius: 50%;"));
        assert!(block.contains("background-color: rgba(20, 40, 60, 0.75);"));
    }

    #[test]
    fn color_overrides_split_flash_and_orb() {
        let mut config = config();
        config.highlight_color = Some(Rgb::new(1, 2, 3));
        config.pointer_color = Some(Rgb::new(7, 8, 9));
        let block = style_block(&config, "s");
        assert!(block.contains("rgba(1, 2, 3, 0.5)"), "flash override");
        assert!(block.contains("rgba(7, 8, 9, 0.75)"), "orb override");
    }
}
