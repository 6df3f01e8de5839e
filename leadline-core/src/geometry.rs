// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual-center computation for animation endpoints.
//!
//! The orb's endpoints are the visual centers of the source and target
//! elements in document coordinates. The host probes an element's frame
//! (top/left offset plus outer size) and this module reduces it to a rounded
//! center point.
//!
//! Centers are probed afresh at each phase boundary rather than cached,
//! since layout may shift between phases due to unrelated page activity.

use kurbo::{Point, Rect};

/// Returns the rounded visual center of an element frame.
///
/// `frame` is the element's document-coordinate frame: origin at its
/// top/left offset, size its outer width/height. The center is the offset
/// plus half the outer size, each coordinate rounded to the nearest integer
/// pixel.
#[must_use]
pub fn visual_center(frame: Rect) -> Point {
    frame.center().round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_offset_plus_half_size() {
        let frame = Rect::new(10.0, 20.0, 110.0, 60.0);
        assert_eq!(visual_center(frame), Point::new(60.0, 40.0));
    }

    #[test]
    fn center_rounds_to_whole_pixels() {
        // 7 + 15/2 = 14.5 → 15; 3 + 10/2 = 8
        let frame = Rect::new(7.0, 3.0, 22.0, 13.0);
        assert_eq!(visual_center(frame), Point::new(15.0, 8.0));
    }

    #[test]
    fn empty_frame_centers_on_its_origin() {
        let frame = Rect::new(42.0, 17.0, 42.0, 17.0);
        assert_eq!(visual_center(frame), Point::new(42.0, 17.0));
    }
}
