// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document probes: structural paths, element frames, declarative
//! overrides.
//!
//! The core works on plain data; this module reads that data out of live
//! elements. Structural paths feed the scope namer, frames feed the
//! geometry probe, and `data-lead-*` attributes feed option resolution.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use web_sys::{Element, Window};

use leadline_core::config::{ATTR_PREFIX, OptionKey, OverrideSource};
use leadline_core::geometry::visual_center;
use leadline_core::scope::NodeIdentity;

/// Walks from `element` up through its ancestors and returns the structural
/// path root-to-leaf.
///
/// Each step carries the tag name plus the id when present, else the class
/// list. The document node has no element parent and therefore contributes
/// nothing.
#[must_use]
pub fn structural_path(element: &Element) -> Vec<NodeIdentity> {
    let mut path = Vec::new();
    let mut cursor = Some(element.clone());
    while let Some(el) = cursor {
        let id = Some(el.id()).filter(|id| !id.is_empty());
        let classes = el
            .get_attribute("class")
            .unwrap_or_default()
            .split_whitespace()
            .map(String::from)
            .collect();
        path.push(NodeIdentity {
            tag: el.tag_name(),
            id,
            classes,
        });
        cursor = el.parent_element();
    }
    path.reverse();
    path
}

/// Returns the element's document-coordinate frame: viewport bounding rect
/// shifted by the page scroll offsets.
#[must_use]
pub fn frame_of(element: &Element, window: &Window) -> Rect {
    let rect = element.get_bounding_client_rect();
    let scroll_x = window.page_x_offset().unwrap_or(0.0);
    let scroll_y = window.page_y_offset().unwrap_or(0.0);
    let x = rect.left() + scroll_x;
    let y = rect.top() + scroll_y;
    Rect::new(x, y, x + rect.width(), y + rect.height())
}

/// The element's rounded visual center in document coordinates.
///
/// Probed afresh at each phase boundary; layout may have shifted since the
/// previous phase.
#[must_use]
pub fn center_of(element: &Element, window: &Window) -> Point {
    visual_center(frame_of(element, window))
}

/// Reads declarative overrides from an element's `data-lead-*` attributes.
pub struct AttrOverrides {
    element: Element,
}

impl AttrOverrides {
    /// Creates an override source backed by `element`'s attributes.
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl core::fmt::Debug for AttrOverrides {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AttrOverrides")
            .field("element", &self.element.tag_name())
            .finish()
    }
}

impl OverrideSource for AttrOverrides {
    fn get(&self, key: OptionKey) -> Option<String> {
        self.element
            .get_attribute(&format!("{ATTR_PREFIX}{}", key.name()))
    }
}
