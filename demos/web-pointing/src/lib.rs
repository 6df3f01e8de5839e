// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: lead-pointing between DOM boxes.
//!
//! Builds a dark container with two source boxes and one target box, then
//! dispatches a pointing from each source. The first source uses the
//! invocation options as-is; the second carries `data-lead-*` attributes
//! that override the color and orb size, demonstrating per-element
//! declarative configuration and the independence of concurrent runs.
//!
//! Build with: `wasm-pack build --target web demos/web-pointing`
//!
//! Then serve `demos/web-pointing/` and open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::format;
use alloc::string::String;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use leadline_backend_web::point_to;
use leadline_core::color::Rgb;
use leadline_core::config::Options;

const CONTAINER_W: f64 = 800.0;
const CONTAINER_H: f64 = 400.0;

/// Entry point — called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().expect("no global window");
    let document = window.document().expect("no document");

    let container = create_container(&document)?;
    document.body().expect("no body").append_child(&container)?;

    let left = create_box(&document, "demo-source-a", "60px", "80px", "#4db050")?;
    left.set_attribute("data-lead-color", "rgb(33, 150, 243)")?;
    left.set_attribute("data-lead-pointer-size", "18")?;
    container.append_child(&left)?;

    let right = create_box(&document, "demo-source-b", "60px", "260px", "#f24336")?;
    container.append_child(&right)?;

    let target = create_box(&document, "demo-target", "620px", "170px", "#ffc208")?;
    container.append_child(&target)?;

    let options = Options {
        target: Some(String::from("#demo-target")),
        color: Some(Rgb::new(255, 255, 255).into()),
        opacity: Some(0.8),
        ..Options::default()
    };
    let dispatched = point_to(&document, ".demo-source", options)?;
    debug_assert!(dispatched == 2, "both sources should dispatch");

    Ok(())
}

fn create_container(doc: &Document) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element("div")?.unchecked_into();
    let s = el.style();
    s.set_property("width", &format!("{CONTAINER_W}px"))?;
    s.set_property("height", &format!("{CONTAINER_H}px"))?;
    s.set_property("position", "relative")?;
    s.set_property("background", "#1e1e2e")?;
    s.set_property("border-radius", "16px")?;
    Ok(el)
}

fn create_box(
    doc: &Document,
    id: &str,
    left: &str,
    top: &str,
    color: &str,
) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element("div")?.unchecked_into();
    el.set_id(id);
    if id.starts_with("demo-source") {
        el.set_class_name("demo-source");
    }
    let s = el.style();
    s.set_property("position", "absolute")?;
    s.set_property("left", left)?;
    s.set_property("top", top)?;
    s.set_property("width", "120px")?;
    s.set_property("height", "80px")?;
    s.set_property("background", color)?;
    s.set_property("border-radius", "12px")?;
    Ok(el)
}
