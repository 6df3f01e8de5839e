// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The run driver: applies machine steps to the document.
//!
//! Each [`Run`] owns one in-flight pointing: its state machine, its source
//! and target elements, its injected style node, and (while flying) its
//! pointer element. Steps come out of the machine as plain commands; the
//! driver performs them and arms the single wait that follows: a one-shot
//! `animationend`/`transitionend` listener, or a deferred
//! `requestAnimationFrame` tick that lets the pointer's initial position
//! take effect before its transition is engaged.
//!
//! Lifetime: the run's state is reference-counted, and the pending one-shot
//! callback holds the only outside reference. When the final step completes
//! the last callback is released and the state drops. A run whose expected
//! signal never fires (say the element left the document mid-flight) keeps
//! that one callback allocated, an accepted degradation; there is no
//! cancellation.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

use kurbo::Point;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, HtmlElement, Window};

use leadline_core::sequence::{Command, Pointing, Role, Signal, Step, Wait};
use leadline_core::style;

use crate::dom;

// Direct global binding instead of `web_sys::Window` methods — avoids
// fetching (and unwrapping) the Window object for every deferral.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &js_sys::Function) -> i32;
}

/// One in-flight pointing run.
///
/// Created and started by [`point_to`](crate::point_to); progresses on its
/// own as completion signals arrive.
pub struct Run {
    inner: Rc<RunInner>,
}

struct RunInner {
    machine: RefCell<Pointing>,
    document: Document,
    window: Window,
    source: Element,
    target: Element,
    /// Scope identifier for this pair, derived once at start.
    scope: String,
    /// The pointer element, present exactly while one is alive.
    pointer: RefCell<Option<HtmlElement>>,
    /// Direct handle to the style node this run injected; cleanup removes
    /// exactly this node.
    style_node: RefCell<Option<Element>>,
}

impl Run {
    /// Starts a run: derives the pair scope, injects styles, and enters the
    /// first phase. Returns immediately; the run progresses from signals.
    pub(crate) fn start(
        machine: Pointing,
        document: Document,
        window: Window,
        source: Element,
        target: Element,
    ) -> Self {
        let scope = leadline_core::scope::scope_id(
            &dom::structural_path(&source),
            &dom::structural_path(&target),
        );
        let inner = Rc::new(RunInner {
            machine: RefCell::new(machine),
            document,
            window,
            source,
            target,
            scope,
            pointer: RefCell::new(None),
            style_node: RefCell::new(None),
        });
        let step = inner.machine.borrow_mut().begin();
        Self::apply(&inner, step);
        Self { inner }
    }

    /// The pair's scope identifier.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.inner.scope
    }

    /// Whether the run has completed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.inner.machine.borrow().is_done()
    }

    fn apply(inner: &Rc<RunInner>, step: Step) {
        for command in &step.commands {
            inner.perform(*command);
        }
        if let Some(wait) = step.wait {
            Self::arm(inner, wait);
        }
    }

    fn dispatch(inner: &Rc<RunInner>, signal: Signal) {
        let step = inner.machine.borrow_mut().advance(signal);
        Self::apply(inner, step);
    }

    /// Arms the step's one-shot wait.
    ///
    /// Callbacks are converted with [`Closure::once_into_js`], so each frees
    /// itself after its single invocation; nothing retains them on the Rust
    /// side.
    fn arm(inner: &Rc<RunInner>, wait: Wait) {
        match wait {
            Wait::Tick => {
                let rc = Rc::clone(inner);
                let cb = Closure::once_into_js(move || Self::dispatch(&rc, Signal::Tick));
                let _ = request_animation_frame(cb.unchecked_ref());
            }
            Wait::FlashEnd(role) => {
                let Some(event) = inner.machine.borrow().config().signals.animation_end.clone()
                else {
                    return;
                };
                let rc = Rc::clone(inner);
                let cb = Closure::once_into_js(move || Self::dispatch(&rc, Signal::FlashEnded));
                listen_once(inner.element(role), &event, &cb);
            }
            Wait::OrbArrival => {
                let Some(event) = inner.machine.borrow().config().signals.transition_end.clone()
                else {
                    return;
                };
                let Some(pointer) = inner.pointer.borrow().clone() else {
                    return;
                };
                let rc = Rc::clone(inner);
                let cb = Closure::once_into_js(move || Self::dispatch(&rc, Signal::OrbArrived));
                listen_once(&pointer, &event, &cb);
            }
        }
    }
}

impl core::fmt::Debug for Run {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Run")
            .field("scope", &self.inner.scope)
            .field("phase", &self.inner.machine.borrow().phase())
            .finish()
    }
}

fn listen_once(target: &Element, event: &str, callback: &JsValue) {
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &options,
    );
}

impl RunInner {
    fn element(&self, role: Role) -> &Element {
        match role {
            Role::Source => &self.source,
            Role::Target => &self.target,
        }
    }

    fn flash_class(&self) -> String {
        let machine = self.machine.borrow();
        style::flash_class(machine.config(), &self.scope)
    }

    fn orb_class(&self) -> String {
        let machine = self.machine.borrow();
        style::orb_class(machine.config(), &self.scope)
    }

    fn perform(&self, command: Command) {
        match command {
            Command::InjectStyles => {
                let css = {
                    let machine = self.machine.borrow();
                    style::style_block(machine.config(), &self.scope)
                };
                let Ok(node) = self.document.create_element("style") else {
                    return;
                };
                node.set_text_content(Some(&css));
                if self.source.append_child(&node).is_ok() {
                    *self.style_node.borrow_mut() = Some(node);
                }
            }
            Command::AddClass { role } => {
                let _ = self.element(role).class_list().add_1(&self.flash_class());
            }
            Command::RemoveClass { role } => {
                let _ = self
                    .element(role)
                    .class_list()
                    .remove_1(&self.flash_class());
            }
            Command::SpawnPointer => {
                debug_assert!(
                    self.pointer.borrow().is_none(),
                    "one pointer element per in-flight run"
                );
                let center = dom::center_of(&self.source, &self.window);
                let Ok(el) = self.document.create_element("div") else {
                    return;
                };
                let el: HtmlElement = el.unchecked_into();
                let _ = el.class_list().add_1(&self.orb_class());
                position(&el, center);
                if let Some(body) = self.document.body() {
                    let _ = body.append_child(&el);
                }
                *self.pointer.borrow_mut() = Some(el);
            }
            Command::FlyPointer => {
                // Re-probe: the target may have moved since the run began.
                let center = dom::center_of(&self.target, &self.window);
                if let Some(el) = &*self.pointer.borrow() {
                    // Flush layout so the transition starts from the spawn
                    // position rather than coalescing both writes.
                    let _ = el.offset_width();
                    position(el, center);
                }
            }
            Command::RemovePointer => {
                if let Some(el) = self.pointer.borrow_mut().take() {
                    el.remove();
                }
            }
            Command::RemoveStyles => {
                if let Some(node) = self.style_node.borrow_mut().take() {
                    node.remove();
                }
            }
        }
    }
}

fn position(el: &HtmlElement, center: Point) {
    let s = el.style();
    let _ = s.set_property("left", &format!("{}px", center.x));
    let _ = s.set_property("top", &format!("{}px", center.y));
}
