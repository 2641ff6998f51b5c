//! Per-overlay lifecycle: resources acquired on open, reversed on close.

use std::{cell::Cell, rc::Rc};

use leptos::{Callable, Callback};
use overlay_core::{tab_cycle, OverlayId, TabCycle};
use wasm_bindgen::JsCast;

use crate::{
    dom::{self, CaptureListener},
    runtime_context::OverlayRuntimeContext,
};

#[derive(Clone, Copy)]
/// Where deferred initial focus lands once the panel is attached.
pub(crate) enum InitialFocus {
    /// First operable element inside the panel; no-op when none exists.
    FirstElement,
    /// The panel itself. Menus start here so arrow navigation begins with
    /// no item selected.
    Container,
}

pub(crate) struct SessionOptions {
    pub(crate) overlay: OverlayId,
    pub(crate) panel_id: String,
    pub(crate) trigger_id: Option<String>,
    pub(crate) modal: bool,
    pub(crate) initial_focus: InitialFocus,
    pub(crate) on_close: Callback<()>,
}

/// One open overlay's acquired resources.
///
/// `open` performs, in order: focus capture, scroll-lock acquire,
/// background-suppression acquire, stack registration, listener
/// attachment, then the one-tick deferred focus-in. `close` reverses that
/// sequence exactly and is safe to call once from scope cleanup no matter
/// why the overlay stopped being open.
pub(crate) struct OverlaySession {
    runtime: OverlayRuntimeContext,
    options: SessionOptions,
    /// Cleared by outside-click dismissal, which does not return focus.
    restore_focus: Rc<Cell<bool>>,
    previous_focus: Option<web_sys::HtmlElement>,
    portal_root: Option<web_sys::Element>,
    listeners: Vec<CaptureListener>,
    opened: bool,
}

impl OverlaySession {
    pub(crate) fn new(runtime: OverlayRuntimeContext, options: SessionOptions) -> Self {
        Self {
            runtime,
            options,
            restore_focus: Rc::new(Cell::new(true)),
            previous_focus: None,
            portal_root: None,
            listeners: Vec::new(),
            opened: false,
        }
    }

    /// Acquires the overlay's shared resources. The caller must have
    /// already attached the panel to the live document.
    pub(crate) fn open(&mut self) {
        if self.opened {
            return;
        }
        self.opened = true;

        // Capture the focus origin before anything moves focus. The body
        // counts as "nothing focused" and is never a restore target.
        self.previous_focus =
            dom::active_html_element().filter(|element| Some(element) != dom::body().as_ref());

        if self.options.modal {
            self.runtime.lock_scroll();
            self.portal_root = dom::element_by_id(&self.options.panel_id)
                .and_then(|panel| dom::portal_root_of(&panel));
            if let Some(root) = &self.portal_root {
                self.runtime.suppress_background(root);
            }
        }

        self.runtime.push_overlay(self.options.overlay);
        self.attach_escape_listener();
        if self.options.modal {
            self.attach_tab_listener();
        } else {
            self.attach_outside_listener();
        }
        self.schedule_initial_focus();
    }

    /// Releases everything `open` acquired, in reverse order.
    pub(crate) fn close(&mut self) {
        if !self.opened {
            return;
        }
        self.opened = false;

        self.listeners.clear();
        self.runtime.pop_overlay(self.options.overlay);
        if let Some(root) = self.portal_root.take() {
            self.runtime.restore_background(&root);
        }
        if self.options.modal {
            self.runtime.unlock_scroll();
        }

        if self.restore_focus.get() {
            if let Some(previous) = self.previous_focus.take() {
                if previous.is_connected() && dom::is_operable(&previous) {
                    dom::focus_html_element(&previous);
                }
            }
        }
    }

    fn attach_escape_listener(&mut self) {
        let runtime = self.runtime;
        let overlay = self.options.overlay;
        let on_close = self.options.on_close;

        let listener = CaptureListener::attach("keydown", move |event| {
            let Ok(event) = event.dyn_into::<web_sys::KeyboardEvent>() else {
                return;
            };
            if event.default_prevented() || event.key() != "Escape" {
                return;
            }
            // Every open overlay listens; only the topmost one dismisses.
            if !runtime.is_top(overlay) {
                return;
            }
            event.prevent_default();
            event.stop_propagation();
            dom::next_tick(move || on_close.call(()));
        });
        self.listeners.extend(listener);
    }

    fn attach_tab_listener(&mut self) {
        let runtime = self.runtime;
        let overlay = self.options.overlay;
        let panel_id = self.options.panel_id.clone();

        let listener = CaptureListener::attach("keydown", move |event| {
            let Ok(event) = event.dyn_into::<web_sys::KeyboardEvent>() else {
                return;
            };
            if event.default_prevented() || event.key() != "Tab" {
                return;
            }
            if !runtime.is_top(overlay) {
                return;
            }
            let Some(panel) = dom::element_by_id(&panel_id) else {
                return;
            };

            // Recomputed per keystroke; panel content may have changed.
            let focusable = dom::focusable_elements(&panel);
            let active = dom::active_html_element();
            let position = active
                .as_ref()
                .and_then(|active| focusable.iter().position(|item| item == active));

            let wrap_target = match tab_cycle(focusable.len(), position, event.shift_key()) {
                TabCycle::WrapToFirst => focusable.first(),
                TabCycle::WrapToLast => focusable.last(),
                TabCycle::Pass => None,
            };
            if let Some(target) = wrap_target {
                event.prevent_default();
                event.stop_propagation();
                dom::focus_html_element(target);
            }
        });
        self.listeners.extend(listener);
    }

    fn attach_outside_listener(&mut self) {
        let panel_id = self.options.panel_id.clone();
        let trigger_id = self.options.trigger_id.clone();
        let restore_focus = Rc::clone(&self.restore_focus);
        let on_close = self.options.on_close;

        let listener = CaptureListener::attach("mousedown", move |event| {
            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            else {
                return;
            };
            let Some(panel) = dom::element_by_id(&panel_id) else {
                return;
            };
            if panel.contains(Some(&target)) {
                return;
            }
            // The trigger toggles the overlay itself; dismissing here too
            // would reopen it on the same press.
            if let Some(trigger) = trigger_id.as_deref().and_then(dom::element_by_id) {
                if trigger.contains(Some(&target)) {
                    return;
                }
            }
            restore_focus.set(false);
            dom::next_tick(move || on_close.call(()));
        });
        self.listeners.extend(listener);
    }

    fn schedule_initial_focus(&self) {
        let panel_id = self.options.panel_id.clone();
        let target = self.options.initial_focus;
        dom::next_tick(move || {
            let Some(panel) = dom::element_by_id(&panel_id) else {
                return;
            };
            match target {
                InitialFocus::FirstElement => {
                    if let Some(first) = dom::focusable_elements(&panel).first() {
                        dom::focus_html_element(first);
                    }
                }
                InitialFocus::Container => dom::focus_html_element(&panel),
            }
        });
    }
}
