//! Internal DOM lookup, focus, and listener helpers for the overlay runtime.

use wasm_bindgen::{closure::Closure, JsCast};

/// Elements a contained overlay treats as focus targets. Disabled elements
/// and negative tabindex values are filtered out after the query.
const FOCUSABLE_SELECTOR: &str = "a[href], button, input, select, textarea, [tabindex]";

pub(crate) fn live_document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Returns the shared portal ancestor all overlay roots attach under.
pub(crate) fn body() -> Option<web_sys::HtmlElement> {
    live_document().and_then(|document| document.body())
}

/// Returns the current active element as an [`web_sys::HtmlElement`] when possible.
pub(crate) fn active_html_element() -> Option<web_sys::HtmlElement> {
    live_document()
        .and_then(|document| document.active_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Focuses an HTML element, ignoring browser focus errors.
pub(crate) fn focus_html_element(element: &web_sys::HtmlElement) {
    let _ = element.focus();
}

pub(crate) fn element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    live_document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Collects the operable focus targets inside `container`, in DOM order.
pub(crate) fn focusable_elements(container: &web_sys::Element) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(item) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        if !is_operable(&item) {
            continue;
        }
        items.push(item);
    }

    items
}

pub(crate) fn is_operable(item: &web_sys::HtmlElement) -> bool {
    if item.has_attribute("disabled") {
        return false;
    }
    match item.get_attribute("tabindex") {
        Some(value) => value.parse::<i32>().map(|index| index >= 0).unwrap_or(false),
        None => true,
    }
}

/// Walks up from `element` to the direct child of the portal ancestor that
/// contains it.
pub(crate) fn portal_root_of(element: &web_sys::Element) -> Option<web_sys::Element> {
    let ancestor: web_sys::Element = body()?.into();
    let mut current = element.clone();
    loop {
        let parent = current.parent_element()?;
        if parent == ancestor {
            return Some(current);
        }
        current = parent;
    }
}

/// Runs `callback` on the next browser task, after the current event
/// dispatch and any pending unmount have finished.
pub(crate) fn next_tick(callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(callback);
    let _ =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
}

/// Document-level capture-phase listener that detaches when dropped.
///
/// Capture phase means the overlay observes the event before any target
/// handler can consume it, regardless of where the overlay sits in the
/// tree.
pub(crate) struct CaptureListener {
    kind: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl CaptureListener {
    pub(crate) fn attach(
        kind: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let document = live_document()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        document
            .add_event_listener_with_callback_and_bool(kind, closure.as_ref().unchecked_ref(), true)
            .ok()?;
        Some(Self { kind, closure })
    }
}

impl Drop for CaptureListener {
    fn drop(&mut self) {
        let Some(document) = live_document() else {
            return;
        };
        let _ = document.remove_event_listener_with_callback_and_bool(
            self.kind,
            self.closure.as_ref().unchecked_ref(),
            true,
        );
    }
}
