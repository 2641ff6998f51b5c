//! Ref-counted page scroll lock shared by modal overlays.

use leptos::logging;
use overlay_core::{ReleaseTransition, SharedOverride};

use crate::dom;

#[derive(Default)]
/// Holds the body `overflow` override while at least one modal is open.
///
/// The inline value observed at the first acquire is restored verbatim at
/// the last release, so an application's own `overflow` styling survives a
/// modal round trip.
pub(crate) struct ScrollLock {
    state: SharedOverride<Option<String>>,
}

impl ScrollLock {
    pub(crate) fn acquire(&mut self) {
        if self.state.acquire(current_overflow) {
            apply_overflow_hidden();
        }
    }

    pub(crate) fn release(&mut self) {
        match self.state.release() {
            Ok(ReleaseTransition::StillHeld) => {}
            Ok(ReleaseTransition::Restored(saved)) => restore_overflow(saved),
            Err(err) => logging::warn!("scroll lock release ignored: {err}"),
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.state.is_active()
    }
}

fn body_style() -> Option<web_sys::CssStyleDeclaration> {
    dom::body().map(|body| body.style())
}

/// Inline `overflow` value on the body; `None` means no inline value set.
fn current_overflow() -> Option<String> {
    let style = body_style()?;
    let value = style.get_property_value("overflow").ok()?;
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn apply_overflow_hidden() {
    let Some(style) = body_style() else {
        return;
    };
    if let Err(err) = style.set_property("overflow", "hidden") {
        logging::warn!("scroll lock could not apply body overflow: {err:?}");
    }
}

fn restore_overflow(saved: Option<String>) {
    let Some(style) = body_style() else {
        return;
    };
    let result = match &saved {
        Some(value) => style.set_property("overflow", value),
        None => style.remove_property("overflow").map(|_| ()),
    };
    if let Err(err) = result {
        logging::warn!("scroll lock could not restore body overflow: {err:?}");
    }
}
