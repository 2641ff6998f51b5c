//! Provider and context wiring for the shared overlay runtime.
//!
//! This module owns the resources every overlay under one provider
//! coordinates through: the scroll lock, the background suppression
//! ledger, and the open-overlay stack. Surface composition stays with
//! the components module.

use leptos::*;
use overlay_core::{OverlayId, OverlayStack};

use crate::{dom, scroll_lock::ScrollLock, suppression::BackgroundSuppression};

#[derive(Clone, Copy)]
/// Leptos context coordinating every overlay mounted beneath one
/// [`OverlayProvider`].
pub struct OverlayRuntimeContext {
    mounted: RwSignal<bool>,
    scroll_lock: StoredValue<ScrollLock>,
    suppression: StoredValue<BackgroundSuppression>,
    stack: StoredValue<OverlayStack>,
}

impl OverlayRuntimeContext {
    fn new() -> Self {
        Self {
            mounted: create_rw_signal(false),
            scroll_lock: store_value(ScrollLock::default()),
            suppression: store_value(BackgroundSuppression::default()),
            stack: store_value(OverlayStack::new()),
        }
    }

    /// True once the provider has confirmed the portal ancestor is live.
    ///
    /// Reactive: overlay surfaces gate their portals on this so a surface
    /// asked to open before the first browser task renders nothing instead
    /// of portaling into a document that is still settling.
    pub fn portal_ready(&self) -> bool {
        self.mounted.get()
    }

    /// Number of overlays currently open under this provider.
    pub fn open_overlay_count(&self) -> usize {
        self.stack.with_value(|stack| stack.len())
    }

    /// True when `id` is the topmost open overlay.
    pub fn is_top(&self, id: OverlayId) -> bool {
        self.stack.with_value(|stack| stack.is_top(id))
    }

    /// True while at least one modal overlay holds the scroll lock.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.with_value(|lock| lock.is_active())
    }

    /// Number of background suppression holds currently recorded.
    pub fn suppression_holds(&self) -> usize {
        self.suppression.with_value(|suppression| suppression.active_holds())
    }

    // Writes tolerate a disposed runtime: when the provider's scope unmounts
    // with overlays still open, overlay cleanups run after these stores are
    // dropped, so a missed store warns instead of panicking mid-teardown.
    pub(crate) fn lock_scroll(&self) {
        if self.scroll_lock.try_update_value(|lock| lock.acquire()).is_none() {
            logging::warn!("scroll lock acquire ignored: overlay runtime disposed");
        }
    }

    pub(crate) fn unlock_scroll(&self) {
        if self.scroll_lock.try_update_value(|lock| lock.release()).is_none() {
            logging::warn!("scroll lock release ignored: overlay runtime disposed");
        }
    }

    pub(crate) fn suppress_background(&self, portal_root: &web_sys::Element) {
        let applied = self
            .suppression
            .try_update_value(|suppression| suppression.acquire(portal_root));
        if applied.is_none() {
            logging::warn!("background suppression ignored: overlay runtime disposed");
        }
    }

    pub(crate) fn restore_background(&self, portal_root: &web_sys::Element) {
        let restored = self
            .suppression
            .try_update_value(|suppression| suppression.release(portal_root));
        if restored.is_none() {
            logging::warn!("background restore ignored: overlay runtime disposed");
        }
    }

    pub(crate) fn push_overlay(&self, id: OverlayId) {
        if self.stack.try_update_value(|stack| stack.push(id)).is_none() {
            logging::warn!("overlay registration ignored: overlay runtime disposed");
        }
    }

    pub(crate) fn pop_overlay(&self, id: OverlayId) {
        match self.stack.try_update_value(|stack| stack.remove(id)) {
            Some(true) => {}
            Some(false) => logging::warn!("overlay deregistration ignored: overlay not open"),
            None => logging::warn!("overlay deregistration ignored: overlay runtime disposed"),
        }
    }
}

#[component]
/// Provides [`OverlayRuntimeContext`] to descendant components.
///
/// Mount the provider once, near the application root. Overlay surfaces
/// render nothing until the provider confirms the portal ancestor one
/// browser task after it mounts, so overlays opened during initial render
/// appear on the following task rather than racing hydration of the page
/// chrome around them.
pub fn OverlayProvider(children: Children) -> impl IntoView {
    let runtime = OverlayRuntimeContext::new();
    provide_context(runtime);

    let mounted = runtime.mounted;
    dom::next_tick(move || mounted.set(true));

    children().into_view()
}

/// Returns the current [`OverlayRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`OverlayProvider`].
pub fn use_overlay_runtime() -> OverlayRuntimeContext {
    use_context::<OverlayRuntimeContext>().expect("OverlayRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use leptos::create_runtime;
    use overlay_core::next_overlay_id;
    use wasm_bindgen::JsCast;

    use super::*;

    #[test]
    fn introspection_tracks_the_open_overlay_stack() {
        let runtime = create_runtime();
        let context = OverlayRuntimeContext::new();
        let below = next_overlay_id();
        let top = next_overlay_id();

        assert!(!context.portal_ready());
        assert_eq!(context.open_overlay_count(), 0);
        assert!(!context.scroll_locked());
        assert_eq!(context.suppression_holds(), 0);

        context.push_overlay(below);
        context.push_overlay(top);
        assert_eq!(context.open_overlay_count(), 2);
        assert!(context.is_top(top));
        assert!(!context.is_top(below));

        context.pop_overlay(below);
        assert_eq!(context.open_overlay_count(), 1);
        assert!(context.is_top(top));

        context.pop_overlay(top);
        assert_eq!(context.open_overlay_count(), 0);
        assert!(!context.is_top(top));

        runtime.dispose();
    }

    #[test]
    fn overlay_cleanup_after_provider_disposal_does_not_panic() {
        let runtime = create_runtime();
        let context = OverlayRuntimeContext::new();
        let overlay = next_overlay_id();
        context.push_overlay(overlay);
        let portal_root: web_sys::Element = wasm_bindgen::JsValue::NULL.unchecked_into();

        // Unmounting the provider's subtree disposes its stores before the
        // cleanups of surfaces still open inside it get to run.
        context.scroll_lock.dispose();
        context.suppression.dispose();
        context.stack.dispose();

        // The close path of an overlay that outlived its provider.
        context.pop_overlay(overlay);
        context.restore_background(&portal_root);
        context.unlock_scroll();

        // Open-path writes go through the same guard.
        context.lock_scroll();
        context.suppress_background(&portal_root);
        context.push_overlay(overlay);

        runtime.dispose();
    }
}
