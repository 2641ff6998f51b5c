//! Overlay surface components composed over the shared runtime.
//!
//! Each surface renders nothing until the provider confirms the portal
//! ancestor and its `open` signal is true; while open it owns one overlay
//! session whose teardown is bound to scope cleanup, so closing,
//! unmounting, and parent removal all release the same resources.

use overlay_core::OverlayId;

mod dialog;
mod drawer;
mod menu;
mod popover;

pub use self::{
    dialog::{Dialog, DialogSize},
    drawer::{Drawer, DrawerSide},
    menu::{Menu, MenuItem, MenuSeparator, MenuWidth},
    popover::{Popover, PopoverPlacement},
};

/// Panel DOM id used when the caller does not supply one.
pub(crate) fn fallback_panel_id(overlay: OverlayId) -> String {
    format!("ui-overlay-{}", overlay.0)
}
