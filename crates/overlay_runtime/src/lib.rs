//! Coordinated overlay primitives for Leptos CSR applications.
//!
//! The crate owns a shared overlay runtime (scroll lock, background
//! suppression, and stacking, provided through [`OverlayProvider`]) plus
//! the portal-mounted surfaces composed over it: [`Dialog`], [`Drawer`],
//! [`Popover`], and [`Menu`]. Surfaces differ in chrome and in whether
//! dismissal is modal (focus trap plus scroll lock) or lightweight
//! (outside pointer-down, no lock); all resource bookkeeping lives in
//! `overlay_core` and every acquire is paired with a cleanup-bound
//! release.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod components;
mod dom;
mod runtime_context;
mod scroll_lock;
mod session;
mod suppression;

pub use components::{
    Dialog, DialogSize, Drawer, DrawerSide, Menu, MenuItem, MenuSeparator, MenuWidth, Popover,
    PopoverPlacement,
};
pub use runtime_context::{use_overlay_runtime, OverlayProvider, OverlayRuntimeContext};

/// Convenience imports for application crates composing overlay surfaces.
pub mod prelude {
    pub use crate::{
        use_overlay_runtime, Dialog, DialogSize, Drawer, DrawerSide, Menu, MenuItem, MenuSeparator,
        MenuWidth, OverlayProvider, OverlayRuntimeContext, Popover, PopoverPlacement,
    };
}
