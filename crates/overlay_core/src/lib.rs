//! Deterministic bookkeeping behind the overlay primitives.
//!
//! Everything in this crate is plain state-machine logic with no document
//! or rendering dependency: ref-counted shared overrides, the background
//! suppression ledger, focus containment decisions, roving menu selection,
//! and the open-overlay stack. The runtime crate owns the DOM side and
//! calls into these types to decide what to apply.

pub mod error;
pub mod focus;
pub mod menu;
pub mod refcount;
pub mod stack;
pub mod suppression;

pub use error::CoordinationError;
pub use focus::{tab_cycle, TabCycle};
pub use menu::{
    first_enabled, last_enabled, next_enabled, previous_enabled, typeahead_match, MenuItemView,
    TypeaheadBuffer, TYPEAHEAD_RESET,
};
pub use refcount::{ReleaseTransition, SharedOverride};
pub use stack::{next_overlay_id, OverlayId, OverlayStack};
pub use suppression::SuppressionLedger;
