//! Open-overlay ordering shared across the application.
//!
//! Overlays register on open and deregister on close, in whatever order
//! closes happen to arrive. The stack answers the one layering question
//! dismissal needs: which open overlay is topmost right now.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Process-unique identity of one overlay instance.
pub struct OverlayId(pub u64);

static NEXT_OVERLAY_ID: AtomicU64 = AtomicU64::new(1);

/// Allocates the next overlay identity.
pub fn next_overlay_id() -> OverlayId {
    OverlayId(NEXT_OVERLAY_ID.fetch_add(1, Ordering::Relaxed))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered set of currently open overlays; the last entry is topmost.
pub struct OverlayStack {
    entries: Vec<OverlayId>,
}

impl OverlayStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` as the new topmost overlay.
    pub fn push(&mut self, id: OverlayId) {
        self.entries.push(id);
    }

    /// Deregisters `id` wherever it sits; closes need not mirror opens.
    /// Returns whether the id was present.
    pub fn remove(&mut self, id: OverlayId) -> bool {
        match self.entries.iter().position(|entry| *entry == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// True when `id` is the topmost open overlay.
    pub fn is_top(&self, id: OverlayId) -> bool {
        self.top() == Some(id)
    }

    /// The topmost open overlay, if any.
    pub fn top(&self) -> Option<OverlayId> {
        self.entries.last().copied()
    }

    /// True when `id` is open.
    pub fn contains(&self, id: OverlayId) -> bool {
        self.entries.contains(&id)
    }

    /// Number of open overlays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no overlay is open.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn last_pushed_overlay_is_topmost() {
        let mut stack = OverlayStack::new();
        let first = next_overlay_id();
        let second = next_overlay_id();

        stack.push(first);
        assert!(stack.is_top(first));

        stack.push(second);
        assert!(stack.is_top(second));
        assert!(!stack.is_top(first));
    }

    #[test]
    fn removal_from_the_middle_keeps_the_top_intact() {
        let mut stack = OverlayStack::new();
        let first = next_overlay_id();
        let second = next_overlay_id();
        stack.push(first);
        stack.push(second);

        assert!(stack.remove(first));
        assert_eq!(stack.top(), Some(second));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn removing_an_unknown_id_is_reported() {
        let mut stack = OverlayStack::new();
        let known = next_overlay_id();
        let unknown = next_overlay_id();
        stack.push(known);

        assert!(!stack.remove(unknown));
        assert!(stack.contains(known));
    }

    #[test]
    fn empty_stack_has_no_top() {
        let stack = OverlayStack::new();
        assert_eq!(stack.top(), None);
        assert!(stack.is_empty());
        assert!(!stack.is_top(next_overlay_id()));
    }

    #[test]
    fn allocated_ids_are_unique() {
        let first = next_overlay_id();
        let second = next_overlay_id();
        assert!(first != second);
    }
}
