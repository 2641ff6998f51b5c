//! Focus containment decisions for modal overlays.
//!
//! The focusable set inside a panel is recomputed on every keystroke, so
//! this module only decides what a `Tab` press should do given the set's
//! current shape. Applying the wrap is left to the caller.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of a `Tab` press inside a contained panel.
pub enum TabCycle {
    /// Focus sits on the last focusable element; wrap to the first.
    WrapToFirst,
    /// Focus sits on the first focusable element; wrap to the last.
    WrapToLast,
    /// Let the platform move focus normally.
    Pass,
}

/// Decides whether a `Tab` press at the edge of the focusable set wraps.
///
/// `active` is the position of the currently focused element within the
/// set, or `None` when focus sits outside it. An empty set and interior
/// positions both pass through untouched.
pub fn tab_cycle(len: usize, active: Option<usize>, shift: bool) -> TabCycle {
    if len == 0 {
        return TabCycle::Pass;
    }
    match active {
        Some(0) if shift => TabCycle::WrapToLast,
        Some(index) if !shift && index == len - 1 => TabCycle::WrapToFirst,
        _ => TabCycle::Pass,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tab_on_last_element_wraps_to_first() {
        assert_eq!(tab_cycle(3, Some(2), false), TabCycle::WrapToFirst);
    }

    #[test]
    fn shift_tab_on_first_element_wraps_to_last() {
        assert_eq!(tab_cycle(3, Some(0), true), TabCycle::WrapToLast);
    }

    #[test]
    fn interior_positions_pass_through() {
        assert_eq!(tab_cycle(3, Some(1), false), TabCycle::Pass);
        assert_eq!(tab_cycle(3, Some(1), true), TabCycle::Pass);
    }

    #[test]
    fn empty_set_passes_through() {
        assert_eq!(tab_cycle(0, None, false), TabCycle::Pass);
        assert_eq!(tab_cycle(0, Some(0), true), TabCycle::Pass);
    }

    #[test]
    fn focus_outside_the_set_passes_through() {
        assert_eq!(tab_cycle(3, None, false), TabCycle::Pass);
        assert_eq!(tab_cycle(3, None, true), TabCycle::Pass);
    }

    #[test]
    fn single_element_wraps_both_ways() {
        assert_eq!(tab_cycle(1, Some(0), false), TabCycle::WrapToFirst);
        assert_eq!(tab_cycle(1, Some(0), true), TabCycle::WrapToLast);
    }
}
