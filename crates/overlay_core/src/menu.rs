//! Roving selection and typeahead over a menu's item list.
//!
//! The item list is rebuilt from the live panel on every keystroke, so
//! every function here takes the current snapshot and answers which index
//! (if any) should receive focus. Disabled items stay visible but are
//! skipped by both arrow movement and typeahead, and arrow movement clamps
//! at the ends instead of wrapping.

use std::time::Duration;

/// Idle time after which an accumulated typeahead prefix is discarded.
pub const TYPEAHEAD_RESET: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
/// One menu item as observed in the panel.
pub struct MenuItemView {
    /// Visible label, used for typeahead matching.
    pub label: String,
    /// Disabled items are skipped by selection movement.
    pub enabled: bool,
}

/// Next enabled item after `active`, or the first enabled item when no
/// selection exists. `None` when nothing lies further down.
pub fn next_enabled(items: &[MenuItemView], active: Option<usize>) -> Option<usize> {
    let start = active.map(|index| index + 1).unwrap_or(0);
    items
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, item)| item.enabled)
        .map(|(index, _)| index)
}

/// Previous enabled item before `active`, or the last enabled item when no
/// selection exists. `None` when nothing lies further up.
pub fn previous_enabled(items: &[MenuItemView], active: Option<usize>) -> Option<usize> {
    let end = active.unwrap_or(items.len());
    items
        .iter()
        .enumerate()
        .take(end)
        .rev()
        .find(|(_, item)| item.enabled)
        .map(|(index, _)| index)
}

/// First enabled item in the list.
pub fn first_enabled(items: &[MenuItemView]) -> Option<usize> {
    items.iter().position(|item| item.enabled)
}

/// Last enabled item in the list.
pub fn last_enabled(items: &[MenuItemView]) -> Option<usize> {
    items.iter().rposition(|item| item.enabled)
}

/// First enabled item whose label starts with the accumulated prefix.
///
/// Matching is case-insensitive; an empty prefix matches nothing.
pub fn typeahead_match(items: &[MenuItemView], prefix: &str) -> Option<usize> {
    if prefix.is_empty() {
        return None;
    }
    items
        .iter()
        .position(|item| item.enabled && item.label.to_lowercase().starts_with(prefix))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Accumulates printable keystrokes into a lowercase typeahead prefix.
pub struct TypeaheadBuffer {
    text: String,
}

impl TypeaheadBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key` when it is a single printable character.
    ///
    /// Named keys such as `Enter` or `ArrowDown` and whitespace are
    /// rejected and leave the buffer untouched. Returns whether the key
    /// was consumed.
    pub fn push_key(&mut self, key: &str) -> bool {
        let mut chars = key.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return false;
        };
        if ch.is_whitespace() || ch.is_control() {
            return false;
        }
        self.text.extend(ch.to_lowercase());
        true
    }

    /// Discards the accumulated prefix.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The accumulated lowercase prefix.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when no prefix is accumulated.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(label: &str, enabled: bool) -> MenuItemView {
        MenuItemView {
            label: label.to_string(),
            enabled,
        }
    }

    fn sample_items() -> Vec<MenuItemView> {
        vec![
            item("Alpha", true),
            item("Beta", true),
            item("Gamma", false),
            item("Delta", true),
        ]
    }

    #[test]
    fn arrow_movement_skips_disabled_items() {
        let items = sample_items();
        assert_eq!(next_enabled(&items, Some(1)), Some(3));
        assert_eq!(previous_enabled(&items, Some(3)), Some(1));
    }

    #[test]
    fn movement_from_no_selection_targets_first_and_last_enabled() {
        let items = sample_items();
        assert_eq!(next_enabled(&items, None), Some(0));
        assert_eq!(previous_enabled(&items, None), Some(3));
    }

    #[test]
    fn selection_clamps_at_the_edges() {
        let items = sample_items();
        assert_eq!(next_enabled(&items, Some(3)), None);
        assert_eq!(previous_enabled(&items, Some(0)), None);
    }

    #[test]
    fn home_and_end_skip_disabled_edges() {
        let mut items = sample_items();
        items.insert(0, item("Heading", false));
        items.push(item("Trailer", false));
        assert_eq!(first_enabled(&items), Some(1));
        assert_eq!(last_enabled(&items), Some(4));
    }

    #[test]
    fn all_disabled_leaves_selection_nowhere() {
        let items = vec![item("Alpha", false), item("Beta", false)];
        assert_eq!(next_enabled(&items, None), None);
        assert_eq!(previous_enabled(&items, None), None);
        assert_eq!(first_enabled(&items), None);
        assert_eq!(last_enabled(&items), None);
    }

    #[test]
    fn typeahead_matches_first_enabled_prefix_case_insensitively() {
        let items = sample_items();
        assert_eq!(typeahead_match(&items, "d"), Some(3));
        assert_eq!(typeahead_match(&items, "al"), Some(0));
        // Gamma is disabled, so its prefix matches nothing.
        assert_eq!(typeahead_match(&items, "g"), None);
        assert_eq!(typeahead_match(&items, "zz"), None);
        assert_eq!(typeahead_match(&items, ""), None);
    }

    #[test]
    fn buffer_accepts_only_single_printable_keys() {
        let mut buffer = TypeaheadBuffer::new();
        assert!(!buffer.push_key("Enter"));
        assert!(!buffer.push_key("ArrowDown"));
        assert!(!buffer.push_key(" "));
        assert!(!buffer.push_key(""));
        assert!(buffer.is_empty());

        assert!(buffer.push_key("D"));
        assert_eq!(buffer.as_str(), "d");
    }

    #[test]
    fn buffer_accumulates_until_cleared() {
        let mut buffer = TypeaheadBuffer::new();
        assert!(buffer.push_key("d"));
        assert!(buffer.push_key("e"));
        assert_eq!(typeahead_match(&sample_items(), buffer.as_str()), Some(3));

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(typeahead_match(&sample_items(), buffer.as_str()), None);
    }
}
