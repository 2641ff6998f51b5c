//! Ref-counted background suppression registry.
//!
//! While a modal overlay is open, every *other* direct child of the shared
//! portal ancestor is marked hidden from assistive technology. Overlapping
//! overlays may suppress the same background element, so each element
//! carries a holder count and the attribute value observed before the first
//! suppression; only the final release restores it.
//!
//! The registry deliberately snapshots the sibling set at acquire time.
//! Elements added to the ancestor while a hold is active are not
//! retroactively suppressed, and a release walks the snapshot it recorded
//! rather than the live sibling set, which is what keeps overlapping holds
//! count-accurate when roots appear and disappear between acquires.

use crate::error::CoordinationError;

#[derive(Debug, Clone, PartialEq, Eq)]
struct LedgerEntry<K> {
    key: K,
    /// Outstanding holds; at least 1 while the entry exists.
    holders: u32,
    /// Attribute value before the first suppression; `None` means absent.
    saved: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-element suppression counts plus the acquire-time snapshot of each
/// active hold, keyed by the portal root that took it.
pub struct SuppressionLedger<K> {
    entries: Vec<LedgerEntry<K>>,
    holds: Vec<(K, Vec<K>)>,
}

impl<K: Clone + PartialEq> SuppressionLedger<K> {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            holds: Vec::new(),
        }
    }

    /// Records a hold for `portal_root` over the given sibling snapshot.
    ///
    /// `capture` is invoked once per sibling entering the suppressed state
    /// (its 0→1 transition) to read the attribute value to restore later.
    /// Returns the siblings whose suppressed state must now be applied;
    /// siblings already suppressed by another hold are counted but not
    /// returned.
    pub fn acquire<F>(&mut self, portal_root: K, siblings: Vec<K>, mut capture: F) -> Vec<K>
    where
        F: FnMut(&K) -> Option<String>,
    {
        let mut newly_suppressed = Vec::new();
        for sibling in &siblings {
            match self
                .entries
                .iter_mut()
                .find(|entry| entry.key == *sibling)
            {
                Some(entry) => entry.holders += 1,
                None => {
                    self.entries.push(LedgerEntry {
                        key: sibling.clone(),
                        holders: 1,
                        saved: capture(sibling),
                    });
                    newly_suppressed.push(sibling.clone());
                }
            }
        }
        self.holds.push((portal_root, siblings));
        newly_suppressed
    }

    /// Releases the hold recorded for `portal_root`.
    ///
    /// Returns the elements whose final holder just released, paired with
    /// the attribute value to restore (`None` restores absence). Elements
    /// still held by another overlay are decremented but not returned. A
    /// root with no recorded hold fails with
    /// [`CoordinationError::MissingHold`] and restores nothing.
    pub fn release(
        &mut self,
        portal_root: &K,
    ) -> Result<Vec<(K, Option<String>)>, CoordinationError> {
        let hold_index = self
            .holds
            .iter()
            .position(|(root, _)| root == portal_root)
            .ok_or(CoordinationError::MissingHold)?;
        let (_, suppressed) = self.holds.remove(hold_index);

        let mut restorations = Vec::new();
        for key in suppressed {
            // A recorded hold always has a live entry for each sibling.
            let Some(entry_index) = self.entries.iter().position(|entry| entry.key == key) else {
                continue;
            };
            let entry = &mut self.entries[entry_index];
            entry.holders -= 1;
            if entry.holders == 0 {
                let entry = self.entries.remove(entry_index);
                restorations.push((entry.key, entry.saved));
            }
        }
        Ok(restorations)
    }

    /// True while `key` has at least one outstanding hold.
    pub fn is_suppressed(&self, key: &K) -> bool {
        self.holders(key) > 0
    }

    /// Outstanding hold count for `key`.
    pub fn holders(&self, key: &K) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| entry.holders)
            .unwrap_or(0)
    }

    /// Number of active holds.
    pub fn active_holds(&self) -> usize {
        self.holds.len()
    }

    /// True when no element is suppressed and no hold is recorded.
    pub fn is_idle(&self) -> bool {
        self.entries.is_empty() && self.holds.is_empty()
    }
}

impl<K: Clone + PartialEq> Default for SuppressionLedger<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::*;

    type Attrs = BTreeMap<&'static str, Option<String>>;

    fn initial_background() -> Attrs {
        let mut attrs = Attrs::new();
        attrs.insert("bg-nav", None);
        attrs.insert("bg-main", Some("false".to_string()));
        attrs
    }

    fn acquire(
        ledger: &mut SuppressionLedger<&'static str>,
        attrs: &mut Attrs,
        root: &'static str,
        siblings: &[&'static str],
    ) {
        let newly = ledger.acquire(root, siblings.to_vec(), |key| {
            attrs.get(*key).cloned().unwrap_or(None)
        });
        for key in newly {
            attrs.insert(key, Some("true".to_string()));
        }
    }

    fn release(
        ledger: &mut SuppressionLedger<&'static str>,
        attrs: &mut Attrs,
        root: &'static str,
    ) {
        for (key, saved) in ledger.release(&root).expect("hold") {
            attrs.insert(key, saved);
        }
    }

    #[test]
    fn nested_open_close_restores_background_to_pre_open_state() {
        let mut ledger = SuppressionLedger::new();
        let mut attrs = initial_background();

        acquire(&mut ledger, &mut attrs, "root-a", &["bg-nav", "bg-main"]);
        assert_eq!(attrs["bg-nav"], Some("true".to_string()));
        assert_eq!(attrs["bg-main"], Some("true".to_string()));

        // The second overlay also suppresses the first overlay's root.
        attrs.insert("root-a", None);
        acquire(
            &mut ledger,
            &mut attrs,
            "root-b",
            &["bg-nav", "bg-main", "root-a"],
        );
        assert_eq!(attrs["root-a"], Some("true".to_string()));
        assert_eq!(ledger.holders(&"bg-main"), 2);

        release(&mut ledger, &mut attrs, "root-b");
        assert_eq!(attrs["root-a"], None);
        assert!(ledger.is_suppressed(&"bg-nav"));

        release(&mut ledger, &mut attrs, "root-a");
        attrs.remove("root-a");
        assert_eq!(attrs, initial_background());
        assert!(ledger.is_idle());
    }

    #[test]
    fn release_order_not_mirroring_open_order_still_fully_restores() {
        let mut ledger = SuppressionLedger::new();
        let mut attrs = initial_background();

        acquire(&mut ledger, &mut attrs, "root-a", &["bg-nav", "bg-main"]);
        attrs.insert("root-a", None);
        acquire(
            &mut ledger,
            &mut attrs,
            "root-b",
            &["bg-nav", "bg-main", "root-a"],
        );

        // Close the first overlay first: shared elements stay suppressed.
        release(&mut ledger, &mut attrs, "root-a");
        assert_eq!(attrs["bg-nav"], Some("true".to_string()));
        assert_eq!(attrs["bg-main"], Some("true".to_string()));
        assert_eq!(ledger.holders(&"bg-nav"), 1);

        release(&mut ledger, &mut attrs, "root-b");
        attrs.remove("root-a");
        assert_eq!(attrs, initial_background());
        assert!(ledger.is_idle());
    }

    #[test]
    fn double_release_reports_missing_hold_and_restores_nothing() {
        let mut ledger = SuppressionLedger::new();
        let mut attrs = initial_background();

        acquire(&mut ledger, &mut attrs, "root-a", &["bg-nav", "bg-main"]);
        release(&mut ledger, &mut attrs, "root-a");
        let snapshot = attrs.clone();

        assert_eq!(
            ledger.release(&"root-a"),
            Err(CoordinationError::MissingHold)
        );
        assert_eq!(attrs, snapshot);
        assert!(ledger.is_idle());
    }

    #[test]
    fn saved_absent_value_restores_to_absent() {
        let mut ledger = SuppressionLedger::new();
        let mut attrs = initial_background();

        acquire(&mut ledger, &mut attrs, "root-a", &["bg-nav"]);
        assert_eq!(attrs["bg-nav"], Some("true".to_string()));

        release(&mut ledger, &mut attrs, "root-a");
        assert_eq!(attrs["bg-nav"], None);
    }
}
