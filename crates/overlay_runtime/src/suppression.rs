//! Hides background content from assistive technology while modals are open.

use leptos::logging;
use overlay_core::SuppressionLedger;

use crate::dom;

#[derive(Default)]
/// Applies `aria-hidden="true"` plus `inert` to every sibling of a modal's
/// portal root and restores the observed `aria-hidden` values when the
/// last overlapping hold releases.
pub(crate) struct BackgroundSuppression {
    ledger: SuppressionLedger<web_sys::Element>,
}

impl BackgroundSuppression {
    /// Suppresses the current siblings of `portal_root` under the portal
    /// ancestor. Siblings appearing later are not retroactively touched.
    pub(crate) fn acquire(&mut self, portal_root: &web_sys::Element) {
        let Some(body) = dom::body() else {
            return;
        };

        let children = body.children();
        let mut siblings = Vec::new();
        for index in 0..children.length() {
            let Some(child) = children.item(index) else {
                continue;
            };
            if child == *portal_root {
                continue;
            }
            siblings.push(child);
        }

        let newly = self.ledger.acquire(portal_root.clone(), siblings, |element| {
            element.get_attribute("aria-hidden")
        });
        for element in newly {
            let _ = element.set_attribute("aria-hidden", "true");
            let _ = element.set_attribute("inert", "");
        }
    }

    /// Releases the hold recorded for `portal_root`, restoring attributes
    /// on elements whose final hold this was.
    pub(crate) fn release(&mut self, portal_root: &web_sys::Element) {
        match self.ledger.release(portal_root) {
            Ok(restorations) => {
                for (element, saved) in restorations {
                    match &saved {
                        Some(value) => {
                            let _ = element.set_attribute("aria-hidden", value);
                        }
                        None => {
                            let _ = element.remove_attribute("aria-hidden");
                        }
                    }
                    let _ = element.remove_attribute("inert");
                }
            }
            Err(err) => logging::warn!("background suppression release ignored: {err}"),
        }
    }

    pub(crate) fn active_holds(&self) -> usize {
        self.ledger.active_holds()
    }
}
