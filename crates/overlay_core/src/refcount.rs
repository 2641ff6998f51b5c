//! Ref-counted override of a single shared value.
//!
//! Several overlay instances may need the same global state forced at once
//! (for example "background scrolling is off"). The override stays applied
//! while at least one holder remains, and the value observed before the
//! first acquire is restored exactly once, when the last holder releases.

use std::mem;

use crate::error::CoordinationError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum OverrideState<V> {
    Idle,
    Held { holders: u32, saved: V },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Counter plus saved-value cell for one shared override.
///
/// The saved value is captured only on the 0→1 holder transition and
/// consumed only on the 1→0 transition; intermediate acquires and releases
/// never touch it. Releasing with no holders outstanding is reported as
/// [`CoordinationError::UnbalancedRelease`] and leaves the state unchanged,
/// so the count can never go negative and a restoration can never run twice.
pub struct SharedOverride<V> {
    state: OverrideState<V>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a successful [`SharedOverride::release`].
pub enum ReleaseTransition<V> {
    /// Other holders remain; the override stays applied.
    StillHeld,
    /// The last holder released; the caller must restore the carried value.
    Restored(V),
}

impl<V> SharedOverride<V> {
    /// Creates an override with no holders.
    pub fn new() -> Self {
        Self {
            state: OverrideState::Idle,
        }
    }

    /// Registers a holder.
    ///
    /// On the 0→1 transition `capture` is invoked to read the value being
    /// overridden and the method returns `true`, telling the caller to apply
    /// the overridden state now. On every later acquire `capture` is not
    /// invoked and the method returns `false`.
    pub fn acquire(&mut self, capture: impl FnOnce() -> V) -> bool {
        match &mut self.state {
            OverrideState::Idle => {
                self.state = OverrideState::Held {
                    holders: 1,
                    saved: capture(),
                };
                true
            }
            OverrideState::Held { holders, .. } => {
                *holders += 1;
                false
            }
        }
    }

    /// Removes a holder.
    ///
    /// Returns [`ReleaseTransition::Restored`] with the saved value exactly
    /// when the final holder releases. A release with no holders outstanding
    /// fails with [`CoordinationError::UnbalancedRelease`].
    pub fn release(&mut self) -> Result<ReleaseTransition<V>, CoordinationError> {
        match mem::replace(&mut self.state, OverrideState::Idle) {
            OverrideState::Idle => Err(CoordinationError::UnbalancedRelease),
            OverrideState::Held { holders: 1, saved } => Ok(ReleaseTransition::Restored(saved)),
            OverrideState::Held { holders, saved } => {
                self.state = OverrideState::Held {
                    holders: holders - 1,
                    saved,
                };
                Ok(ReleaseTransition::StillHeld)
            }
        }
    }

    /// Number of outstanding holders.
    pub fn holders(&self) -> u32 {
        match &self.state {
            OverrideState::Idle => 0,
            OverrideState::Held { holders, .. } => *holders,
        }
    }

    /// True while at least one holder is outstanding.
    pub fn is_active(&self) -> bool {
        self.holders() > 0
    }
}

impl<V> Default for SharedOverride<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn acquire_saving(lock: &mut SharedOverride<Option<String>>, current: &str) -> bool {
        lock.acquire(|| Some(current.to_string()))
    }

    #[test]
    fn captures_only_on_first_acquire_and_restores_only_on_last_release() {
        let mut lock = SharedOverride::new();

        assert!(acquire_saving(&mut lock, "auto"));
        assert!(!acquire_saving(&mut lock, "scroll"));
        assert!(!acquire_saving(&mut lock, "visible"));
        assert_eq!(lock.holders(), 3);

        assert_eq!(lock.release(), Ok(ReleaseTransition::StillHeld));
        assert_eq!(lock.release(), Ok(ReleaseTransition::StillHeld));
        assert!(lock.is_active());
        assert_eq!(
            lock.release(),
            Ok(ReleaseTransition::Restored(Some("auto".to_string())))
        );
        assert!(!lock.is_active());
    }

    #[test]
    fn stays_active_iff_outstanding_count_is_positive() {
        let mut lock = SharedOverride::new();

        for step in 1..=4_u32 {
            lock.acquire(|| None::<String>);
            assert_eq!(lock.holders(), step);
            assert!(lock.is_active());
        }
        for step in (1..4_u32).rev() {
            assert_eq!(lock.release(), Ok(ReleaseTransition::StillHeld));
            assert_eq!(lock.holders(), step);
            assert!(lock.is_active());
        }
        assert_eq!(lock.release(), Ok(ReleaseTransition::Restored(None)));
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn unbalanced_release_clamps_at_zero_and_never_restores_twice() {
        let mut lock = SharedOverride::new();

        assert!(acquire_saving(&mut lock, "auto"));
        assert_eq!(
            lock.release(),
            Ok(ReleaseTransition::Restored(Some("auto".to_string())))
        );
        assert_eq!(lock.release(), Err(CoordinationError::UnbalancedRelease));
        assert_eq!(lock.release(), Err(CoordinationError::UnbalancedRelease));
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn reacquire_after_drain_captures_a_fresh_value() {
        let mut lock = SharedOverride::new();

        assert!(acquire_saving(&mut lock, "auto"));
        assert_eq!(
            lock.release(),
            Ok(ReleaseTransition::Restored(Some("auto".to_string())))
        );

        assert!(acquire_saving(&mut lock, "scroll"));
        assert_eq!(
            lock.release(),
            Ok(ReleaseTransition::Restored(Some("scroll".to_string())))
        );
    }

    #[test]
    fn interleaved_churn_within_one_tick_stays_count_accurate() {
        let mut lock = SharedOverride::new();

        assert!(acquire_saving(&mut lock, "auto"));
        assert!(!acquire_saving(&mut lock, "ignored"));
        assert_eq!(lock.release(), Ok(ReleaseTransition::StillHeld));
        assert!(!acquire_saving(&mut lock, "also-ignored"));
        assert_eq!(lock.release(), Ok(ReleaseTransition::StillHeld));
        assert_eq!(
            lock.release(),
            Ok(ReleaseTransition::Restored(Some("auto".to_string())))
        );
    }
}
