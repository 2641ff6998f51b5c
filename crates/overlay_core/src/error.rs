//! Recoverable bookkeeping faults raised by the shared-resource coordinators.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Faults surfaced by [`crate::SharedOverride`] and [`crate::SuppressionLedger`].
///
/// These never indicate a corrupted coordinator: counters clamp at zero and
/// saved values are consumed at most once regardless. Callers log the fault
/// and continue.
pub enum CoordinationError {
    /// `release` was called with no outstanding `acquire`.
    #[error("release called with no outstanding acquire")]
    UnbalancedRelease,
    /// A suppression release referenced a portal root with no recorded hold.
    #[error("no suppression hold recorded for this portal root")]
    MissingHold,
}
