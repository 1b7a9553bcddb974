//! Execution state machine and the busy flag.
//!
//! ```text
//! Idle → Building → [BeforeExecute] → Submitting
//!      → [AwaitingSponsor → AwaitingSignature → Finalizing]
//!      → Succeeded | Failed → Settled → Idle
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Where an execution currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainState {
    #[default]
    Idle,
    Building,
    /// Direct path only.
    BeforeExecute,
    Submitting,
    /// Sponsored path only.
    AwaitingSponsor,
    /// Sponsored path only.
    AwaitingSignature,
    /// Sponsored path only.
    Finalizing,
    Succeeded,
    Failed,
    Settled,
}

/// In-flight count plus the current state, shared by every chain of one executor.
///
/// Busy while at least one guard is alive. With overlapping executions the
/// state is the most recent transition of any of them.
#[derive(Debug, Default)]
pub(crate) struct ExecutionTracker {
    in_flight: AtomicUsize,
    state: Mutex<ChainState>,
}

impl ExecutionTracker {
    /// Start an execution if none is running; `None` otherwise.
    pub(crate) fn try_acquire(&self) -> Option<BusyGuard<'_>> {
        self.in_flight
            .compare_exchange(0, 1, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard { tracker: self })
    }

    /// Start an execution alongside any already running.
    pub(crate) fn acquire(&self) -> BusyGuard<'_> {
        self.in_flight.fetch_add(1, Ordering::AcqRel);
        BusyGuard { tracker: self }
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.in_flight() > 0
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    pub(crate) fn state(&self) -> ChainState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn transition(&self, next: ChainState) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        tracing::debug!(from = ?*state, to = ?next, "Chain state transition");
        *state = next;
    }
}

/// Ends one execution when dropped, on every exit path. The last one out
/// returns the tracker to `Idle`.
#[derive(Debug)]
pub(crate) struct BusyGuard<'a> {
    tracker: &'a ExecutionTracker,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        // Held across the decrement so a concurrent start cannot be reset to Idle.
        let mut state = self.tracker.state.lock().unwrap_or_else(|e| e.into_inner());
        if self.tracker.in_flight.fetch_sub(1, Ordering::AcqRel) == 1 {
            tracing::debug!(from = ?*state, to = ?ChainState::Idle, "Chain state transition");
            *state = ChainState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_is_exclusive() {
        let tracker = ExecutionTracker::default();
        let guard = tracker.try_acquire().expect("idle tracker");
        assert!(tracker.is_busy());
        assert!(tracker.try_acquire().is_none());

        drop(guard);
        assert!(!tracker.is_busy());
        assert!(tracker.try_acquire().is_some());
    }

    #[test]
    fn test_drop_resets_state() {
        let tracker = ExecutionTracker::default();
        {
            let _guard = tracker.acquire();
            tracker.transition(ChainState::Submitting);
            assert_eq!(tracker.state(), ChainState::Submitting);
        }
        assert_eq!(tracker.state(), ChainState::Idle);
        assert!(!tracker.is_busy());
    }

    #[test]
    fn test_overlapping_guards_stay_busy_until_last_drop() {
        let tracker = ExecutionTracker::default();
        let first = tracker.acquire();
        tracker.transition(ChainState::AwaitingSponsor);
        let second = tracker.acquire();
        assert_eq!(tracker.in_flight(), 2);
        assert!(tracker.try_acquire().is_none());

        drop(second);
        assert!(tracker.is_busy());
        assert_eq!(tracker.state(), ChainState::AwaitingSponsor);

        drop(first);
        assert!(!tracker.is_busy());
        assert_eq!(tracker.state(), ChainState::Idle);
    }

    #[test]
    fn test_guard_clears_on_panic() {
        let tracker = ExecutionTracker::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = tracker.acquire();
            panic!("hook blew up");
        }));
        assert!(result.is_err());
        assert!(!tracker.is_busy());
    }
}
