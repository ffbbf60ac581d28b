use crate::OperationKind;

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Consecutive-failure counters per operation kind with a one-way trip.
///
/// Unlike a circuit breaker there is no half-open state: once tripped the
/// tracker stays tripped, so storage never flaps back to a broken primary.
pub struct FailureTracker {
    threshold: u32,
    failures: [AtomicU32; 4],
    tripped: AtomicBool,
}

impl FailureTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            failures: Default::default(),
            tripped: AtomicBool::new(false),
        }
    }

    /// Records a failure and returns true if this call tripped the tracker.
    pub fn record_failure(&self, operation: OperationKind) -> bool {
        let failures = self.failures[operation.index()].fetch_add(1, Ordering::SeqCst) + 1;

        if failures < self.threshold {
            log::debug!(
                "{operation} failure {failures}/{} on primary record store",
                self.threshold
            );
            return false;
        }

        self.tripped
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Resets the counter for `operation`; never clears a trip.
    pub fn record_success(&self, operation: OperationKind) {
        self.failures[operation.index()].store(0, Ordering::SeqCst);
    }

    pub fn trip(&self) {
        self.tripped.store(true, Ordering::SeqCst);
    }

    pub fn is_tripped(&self) -> bool {
        self.tripped.load(Ordering::SeqCst)
    }

    pub fn failure_count(&self, operation: OperationKind) -> u32 {
        self.failures[operation.index()].load(Ordering::SeqCst)
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}
