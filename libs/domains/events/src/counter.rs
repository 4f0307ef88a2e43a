use std::sync::atomic::{AtomicU64, Ordering};

/// Total number of events created, shared by every caller that holds it.
///
/// Increments are linearizable. The value wraps to zero after `u64::MAX`.
#[derive(Debug, Default)]
pub struct SharedCounter {
    value: AtomicU64,
}

impl SharedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one and return the new value
    pub fn increment_and_get(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst).wrapping_add(1)
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }

    /// Back to zero; meant for test isolation
    pub fn reset(&self) {
        self.value.store(0, Ordering::SeqCst);
    }
}
