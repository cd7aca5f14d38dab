//! Stale-response guard for list fetches.
//!
//! Filter and pagination changes can fire overlapping fetches that resolve out
//! of order. Each fetch takes a generation number from the guard; only the
//! fetch holding the latest generation may commit its result.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct RequestGuard {
    current: Rc<Cell<u64>>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier one.
    pub fn begin(&self) -> u64 {
        let next = self.current.get() + 1;
        self.current.set(next);
        next
    }

    /// Whether the request holding this generation is still the latest.
    pub fn is_current(&self, generation: u64) -> bool {
        self.current.get() == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_generation_wins() {
        let guard = RequestGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_clones_share_state() {
        let guard = RequestGuard::new();
        let clone = guard.clone();
        let generation = guard.begin();
        assert!(clone.is_current(generation));
        clone.begin();
        assert!(!guard.is_current(generation));
    }
}
