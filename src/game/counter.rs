use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared tally of how many `GameState`s have been constructed.
///
/// A root state owns a fresh counter and every state derived from it shares
/// the same handle, so a search can be measured by reading the counter before
/// and after. Cloning the handle does not reset or fork the tally.
#[derive(Debug, Clone, Default)]
pub struct StateCounter(Arc<AtomicU64>);

impl StateCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of states constructed so far.
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_tally() {
        let counter = StateCounter::new();
        let handle = counter.clone();
        counter.increment();
        handle.increment();
        assert_eq!(counter.get(), 2);
        assert_eq!(handle.get(), 2);
    }

    #[test]
    fn independent_counters_do_not_interfere() {
        let a = StateCounter::new();
        let b = StateCounter::new();
        a.increment();
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 0);
    }
}
