//! Press evidence shared between the interrupt handler and the main loop.

use core::sync::atomic::{AtomicU32, Ordering};

/// Counts interrupt hits until enough of them have accumulated to count as
/// one press.
///
/// The counter is a single atomic word, so a `static DebounceFilter` can be
/// written from an interrupt handler and read from the main loop without a
/// critical section. Requires a target with atomic compare-and-swap.
#[derive(Debug, Default)]
pub struct DebounceFilter {
    counter: AtomicU32,
}

impl DebounceFilter {
    /// Creates a filter with no recorded evidence.
    pub const fn new() -> Self {
        Self {
            counter: AtomicU32::new(0),
        }
    }

    /// Records one piece of press evidence.
    ///
    /// Interrupt context only. Never blocks.
    #[inline]
    pub fn record_evidence(&self) {
        self.counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Resets the counter and returns `true` if at least `threshold` pieces of
    /// evidence have been recorded. Otherwise leaves the counter untouched.
    ///
    /// Main loop only.
    pub fn consume_if_threshold_reached(&self, threshold: u32) -> bool {
        self.counter
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                (count >= threshold).then_some(0)
            })
            .is_ok()
    }

    /// Current evidence count.
    #[inline]
    pub fn pending(&self) -> u32 {
        self.counter.load(Ordering::Acquire)
    }
}
