//! Falling-edge detection on polled button samples.

use crate::hardware::Level;

/// Remembers the previous button sample and reports high-to-low transitions.
///
/// Runs in the main loop, independently of the interrupt path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeDetector {
    last: Level,
}

impl EdgeDetector {
    /// Creates a detector that assumes the button starts released (high).
    pub const fn new() -> Self {
        Self { last: Level::High }
    }

    /// Creates a detector with a known initial sample.
    pub const fn with_initial(level: Level) -> Self {
        Self { last: level }
    }

    /// Returns `true` if `current` is low and the previous sample was high.
    ///
    /// The stored sample is replaced by `current` on every call.
    pub fn poll_edge(&mut self, current: Level) -> bool {
        let falling = self.last.is_high() && current.is_low();
        self.last = current;
        falling
    }

    /// The most recently stored sample.
    #[inline]
    pub fn last_sample(&self) -> Level {
        self.last
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}
