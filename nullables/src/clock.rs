//! Nullable clock — deterministic time for testing.

use std::cell::Cell;
use tollgate_types::Timestamp;

/// A deterministic millisecond clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_ms: u64) -> Self {
        Self {
            current: Cell::new(initial_ms),
        }
    }

    /// Get the current time.
    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.current.get())
    }

    /// Advance time by a number of milliseconds.
    pub fn advance(&self, millis: u64) {
        self.current.set(self.current.get() + millis);
    }

    /// Set the time to a specific value.
    pub fn set(&self, millis: u64) {
        self.current.set(millis);
    }
}
