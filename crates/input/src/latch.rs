//! Per-tick input latch.
//!
//! Terminals deliver key events at arbitrary times; the frame driver wants
//! exactly one byte per tick. The latch keeps the most recent signal until the
//! tick consumes it.

use crate::types::InputSignal;

#[derive(Debug, Clone, Copy, Default)]
pub struct InputLatch {
    latest: InputSignal,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a signal, replacing any earlier one from this tick
    pub fn press(&mut self, signal: InputSignal) {
        self.latest = signal;
    }

    /// Signal for this tick; resets to [`InputSignal::NONE`]
    pub fn take(&mut self) -> InputSignal {
        std::mem::take(&mut self.latest)
    }

    pub fn peek(&self) -> InputSignal {
        self.latest
    }
}
