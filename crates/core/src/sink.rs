//! Device sink - the narrow seam to memory-mapped video RAM
//!
//! The frame driver only ever writes single bytes. Real targets map this to a
//! register write; tests and headless runs use [`MemorySink`].

use crate::bitplane::BitPlane;
use crate::types::{RAM_ADDRESS_AMOUNT, VRAM_BASE};

/// Capability to write one byte at `base + offset`.
///
/// Writes are synchronous and cannot fail from the caller's point of view.
pub trait DeviceSink {
    fn write_byte(&mut self, base: usize, offset: usize, value: u8);
}

impl<S: DeviceSink + ?Sized> DeviceSink for &mut S {
    fn write_byte(&mut self, base: usize, offset: usize, value: u8) {
        (**self).write_byte(base, offset, value);
    }
}

/// In-memory video RAM mirror.
#[derive(Debug, Clone)]
pub struct MemorySink {
    vram: [u8; RAM_ADDRESS_AMOUNT],
    writes: u64,
    dropped: u64,
}

impl MemorySink {
    pub const fn new() -> Self {
        Self {
            vram: [0; RAM_ADDRESS_AMOUNT],
            writes: 0,
            dropped: 0,
        }
    }

    pub fn vram(&self) -> &[u8; RAM_ADDRESS_AMOUNT] {
        &self.vram
    }

    /// Current contents as a plane (handy for pixel assertions)
    pub fn plane(&self) -> BitPlane {
        BitPlane::from_bytes(self.vram)
    }

    /// Total accepted writes
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Writes addressed outside video RAM
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceSink for MemorySink {
    fn write_byte(&mut self, base: usize, offset: usize, value: u8) {
        match (base + offset)
            .checked_sub(VRAM_BASE)
            .and_then(|addr| self.vram.get_mut(addr))
        {
            Some(slot) => {
                *slot = value;
                self.writes += 1;
            }
            None => {
                log::warn!("write outside video RAM: base={:#x} offset={}", base, offset);
                self.dropped += 1;
            }
        }
    }
}
