//! Bitplane module - packed 1-bit-per-pixel frame buffer
//!
//! The plane mirrors the device's video RAM byte for byte. Pixels are stored
//! row-major: `pixel = x + WINDOW_WIDTH * y`, byte `pixel / 8`, bit `pixel % 8`.
//! Uses a fixed array so frames never allocate.

use thiserror::Error;

use crate::types::{RAM_ADDRESS_AMOUNT, WINDOW_HIGHT, WINDOW_WIDTH};

/// Errors raised while addressing the plane.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// Pixel coordinate lies outside the visible window.
    #[error("pixel ({x}, {y}) outside the window")]
    OutOfBounds { x: i32, y: i32 },
}

/// Packed on/off pixel buffer the size of video RAM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPlane {
    bytes: [u8; RAM_ADDRESS_AMOUNT],
}

impl BitPlane {
    /// Create an all-off plane
    pub const fn new() -> Self {
        Self {
            bytes: [0; RAM_ADDRESS_AMOUNT],
        }
    }

    /// Linear pixel index for `(x, y)`, rejecting anything off-window
    #[inline(always)]
    pub fn pixel_index(x: i32, y: i32) -> Result<usize, RenderError> {
        if x < 0 || x >= WINDOW_WIDTH || y < 0 || y >= WINDOW_HIGHT {
            return Err(RenderError::OutOfBounds { x, y });
        }
        Ok((x + WINDOW_WIDTH * y) as usize)
    }

    /// Set the pixel at `(x, y)`. Never clears.
    #[inline(always)]
    pub fn set_pixel(&mut self, x: i32, y: i32) -> Result<(), RenderError> {
        let pos = Self::pixel_index(x, y)?;
        self.bytes[pos / 8] |= 1 << (pos % 8);
        Ok(())
    }

    /// Whether `(x, y)` is lit. Off-window pixels read as unlit.
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        match Self::pixel_index(x, y) {
            Ok(pos) => self.bytes[pos / 8] & (1 << (pos % 8)) != 0,
            Err(_) => false,
        }
    }

    /// OR another plane into this one, byte by byte
    pub fn accumulate(&mut self, other: &BitPlane) {
        for (dst, src) in self.bytes.iter_mut().zip(other.bytes.iter()) {
            *dst |= *src;
        }
    }

    /// Zero every byte
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    pub fn is_blank(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// Number of lit pixels
    pub fn count_ones(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }

    pub fn as_bytes(&self) -> &[u8; RAM_ADDRESS_AMOUNT] {
        &self.bytes
    }

    /// Build a plane from raw video RAM contents
    pub const fn from_bytes(bytes: [u8; RAM_ADDRESS_AMOUNT]) -> Self {
        Self { bytes }
    }
}

impl Default for BitPlane {
    fn default() -> Self {
        Self::new()
    }
}
