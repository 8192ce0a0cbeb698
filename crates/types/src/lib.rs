//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (geometry, rendering, device sinks, input mapping).
//!
//! # Window Dimensions
//!
//! The display is a packed 1-bit-per-pixel plane:
//!
//! - **Width**: 64 pixels (indexed 0-63)
//! - **Height**: 32 pixels (indexed 0-31)
//! - **Video RAM**: 256 bytes, one bit per pixel, row-major
//!
//! # Addressing
//!
//! | Quantity | Formula |
//! |----------|---------|
//! | pixel index | `x + WINDOW_WIDTH * y` |
//! | byte index | `pixel_index / 8` |
//! | bit index | `pixel_index % 8` (bit `n` is `1 << n`) |
//!
//! # Examples
//!
//! ```
//! use pong_bitplane_types::{
//!     InputSignal, Vector2i, RAM_ADDRESS_AMOUNT, WINDOW_HIGHT, WINDOW_WIDTH,
//! };
//!
//! assert_eq!(RAM_ADDRESS_AMOUNT, ((WINDOW_WIDTH * WINDOW_HIGHT) as usize).div_ceil(8));
//!
//! let v = Vector2i::new(2, -3);
//! assert_eq!(v + Vector2i::new(1, 1), Vector2i::new(3, -2));
//!
//! assert!(InputSignal::START.is_start());
//! assert!(!InputSignal::UP.is_start());
//! ```

use std::ops::{Add, AddAssign, Neg, Sub};

/// Window width in pixels
pub const WINDOW_WIDTH: i32 = 64;

/// Window height in pixels
pub const WINDOW_HIGHT: i32 = 32;

/// Size of the video RAM region in bytes (one bit per pixel, rounded up)
pub const RAM_ADDRESS_AMOUNT: usize = ((WINDOW_WIDTH * WINDOW_HIGHT) as usize).div_ceil(8);

/// Base address of the memory-mapped video RAM
pub const VRAM_BASE: usize = 0x0000;

/// Fixed timestep interval in milliseconds (33ms ≈ 30 FPS)
pub const TICK_MS: u32 = 33;

const _: () = assert!(WINDOW_WIDTH > 0 && WINDOW_HIGHT > 0);
const _: () = assert!(RAM_ADDRESS_AMOUNT * 8 >= (WINDOW_WIDTH * WINDOW_HIGHT) as usize);

/// 2D integer vector.
///
/// Used for intersection depth, positions, sizes and velocities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector2i {
    pub x: i32,
    pub y: i32,
}

impl Vector2i {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sign: each axis becomes -1, 0 or 1
    pub const fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }
}

impl Add for Vector2i {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2i {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2i {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2i {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// The most recent control input, one byte per tick.
///
/// Only [`InputSignal::START`] is interpreted by the frame driver. Every other
/// code is forwarded to gameplay collaborators untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InputSignal(pub u8);

impl InputSignal {
    /// No key held this tick
    pub const NONE: Self = Self(0x00);
    /// Start the game (carriage return)
    pub const START: Self = Self(0x0D);
    /// Move the player paddle up
    pub const UP: Self = Self(b'w');
    /// Move the player paddle down
    pub const DOWN: Self = Self(b's');

    pub const fn code(self) -> u8 {
        self.0
    }

    pub const fn is_start(self) -> bool {
        self.0 == Self::START.0
    }
}

impl From<u8> for InputSignal {
    fn from(code: u8) -> Self {
        Self(code)
    }
}
