//! Terminal input module.
//!
//! Maps `crossterm` key events onto the one-byte [`InputSignal`](crate::types::InputSignal)
//! the frame driver consumes, and latches the most recent one per tick.

pub mod latch;
pub mod map;

pub use pong_bitplane_types as types;

pub use latch::InputLatch;
pub use map::{handle_key_event, should_quit};
