//! Terminal presentation of the video RAM.
//!
//! Stands in for the memory-mapped display on a desktop: [`TerminalSink`]
//! receives the frame driver's byte writes and draws the plane with
//! half-block glyphs through crossterm.
//!
//! - [`fb`]: glyph framebuffer
//! - [`vram_view`]: pure bitplane → glyph mapping
//! - [`renderer`]: full/diff encoding and terminal flush
//! - [`sink`]: the [`DeviceSink`](crate::core::DeviceSink) implementation

pub mod fb;
pub mod renderer;
pub mod sink;
pub mod vram_view;

pub use pong_bitplane_core as core;
pub use pong_bitplane_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sink::TerminalSink;
pub use vram_view::{Viewport, VramView, SCREEN_COLS, SCREEN_ROWS};
