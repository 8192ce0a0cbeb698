//! TerminalSink: a [`DeviceSink`] that shows video RAM in the terminal.
//!
//! Byte writes only update an in-memory mirror; [`TerminalSink::present`]
//! pushes the mirror to the screen, and skips the work when neither the
//! pixels, the status line nor the terminal size changed.

use anyhow::Result;

use crate::core::{DeviceSink, MemorySink};
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::types::VRAM_BASE;
use crate::vram_view::{VramView, Viewport};

pub struct TerminalSink {
    vram: MemorySink,
    renderer: TerminalRenderer,
    view: VramView,
    fb: FrameBuffer,
    dirty: bool,
    last_status: String,
    last_viewport: Option<Viewport>,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            vram: MemorySink::new(),
            renderer: TerminalRenderer::new(),
            view: VramView,
            fb: FrameBuffer::new(0, 0),
            dirty: true,
            last_status: String::new(),
            last_viewport: None,
        }
    }

    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Mirror of the last bytes written
    pub fn vram(&self) -> &MemorySink {
        &self.vram
    }

    /// Draw the mirrored video RAM plus `status` if anything changed.
    ///
    /// Returns whether a frame was actually drawn.
    pub fn present(&mut self, status: &str, viewport: Viewport) -> Result<bool> {
        let resized = self.last_viewport != Some(viewport);
        if !self.dirty && !resized && self.last_status == status {
            return Ok(false);
        }
        if resized {
            log::debug!("viewport now {}x{}", viewport.width, viewport.height);
            self.renderer.invalidate();
        }

        self.view
            .render_into(&self.vram.plane(), status, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)?;

        self.dirty = false;
        self.last_viewport = Some(viewport);
        if self.last_status != status {
            self.last_status.clear();
            self.last_status.push_str(status);
        }
        Ok(true)
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceSink for TerminalSink {
    fn write_byte(&mut self, base: usize, offset: usize, value: u8) {
        let addr = (base + offset).wrapping_sub(VRAM_BASE);
        let before = self.vram.vram().get(addr).copied();
        self.vram.write_byte(base, offset, value);
        if before != Some(value) {
            self.dirty = true;
        }
    }
}
