//! VramView: maps video RAM contents into a glyph framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each terminal cell shows one pixel column and two pixel rows, using
//! half-block glyphs, so the 64x32 plane fits in 64x16 cells.

use crate::core::BitPlane;
use crate::fb::{FrameBuffer, Glyph, CHROME, PHOSPHOR};
use crate::types::{WINDOW_HIGHT, WINDOW_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen columns used by the plane
pub const SCREEN_COLS: u16 = WINDOW_WIDTH as u16;

/// Screen rows used by the plane (two pixel rows per cell)
pub const SCREEN_ROWS: u16 = (WINDOW_HIGHT as u16).div_ceil(2);

/// Renders a bitplane inside a box with a one-line status underneath.
#[derive(Debug, Clone, Copy, Default)]
pub struct VramView;

impl VramView {
    /// Half-block glyph for a pair of vertically stacked pixels
    pub fn glyph_for(top: bool, bottom: bool) -> char {
        match (top, bottom) {
            (true, true) => '█',
            (true, false) => '▀',
            (false, true) => '▄',
            (false, false) => ' ',
        }
    }

    /// Draw `plane` and `status` into `fb`, centered in `viewport`.
    ///
    /// Reuses `fb`'s allocation; callers keep one buffer across frames.
    pub fn render_into(
        &self,
        plane: &BitPlane,
        status: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let frame_w = SCREEN_COLS + 2;
        let frame_h = SCREEN_ROWS + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        draw_box(fb, start_x, start_y, frame_w, frame_h);

        for row in 0..SCREEN_ROWS {
            let y = i32::from(row) * 2;
            for col in 0..SCREEN_COLS {
                let x = i32::from(col);
                let ch = Self::glyph_for(plane.is_set(x, y), plane.is_set(x, y + 1));
                if ch != ' ' {
                    fb.put(start_x + 1 + col, start_y + 1 + row, Glyph::new(ch, PHOSPHOR));
                }
            }
        }

        fb.put_str(start_x + 1, start_y + frame_h, status, CHROME);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, plane: &BitPlane, status: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(plane, status, viewport, &mut fb);
        fb
    }
}

fn draw_box(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let edge = |ch| Glyph::new(ch, CHROME);

    fb.put(x, y, edge('┌'));
    fb.put(x + w - 1, y, edge('┐'));
    fb.put(x, y + h - 1, edge('└'));
    fb.put(x + w - 1, y + h - 1, edge('┘'));
    for dx in 1..w - 1 {
        fb.put(x + dx, y, edge('─'));
        fb.put(x + dx, y + h - 1, edge('─'));
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, edge('│'));
        fb.put(x + w - 1, y + dy, edge('│'));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_block_mapping() {
        assert_eq!(VramView::glyph_for(true, true), '█');
        assert_eq!(VramView::glyph_for(true, false), '▀');
        assert_eq!(VramView::glyph_for(false, true), '▄');
        assert_eq!(VramView::glyph_for(false, false), ' ');
    }

    #[test]
    fn exact_fit_puts_box_at_origin() {
        let vp = Viewport::new(SCREEN_COLS + 2, SCREEN_ROWS + 3);
        let fb = VramView.render(&BitPlane::new(), "IDLE", vp);

        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(SCREEN_COLS + 1, SCREEN_ROWS + 1).unwrap().ch, '┘');
        assert!(fb.row_text(SCREEN_ROWS + 2).starts_with(" IDLE"));
    }

    #[test]
    fn pixels_map_to_half_blocks() {
        let mut plane = BitPlane::new();
        plane.set_pixel(0, 0).unwrap();
        plane.set_pixel(1, 1).unwrap();
        plane.set_pixel(2, 2).unwrap();
        plane.set_pixel(2, 3).unwrap();

        let vp = Viewport::new(SCREEN_COLS + 2, SCREEN_ROWS + 3);
        let fb = VramView.render(&plane, "", vp);

        assert_eq!(fb.get(1, 1).unwrap().ch, '▀');
        assert_eq!(fb.get(2, 1).unwrap().ch, '▄');
        assert_eq!(fb.get(3, 2).unwrap().ch, '█');
        assert_eq!(fb.get(3, 1).unwrap().ch, ' ');
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let fb = VramView.render(&BitPlane::new(), "status", Viewport::new(3, 2));
        assert_eq!(fb.width(), 3);
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    }
}
