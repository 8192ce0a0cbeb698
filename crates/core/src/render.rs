//! Render accumulator - rasterizes rectangles into a bitplane
//!
//! Each object is drawn into its own scratch plane first and then OR-merged
//! into the shared target, so objects can be rendered in any order without
//! clearing each other's pixels.

use crate::bitplane::BitPlane;
use crate::geometry::Rectangle;
use crate::types::{WINDOW_HIGHT, WINDOW_WIDTH};

/// Outcome of one rasterization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Pixels that landed inside the window
    pub set: u64,
    /// Pixels skipped because they fell outside the window
    pub clipped: u64,
}

impl RenderStats {
    pub fn merge(&mut self, other: RenderStats) {
        self.set = self.set.saturating_add(other.set);
        self.clipped = self.clipped.saturating_add(other.clipped);
    }
}

/// Half-open `[start, start + len)` span cut down to `[0, limit)`.
fn visible_span(start: i32, len: i32, limit: i32) -> (i32, i32) {
    let lo = i64::from(start).max(0);
    let hi = (i64::from(start) + i64::from(len)).min(i64::from(limit));
    // Both ends lie in [0, limit] once the span is non-empty.
    if lo >= hi {
        (0, 0)
    } else {
        (lo as i32, hi as i32)
    }
}

/// Rasterize `rect` into `scratch` without touching anything else.
///
/// Only the on-window part is walked; everything else counts as clipped.
pub fn rasterize_into(rect: &Rectangle, scratch: &mut BitPlane) -> RenderStats {
    let (x0, x1) = visible_span(rect.left, rect.width, WINDOW_WIDTH);
    let (y0, y1) = visible_span(rect.top, rect.hight, WINDOW_HIGHT);

    let mut stats = RenderStats::default();
    for y in y0..y1 {
        for x in x0..x1 {
            if scratch.set_pixel(x, y).is_ok() {
                stats.set += 1;
            }
        }
    }
    let area = u64::try_from(rect.area()).unwrap_or(0);
    stats.clipped = area.saturating_sub(stats.set);
    stats
}

/// Rasterize `rect` into a stack-local scratch plane and OR it into `target`.
pub fn render_rectangle(rect: &Rectangle, target: &mut BitPlane) -> RenderStats {
    let mut scratch = BitPlane::new();
    let stats = rasterize_into(rect, &mut scratch);
    if stats.clipped > 0 {
        log::debug!("clipped {} pixels of {:?}", stats.clipped, rect);
    }
    target.accumulate(&scratch);
    stats
}
