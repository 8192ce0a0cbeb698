//! Geometry module - axis-aligned rectangles and AABB math
//!
//! Coordinates are pixels: x grows to the right, y grows downwards.
//! Rectangles may sit partly or fully outside the window (the borders do).

use crate::types::Vector2i;

/// Axis-aligned rectangle, top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub hight: i32,
}

impl Rectangle {
    pub const fn new(left: i32, top: i32, width: i32, hight: i32) -> Self {
        Self {
            left,
            top,
            width,
            hight,
        }
    }

    /// Build from a position and a size vector
    pub const fn from_parts(position: Vector2i, size: Vector2i) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Exclusive right edge (saturates at `i32::MAX`)
    #[inline(always)]
    pub const fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    /// Exclusive bottom edge (saturates at `i32::MAX`)
    #[inline(always)]
    pub const fn bottom(&self) -> i32 {
        self.top.saturating_add(self.hight)
    }

    pub const fn position(&self) -> Vector2i {
        Vector2i::new(self.left, self.top)
    }

    pub const fn size(&self) -> Vector2i {
        Vector2i::new(self.width, self.hight)
    }

    /// Number of pixels covered (zero for degenerate rectangles)
    pub fn area(&self) -> i64 {
        i64::from(self.width.max(0)) * i64::from(self.hight.max(0))
    }

    /// Same size, moved by `offset`
    pub const fn translated(&self, offset: Vector2i) -> Self {
        Self::new(self.left + offset.x, self.top + offset.y, self.width, self.hight)
    }

    /// `[left, top, right, bottom]` widened so edge sums cannot overflow
    #[inline(always)]
    fn edges(&self) -> [i64; 4] {
        let left = i64::from(self.left);
        let top = i64::from(self.top);
        [
            left,
            top,
            left + i64::from(self.width),
            top + i64::from(self.hight),
        ]
    }

    /// True iff both rectangles overlap with positive area.
    ///
    /// Edges that merely touch do not collide. Edge sums are computed in
    /// `i64`, so any `i32` coordinates are valid.
    pub fn check_collisions(&self, other: &Rectangle) -> bool {
        let [al, at, ar, ab] = self.edges();
        let [bl, bt, br, bb] = other.edges();
        (al < br && ar > bl) && (at < bb && ab > bt)
    }

    /// Width and height of the overlap region.
    ///
    /// Only meaningful after [`Rectangle::check_collisions`] returned true;
    /// disjoint rectangles yield zero or negative components, clamped to the
    /// `i32` range.
    pub fn get_intersection(&self, other: &Rectangle) -> Vector2i {
        let [al, at, ar, ab] = self.edges();
        let [bl, bt, br, bb] = other.edges();
        Vector2i::new(
            clamp_i32(ar.min(br) - al.max(bl)),
            clamp_i32(ab.min(bb) - at.max(bt)),
        )
    }
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Free-function form of [`Rectangle::check_collisions`].
pub fn check_collisions(a: &Rectangle, b: &Rectangle) -> bool {
    a.check_collisions(b)
}

/// Free-function form of [`Rectangle::get_intersection`].
pub fn get_intersection(a: &Rectangle, b: &Rectangle) -> Vector2i {
    a.get_intersection(b)
}
