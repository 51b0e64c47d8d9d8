//! Linear gradient fill
//!
//! Each channel is interpolated across the chosen axis of the rect:
//! `color(offset) = clamp(a + (b - a) / h * offset, 0, 255)`, with `(a, b)`
//! swapped for the reverse direction. One row (vertical axis) or one column
//! (horizontal axis) is drawn per unit offset, so the far endpoint color is
//! approached but never drawn. Each line spans the rect's cross extent with
//! both end pixels included, one pixel past `right()` / `bottom()`.

use crate::core::{PixelSurface, Rect, Rgb};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Color changes from top to bottom; each step is one row
    Vertical,
    /// Color changes from left to right; each step is one column
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientSpec {
    pub start: Rgb,
    pub end: Rgb,
    pub rect: Rect,
    pub axis: Axis,
    pub direction: Direction,
}

impl GradientSpec {
    pub fn new(start: Rgb, end: Rgb, rect: Rect, axis: Axis, direction: Direction) -> Self {
        Self { start, end, rect, axis, direction }
    }

    /// Length of the interpolation axis in pixels
    #[inline]
    pub fn axis_len(&self) -> i32 {
        match self.axis {
            Axis::Vertical => self.rect.h,
            Axis::Horizontal => self.rect.w,
        }
    }

    /// Color of the line `offset` units along the axis
    pub fn color_at(&self, offset: i32) -> Rgb {
        let (a, b) = match self.direction {
            Direction::Forward => (self.start, self.end),
            Direction::Reverse => (self.end, self.start),
        };
        // An empty axis has nothing to draw; keep the divisor non-zero anyway.
        let h = self.axis_len().max(1) as f64;
        let a = a.channels();
        let b = b.channels();
        let t = offset as f64;
        Rgb::from_channels_clamped([
            a[0] + (b[0] - a[0]) / h * t,
            a[1] + (b[1] - a[1]) / h * t,
            a[2] + (b[2] - a[2]) / h * t,
        ])
    }

    pub fn fill(&self, surface: &mut PixelSurface) {
        if self.rect.is_empty() {
            return;
        }
        let r = self.rect;
        match self.axis {
            Axis::Vertical => {
                for offset in visible_offsets(r.y, r.h, surface.height()) {
                    surface.draw_hline(r.x, r.y + offset, r.w.saturating_add(1), self.color_at(offset));
                }
            }
            Axis::Horizontal => {
                for offset in visible_offsets(r.x, r.w, surface.width()) {
                    surface.draw_vline(r.x + offset, r.y, r.h.saturating_add(1), self.color_at(offset));
                }
            }
        }
    }
}

/// Offsets along an axis starting at `origin` that land inside `0..limit`
fn visible_offsets(origin: i32, len: i32, limit: u32) -> std::ops::Range<i32> {
    let origin = origin as i64;
    let first = (-origin).max(0);
    let last = (limit as i64 - origin).min(len as i64);
    if first >= last {
        return 0..0;
    }
    first as i32..last as i32
}

/// Fill `rect` on `surface` with a gradient from `start` to `end`
pub fn fill_gradient(
    surface: &mut PixelSurface,
    start: Rgb,
    end: Rgb,
    rect: Rect,
    vertical: bool,
    forward: bool,
) {
    let axis = if vertical { Axis::Vertical } else { Axis::Horizontal };
    let direction = if forward { Direction::Forward } else { Direction::Reverse };
    GradientSpec::new(start, end, rect, axis, direction).fill(surface);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(surface: &PixelSurface, x: i32, rows: std::ops::Range<i32>) -> Vec<Rgb> {
        rows.map(|y| surface.get_pixel(x, y).unwrap()).collect()
    }

    fn row(surface: &PixelSurface, y: i32, cols: std::ops::Range<i32>) -> Vec<Rgb> {
        cols.map(|x| surface.get_pixel(x, y).unwrap()).collect()
    }

    #[test]
    fn ten_rows_black_to_white() {
        let mut s = PixelSurface::new(4, 10);
        fill_gradient(&mut s, Rgb::BLACK, Rgb::WHITE, Rect::new(0, 0, 4, 10), true, true);

        let col = column(&s, 0, 0..10);
        assert_eq!(col[0], Rgb::new(0, 0, 0));
        assert_eq!(col[1], Rgb::new(25, 25, 25));
        assert_eq!(col[9], Rgb::new(229, 229, 229));
        // Every row is uniform across the rect width
        for y in 0..10 {
            assert!(row(&s, y, 0..4).iter().all(|&c| c == col[y as usize]));
        }
    }

    #[test]
    fn equal_endpoints_fill_uniformly() {
        let c = Rgb::new(12, 200, 77);
        for vertical in [true, false] {
            for forward in [true, false] {
                let mut s = PixelSurface::new(9, 7);
                let rect = Rect::new(1, 1, 7, 5);
                fill_gradient(&mut s, c, c, rect, vertical, forward);
                for y in 1..6 {
                    assert!(row(&s, y, 1..8).iter().all(|&p| p == c));
                }
                assert_eq!(s.get_pixel(0, 0), Some(Rgb::BLACK));
                assert_eq!(s.get_pixel(8, 6), Some(Rgb::BLACK));
            }
        }
    }

    #[test]
    fn reverse_is_forward_mirrored_by_one_step() {
        let rect = Rect::new(0, 0, 1, 10);
        let mut fwd = PixelSurface::new(1, 10);
        let mut rev = PixelSurface::new(1, 10);
        fill_gradient(&mut fwd, Rgb::BLACK, Rgb::WHITE, rect, true, true);
        fill_gradient(&mut rev, Rgb::BLACK, Rgb::WHITE, rect, true, false);

        let f = column(&fwd, 0, 0..10);
        let r = column(&rev, 0, 0..10);
        // Forward starts at `start`, reverse starts at `end`
        assert_eq!(f[0], Rgb::BLACK);
        assert_eq!(r[0], Rgb::WHITE);
        // Read backwards, the reverse fill walks the forward ramp one step later
        for k in 0..9 {
            assert_eq!(r[9 - k], f[k + 1]);
        }
        // Reverse equals forward with the endpoints swapped
        let mut swapped = PixelSurface::new(1, 10);
        fill_gradient(&mut swapped, Rgb::WHITE, Rgb::BLACK, rect, true, true);
        assert_eq!(column(&swapped, 0, 0..10), r);
    }

    #[test]
    fn lines_include_the_far_edge() {
        let mut s = PixelSurface::new(8, 8);
        let rect = Rect::new(1, 1, 4, 3);
        fill_gradient(&mut s, Rgb::WHITE, Rgb::BLACK, rect, false, true);
        // Columns 1..5, each running from row 1 through row 4 inclusive
        assert_eq!(s.get_pixel(1, rect.bottom()), Some(Rgb::WHITE));
        assert_eq!(s.get_pixel(1, rect.bottom() + 1), Some(Rgb::BLACK));
        assert_eq!(s.get_pixel(rect.right(), 2), Some(Rgb::BLACK));

        let mut s = PixelSurface::new(8, 8);
        fill_gradient(&mut s, Rgb::WHITE, Rgb::BLACK, rect, true, true);
        // Rows 1..4, each running from column 1 through column 5 inclusive
        assert_eq!(s.get_pixel(rect.right(), 1), Some(Rgb::WHITE));
        assert_eq!(s.get_pixel(rect.right() + 1, 1), Some(Rgb::BLACK));
        assert_eq!(s.get_pixel(2, rect.bottom()), Some(Rgb::BLACK));
    }

    #[test]
    fn horizontal_fill_varies_by_column() {
        let mut s = PixelSurface::new(10, 3);
        fill_gradient(&mut s, Rgb::WHITE, Rgb::BLACK, Rect::new(0, 0, 10, 3), false, true);
        let top = row(&s, 0, 0..10);
        assert_eq!(top[0], Rgb::WHITE);
        assert_eq!(top[9], Rgb::new(25, 25, 25));
        assert_eq!(row(&s, 2, 0..10), top);
    }

    #[test]
    fn zero_length_axis_draws_nothing() {
        let mut s = PixelSurface::new(5, 5);
        fill_gradient(&mut s, Rgb::WHITE, Rgb::WHITE, Rect::new(1, 1, 3, 0), true, true);
        fill_gradient(&mut s, Rgb::WHITE, Rgb::WHITE, Rect::new(1, 1, 0, 3), false, false);
        assert!(s.colors.iter().all(|&c| c == Rgb::BLACK.to_abgr()));

        let spec = GradientSpec::new(Rgb::BLACK, Rgb::WHITE, Rect::new(0, 0, 0, 0), Axis::Vertical, Direction::Forward);
        assert_eq!(spec.color_at(0), Rgb::BLACK);
    }

    #[test]
    fn partially_offscreen_rect_is_clipped() {
        let mut s = PixelSurface::new(6, 6);
        fill_gradient(&mut s, Rgb::WHITE, Rgb::BLACK, Rect::new(-4, 2, 8, 2), false, true);
        // Column 0 of the surface is offset 4 of the gradient: 255 - 255/8*4
        assert_eq!(s.get_pixel(0, 2), Some(Rgb::new(127, 127, 127)));
        assert_eq!(s.get_pixel(3, 3), Some(Rgb::new(31, 31, 31)));
        assert_eq!(s.get_pixel(4, 2), Some(Rgb::BLACK));
    }
}
