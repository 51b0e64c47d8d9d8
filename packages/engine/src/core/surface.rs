//! PixelSurface - the canvas the simulations draw into
//!
//! Row-major ABGR pixels in one linear `Vec<u32>`, exposed to JS by pointer
//! and length so a frame can be blitted without copying.
//! Every draw call clips against the surface bounds.

use super::color::Rgb;
use super::rect::Rect;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub struct PixelSurface {
    width: u32,
    height: u32,
    pub colors: Vec<u32>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            colors: vec![Rgb::BLACK.to_abgr(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.colors.len() }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Fill the whole surface
    /// Parallel fill with Rayon when the feature is enabled
    pub fn clear(&mut self, color: Rgb) {
        let c = color.to_abgr();
        #[cfg(feature = "parallel")]
        {
            self.colors.par_iter_mut().for_each(|v| *v = c);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.colors.fill(c);
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(Rgb::from_abgr(self.colors[self.index(x as u32, y as u32)]))
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        self.colors[idx] = color.to_abgr();
    }

    /// `len` pixels starting at (x, y), going right
    pub fn draw_hline(&mut self, x: i32, y: i32, len: i32, color: Rgb) {
        if y < 0 || (y as u32) >= self.height || len <= 0 {
            return;
        }
        let start = (x as i64).max(0);
        let end = (x as i64 + len as i64).min(self.width as i64);
        if start >= end {
            return;
        }
        let row = (y as usize) * (self.width as usize);
        self.colors[row + start as usize..row + end as usize].fill(color.to_abgr());
    }

    /// `len` pixels starting at (x, y), going down
    pub fn draw_vline(&mut self, x: i32, y: i32, len: i32, color: Rgb) {
        if x < 0 || (x as u32) >= self.width || len <= 0 {
            return;
        }
        let start = (y as i64).max(0);
        let end = (y as i64 + len as i64).min(self.height as i64);
        let c = color.to_abgr();
        let width = self.width as usize;
        for yy in start..end {
            self.colors[(yy as usize) * width + x as usize] = c;
        }
    }

    /// Bresenham line, both endpoints inclusive
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        if y0 == y1 {
            let (a, b) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
            let len = (b as i64 - a as i64 + 1).min(i32::MAX as i64) as i32;
            self.draw_hline(a, y0, len, color);
            return;
        }

        let (mut x, mut y) = (x0 as i64, y0 as i64);
        let (x1, y1) = (x1 as i64, y1 as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64 {
                self.set_pixel(x as i32, y as i32, color);
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Filled disc centred on the nearest pixel to (cx, cy)
    pub fn draw_point(&mut self, cx: f64, cy: f64, radius: i32, color: Rgb) {
        if !cx.is_finite() || !cy.is_finite() {
            return;
        }
        let cx = cx.round() as i32;
        let cy = cy.round() as i32;
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(cx.saturating_add(dx), cy.saturating_add(dy), color);
                }
            }
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        if rect.is_empty() {
            return;
        }
        let top = (rect.top() as i64).max(0);
        let bottom = (rect.bottom() as i64).min(self.height as i64);
        for y in top..bottom {
            self.draw_hline(rect.x, y as i32, rect.w, color);
        }
    }

    /// Border of `thickness` pixels drawn inside `rect`
    pub fn draw_rect_outline(&mut self, rect: Rect, thickness: i32, color: Rgb) {
        if rect.is_empty() || thickness <= 0 {
            return;
        }
        let t = thickness.min(rect.w).min(rect.h);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - t, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.y, t, rect.h), color);
        self.fill_rect(Rect::new(rect.right() - t, rect.y, t, rect.h), color);
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }

    pub fn colors_len_elements(&self) -> usize {
        self.colors.len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.colors.len() * std::mem::size_of::<u32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hline_is_clipped_to_surface() {
        let mut s = PixelSurface::new(10, 4);
        s.draw_hline(-5, 1, 8, Rgb::WHITE);
        assert_eq!(s.get_pixel(0, 1), Some(Rgb::WHITE));
        assert_eq!(s.get_pixel(2, 1), Some(Rgb::WHITE));
        assert_eq!(s.get_pixel(3, 1), Some(Rgb::BLACK));
        // Off-surface rows are ignored
        s.draw_hline(0, 4, 10, Rgb::WHITE);
        s.draw_hline(0, -1, 10, Rgb::WHITE);
        assert!(s.colors.iter().filter(|&&c| c == Rgb::WHITE.to_abgr()).count() == 3);
    }

    #[test]
    fn line_endpoints_are_inclusive() {
        let mut s = PixelSurface::new(16, 16);
        s.draw_line(2, 3, 9, 3, Rgb::YELLOW);
        assert_eq!(s.get_pixel(2, 3), Some(Rgb::YELLOW));
        assert_eq!(s.get_pixel(9, 3), Some(Rgb::YELLOW));
        assert_eq!(s.get_pixel(10, 3), Some(Rgb::BLACK));

        s.draw_line(0, 0, 5, 5, Rgb::WHITE);
        for i in 0..=5 {
            assert_eq!(s.get_pixel(i, i), Some(Rgb::WHITE));
        }
    }

    #[test]
    fn point_draws_radius_two_disc() {
        let mut s = PixelSurface::new(8, 8);
        s.draw_point(4.2, 3.8, 2, Rgb::WHITE);
        let lit = s.colors.iter().filter(|&&c| c == Rgb::WHITE.to_abgr()).count();
        assert_eq!(lit, 13);
        assert_eq!(s.get_pixel(4, 4), Some(Rgb::WHITE));
        assert_eq!(s.get_pixel(6, 6), Some(Rgb::BLACK));
    }

    #[test]
    fn rect_outline_leaves_interior() {
        let mut s = PixelSurface::new(10, 10);
        s.draw_rect_outline(Rect::new(1, 1, 6, 6), 2, Rgb::WHITE);
        assert_eq!(s.get_pixel(1, 1), Some(Rgb::WHITE));
        assert_eq!(s.get_pixel(6, 6), Some(Rgb::WHITE));
        assert_eq!(s.get_pixel(3, 3), Some(Rgb::BLACK));
        assert_eq!(s.get_pixel(7, 7), Some(Rgb::BLACK));
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut s = PixelSurface::new(7, 5);
        s.clear(Rgb::BACKGROUND);
        assert!(s.colors.iter().all(|&c| c == Rgb::BACKGROUND.to_abgr()));
        assert_eq!(s.colors_len_bytes(), 7 * 5 * 4);
    }
}
