/// Axis-aligned pixel rectangle (x, y is the top-left corner)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Build from fractional coordinates; each component truncates toward zero
    /// (saturating at the i32 range).
    pub fn from_f64(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x: x as i32,
            y: y as i32,
            w: w as i32,
            h: h as i32,
        }
    }

    #[inline]
    pub fn top(&self) -> i32 { self.y }

    #[inline]
    pub fn right(&self) -> i32 { self.x.saturating_add(self.w) }

    #[inline]
    pub fn bottom(&self) -> i32 { self.y.saturating_add(self.h) }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}
