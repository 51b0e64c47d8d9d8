//! Colors in the surface's packed ABGR format
//!
//! Surfaces store ABGR u32 (little-endian bytes [RR,GG,BB,AA]) so the JS side
//! can wrap the buffer in `ImageData` without a conversion pass.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    /// Backdrop behind the diffraction panel
    pub const BACKGROUND: Rgb = Rgb::new(30, 30, 30);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as opaque ABGR
    #[inline]
    pub fn to_abgr(self) -> u32 {
        0xFF00_0000 | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }

    /// Unpack an ABGR value, dropping alpha
    #[inline]
    pub fn from_abgr(c: u32) -> Self {
        Self {
            r: (c & 0xFF) as u8,
            g: ((c >> 8) & 0xFF) as u8,
            b: ((c >> 16) & 0xFF) as u8,
        }
    }

    #[inline]
    pub fn channels(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }

    /// Clamp each channel to 0..=255, then truncate toward zero
    #[inline]
    pub fn from_channels_clamped(c: [f64; 3]) -> Self {
        Self {
            r: c[0].clamp(0.0, 255.0) as u8,
            g: c[1].clamp(0.0, 255.0) as u8,
            b: c[2].clamp(0.0, 255.0) as u8,
        }
    }
}
