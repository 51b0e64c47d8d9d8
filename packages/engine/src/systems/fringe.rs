//! Fringe pattern layout for the diffraction grating view
//!
//! Bands of width `spacing` are laid out in pairs, moving outward from the
//! screen centre. Each horizontal gradient runs light to dark or dark to light
//! so neighbouring bands meet at matching brightness, faking the falloff of
//! each interference maximum.

use crate::core::{PixelSurface, Rect, Rgb};
use crate::domain::constants::MIN_FRINGE_SPACING;
use crate::domain::params::DiffractionParameters;

use super::gradient::{Axis, Direction, GradientSpec};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FringePattern {
    spacing: f64,
    iterations: u32,
    bands: Vec<GradientSpec>,
}

/// Band width in pixels for the given grating setup
pub fn fringe_spacing(params: &DiffractionParameters) -> f64 {
    params.fringe_spacing()
}

impl FringePattern {
    /// Lay out bands between `band_top` and `band_top + band_height`.
    ///
    /// A non-positive or non-finite spacing gives an empty pattern. Spacing
    /// under one pixel is widened to one pixel, which bounds the iteration
    /// count by `screen_width / 2`.
    pub fn layout(fringe_spacing: f64, screen_width: u32, band_top: i32, band_height: i32) -> Self {
        if !(fringe_spacing.is_finite() && fringe_spacing > 0.0) {
            return Self::default();
        }
        let s = fringe_spacing.max(MIN_FRINGE_SPACING);
        let mid = (screen_width / 2) as f64;
        let width = screen_width as f64;

        let mut pattern = Self {
            spacing: s,
            iterations: 0,
            bands: Vec::new(),
        };

        let mut i = 1.0;
        loop {
            pattern.push_band(mid + s * (i - 1.0), s, band_top, band_height, Rgb::WHITE, Rgb::BLACK);
            pattern.push_band(mid + s * i, s, band_top, band_height, Rgb::BLACK, Rgb::WHITE);
            pattern.push_band(mid - s * i, s, band_top, band_height, Rgb::BLACK, Rgb::WHITE);
            pattern.push_band(mid - s * (i + 1.0), s, band_top, band_height, Rgb::WHITE, Rgb::BLACK);
            pattern.iterations += 1;

            i += 2.0;
            if mid + s * i > width {
                break;
            }
        }

        pattern
    }

    fn push_band(&mut self, x: f64, s: f64, top: i32, height: i32, from: Rgb, to: Rgb) {
        let rect = Rect::from_f64(x, top as f64, s, height as f64);
        self.bands.push(GradientSpec::new(from, to, rect, Axis::Horizontal, Direction::Forward));
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Number of outward layout steps (each adds two bands per side)
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn bands(&self) -> &[GradientSpec] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Draw every band in layout order
    pub fn render(&self, surface: &mut PixelSurface) {
        for band in &self.bands {
            band.fill(surface);
        }
    }
}
