use crate::core::{PixelSurface, Rgb};
use crate::domain::constants::{BAND_HEIGHT, BAND_TOP, SIM_AREA_RECT, SIM_BORDER_RECT};
use crate::domain::DiffractionParameters;
use crate::systems::fringe::FringePattern;

use super::perf_stats::PerfStats;
use super::settings;
use super::PerfTimer;

/// Diffraction grating view: a framed screen area with fringe bands centred
/// on the vertical midline.
pub struct DiffractionSimCore {
    surface: PixelSurface,
    params: DiffractionParameters,
    pattern: FringePattern,
    frame: u64,

    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl DiffractionSimCore {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: PixelSurface::new(width, height),
            params: DiffractionParameters::default(),
            pattern: FringePattern::default(),
            frame: 0,
            perf_enabled: false,
            perf_stats: PerfStats::default(),
        }
    }

    pub fn width(&self) -> u32 { self.surface.width() }

    pub fn height(&self) -> u32 { self.surface.height() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn surface(&self) -> &PixelSurface { &self.surface }

    pub fn parameters(&self) -> DiffractionParameters { self.params }

    pub fn set_parameters(&mut self, params: DiffractionParameters) -> Result<(), String> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Take the `diffraction` section of a parameter document
    pub fn load_parameters_json(&mut self, json: &str) -> Result<(), String> {
        self.params = settings::parse_parameters_section(
            json,
            |doc| doc.diffraction,
            DiffractionParameters::validate,
        )?;
        Ok(())
    }

    pub fn set_wavelength_text(&mut self, text: &str) -> bool {
        settings::apply_text_field(
            &mut self.params,
            text,
            "wavelength",
            |p, v| p.wavelength_nm = v,
            DiffractionParameters::validate,
        )
    }

    pub fn set_grating_spacing_text(&mut self, text: &str) -> bool {
        settings::apply_text_field(
            &mut self.params,
            text,
            "grating spacing",
            |p, v| p.grating_spacing_nm = v,
            DiffractionParameters::validate,
        )
    }

    pub fn set_screen_distance_text(&mut self, text: &str) -> bool {
        settings::apply_text_field(
            &mut self.params,
            text,
            "screen distance",
            |p, v| p.screen_distance_m = v,
            DiffractionParameters::validate,
        )
    }

    /// Band width for the current parameters (px)
    pub fn fringe_spacing(&self) -> f64 {
        self.params.fringe_spacing()
    }

    pub fn pattern(&self) -> &FringePattern { &self.pattern }

    pub fn band_count(&self) -> usize { self.pattern.len() }

    /// Lay out the bands again and redraw the frame
    pub fn render_frame(&mut self) {
        let perf_on = self.perf_enabled;
        if perf_on {
            self.perf_stats.reset();
        }
        let frame_timer = if perf_on { Some(PerfTimer::start()) } else { None };
        let mut lap = PerfTimer::start();

        self.surface.clear(Rgb::BACKGROUND);
        self.surface.fill_rect(SIM_BORDER_RECT, Rgb::WHITE);
        self.surface.fill_rect(SIM_AREA_RECT, Rgb::BLACK);
        let clear_ms = lap.lap_ms();

        self.pattern = FringePattern::layout(
            self.fringe_spacing(),
            self.surface.width(),
            BAND_TOP,
            BAND_HEIGHT,
        );
        let compute_ms = lap.lap_ms();

        self.pattern.render(&mut self.surface);
        let draw_ms = lap.lap_ms();

        self.frame += 1;

        if let Some(t) = frame_timer {
            self.perf_stats.frame_ms = t.elapsed_ms();
            self.perf_stats.clear_ms = clear_ms;
            self.perf_stats.compute_ms = compute_ms;
            self.perf_stats.draw_ms = draw_ms;
            self.perf_stats.bands_drawn = self.pattern.len() as u32;
            self.perf_stats.surface_pixels = self.surface.size() as u32;
        }
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }
}
