use crate::core::{PixelSurface, Rgb};
use crate::domain::constants::{POINT_RADIUS, TIME_DISPLAY_SCALE};
use crate::domain::CrtParameters;
use crate::systems::trajectory::{run_trajectory, FieldRegion, ParticleState, TrajectoryResult};

use super::perf_stats::PerfStats;
use super::settings;
use super::PerfTimer;

/// CRT deflection view: electron gun on the left edge, plates centred on the
/// screen midline.
pub struct CrtSimCore {
    surface: PixelSurface,
    params: CrtParameters,
    last_result: TrajectoryResult,
    point_count: u32,
    frame: u64,

    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl CrtSimCore {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: PixelSurface::new(width, height),
            params: CrtParameters::default(),
            last_result: TrajectoryResult::default(),
            point_count: 0,
            frame: 0,
            perf_enabled: false,
            perf_stats: PerfStats::default(),
        }
    }

    pub fn width(&self) -> u32 { self.surface.width() }

    pub fn height(&self) -> u32 { self.surface.height() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn surface(&self) -> &PixelSurface { &self.surface }

    pub fn parameters(&self) -> CrtParameters { self.params }

    pub fn set_parameters(&mut self, params: CrtParameters) -> Result<(), String> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Take the `crt` section of a parameter document
    pub fn load_parameters_json(&mut self, json: &str) -> Result<(), String> {
        self.params = settings::parse_parameters_section(json, |doc| doc.crt, CrtParameters::validate)?;
        Ok(())
    }

    pub fn set_plate_length_text(&mut self, text: &str) -> bool {
        settings::apply_text_field(
            &mut self.params,
            text,
            "plate length",
            |p, v| p.plate_length_cm = v,
            CrtParameters::validate,
        )
    }

    pub fn set_plate_separation_text(&mut self, text: &str) -> bool {
        settings::apply_text_field(
            &mut self.params,
            text,
            "plate separation",
            |p, v| p.plate_separation_cm = v,
            CrtParameters::validate,
        )
    }

    pub fn set_potential_difference_text(&mut self, text: &str) -> bool {
        settings::apply_text_field(
            &mut self.params,
            text,
            "potential difference",
            |p, v| p.potential_difference_v = v,
            CrtParameters::validate,
        )
    }

    pub fn set_initial_speed_text(&mut self, text: &str) -> bool {
        settings::apply_text_field(
            &mut self.params,
            text,
            "initial speed",
            |p, v| p.initial_speed_mps = v,
            CrtParameters::validate,
        )
    }

    pub fn field_region(&self) -> FieldRegion {
        FieldRegion::from_crt(&self.params)
    }

    /// Screen row the electron is fired along
    pub fn midline(&self) -> f64 {
        (self.surface.height() / 2) as f64
    }

    /// Recompute the whole trajectory and redraw the frame
    pub fn render_frame(&mut self) {
        let perf_on = self.perf_enabled;
        if perf_on {
            self.perf_stats.reset();
        }
        let frame_timer = if perf_on { Some(PerfTimer::start()) } else { None };
        let mut lap = PerfTimer::start();

        self.surface.clear(Rgb::BLACK);
        let clear_ms = lap.lap_ms();

        let field = self.field_region();
        let initial = ParticleState::launch(0.0, self.midline(), self.params.initial_speed_mps);
        let screen_height = self.surface.height() as f64;

        let surface = &mut self.surface;
        let mut points = 0u32;
        let result = run_trajectory(initial, field, screen_height, |p| {
            surface.draw_point(p.x, p.y, POINT_RADIUS, Rgb::WHITE);
            points += 1;
        });
        let compute_ms = lap.lap_ms();

        self.draw_plates(&field);
        let draw_ms = lap.lap_ms();

        self.last_result = result;
        self.point_count = points;
        self.frame += 1;

        if let Some(t) = frame_timer {
            self.perf_stats.frame_ms = t.elapsed_ms();
            self.perf_stats.clear_ms = clear_ms;
            self.perf_stats.compute_ms = compute_ms;
            self.perf_stats.draw_ms = draw_ms;
            self.perf_stats.ticks = result.ticks;
            self.perf_stats.points_drawn = points;
            self.perf_stats.surface_pixels = self.surface.size() as u32;
        }
    }

    fn draw_plates(&mut self, field: &FieldRegion) {
        let mid = self.midline();
        let offset = field.plate_offset();
        let x0 = field.x_start as i32;
        let x1 = field.x_end as i32;
        for y in [mid + offset, mid - offset] {
            self.surface.draw_line(x0, y as i32, x1, y as i32, Rgb::YELLOW);
        }
    }

    pub fn last_result(&self) -> TrajectoryResult { self.last_result }

    pub fn distance_cm(&self) -> f64 { self.last_result.exit_distance_cm }

    pub fn height_cm(&self) -> f64 { self.last_result.exit_height_cm }

    /// Elapsed flight time as displayed (ps)
    pub fn time_ps(&self) -> f64 {
        self.last_result.elapsed_time * TIME_DISPLAY_SCALE
    }

    pub fn point_count(&self) -> u32 { self.point_count }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }
}
