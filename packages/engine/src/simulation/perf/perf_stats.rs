use wasm_bindgen::prelude::*;

/// Per-frame timings and counters. All zero while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) frame_ms: f64,
    pub(super) clear_ms: f64,
    pub(super) compute_ms: f64,
    pub(super) draw_ms: f64,
    pub(super) ticks: u32,
    pub(super) points_drawn: u32,
    pub(super) bands_drawn: u32,
    pub(super) surface_pixels: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    /// Time spent clearing the surface and drawing static panels
    #[wasm_bindgen(getter)]
    pub fn clear_ms(&self) -> f64 { self.clear_ms }
    /// Integration (CRT, interleaved with point drawing) or band layout (diffraction)
    #[wasm_bindgen(getter)]
    pub fn compute_ms(&self) -> f64 { self.compute_ms }
    #[wasm_bindgen(getter)]
    pub fn draw_ms(&self) -> f64 { self.draw_ms }
    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> u32 { self.ticks }
    #[wasm_bindgen(getter)]
    pub fn points_drawn(&self) -> u32 { self.points_drawn }
    #[wasm_bindgen(getter)]
    pub fn bands_drawn(&self) -> u32 { self.bands_drawn }
    #[wasm_bindgen(getter)]
    pub fn surface_pixels(&self) -> u32 { self.surface_pixels }
}
