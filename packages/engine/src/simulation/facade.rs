use wasm_bindgen::prelude::*;

use crate::domain::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};

use super::perf_stats::PerfStats;
use super::{CrtSimCore, DiffractionSimCore};

#[wasm_bindgen]
pub struct CrtSim {
    core: CrtSimCore,
}

#[wasm_bindgen]
impl CrtSim {
    /// Create a simulation drawing into a `width` x `height` surface
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: CrtSimCore::new(width, height),
        }
    }

    /// 800 x 600, the layout the plate geometry was tuned for
    #[wasm_bindgen(js_name = withDefaultScreen)]
    pub fn with_default_screen() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Returns false when the text was ignored (previous value kept)
    pub fn set_plate_length(&mut self, text: &str) -> bool {
        self.core.set_plate_length_text(text)
    }

    pub fn set_plate_separation(&mut self, text: &str) -> bool {
        self.core.set_plate_separation_text(text)
    }

    pub fn set_potential_difference(&mut self, text: &str) -> bool {
        self.core.set_potential_difference_text(text)
    }

    pub fn set_initial_speed(&mut self, text: &str) -> bool {
        self.core.set_initial_speed_text(text)
    }

    pub fn load_parameters(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_parameters_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Parameter document accepted by `load_parameters`
    pub fn parameters_json(&self) -> String {
        self.core.parameters().to_document_json()
    }

    pub fn render_frame(&mut self) {
        self.core.render_frame();
    }

    /// Horizontal distance travelled from the plate edge (cm)
    pub fn distance_cm(&self) -> f64 { self.core.distance_cm() }

    /// Exit height (cm)
    pub fn height_cm(&self) -> f64 { self.core.height_cm() }

    pub fn time_ps(&self) -> f64 { self.core.time_ps() }

    pub fn point_count(&self) -> u32 { self.core.point_count() }

    /// "hit_plate", "left_field", "left_screen" or "tick_limit"
    pub fn exit_kind(&self) -> String {
        self.core.last_result().exit.as_str().to_string()
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.surface().colors_ptr()
    }

    pub fn colors_len_elements(&self) -> usize {
        self.core.surface().colors_len_elements()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.surface().colors_len_bytes()
    }
}

#[wasm_bindgen]
pub struct DiffractionSim {
    core: DiffractionSimCore,
}

#[wasm_bindgen]
impl DiffractionSim {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: DiffractionSimCore::new(width, height),
        }
    }

    #[wasm_bindgen(js_name = withDefaultScreen)]
    pub fn with_default_screen() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn set_wavelength(&mut self, text: &str) -> bool {
        self.core.set_wavelength_text(text)
    }

    pub fn set_grating_spacing(&mut self, text: &str) -> bool {
        self.core.set_grating_spacing_text(text)
    }

    pub fn set_screen_distance(&mut self, text: &str) -> bool {
        self.core.set_screen_distance_text(text)
    }

    pub fn load_parameters(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_parameters_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn parameters_json(&self) -> String {
        self.core.parameters().to_document_json()
    }

    pub fn render_frame(&mut self) {
        self.core.render_frame();
    }

    /// Band width for the current parameters (px)
    pub fn fringe_spacing(&self) -> f64 { self.core.fringe_spacing() }

    pub fn band_count(&self) -> usize { self.core.band_count() }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.surface().colors_ptr()
    }

    pub fn colors_len_elements(&self) -> usize {
        self.core.surface().colors_len_elements()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.surface().colors_len_bytes()
    }
}

// Native hosts and tests read the surface directly
impl CrtSim {
    pub fn core(&self) -> &CrtSimCore { &self.core }
}

impl DiffractionSim {
    pub fn core(&self) -> &DiffractionSimCore { &self.core }
}
