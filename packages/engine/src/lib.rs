//! Physlab Engine - CRT deflection and diffraction grating visualizers in WASM
//!
//! Architecture:
//! - core/        - Colors, rects, the ABGR pixel surface, console logging
//! - domain/      - Physical constants, unit scalings, simulation parameters
//! - systems/     - Numeric cores: trajectory integrator, gradient fill, fringe layout
//! - simulation/  - Per-frame drivers and the JS-facing facades

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::log::log(&format!("Physlab engine {} initialized", env!("CARGO_PKG_VERSION")));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{PixelSurface, Rect, Rgb};
pub use domain::{CrtParameters, DiffractionParameters, SimulationParameters};
pub use simulation::{CrtSim, CrtSimCore, DiffractionSim, DiffractionSimCore, PerfStats};
pub use systems::{fill_gradient, step_trajectory, FieldRegion, FringePattern, ParticleState};

// Screen layout constants for JS
#[wasm_bindgen]
pub fn screen_width() -> u32 { domain::constants::SCREEN_WIDTH }
#[wasm_bindgen]
pub fn screen_height() -> u32 { domain::constants::SCREEN_HEIGHT }
#[wasm_bindgen]
pub fn electron_mass_kg() -> f64 { domain::constants::ELECTRON_MASS_KG }
#[wasm_bindgen]
pub fn electron_charge_c() -> f64 { domain::constants::ELECTRON_CHARGE_C }
