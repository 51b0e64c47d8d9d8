//! Physical constants and the unit scalings both visualizers were tuned with.
//!
//! The scaling factors are empirical: changing any of them changes every
//! reported distance, height and time, so they stay exactly as tuned.

use crate::core::Rect;

// === Screen ===
pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;

// === Electron ===
pub const ELECTRON_MASS_KG: f64 = 9.11e-31;
pub const ELECTRON_CHARGE_C: f64 = 1.602e-19;

// === CRT units ===

/// Screen pixels per centimetre of plate geometry
pub const PIXELS_PER_CM: f64 = 200.0;

/// Left edge of the plates, in pixels from the electron gun
pub const PLATE_X_OFFSET: f64 = 20.0;

/// Plate gap (px) divided by this gives the separation used for field strength
pub const FIELD_GAP_DIVISOR: f64 = 10_000.0;

/// Internal clock advance per integration tick
pub const TIME_STEP_SECONDS: f64 = 1e-5;

/// `vy += acceleration * t / VELOCITY_SCALE` while inside the plates
pub const VELOCITY_SCALE: f64 = 1e13;

/// `x += vx * t / POSITION_SCALE`, `y -= vy * t / POSITION_SCALE`
pub const POSITION_SCALE: f64 = 1e9;

/// Smallest tick budget, and the whole budget when the particle makes no
/// horizontal progress (zero speed never exits)
pub const MAX_TICKS: u32 = 2_000_000;

/// Largest tick budget, however slow the particle
pub const TICK_CEILING: u32 = 50_000_000;

/// Reported time is `elapsed_time * TIME_DISPLAY_SCALE` picoseconds
pub const TIME_DISPLAY_SCALE: f64 = 1000.0;

/// Radius of each drawn trajectory point
pub const POINT_RADIUS: i32 = 2;

// === Diffraction units ===
pub const WAVELENGTH_SCALE: f64 = 1e-9;
pub const GRATING_SPACING_SCALE: f64 = 1e-6;
pub const FRINGE_PIXEL_SCALE: f64 = 1e12;

/// Narrowest band the layout will produce
pub const MIN_FRINGE_SPACING: f64 = 1.0;

pub const BAND_TOP: i32 = 200;
pub const BAND_HEIGHT: i32 = 379;

/// White frame behind the simulation area
pub const SIM_BORDER_RECT: Rect = Rect::new(0, 197, 800, 386);
pub const SIM_AREA_RECT: Rect = Rect::new(20, 200, 760, 380);
