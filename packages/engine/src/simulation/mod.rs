//! Simulation - per-frame drivers for the two visualizers
//!
//! Each core owns its pixel surface and parameters. The host pushes parameter
//! edits, calls `render_frame()` once per frame, then reads the results and
//! blits the surface. Nothing is carried between frames except the
//! parameters: every frame recomputes the trajectory / fringe layout from
//! scratch.
//!
//! - `crt/`         - electron deflection between charged plates
//! - `diffraction/` - grating fringe bands
//! - `settings/`    - text-field and JSON parameter intake
//! - `perf/`        - optional frame timing

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "settings/settings.rs"]
mod settings;
#[path = "crt/crt.rs"]
mod crt;
#[path = "diffraction/diffraction.rs"]
mod diffraction;
mod facade;

pub use crt::CrtSimCore;
pub use diffraction::DiffractionSimCore;
pub use facade::{CrtSim, DiffractionSim};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
