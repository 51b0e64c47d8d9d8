//! Domain - constants and user-facing parameters

pub mod constants;
pub mod params;

pub use params::{parse_numeric_input, CrtParameters, DiffractionParameters, SimulationParameters};
