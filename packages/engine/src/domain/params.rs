//! Simulation parameters
//!
//! Populated either from a JSON document or one text field at a time. The
//! numeric cores only ever see validated values.

use serde::{Deserialize, Serialize};

use super::constants::{
    ELECTRON_CHARGE_C, ELECTRON_MASS_KG, FIELD_GAP_DIVISOR, FRINGE_PIXEL_SCALE,
    GRATING_SPACING_SCALE, PIXELS_PER_CM, WAVELENGTH_SCALE,
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrtParameters {
    pub plate_length_cm: f64,
    pub plate_separation_cm: f64,
    pub potential_difference_v: f64,
    pub initial_speed_mps: f64,
}

impl Default for CrtParameters {
    fn default() -> Self {
        Self {
            plate_length_cm: 1.0,
            plate_separation_cm: 1.0,
            potential_difference_v: 100.0,
            initial_speed_mps: 1e7,
        }
    }
}

impl CrtParameters {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.plate_length_cm.is_finite() && self.plate_length_cm > 0.0) {
            return Err(format!("plate length must be positive, got {}", self.plate_length_cm));
        }
        if !(self.plate_separation_cm.is_finite() && self.plate_separation_cm > 0.0) {
            return Err(format!(
                "plate separation must be positive, got {}",
                self.plate_separation_cm
            ));
        }
        if !self.potential_difference_v.is_finite() {
            return Err(format!(
                "potential difference must be finite, got {}",
                self.potential_difference_v
            ));
        }
        if !(self.initial_speed_mps.is_finite() && self.initial_speed_mps > 0.0) {
            return Err(format!("initial speed must be positive, got {}", self.initial_speed_mps));
        }
        Ok(())
    }

    #[inline]
    pub fn plate_length_px(&self) -> f64 {
        self.plate_length_cm * PIXELS_PER_CM
    }

    #[inline]
    pub fn plate_separation_px(&self) -> f64 {
        self.plate_separation_cm * PIXELS_PER_CM
    }

    /// a = qE / m with E = V / (gap_px / 10000)
    pub fn acceleration(&self) -> f64 {
        let field = self.potential_difference_v / (self.plate_separation_px() / FIELD_GAP_DIVISOR);
        ELECTRON_CHARGE_C * field / ELECTRON_MASS_KG
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffractionParameters {
    pub wavelength_nm: f64,
    pub grating_spacing_nm: f64,
    pub screen_distance_m: f64,
}

impl Default for DiffractionParameters {
    fn default() -> Self {
        Self {
            wavelength_nm: 500.0,
            grating_spacing_nm: 20.0,
            screen_distance_m: 0.1,
        }
    }
}

impl DiffractionParameters {
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("wavelength", self.wavelength_nm),
            ("grating spacing", self.grating_spacing_nm),
            ("screen distance", self.screen_distance_m),
        ];
        for (name, v) in fields {
            if !(v.is_finite() && v > 0.0) {
                return Err(format!("{} must be positive, got {}", name, v));
            }
        }
        Ok(())
    }

    /// Width of one band in pixels: (λ / L) · d, scaled to the screen
    pub fn fringe_spacing(&self) -> f64 {
        let wavelength = self.wavelength_nm * WAVELENGTH_SCALE;
        let spacing = self.grating_spacing_nm * GRATING_SPACING_SCALE;
        (wavelength / self.screen_distance_m) * spacing * FRINGE_PIXEL_SCALE
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    pub crt: CrtParameters,
    pub diffraction: DiffractionParameters,
}

impl SimulationParameters {
    /// Parse a parameter document; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, String> {
        let params = Self::parse_json(json)?;
        params.crt.validate()?;
        params.diffraction.validate()?;
        Ok(params)
    }

    /// Parse without validating either section
    pub fn parse_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Wrap one section as `{"<key>": {...}}`, the shape `from_json` reads back
fn section_json<T: Serialize>(key: &str, section: &T) -> String {
    let Ok(value) = serde_json::to_value(section) else {
        return "{}".to_string();
    };
    let mut doc = serde_json::Map::new();
    doc.insert(key.to_string(), value);
    serde_json::Value::Object(doc).to_string()
}

impl CrtParameters {
    pub fn to_document_json(&self) -> String {
        section_json("crt", self)
    }
}

impl DiffractionParameters {
    pub fn to_document_json(&self) -> String {
        section_json("diffraction", self)
    }
}

/// Parse one edited text field.
///
/// `None` means the edit is ignored and the previous value stays: empty text,
/// anything that is not a finite number, and a literal zero.
pub fn parse_numeric_input(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    if !value.is_finite() || value == 0.0 {
        return None;
    }
    Some(value)
}
