use crate::core::log;
use crate::domain::{parse_numeric_input, SimulationParameters};

/// Apply one edited text field to a copy of `params`; keep it only if the
/// text parses and the result validates. Otherwise the previous value stays.
pub(super) fn apply_text_field<T: Copy>(
    params: &mut T,
    text: &str,
    label: &str,
    set: impl FnOnce(&mut T, f64),
    validate: impl FnOnce(&T) -> Result<(), String>,
) -> bool {
    let Some(value) = parse_numeric_input(text) else {
        return false;
    };

    let mut candidate = *params;
    set(&mut candidate, value);
    match validate(&candidate) {
        Ok(()) => {
            *params = candidate;
            true
        }
        Err(e) => {
            log::warn(&format!("ignoring {} = {:?}: {}", label, text, e));
            false
        }
    }
}

/// Pull one section out of a parameter document. Only that section is
/// validated; the rest of the document is ignored.
pub(super) fn parse_parameters_section<T>(
    json: &str,
    section: impl FnOnce(SimulationParameters) -> T,
    validate: impl FnOnce(&T) -> Result<(), String>,
) -> Result<T, String> {
    let parsed = SimulationParameters::parse_json(json).and_then(|doc| {
        let value = section(doc);
        validate(&value)?;
        Ok(value)
    });
    parsed.map_err(|e| {
        log::warn(&format!("rejected parameter document: {}", e));
        e
    })
}
