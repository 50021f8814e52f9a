use crate::core::OptionValue;
use crate::error::{StudioError, StudioResult};

use super::control::{ControlDescriptor, ControlType};

/// Converts the raw text a form widget emits into the value stored for `control`.
///
/// Numeric inputs are clamped into the control's constraints; select inputs
/// resolve to the typed value of the matching option.
pub fn coerce_input(control: &ControlDescriptor, raw: &str) -> StudioResult<OptionValue> {
    let invalid = |reason: String| StudioError::InvalidInput {
        control: control.id.clone(),
        reason,
    };

    match control.control_type {
        ControlType::Toggle => parse_toggle(raw)
            .map(OptionValue::Bool)
            .ok_or_else(|| invalid(format!("`{raw}` is not a boolean"))),
        ControlType::Number | ControlType::Slider => {
            let value: f64 = raw
                .trim()
                .parse()
                .map_err(|_| invalid(format!("`{raw}` is not a number")))?;
            if !value.is_finite() {
                return Err(invalid("number must be finite".to_owned()));
            }
            let value = control
                .constraints
                .map_or(value, |constraints| constraints.clamp(value));
            Ok(OptionValue::from(value))
        }
        ControlType::Text | ControlType::Color => Ok(OptionValue::from(raw)),
        ControlType::Select => control
            .options
            .iter()
            .find(|option| option.value.display_string() == raw)
            .map(|option| option.value.clone())
            .ok_or_else(|| invalid(format!("`{raw}` is not one of the control options"))),
        ControlType::Json => serde_json::from_str::<serde_json::Value>(raw)
            .map(OptionValue::from)
            .map_err(|e| invalid(format!("invalid json: {e}"))),
        ControlType::Button => control
            .default_value
            .clone()
            .ok_or_else(|| invalid("button control carries no value".to_owned())),
    }
}

fn parse_toggle(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Some(true),
        "false" | "off" | "0" => Some(false),
        _ => None,
    }
}
