use std::collections::HashMap;

use thiserror::Error;

/// Normalized field key (e.g. `employee_name`) to the value the user typed.
pub type FieldValues = HashMap<String, String>;

#[derive(Debug, Error)]
pub enum FieldValuesError {
    #[error("Invalid field values JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Field values must be a JSON object")]
    NotAnObject,

    #[error("Field '{0}' must be a string, number or boolean")]
    UnsupportedValue(String),
}

/// Parse a flat JSON object into field values.
///
/// Numbers and booleans are accepted and stored in their JSON text form,
/// since form inputs with `type="number"` still submit plain text.
pub fn field_values_from_json(json: &str) -> Result<FieldValues, FieldValuesError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let object = value.as_object().ok_or(FieldValuesError::NotAnObject)?;

    object
        .iter()
        .map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => return Err(FieldValuesError::UnsupportedValue(key.clone())),
            };
            Ok((key.clone(), text))
        })
        .collect()
}
