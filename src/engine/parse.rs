//! Strict parsing of the model's reply.
//!
//! The prompt asks for exactly one JSON object. Anything else is reported as
//! [`PipelineError::MalformedModelOutput`]; no attempt is made to dig an
//! object out of surrounding prose or code fences. Missing or `null` keys are
//! fine here and get their defaults in [`crate::post`]; a known key holding
//! the wrong JSON type is not. Error text names the key and the type it held,
//! never the value.

use serde_json::{Map, Value};

use crate::error::PipelineError;

/// A JSON object as returned by the model; known keys are type-checked,
/// unknown keys are kept as-is.
pub type ModelOutput = Map<String, Value>;

pub fn parse_model_output(raw: &str) -> Result<ModelOutput, PipelineError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| PipelineError::MalformedModelOutput(format!("not valid JSON ({e})")))?;

    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(PipelineError::MalformedModelOutput(format!(
                "expected a JSON object, got {}",
                kind(&other)
            )));
        }
    };

    check_field(&map, "news_sources", "an array of strings", |v| {
        v.as_array().is_some_and(|items| items.iter().all(Value::is_string))
    })?;
    check_field(&map, "linkedin_post", "a string", Value::is_string)?;
    check_field(&map, "image_suggestion", "a string", Value::is_string)?;

    Ok(map)
}

fn check_field(
    map: &ModelOutput,
    key: &str,
    expected: &str,
    accepts: impl Fn(&Value) -> bool,
) -> Result<(), PipelineError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(()),
        Some(value) if accepts(value) => Ok(()),
        Some(value) => Err(PipelineError::MalformedModelOutput(format!(
            "field {key} should be {expected}, got {}",
            kind(value)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
