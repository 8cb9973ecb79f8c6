//! Lenient deserializers for loosely-typed pattern JSON.
//!
//! Library files are hand-edited or LLM-synthesized, so a collection field
//! may be missing, `null`, a bare string, or an array with stray non-string
//! items. None of these fail deserialization; they are coerced and logged.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Coerce a JSON value into a list of strings.
pub(crate) fn coerce_string_list(field: &str, value: Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(s) => {
            if s.trim().is_empty() {
                Vec::new()
            } else {
                vec![s]
            }
        }
        Value::Array(items) => {
            let total = items.len();
            let kept: Vec<String> = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect();
            if kept.len() != total {
                warn!(
                    field,
                    dropped = total - kept.len(),
                    "dropped non-string items from pattern collection"
                );
            }
            kept
        }
        other => {
            warn!(field, found = %json_type(&other), "malformed pattern collection coerced to empty");
            Vec::new()
        }
    }
}

/// Coerce a JSON scalar into an optional string.
pub(crate) fn coerce_string(field: &str, value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => {
            warn!(field, found = %json_type(&other), "malformed pattern field ignored");
            None
        }
    }
}

/// Coerce a JSON number or numeric string into an f64.
pub(crate) fn coerce_f64(field: &str, value: Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(field, value = %s, "non-numeric pattern field ignored");
                None
            }
        },
        other => {
            warn!(field, found = %json_type(&other), "malformed pattern field ignored");
            None
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn raw<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null))
}

macro_rules! lenient_field {
    ($fn_name:ident, $field:literal, $coerce:ident, $out:ty) => {
        pub(crate) fn $fn_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<$out, D::Error> {
            Ok($coerce($field, raw(deserializer)?))
        }
    };
}

lenient_field!(tech_stack, "tech_stack", coerce_string_list, Vec<String>);
lenient_field!(pattern_type, "pattern_type", coerce_string_list, Vec<String>);
lenient_field!(compliance, "compliance_requirements", coerce_string_list, Vec<String>);
lenient_field!(integrations, "integrations", coerce_string_list, Vec<String>);
lenient_field!(input_requirements, "input_requirements", coerce_string_list, Vec<String>);
lenient_field!(domain, "domain", coerce_string, Option<String>);
lenient_field!(feasibility, "feasibility", coerce_string, Option<String>);
lenient_field!(complexity, "complexity", coerce_string, Option<String>);
lenient_field!(confidence, "confidence_score", coerce_f64, Option<f64>);

pub(crate) fn pattern_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(coerce_string("pattern_id", raw(deserializer)?).unwrap_or_default())
}

pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(coerce_string("text", raw(deserializer)?).unwrap_or_default())
}
