//! Honeypot-based bot filtering

use serde_json::Value;

/// Fixed alias checked in addition to the configured field name
pub const HONEYPOT_ALIAS: &str = "honeypot";

/// Detects submissions where a hidden form field was filled in
#[derive(Debug, Clone)]
pub struct BotFilter {
    field: String,
}

impl BotFilter {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// True when either the configured field or the alias carries a value
    pub fn is_bot(&self, payload: &Value) -> bool {
        let Some(object) = payload.as_object() else {
            return false;
        };
        [self.field.as_str(), HONEYPOT_ALIAS]
            .iter()
            .filter_map(|key| object.get(*key))
            .any(is_filled)
    }
}

/// JSON truthiness: null, false, "" and 0 count as empty.
fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::Array(_) | Value::Object(_) => true,
    }
}
