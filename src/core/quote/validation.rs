//! Field-level validation for quote submissions

use super::types::{FieldErrors, QuoteSubmission, ServiceSelection};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Root path used when the payload itself is malformed
const ROOT: &str = "";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Length bounds for a free-text field, counted in characters before trimming
struct TextRule {
    field: &'static str,
    min: usize,
    max: usize,
    too_short: &'static str,
    too_long: &'static str,
}

const NAME: TextRule = TextRule {
    field: "name",
    min: 2,
    max: 80,
    too_short: "Name must be at least 2 characters",
    too_long: "Name must not exceed 80 characters",
};

const PHONE: TextRule = TextRule {
    field: "phone",
    min: 7,
    max: 30,
    too_short: "Phone number must be at least 7 characters",
    too_long: "Phone number must not exceed 30 characters",
};

const ADDRESS: TextRule = TextRule {
    field: "address",
    min: 5,
    max: 200,
    too_short: "Address must be at least 5 characters",
    too_long: "Address must not exceed 200 characters",
};

const DETAILS: TextRule = TextRule {
    field: "details",
    min: 10,
    max: 2000,
    too_short: "Project details must be at least 10 characters",
    too_long: "Project details must not exceed 2000 characters",
};

const INVALID_EMAIL: &str = "Please enter a valid email address";
const NO_SERVICE: &str = "Please select at least one service";
const BOT_DETECTED: &str = "Invalid submission detected";

/// Optional honeypot alias; must be a string when present
const HONEYPOT: &str = "honeypot";

/// Validate and normalize a raw JSON payload.
///
/// All field problems are collected before returning, so a single response
/// can report every offending field.
pub fn validate_submission(payload: &Value) -> Result<QuoteSubmission, FieldErrors> {
    let mut errors = FieldErrors::new();

    let Some(object) = payload.as_object() else {
        errors.add(ROOT, type_mismatch("object", payload));
        return Err(errors);
    };

    let name = text(object, &NAME, &mut errors);
    let email = email(object, &mut errors);
    let phone = text(object, &PHONE, &mut errors);
    let address = text(object, &ADDRESS, &mut errors);
    let landscaping = flag(object, "landscaping", &mut errors);
    let outdoor_construction = flag(object, "outdoorConstruction", &mut errors);
    let details = text(object, &DETAILS, &mut errors);
    honeypot(object, &mut errors);

    // Cross-field rule only applies once both flags are well-typed.
    if let (Some(false), Some(false)) = (landscaping, outdoor_construction) {
        errors.add("landscaping", NO_SERVICE);
    }

    match (
        name,
        email,
        phone,
        address,
        landscaping,
        outdoor_construction,
        details,
    ) {
        (
            Some(name),
            Some(email),
            Some(phone),
            Some(address),
            Some(landscaping),
            Some(outdoor_construction),
            Some(details),
        ) if errors.is_empty() => Ok(QuoteSubmission {
            name,
            email,
            phone,
            address,
            services: ServiceSelection::new(landscaping, outdoor_construction),
            details,
        }),
        _ => Err(errors),
    }
}

fn string_field(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match object.get(field) {
        None => {
            errors.add(field, "Required");
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.add(field, type_mismatch("string", other));
            None
        }
    }
}

fn text(
    object: &Map<String, Value>,
    rule: &TextRule,
    errors: &mut FieldErrors,
) -> Option<String> {
    let value = string_field(object, rule.field, errors)?;
    let len = value.chars().count();
    if len < rule.min {
        errors.add(rule.field, rule.too_short);
        return None;
    }
    if len > rule.max {
        errors.add(rule.field, rule.too_long);
        return None;
    }
    Some(value.trim().to_string())
}

fn email(object: &Map<String, Value>, errors: &mut FieldErrors) -> Option<String> {
    let value = string_field(object, "email", errors)?;
    if !is_valid_email(&value) {
        errors.add("email", INVALID_EMAIL);
        return None;
    }
    Some(value.to_lowercase().trim().to_string())
}

fn honeypot(object: &Map<String, Value>, errors: &mut FieldErrors) {
    match object.get(HONEYPOT) {
        None => {}
        Some(Value::String(s)) if s.is_empty() => {}
        Some(Value::String(_)) => errors.add(HONEYPOT, BOT_DETECTED),
        Some(other) => errors.add(HONEYPOT, type_mismatch("string", other)),
    }
}

fn flag(object: &Map<String, Value>, field: &str, errors: &mut FieldErrors) -> Option<bool> {
    match object.get(field) {
        None => {
            errors.add(field, "Required");
            None
        }
        Some(Value::Bool(b)) => Some(*b),
        Some(other) => {
            errors.add(field, type_mismatch("boolean", other));
            None
        }
    }
}

/// Email format check; the regex crate has no lookahead so the dot rules are explicit.
fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

fn type_mismatch(expected: &str, value: &Value) -> String {
    format!("Expected {}, received {}", expected, json_type(value))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
