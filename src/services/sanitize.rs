//! Input sanitization for raw laudo field maps.
//!
//! Sanitization is total: it never fails and never drops information the
//! validator needs. The plate rule is the canonical one for every caller
//! (preview and authoritative path alike): uppercase, then strip only
//! whitespace and hyphens, so foreign characters survive to be rejected
//! by format validation.

use serde_json::{Map, Value};

/// Fields coerced to numbers when they arrive as numeric strings.
const NUMERIC_FIELDS: &[&str] = &["pinturaEsp", "kmObd"];

/// Sanitize a raw field map.
///
/// - trims every string value
/// - normalizes `placa` and `vin` (uppercase, whitespace/hyphens removed)
/// - coerces `pinturaEsp`/`kmObd` numeric strings to JSON numbers; empty
///   or null values are removed (absent stays absent, never zero);
///   unparsable non-empty strings are left for the validator to reject
pub fn sanitize(raw: &Value) -> Value {
    let Some(obj) = raw.as_object() else {
        return Value::Object(Map::new());
    };

    let mut out = Map::with_capacity(obj.len());

    for (key, value) in obj {
        let sanitized = match value {
            Value::String(s) => Value::String(s.trim().to_string()),
            other => other.clone(),
        };
        out.insert(key.clone(), sanitized);
    }

    if let Some(Value::String(placa)) = out.get("placa") {
        let normalized = normalize_identifier(placa);
        out.insert("placa".to_string(), Value::String(normalized));
    }

    if let Some(Value::String(vin)) = out.get("vin") {
        let normalized = normalize_identifier(vin);
        out.insert("vin".to_string(), Value::String(normalized));
    }

    for field in NUMERIC_FIELDS {
        coerce_numeric(&mut out, field);
    }

    Value::Object(out)
}

/// Uppercase and remove whitespace and hyphens, preserving everything else.
fn normalize_identifier(s: &str) -> String {
    s.to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Coerce a numeric field in place. `kmObd` is truncated to an integer to
/// match its storage type; `pinturaEsp` stays fractional.
fn coerce_numeric(map: &mut Map<String, Value>, field: &str) {
    let Some(value) = map.get(field) else {
        return;
    };

    match value {
        Value::Null => {
            map.remove(field);
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                map.remove(field);
            } else if let Ok(n) = trimmed.parse::<f64>() {
                map.insert(field.to_string(), number_value(field, n));
            }
            // unparsable non-empty string stays for the validator
        }
        Value::Number(n) => {
            if field == "kmObd" {
                if let Some(f) = n.as_f64() {
                    map.insert(field.to_string(), number_value(field, f));
                }
            }
        }
        _ => {}
    }
}

fn number_value(field: &str, n: f64) -> Value {
    if field == "kmObd" {
        Value::from(n.trunc() as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}
