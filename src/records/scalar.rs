use crate::records::value::Value;

/// Case- and whitespace-insensitive test for the catalog's absent-value
/// sentinels ("unknown", "n/a").
pub fn is_unknown(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "unknown" | "n/a")
}

/// Best-effort float coercion.
///
/// Already-numeric values pass through (integers widen); strings that fail to
/// parse are returned unchanged. Failure is signaled by the value keeping its
/// original type, never by an error.
pub fn coerce_float(value: &Value) -> Value {
    match value {
        Value::Float(_) => value.clone(),
        Value::Int(number) => Value::Float(*number as f64),
        Value::String(raw) => match raw.trim().parse::<f64>() {
            Ok(parsed) => Value::Float(parsed),
            Err(_) => value.clone(),
        },
        _ => value.clone(),
    }
}

/// Best-effort integer coercion.
///
/// Already-integer values pass through; floats truncate toward zero; strings
/// that fail to parse are returned unchanged.
pub fn coerce_int(value: &Value) -> Value {
    match value {
        Value::Int(_) => value.clone(),
        Value::Float(number) => Value::Int(*number as i64),
        Value::String(raw) => match raw.trim().parse::<i64>() {
            Ok(parsed) => Value::Int(parsed),
            Err(_) => value.clone(),
        },
        _ => value.clone(),
    }
}

/// Split delimited text into an ordered list of strings.
///
/// Elements are not trimmed; callers that need trimmed input trim before
/// splitting.
pub fn split_list(value: &str, delimiter: &str) -> Value {
    Value::List(
        value
            .split(delimiter)
            .map(|element| Value::String(element.to_string()))
            .collect(),
    )
}
