use serde_json::Value;

/// Fields checked, in order, for a human-readable error.
const MESSAGE_FIELDS: [&str; 4] = ["message", "errors", "error", "detail"];

/// Pull a displayable message out of a JSON error body.
///
/// Strings are returned exactly as sent; only empty ones are skipped.
/// Returns None when the body is not JSON or carries no usable message.
pub fn extract_error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;

    MESSAGE_FIELDS
        .iter()
        .find_map(|field| value.get(field).and_then(flatten))
}

fn flatten(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => (!s.is_empty()).then(|| s.clone()),
        Value::Array(items) => join(items.iter().filter_map(flatten)),
        Value::Object(map) => match map.get("message").and_then(flatten) {
            Some(message) => Some(message),
            None => join(map.values().filter_map(flatten)),
        },
        _ => None,
    }
}

fn join(parts: impl Iterator<Item = String>) -> Option<String> {
    let parts: Vec<String> = parts.collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}
