use std::collections::HashMap;

use serde_json::Value;

/// Parse a raw form body based on a content type hint.
pub fn parse_body(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<HashMap<String, String>, String> {
    let ct = content_type.unwrap_or("application/x-www-form-urlencoded");

    if ct.contains("application/json") {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))?;
        flatten_object(value)
    } else if ct.contains("application/x-www-form-urlencoded") {
        // Try JSON first so piped JSON bodies keep working without a hint.
        match serde_json::from_slice::<Value>(body) {
            Ok(value) if value.is_object() => flatten_object(value),
            _ => parse_form_urlencoded(body),
        }
    } else {
        Err(format!("Unsupported content type: {ct}"))
    }
}

fn flatten_object(value: Value) -> Result<HashMap<String, String>, String> {
    let Value::Object(map) = value else {
        return Err("Expected a JSON object".to_string());
    };

    let mut out = HashMap::new();
    for (key, value) in map {
        match value {
            Value::String(s) => {
                out.insert(key, s);
            }
            Value::Null => {}
            other => {
                out.insert(key, other.to_string());
            }
        }
    }
    Ok(out)
}

fn parse_form_urlencoded(body: &[u8]) -> Result<HashMap<String, String>, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;
    Ok(form_urlencoded::parse(body_str.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect())
}
