use crate::types::TotalFootprint;
use serde_json::Value;

/// Reads a JSON number, or a string holding a number, as a finite `f64`.
///
/// Everything else (`null`, booleans, empty or non-numeric strings, non-finite values) is
/// treated as "no data" and returns `None`.
pub fn parse_numeric_like(value: &Value) -> Option<TotalFootprint> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    };

    parsed.filter(|v| v.is_finite())
}
