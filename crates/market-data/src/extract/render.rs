use serde_json::{Number, Value};

/// Integral floats below this magnitude render without a fractional part.
const INTEGRAL_RENDER_LIMIT: f64 = 1e15;

/// Render a JSON scalar as a display price.
///
/// Numbers and numeric strings are usable; `null`, booleans, arrays, objects
/// and non-numeric strings are not.
pub fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => render_number(number),
        Value::String(text) => {
            let trimmed = text.trim();
            match trimmed.parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => Some(trimmed.to_string()),
                _ => None,
            }
        }
        _ => None,
    }
}

fn render_number(number: &Number) -> Option<String> {
    if let Some(n) = number.as_i64() {
        return Some(n.to_string());
    }
    if let Some(n) = number.as_u64() {
        return Some(n.to_string());
    }
    let n = number.as_f64()?;
    if !n.is_finite() {
        return None;
    }
    // 100.0 -> "100"
    if n.fract() == 0.0 && n.abs() < INTEGRAL_RENDER_LIMIT {
        return Some(format!("{}", n as i64));
    }
    Some(n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_numbers() {
        assert_eq!(render_scalar(&json!(191.23)), Some("191.23".to_string()));
        assert_eq!(render_scalar(&json!(100)), Some("100".to_string()));
        assert_eq!(render_scalar(&json!(100.0)), Some("100".to_string()));
        assert_eq!(render_scalar(&json!(-0.5)), Some("-0.5".to_string()));
        assert_eq!(render_scalar(&json!(u64::MAX)), Some(u64::MAX.to_string()));
    }

    #[test]
    fn test_render_strings() {
        assert_eq!(render_scalar(&json!("42")), Some("42".to_string()));
        assert_eq!(render_scalar(&json!("")), None);
        assert_eq!(render_scalar(&json!("n/a")), None);
        assert_eq!(render_scalar(&json!("NaN")), None);
    }

    #[test]
    fn test_render_non_scalars() {
        assert_eq!(render_scalar(&Value::Null), None);
        assert_eq!(render_scalar(&json!(false)), None);
        assert_eq!(render_scalar(&json!([1])), None);
        assert_eq!(render_scalar(&json!({ "close": 1 })), None);
    }
}
