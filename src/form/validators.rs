//! Stock validators for common field rules.

use serde_json::Value;

use super::Validator;

/// Value must be present and non-empty (non-empty string, non-null).
pub fn required(label: &str) -> Validator {
    let message = format!("{label} is required");
    Box::new(move |value: &Value| match value {
        Value::Null => Err(message.clone()),
        Value::String(s) if s.trim().is_empty() => Err(message.clone()),
        _ => Ok(()),
    })
}

/// Numeric value that must be zero or greater.
pub fn non_negative_number(label: &str) -> Validator {
    let message = format!("{label} must be zero or greater");
    Box::new(move |value: &Value| match value.as_f64() {
        Some(n) if n >= 0.0 => Ok(()),
        _ => Err(message.clone()),
    })
}

/// String value capped at `max` characters.
pub fn max_length(label: &str, max: usize) -> Validator {
    let message = format!("{label} must be at most {max} characters");
    Box::new(move |value: &Value| match value.as_str() {
        Some(s) if s.chars().count() <= max => Ok(()),
        Some(_) => Err(message.clone()),
        None => Err(message.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_rejects_blank() {
        let validator = required("Email");
        assert!(validator(&json!("a@b.test")).is_ok());
        assert_eq!(
            validator(&json!("  ")).unwrap_err(),
            "Email is required"
        );
        assert!(validator(&Value::Null).is_err());
    }

    #[test]
    fn non_negative_accepts_zero() {
        let validator = non_negative_number("Amount");
        assert!(validator(&json!(0)).is_ok());
        assert!(validator(&json!(12.5)).is_ok());
        assert!(validator(&json!(-1)).is_err());
        assert!(validator(&json!("nan")).is_err());
    }

    #[test]
    fn max_length_counts_chars() {
        let validator = max_length("Note", 3);
        assert!(validator(&json!("abc")).is_ok());
        assert!(validator(&json!("abcd")).is_err());
    }
}
