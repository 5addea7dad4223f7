//! Style payload and prop value helpers.
//!
//! Style values are opaque to the resolver: an inline-style map, a class-name
//! string, a list of class names, or anything else the rendering layer
//! understands. Props are a flat snapshot of the element's current state.
//!
//! # Example
//!
//! ```
//! use seamstress::types::is_truthy;
//! use serde_json::json;
//!
//! assert!(is_truthy(&json!(true)));
//! assert!(is_truthy(&json!("on")));
//! assert!(!is_truthy(&json!(0)));
//! assert!(!is_truthy(&json!("")));
//! ```

use serde_json::Value;

/// A style payload attached to a selector.
pub type StyleValue = Value;

/// A flat mapping from prop name to its current value.
///
/// Keys keep insertion order.
pub type Props = serde_json::Map<String, Value>;

/// Check whether a prop value counts as "on" for a value-less `[prop]` condition.
///
/// `null`, `false`, zero, NaN and the empty string are falsy. Every other
/// value, including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Compare two prop values for condition equality.
///
/// Numbers compare by numeric value, so `42` equals `42.0`. Everything else
/// uses structural equality.
pub fn loosely_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("false")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn numbers_compare_numerically() {
        assert!(loosely_equal(&json!(42), &json!(42.0)));
        assert!(!loosely_equal(&json!(42), &json!("42")));
        assert!(loosely_equal(&json!("a"), &json!("a")));
    }
}
