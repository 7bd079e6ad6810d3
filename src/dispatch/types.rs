//! The text/number variant and its dispatcher.

/// A value that is either text or a number.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Text(String),
    Number(f64),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

/// Returns the length of text in UTF-16 code units, or twice the value for
/// numbers.
///
/// Characters outside the Basic Multilingual Plane count as two units.
///
/// # Examples
///
/// ```
/// use u_basics::dispatch::{process_value, Value};
///
/// assert_eq!(process_value(&Value::from("abc")), 3.0);
/// assert_eq!(process_value(&Value::from(5)), 10.0);
/// assert_eq!(process_value(&Value::from("123")), 3.0);
/// ```
pub fn process_value(value: &Value) -> f64 {
    match value {
        Value::Text(s) => s.encode_utf16().count() as f64,
        Value::Number(n) => n * 2.0,
    }
}
