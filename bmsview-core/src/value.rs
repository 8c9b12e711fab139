//! Dynamically typed cell values

use std::fmt;

use serde::Serialize;

/// A single cell as decoded from the database.
///
/// Serializes to the native JSON equivalent (`Null` → `null`, `Int` → number,
/// and so on).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Json(serde_json::Value),
}

/// Textual form used by the HTML view. `Null` renders empty.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
            Value::Json(v) => write!(f, "{v}"),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::from(*n),
            // NaN and infinities have no JSON form
            Value::Float(x) => serde_json::Number::from_f64(*x)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Json(v) => v.clone(),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
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

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_displays_empty() {
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn display_uses_plain_text() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::from("alpha").to_string(), "alpha");
        assert_eq!(Value::Json(json!({"a": 1})).to_string(), r#"{"a":1}"#);
    }

    #[test]
    fn serializes_untagged() {
        let values = vec![
            Value::Null,
            Value::Bool(false),
            Value::Int(7),
            Value::from("x"),
            Value::Json(json!([1, 2])),
        ];
        let out = serde_json::to_string(&values).unwrap();
        assert_eq!(out, r#"[null,false,7,"x",[1,2]]"#);
    }

    #[test]
    fn non_finite_float_becomes_null() {
        let json: serde_json::Value = (&Value::Float(f64::NAN)).into();
        assert!(json.is_null());
    }

    #[test]
    fn option_none_is_null() {
        let v: Value = Option::<i64>::None.into();
        assert_eq!(v, Value::Null);
    }
}
