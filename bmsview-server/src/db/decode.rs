//! Postgres row → `Vec<Value>` conversion
//!
//! Rows are fetched through the simple-query protocol, so every value
//! arrives in Postgres text format and goes through [`decode_text`].

use bmsview_core::{DataAccessError, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// Decode every column of `row`, in column order.
pub fn row_values(row: &PgRow) -> Result<Vec<Value>, DataAccessError> {
    row.columns()
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            decode_column(row, idx, column.type_info().name()).map_err(|message| {
                DataAccessError::Decode {
                    column: column.name().to_owned(),
                    message,
                }
            })
        })
        .collect()
}

fn decode_column(row: &PgRow, idx: usize, type_name: &str) -> Result<Value, String> {
    let raw = row.try_get_raw(idx).map_err(|e| e.to_string())?;
    if raw.is_null() {
        return Ok(Value::Null);
    }

    let text = raw.as_str().map_err(|e| e.to_string())?;
    Ok(decode_text(type_name, text))
}

/// Map a text-format value to a [`Value`] by its Postgres type name.
///
/// Anything that is not an integer, float, boolean or JSON stays as the
/// server's own text (numeric, timestamps, uuids, enums, arrays, ...).
pub fn decode_text(type_name: &str, text: &str) -> Value {
    let fallback = || Value::Text(text.to_owned());

    match type_name {
        "INT2" | "INT4" | "INT8" => text.parse().map(Value::Int).unwrap_or_else(|_| fallback()),
        "FLOAT4" | "FLOAT8" => text.parse().map(Value::Float).unwrap_or_else(|_| fallback()),
        "BOOL" => match text {
            "t" => Value::Bool(true),
            "f" => Value::Bool(false),
            _ => fallback(),
        },
        "JSON" | "JSONB" => serde_json::from_str(text)
            .map(Value::Json)
            .unwrap_or_else(|_| fallback()),
        _ => fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_and_floats() {
        assert_eq!(decode_text("INT4", "42"), Value::Int(42));
        assert_eq!(decode_text("INT8", "-9000000000"), Value::Int(-9_000_000_000));
        assert_eq!(decode_text("FLOAT8", "2.5"), Value::Float(2.5));
    }

    #[test]
    fn booleans_use_postgres_letters() {
        assert_eq!(decode_text("BOOL", "t"), Value::Bool(true));
        assert_eq!(decode_text("BOOL", "f"), Value::Bool(false));
    }

    #[test]
    fn json_is_parsed() {
        assert_eq!(
            decode_text("JSONB", r#"{"zone": 3}"#),
            Value::Json(json!({"zone": 3}))
        );
    }

    #[test]
    fn other_types_stay_text() {
        assert_eq!(decode_text("NUMERIC", "12.50"), Value::from("12.50"));
        assert_eq!(
            decode_text("TIMESTAMPTZ", "2024-05-01 12:00:00+00"),
            Value::from("2024-05-01 12:00:00+00")
        );
        assert_eq!(decode_text("TEXT", "alpha"), Value::from("alpha"));
    }

    #[test]
    fn unparseable_numbers_fall_back_to_text() {
        assert_eq!(decode_text("INT4", "abc"), Value::from("abc"));
    }
}
