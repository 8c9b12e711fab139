use serde_json::{Map, Value as JsonValue};

use crate::result_set::{Record, ResultSet};

/// One row as a `{column: value}` object.
pub type JsonRecord = Map<String, JsonValue>;

/// The `/api/bms` body: one object per row, in row order.
pub type JsonPayload = Vec<JsonRecord>;

pub fn to_json(set: &ResultSet) -> JsonPayload {
    set.records().map(record_to_json).collect()
}

/// Repeated column names collapse to the last one.
pub fn record_to_json(record: Record<'_>) -> JsonRecord {
    record
        .iter()
        .map(|(column, value)| (column.to_owned(), JsonValue::from(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;
    use serde_json::json;

    fn sample() -> ResultSet {
        ResultSet::from_rows(
            vec!["id".into(), "name".into()],
            vec![
                vec![Value::Int(1), Value::from("alpha")],
                vec![Value::Int(2), Value::from("beta")],
            ],
        )
        .unwrap()
    }

    #[test]
    fn renders_rows_in_order() {
        let payload = to_json(&sample());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!([{"id": 1, "name": "alpha"}, {"id": 2, "name": "beta"}])
        );
    }

    #[test]
    fn empty_set_is_empty_array() {
        let set = ResultSet::new(vec!["id".into()]);
        assert_eq!(serde_json::to_string(&to_json(&set)).unwrap(), "[]");
    }

    #[test]
    fn null_passes_through() {
        let set = ResultSet::from_rows(vec!["note".into()], vec![vec![Value::Null]]).unwrap();
        assert_eq!(
            serde_json::to_value(to_json(&set)).unwrap(),
            json!([{"note": null}])
        );
    }

    #[test]
    fn duplicate_column_keeps_last() {
        let set = ResultSet::from_rows(
            vec!["v".into(), "v".into()],
            vec![vec![Value::Int(1), Value::Int(2)]],
        )
        .unwrap();
        assert_eq!(to_json(&set)[0]["v"], json!(2));
    }
}
