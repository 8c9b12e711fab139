//! In-memory sources for router tests

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bmsview_core::{DataAccessError, ResultSet, Value};

use super::fetch::BmsSource;

/// Returns a fixed result on every fetch and counts calls.
pub(crate) struct StaticSource {
    result: Result<ResultSet, DataAccessError>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub(crate) fn ok(set: ResultSet) -> Self {
        Self {
            result: Ok(set),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing(err: DataAccessError) -> Self {
        Self {
            result: Err(err),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BmsSource for StaticSource {
    async fn fetch(&self) -> Result<ResultSet, DataAccessError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn target(&self) -> String {
        "memory".to_string()
    }
}

/// `(id:int, name:text)` with rows `(1, alpha)` and `(2, beta)`
pub(crate) fn alpha_beta() -> ResultSet {
    ResultSet::from_rows(
        vec!["id".into(), "name".into()],
        vec![
            vec![Value::Int(1), Value::from("alpha")],
            vec![Value::Int(2), Value::from("beta")],
        ],
    )
    .expect("fixture rows match columns")
}
