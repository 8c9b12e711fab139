//! The `bms` fetcher

use std::time::Instant;

use async_trait::async_trait;
use bmsview_core::{DataAccessError, DbConfig, ResultSet, BMS_QUERY};
use sqlx::postgres::PgConnection;
use sqlx::{Column, Connection, Executor, Row, Statement};
use tokio::time::timeout;

use super::connect::connect;
use super::decode::row_values;

/// Anything that can produce the current contents of the `bms` table.
#[async_trait]
pub trait BmsSource: Send + Sync {
    async fn fetch(&self) -> Result<ResultSet, DataAccessError>;

    /// Where rows come from, for logs and `/health`. Must not connect.
    fn target(&self) -> String;
}

/// Postgres-backed source: one connection per fetch.
#[derive(Debug, Clone)]
pub struct PgBmsSource {
    config: DbConfig,
}

impl PgBmsSource {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl BmsSource for PgBmsSource {
    async fn fetch(&self) -> Result<ResultSet, DataAccessError> {
        let started = Instant::now();
        let mut conn = connect(&self.config).await?;

        let result = match timeout(self.config.query_timeout(), run_query(&mut conn)).await {
            Ok(result) => result,
            Err(_) => Err(DataAccessError::Timeout {
                stage: "query",
                seconds: self.config.query_timeout_secs,
            }),
        };

        match result {
            Ok(set) => {
                // Errored or timed-out connections are dropped, not closed
                match timeout(self.config.connect_timeout(), conn.close()).await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => tracing::warn!(error = %e, "connection did not close cleanly"),
                    Err(_) => tracing::warn!("timed out closing connection"),
                }
                tracing::debug!(
                    rows = set.len(),
                    columns = set.columns().len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "fetched bms"
                );
                Ok(set)
            }
            Err(e) => {
                drop(conn);
                tracing::debug!(error = %e, "bms fetch failed");
                Err(e)
            }
        }
    }

    fn target(&self) -> String {
        let db = &self.config;
        let url = format!("postgres://{}:{}/{}", db.host, db.port, db.database);
        match &db.schema {
            Some(schema) => format!("{url} (schema {schema})"),
            None => url,
        }
    }
}

async fn run_query(conn: &mut PgConnection) -> Result<ResultSet, DataAccessError> {
    let rows = (&mut *conn)
        .fetch_all(sqlx::raw_sql(BMS_QUERY))
        .await
        .map_err(DataAccessError::query)?;

    let columns: Vec<String> = match rows.first() {
        Some(row) => row.columns().iter().map(|c| c.name().to_owned()).collect(),
        // No rows to read names from; ask the server to describe the statement
        None => {
            let statement = (&mut *conn)
                .prepare(BMS_QUERY)
                .await
                .map_err(DataAccessError::query)?;
            statement
                .columns()
                .iter()
                .map(|c| c.name().to_owned())
                .collect()
        }
    };

    let mut set = ResultSet::new(columns);
    for row in &rows {
        set.push_row(row_values(row)?)?;
    }
    Ok(set)
}
