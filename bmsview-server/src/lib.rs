//! bmsview-server: read-only HTTP facade over the `bms` table
//!
//! Every request opens its own connection, runs `SELECT * FROM bms;`, closes
//! the connection and renders the rows as JSON (`/api/bms`) or as an HTML
//! table (`/api/db-viewer`).

pub mod db;
pub mod http;

pub use db::{BmsSource, PgBmsSource};
pub use http::{run_server, ServerConfig, ServerError};
