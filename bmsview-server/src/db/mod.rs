//! Database layer - connection setup and the `bms` fetcher
//!
//! - One connection per fetch, closed before returning (no pool)
//! - Connect and query steps are each bounded by a timeout
//! - Simple-query protocol, so values arrive in Postgres text format

pub mod connect;
pub mod decode;
pub mod fetch;

#[cfg(test)]
pub(crate) mod testing;

pub use connect::{connect, connect_options};
pub use fetch::{BmsSource, PgBmsSource};
