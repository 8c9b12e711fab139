//! bmsview-core: the result-set model and its two renderings
//!
//! A [`ResultSet`] is what one `SELECT * FROM bms;` returns: column names plus
//! rows of dynamically typed [`Value`]s. It renders either as a JSON payload
//! ([`to_json`]) or as a self-contained HTML document ([`to_html`]).
//!
//! Nothing here performs I/O; the fetcher lives in `bmsview-server`.

pub mod config;
pub mod error;
pub mod render_html;
pub mod render_json;
pub mod result_set;
pub mod value;

pub use config::{BmsviewConfig, DbConfig, ServerSection};
pub use error::{DataAccessError, ShapeError};
pub use render_html::{to_html, to_html_with_title};
pub use render_json::{to_json, JsonPayload, JsonRecord};
pub use result_set::{Record, ResultSet};
pub use value::Value;

/// The one query this system ever runs.
pub const BMS_QUERY: &str = "SELECT * FROM bms;";
