//! HTML table view of the `bms` table

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};
use bmsview_core::to_html;

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /api/db-viewer
async fn db_viewer(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let set = state.source.fetch().await.map_err(ApiError::plain_text)?;
    Ok(Html(to_html(&set)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/db-viewer", get(db_viewer))
}
