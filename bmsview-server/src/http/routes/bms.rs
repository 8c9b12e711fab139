//! JSON view of the `bms` table

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use bmsview_core::{to_json, JsonPayload};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /api/bms - every row as a `{column: value}` object
async fn list_bms(State(state): State<Arc<AppState>>) -> Result<Json<JsonPayload>, ApiError> {
    let set = state.source.fetch().await.map_err(ApiError::json)?;
    Ok(Json(to_json(&set)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/bms", get(list_bms))
}
