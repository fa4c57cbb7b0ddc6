use axum::{Json, extract::State};
use serde_json::Value;
use std::sync::Arc;

use super::{ApiError, AppState, types::CityRequest};

pub async fn search_weather(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CityRequest>,
) -> Result<Json<Value>, ApiError> {
    let report = state.search_service().search(&payload.city).await?;
    Ok(Json(report.into_json()))
}
