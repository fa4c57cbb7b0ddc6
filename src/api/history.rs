use axum::{Json, extract::State};
use std::sync::Arc;

use super::{
    AppState,
    types::{CityRequest, StatusResponse},
};

pub async fn list_history(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.history_service().recent().await)
}

pub async fn delete_history(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CityRequest>,
) -> Json<StatusResponse> {
    let success = state.history_service().delete(&payload.city).await;

    Json(StatusResponse { success })
}
