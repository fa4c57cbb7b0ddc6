use axum::{Json, extract::State};
use std::sync::Arc;

use super::{
    AppState,
    types::{StatusResponse, ToggleFavoriteRequest},
};

pub async fn list_favorites(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.favorite_service().list().await)
}

pub async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ToggleFavoriteRequest>,
) -> Json<StatusResponse> {
    let success = state
        .favorite_service()
        .apply(&payload.city, payload.action)
        .await;

    Json(StatusResponse { success })
}
