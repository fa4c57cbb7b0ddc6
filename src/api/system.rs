use axum::{Json, extract::State};
use std::sync::Arc;

use super::{AppState, types::SystemStatus};

pub async fn status(State(state): State<Arc<AppState>>) -> Json<SystemStatus> {
    let database = match state.store().ping().await {
        Ok(()) => "ok".to_string(),
        Err(_) => "unavailable".to_string(),
    };

    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        database,
    })
}
