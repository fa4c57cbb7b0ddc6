use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::SharedState;

mod error;
mod favorites;
mod history;
mod system;
mod types;
mod weather;

pub use error::ApiError;
pub use types::*;

pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,
}

impl AppState {
    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn search_service(&self) -> &crate::services::SearchService {
        &self.shared.search_service
    }

    #[must_use]
    pub fn favorite_service(&self) -> &crate::services::FavoriteService {
        &self.shared.favorite_service
    }

    #[must_use]
    pub fn history_service(&self) -> &crate::services::HistoryService {
        &self.shared.history_service
    }
}

#[must_use]
pub fn create_app_state(shared: Arc<SharedState>) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
    })
}

pub async fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.shared.config.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route("/weather", post(weather::search_weather))
        .route("/favorites", get(favorites::list_favorites))
        .route("/favorites", post(favorites::toggle_favorite))
        .route("/history", get(history::list_history))
        .route("/history", delete(history::delete_history))
        .route("/system/status", get(system::status))
        .with_state(state);

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
