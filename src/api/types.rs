use serde::{Deserialize, Serialize};

use crate::services::FavoriteAction;

#[derive(Debug, Deserialize)]
pub struct CityRequest {
    pub city: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteRequest {
    pub city: String,
    pub action: FavoriteAction,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: String,
    pub uptime_seconds: u64,
    pub database: String,
}
