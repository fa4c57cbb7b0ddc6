use std::sync::Arc;

use crate::clients::{OpenWeatherClient, WeatherProvider};
use crate::config::Config;
use crate::db::Store;
use crate::services::{FavoriteService, HistoryService, SearchService};

/// Build a shared HTTP client with reasonable defaults for API calls.
/// Reusing one client across services enables connection pooling.
fn build_shared_http_client(timeout_seconds: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .user_agent(concat!("WeatherNow/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

/// Everything wired once at process start: configuration, the store, the
/// weather provider and the services over them.
pub struct SharedState {
    pub config: Config,

    pub store: Store,

    pub weather: Arc<dyn WeatherProvider>,

    pub search_service: SearchService,

    pub favorite_service: FavoriteService,

    pub history_service: HistoryService,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let http_client = build_shared_http_client(config.weather.request_timeout_seconds)?;
        let weather: Arc<dyn WeatherProvider> = Arc::new(OpenWeatherClient::with_shared_client(
            http_client,
            &config.weather,
        ));

        Self::with_weather_provider(config, weather).await
    }

    /// Wire the state around an explicit provider implementation. Tests use
    /// this to substitute a stub for the remote API.
    pub async fn with_weather_provider(
        config: Config,
        weather: Arc<dyn WeatherProvider>,
    ) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let search_service = SearchService::new(store.clone(), weather.clone());
        let favorite_service = FavoriteService::new(store.clone());
        let history_service = HistoryService::new(store.clone(), config.general.history_limit);

        Ok(Self {
            config,
            store,
            weather,
            search_service,
            favorite_service,
            history_service,
        })
    }
}
