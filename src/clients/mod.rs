use serde_json::{Map, Value};

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Seam over the remote weather API so the search flow can be exercised
/// without the network.
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the current weather for `city` as the provider's raw JSON object.
    async fn current_weather(&self, city: &str) -> anyhow::Result<Map<String, Value>>;
}
