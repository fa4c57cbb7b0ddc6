use anyhow::{Result, anyhow};
use reqwest::Client;
use serde_json::{Map, Value};

use crate::config::WeatherConfig;

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    units: String,
}

impl OpenWeatherClient {
    #[must_use]
    pub fn new(config: &WeatherConfig) -> Self {
        Self::with_shared_client(Client::new(), config)
    }

    #[must_use]
    pub fn with_shared_client(client: Client, config: &WeatherConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            units: config.units.clone(),
        }
    }
}

#[async_trait::async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> Result<Map<String, Value>> {
        // reqwest percent-encodes the query pairs, so spaces and specials in
        // the city name are safe.
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "OpenWeather API error: {} - {}",
                status,
                truncate_body(&body)
            ));
        }

        let payload: Value = response.json().await?;

        match payload {
            Value::Object(map) => Ok(map),
            other => Err(anyhow!("OpenWeather returned a non-object payload: {other}")),
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
