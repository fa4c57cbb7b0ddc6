use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::clients::WeatherProvider;
use crate::db::Store;
use crate::models::weather::WeatherReport;

/// Every upstream problem collapses into one variant; the boundary answers
/// a bad city, a network fault and a malformed body the same way.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("weather lookup failed")]
    LookupFailed,
}

/// Orchestrates a city search: remote fetch, history record, favorite merge.
pub struct SearchService {
    store: Store,
    provider: Arc<dyn WeatherProvider>,
}

impl SearchService {
    #[must_use]
    pub fn new(store: Store, provider: Arc<dyn WeatherProvider>) -> Self {
        Self { store, provider }
    }

    /// Fetch weather for `city` and merge in the favorite flag.
    ///
    /// Failed lookups are not recorded in history. A history write failure
    /// never turns a successful lookup into an error; it is logged and
    /// dropped. The favorite flag reflects the favorites table at the moment
    /// of the search.
    pub async fn search(&self, city: &str) -> Result<WeatherReport, SearchError> {
        let payload = match self.provider.current_weather(city).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!(city, error = %e, "Weather lookup failed");
                return Err(SearchError::LookupFailed);
            }
        };

        if let Err(e) = self.store.record_search(city).await {
            warn!(city, error = %e, "Failed to record search history");
        }

        let is_favorite = match self.store.is_favorite(city).await {
            Ok(fav) => fav,
            Err(e) => {
                warn!(city, error = %e, "Favorite lookup failed, defaulting to false");
                false
            }
        };

        Ok(WeatherReport::new(payload, is_favorite))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value, json};

    struct StubProvider {
        fail: bool,
    }

    #[async_trait::async_trait]
    impl WeatherProvider for StubProvider {
        async fn current_weather(&self, _city: &str) -> anyhow::Result<Map<String, Value>> {
            if self.fail {
                anyhow::bail!("simulated provider outage");
            }

            let Value::Object(map) = json!({"temp": 15}) else {
                unreachable!()
            };
            Ok(map)
        }
    }

    async fn memory_store() -> Store {
        // A single pooled connection keeps every query on the same
        // in-memory database.
        Store::with_pool_options("sqlite::memory:", 1, 1)
            .await
            .expect("in-memory store")
    }

    #[tokio::test]
    async fn failed_lookup_records_no_history() {
        let store = memory_store().await;
        let service = SearchService::new(store.clone(), Arc::new(StubProvider { fail: true }));

        let err = service.search("Paris").await.unwrap_err();
        assert!(matches!(err, SearchError::LookupFailed));
        assert!(store.recent_searches(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn successful_search_appends_history_and_merges_flag() {
        let store = memory_store().await;
        let service = SearchService::new(store.clone(), Arc::new(StubProvider { fail: false }));

        let report = service.search("Paris").await.unwrap();
        assert!(!report.is_favorite());
        assert_eq!(report.into_json(), json!({"temp": 15, "isFavorite": false}));
        assert_eq!(store.recent_searches(10).await.unwrap(), vec!["Paris"]);
    }

    #[tokio::test]
    async fn favorite_city_is_flagged_at_search_time() {
        let store = memory_store().await;
        store.add_favorite("London").await.unwrap();
        let service = SearchService::new(store.clone(), Arc::new(StubProvider { fail: false }));

        let report = service.search("London").await.unwrap();
        assert!(report.is_favorite());
        assert_eq!(store.recent_searches(10).await.unwrap(), vec!["London"]);
    }
}
