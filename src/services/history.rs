use tracing::warn;

use crate::db::Store;

pub struct HistoryService {
    store: Store,
    limit: u64,
}

impl HistoryService {
    #[must_use]
    pub const fn new(store: Store, limit: u64) -> Self {
        Self { store, limit }
    }

    /// The most recent searches, newest first, capped at the configured
    /// limit. Empty on storage failure.
    pub async fn recent(&self) -> Vec<String> {
        match self.store.recent_searches(self.limit).await {
            Ok(cities) => cities,
            Err(e) => {
                warn!(error = %e, "History listing failed");
                Vec::new()
            }
        }
    }

    /// Delete every history row for `city`; `false` when nothing matched or
    /// storage failed.
    pub async fn delete(&self, city: &str) -> bool {
        match self.store.delete_search(city).await {
            Ok(deleted) => deleted,
            Err(e) => {
                warn!(city, error = %e, "History delete failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> Store {
        Store::with_pool_options("sqlite::memory:", 1, 1)
            .await
            .expect("in-memory store")
    }

    #[tokio::test]
    async fn recent_is_capped_and_newest_first() {
        let store = store().await;
        let service = HistoryService::new(store.clone(), 10);

        for i in 0..12 {
            store.record_search(&format!("City{i:02}")).await.unwrap();
        }

        let recent = service.recent().await;
        assert_eq!(recent.len(), 10);
        assert_eq!(recent.first().map(String::as_str), Some("City11"));
        assert_eq!(recent.last().map(String::as_str), Some("City02"));
    }

    #[tokio::test]
    async fn delete_removes_all_rows_for_a_city() {
        let store = store().await;
        let service = HistoryService::new(store.clone(), 10);

        store.record_search("Paris").await.unwrap();
        store.record_search("Lyon").await.unwrap();
        store.record_search("Paris").await.unwrap();

        assert!(service.delete("Paris").await);
        assert_eq!(service.recent().await, vec!["Lyon"]);
    }

    #[tokio::test]
    async fn delete_of_unknown_city_reports_false() {
        let store = store().await;
        let service = HistoryService::new(store, 10);

        assert!(!service.delete("Atlantis").await);
    }
}
