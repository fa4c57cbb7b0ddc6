use serde::Deserialize;
use tracing::warn;

use crate::db::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteAction {
    Add,
    Remove,
}

pub struct FavoriteService {
    store: Store,
}

impl FavoriteService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Apply an add or remove to the favorites set.
    ///
    /// Adding an existing favorite succeeds without duplicating it. Storage
    /// failures degrade to `false`; callers only ever see a success flag.
    pub async fn apply(&self, city: &str, action: FavoriteAction) -> bool {
        let result = match action {
            FavoriteAction::Add => self.store.add_favorite(city).await,
            FavoriteAction::Remove => self.store.remove_favorite(city).await,
        };

        match result {
            Ok(ok) => ok,
            Err(e) => {
                warn!(city, ?action, error = %e, "Favorite update failed");
                false
            }
        }
    }

    /// All favorite cities, alphabetical. Empty on storage failure.
    pub async fn list(&self) -> Vec<String> {
        match self.store.list_favorites().await {
            Ok(cities) => cities,
            Err(e) => {
                warn!(error = %e, "Favorites listing failed");
                Vec::new()
            }
        }
    }
}
