use crate::entities::{prelude::*, search_history};
use anyhow::Result;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

/// Repository for search history operations
pub struct HistoryRepository {
    conn: DatabaseConnection,
}

impl HistoryRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn record(&self, city: &str) -> Result<()> {
        let active_model = search_history::ActiveModel {
            city: Set(city.to_string()),
            search_time: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        SearchHistory::insert(active_model).exec(&self.conn).await?;
        Ok(())
    }

    /// Most recent first; same-timestamp rows fall back to insertion order.
    pub async fn recent(&self, limit: u64) -> Result<Vec<String>> {
        let rows = SearchHistory::find()
            .order_by_desc(search_history::Column::SearchTime)
            .order_by_desc(search_history::Column::Id)
            .limit(limit)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(|r| r.city).collect())
    }

    /// Removes every row recorded for `city`, not just the newest one.
    pub async fn delete(&self, city: &str) -> Result<bool> {
        let result = SearchHistory::delete_many()
            .filter(search_history::Column::City.eq(city))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
