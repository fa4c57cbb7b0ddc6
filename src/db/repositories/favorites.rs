use crate::entities::{favorites, prelude::*};
use anyhow::Result;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

/// Repository for favorite city operations
pub struct FavoritesRepository {
    conn: DatabaseConnection,
}

impl FavoritesRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn contains(&self, city: &str) -> Result<bool> {
        let row = Favorites::find_by_id(city.to_string())
            .one(&self.conn)
            .await?;

        Ok(row.is_some())
    }

    /// Insert-or-ignore: adding a city twice succeeds without duplicating it.
    pub async fn add(&self, city: &str) -> Result<bool> {
        let active_model = favorites::ActiveModel {
            city: Set(city.to_string()),
        };

        let result = Favorites::insert(active_model)
            .on_conflict(
                OnConflict::column(favorites::Column::City)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.conn)
            .await;

        match result {
            Ok(_) => Ok(true),
            // The row was already there; membership holds either way.
            Err(DbErr::RecordNotInserted) => Ok(true),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn remove(&self, city: &str) -> Result<bool> {
        let result = Favorites::delete_by_id(city.to_string())
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list(&self) -> Result<Vec<String>> {
        let rows = Favorites::find()
            .order_by_asc(favorites::Column::City)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(|r| r.city).collect())
    }
}
