//! Favorites repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::favorite::{CreateFavorite, Favorite, UpdateFavorite},
};

/// Every lookup is keyed on `(id, account_id)` so owners only see their own rows
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    async fn create(&self, account_id: Uuid, data: &CreateFavorite) -> AppResult<Favorite>;
    async fn list_by_account(&self, account_id: Uuid) -> AppResult<Vec<Favorite>>;
    async fn find(&self, id: Uuid, account_id: Uuid) -> AppResult<Option<Favorite>>;
    async fn update(&self, id: Uuid, account_id: Uuid, data: &UpdateFavorite) -> AppResult<Option<Favorite>>;
    async fn delete(&self, id: Uuid, account_id: Uuid) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct FavoritesRepository {
    pool: Pool<Postgres>,
}

impl FavoritesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoritesStore for FavoritesRepository {
    async fn create(&self, account_id: Uuid, data: &CreateFavorite) -> AppResult<Favorite> {
        let row = sqlx::query_as::<_, Favorite>(
            "INSERT INTO favorites (account_id, event_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(account_id)
        .bind(data.event_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_by_account(&self, account_id: Uuid) -> AppResult<Vec<Favorite>> {
        let rows = sqlx::query_as::<_, Favorite>(
            "SELECT * FROM favorites WHERE account_id = $1 ORDER BY created_at DESC",
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: Uuid, account_id: Uuid) -> AppResult<Option<Favorite>> {
        let row = sqlx::query_as::<_, Favorite>(
            "SELECT * FROM favorites WHERE id = $1 AND account_id = $2",
        )
        .bind(id)
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, account_id: Uuid, data: &UpdateFavorite) -> AppResult<Option<Favorite>> {
        let row = sqlx::query_as::<_, Favorite>(
            r#"
            UPDATE favorites SET
                event_id = COALESCE($3, event_id),
                updated_at = NOW()
            WHERE id = $1 AND account_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(account_id)
        .bind(data.event_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid, account_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1 AND account_id = $2")
            .bind(id)
            .bind(account_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
