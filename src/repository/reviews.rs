//! Reviews repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::review::{CreateReview, Review, UpdateReview},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewsStore: Send + Sync {
    async fn create(&self, account_id: Uuid, data: &CreateReview) -> AppResult<Review>;
    async fn list_by_event(&self, event_id: Uuid) -> AppResult<Vec<Review>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Review>>;
    async fn update(&self, id: Uuid, account_id: Uuid, data: &UpdateReview) -> AppResult<Option<Review>>;
    async fn delete(&self, id: Uuid, account_id: Uuid) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct ReviewsRepository {
    pool: Pool<Postgres>,
}

impl ReviewsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewsStore for ReviewsRepository {
    async fn create(&self, account_id: Uuid, data: &CreateReview) -> AppResult<Review> {
        // verified is left to its column default
        let row = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (account_id, event_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(account_id)
        .bind(data.event_id)
        .bind(data.rating)
        .bind(&data.comment)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_by_event(&self, event_id: Uuid) -> AppResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE event_id = $1 ORDER BY created_at DESC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Review>> {
        let row = sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, account_id: Uuid, data: &UpdateReview) -> AppResult<Option<Review>> {
        let row = sqlx::query_as::<_, Review>(
            r#"
            UPDATE reviews SET
                event_id = COALESCE($3, event_id),
                rating = COALESCE($4, rating),
                comment = COALESCE($5, comment),
                verified = COALESCE($6, verified),
                updated_at = NOW()
            WHERE id = $1 AND account_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(account_id)
        .bind(data.event_id)
        .bind(data.rating)
        .bind(&data.comment)
        .bind(data.verified)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid, account_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1 AND account_id = $2")
            .bind(id)
            .bind(account_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
