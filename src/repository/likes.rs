//! Likes repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::like::{Like, LikeTarget},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikesStore: Send + Sync {
    async fn create(&self, account_id: Uuid, target: LikeTarget) -> AppResult<Like>;
    async fn list_by_event(&self, event_id: Uuid) -> AppResult<Vec<Like>>;
    async fn list_by_crowd_source(&self, crowd_source_id: Uuid) -> AppResult<Vec<Like>>;
    async fn find(&self, id: Uuid, account_id: Uuid) -> AppResult<Option<Like>>;
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct LikesRepository {
    pool: Pool<Postgres>,
}

impl LikesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikesStore for LikesRepository {
    async fn create(&self, account_id: Uuid, target: LikeTarget) -> AppResult<Like> {
        let (event_id, crowd_source_id) = target.columns();
        let row = sqlx::query_as::<_, Like>(
            r#"
            INSERT INTO likes (account_id, event_id, crowd_source_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(account_id)
        .bind(event_id)
        .bind(crowd_source_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_by_event(&self, event_id: Uuid) -> AppResult<Vec<Like>> {
        let rows = sqlx::query_as::<_, Like>(
            "SELECT * FROM likes WHERE event_id = $1 ORDER BY created_at",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_by_crowd_source(&self, crowd_source_id: Uuid) -> AppResult<Vec<Like>> {
        let rows = sqlx::query_as::<_, Like>(
            "SELECT * FROM likes WHERE crowd_source_id = $1 ORDER BY created_at",
        )
        .bind(crowd_source_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: Uuid, account_id: Uuid) -> AppResult<Option<Like>> {
        let row = sqlx::query_as::<_, Like>(
            "SELECT * FROM likes WHERE id = $1 AND account_id = $2",
        )
        .bind(id)
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM likes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        repository::events::{
            tests::{hiking, organiser},
            EventsRepository, EventsStore,
        },
    };

    async fn event(pool: &sqlx::PgPool) -> Uuid {
        let owner = organiser(pool, "host@example.com").await;
        EventsRepository::new(pool.clone())
            .create(owner, &hiking())
            .await
            .unwrap()
            .id
    }

    /// Crowd sources have no endpoints of their own; rows are seeded directly
    async fn crowd_source(pool: &sqlx::PgPool) -> Uuid {
        let submitter = organiser(pool, "submitter@example.com").await;
        sqlx::query_scalar("INSERT INTO crowd_sources (account_id, name) VALUES ($1, $2) RETURNING id")
            .bind(submitter)
            .bind("Community picnic")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore] // Requires DATABASE_URL: cargo test -- --ignored
    async fn event_like_is_found_by_owner_only(pool: sqlx::PgPool) -> AppResult<()> {
        let event_id = event(&pool).await;
        let fan = organiser(&pool, "fan@example.com").await;
        let stranger = organiser(&pool, "stranger@example.com").await;
        let repo = LikesRepository::new(pool);

        let created = repo.create(fan, LikeTarget::Event(event_id)).await?;
        let found = repo.find(created.id, fan).await?.expect("like exists");
        assert_eq!(found.account_id, fan);
        assert_eq!(found.target(), Some(LikeTarget::Event(event_id)));
        assert!(repo.find(created.id, stranger).await?.is_none());

        let likes = repo.list_by_event(event_id).await?;
        assert_eq!(likes.len(), 1);
        assert_eq!(likes[0].id, created.id);

        assert!(repo.delete(created.id).await?);
        assert!(repo.list_by_event(event_id).await?.is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn seeded_crowd_source_can_be_liked(pool: sqlx::PgPool) -> AppResult<()> {
        let crowd_source_id = crowd_source(&pool).await;
        let fan = organiser(&pool, "fan@example.com").await;
        let repo = LikesRepository::new(pool);

        let like = repo.create(fan, LikeTarget::CrowdSource(crowd_source_id)).await?;
        assert!(like.event_id.is_none());
        assert_eq!(like.crowd_source_id, Some(crowd_source_id));
        assert_eq!(repo.list_by_crowd_source(crowd_source_id).await?.len(), 1);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn like_with_both_targets_violates_check(pool: sqlx::PgPool) -> AppResult<()> {
        let event_id = event(&pool).await;
        let crowd_source_id = crowd_source(&pool).await;
        let fan = organiser(&pool, "fan@example.com").await;

        let err = sqlx::query("INSERT INTO likes (account_id, event_id, crowd_source_id) VALUES ($1, $2, $3)")
            .bind(fan)
            .bind(event_id)
            .bind(crowd_source_id)
            .execute(&pool)
            .await
            .unwrap_err();
        let code = err.as_database_error().and_then(|e| e.code()).map(|c| c.into_owned());
        assert_eq!(code.as_deref(), Some("23514"));
        assert!(matches!(AppError::from(err), AppError::Validation(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn unknown_event_is_rejected(pool: sqlx::PgPool) -> AppResult<()> {
        let fan = organiser(&pool, "fan@example.com").await;
        let repo = LikesRepository::new(pool);

        let result = repo.create(fan, LikeTarget::Event(Uuid::new_v4())).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        Ok(())
    }
}
