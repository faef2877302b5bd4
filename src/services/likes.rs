//! Likes service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::like::{CreateLike, Like, LikeTarget, LikesResponse},
    repository::Repository,
};

#[derive(Clone)]
pub struct LikesService {
    repository: Repository,
}

impl LikesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn like_event(&self, account_id: Uuid, dto: &CreateLike) -> AppResult<Like> {
        self.repository
            .likes
            .create(account_id, LikeTarget::Event(dto.event_id))
            .await
    }

    /// `dto.event_id` names the crowd-sourced event here
    pub async fn like_crowd_sourced_event(&self, account_id: Uuid, dto: &CreateLike) -> AppResult<Like> {
        self.repository
            .likes
            .create(account_id, LikeTarget::CrowdSource(dto.event_id))
            .await
    }

    /// An event without likes is reported as not found, not as an empty list
    pub async fn view_likes_by_event(&self, event_id: Uuid) -> AppResult<LikesResponse> {
        let likes = self.repository.likes.list_by_event(event_id).await?;
        Self::found(likes)
    }

    pub async fn view_likes_by_crowd_source_event(&self, crowd_source_id: Uuid) -> AppResult<LikesResponse> {
        let likes = self.repository.likes.list_by_crowd_source(crowd_source_id).await?;
        Self::found(likes)
    }

    /// Unlike: the like must belong to the caller
    pub async fn delete_like(&self, account_id: Uuid, id: Uuid) -> AppResult<()> {
        let like = self
            .repository
            .likes
            .find(id, account_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Like not found".to_string()))?;

        if !self.repository.likes.delete(like.id).await? {
            return Err(AppError::NotFound("Like not found".to_string()));
        }
        tracing::info!(like_id = %like.id, target = ?like.target(), "Like removed");
        Ok(())
    }

    fn found(likes: Vec<Like>) -> AppResult<LikesResponse> {
        if likes.is_empty() {
            return Err(AppError::NotFound("Likes not found".to_string()));
        }
        Ok(LikesResponse {
            message: "Likes found".to_string(),
            likes,
        })
    }
}
