//! Reviews service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::review::{CreateReview, Review, UpdateReview},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReviewsService {
    repository: Repository,
}

impl ReviewsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, account_id: Uuid, data: &CreateReview) -> AppResult<Review> {
        self.repository.reviews.create(account_id, data).await
    }

    pub async fn view_all_for_event(&self, event_id: Uuid) -> AppResult<Vec<Review>> {
        self.repository.reviews.list_by_event(event_id).await
    }

    pub async fn view_one(&self, id: Uuid) -> AppResult<Review> {
        self.repository
            .reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))
    }

    pub async fn update(&self, id: Uuid, account_id: Uuid, data: &UpdateReview) -> AppResult<Review> {
        self.repository
            .reviews
            .update(id, account_id, data)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid, account_id: Uuid) -> AppResult<()> {
        if !self.repository.reviews.delete(id, account_id).await? {
            return Err(AppError::NotFound("Review not found".to_string()));
        }
        Ok(())
    }
}
