//! Favorites (wishlist) service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::favorite::{CreateFavorite, Favorite, UpdateFavorite},
    repository::Repository,
};

#[derive(Clone)]
pub struct FavoritesService {
    repository: Repository,
}

impl FavoritesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, account_id: Uuid, data: &CreateFavorite) -> AppResult<Favorite> {
        self.repository.favorites.create(account_id, data).await
    }

    pub async fn view_all(&self, account_id: Uuid) -> AppResult<Vec<Favorite>> {
        self.repository.favorites.list_by_account(account_id).await
    }

    pub async fn view_one(&self, id: Uuid, account_id: Uuid) -> AppResult<Favorite> {
        self.repository
            .favorites
            .find(id, account_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Favorite not found".to_string()))
    }

    pub async fn update(&self, id: Uuid, account_id: Uuid, data: &UpdateFavorite) -> AppResult<Favorite> {
        self.repository
            .favorites
            .update(id, account_id, data)
            .await?
            .ok_or_else(|| AppError::NotFound("Favorite not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid, account_id: Uuid) -> AppResult<()> {
        if !self.repository.favorites.delete(id, account_id).await? {
            return Err(AppError::NotFound("Favorite not found".to_string()));
        }
        Ok(())
    }
}
