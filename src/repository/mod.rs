//! Repository layer for database operations

pub mod accounts;
pub mod events;
pub mod favorites;
pub mod likes;
pub mod reviews;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

use self::{
    accounts::{AccountsRepository, AccountsStore},
    events::{EventsRepository, EventsStore},
    favorites::{FavoritesRepository, FavoritesStore},
    likes::{LikesRepository, LikesStore},
    reviews::{ReviewsRepository, ReviewsStore},
};

/// Data access gateway: one store per record collection, all sharing a pool
#[derive(Clone)]
pub struct Repository {
    pub accounts: Arc<dyn AccountsStore>,
    pub events: Arc<dyn EventsStore>,
    pub favorites: Arc<dyn FavoritesStore>,
    pub likes: Arc<dyn LikesStore>,
    pub reviews: Arc<dyn ReviewsStore>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            accounts: Arc::new(AccountsRepository::new(pool.clone())),
            events: Arc::new(EventsRepository::new(pool.clone())),
            favorites: Arc::new(FavoritesRepository::new(pool.clone())),
            likes: Arc::new(LikesRepository::new(pool.clone())),
            reviews: Arc::new(ReviewsRepository::new(pool)),
        }
    }
}
