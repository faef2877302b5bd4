//! Business logic services

pub mod accounts;
pub mod events;
pub mod favorites;
pub mod likes;
pub mod reviews;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub accounts: accounts::AccountsService,
    pub events: events::EventsService,
    pub favorites: favorites::FavoritesService,
    pub likes: likes::LikesService,
    pub reviews: reviews::ReviewsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            accounts: accounts::AccountsService::new(repository.clone(), auth_config),
            events: events::EventsService::new(repository.clone()),
            favorites: favorites::FavoritesService::new(repository.clone()),
            likes: likes::LikesService::new(repository.clone()),
            reviews: reviews::ReviewsService::new(repository),
        }
    }
}
