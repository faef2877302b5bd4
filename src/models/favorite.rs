//! Favorite model (wishlist entries)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Favorite record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Favorite {
    pub id: Uuid,
    /// Owning account
    pub account_id: Uuid,
    pub event_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Add an event to the wishlist
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateFavorite {
    pub event_id: Uuid,
}

/// Update a wishlist entry (partial)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateFavorite {
    pub event_id: Option<Uuid>,
}
