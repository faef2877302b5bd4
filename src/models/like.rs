//! Like model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Like record
///
/// Exactly one of `event_id` and `crowd_source_id` is set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Like {
    pub id: Uuid,
    pub account_id: Uuid,
    pub event_id: Option<Uuid>,
    pub crowd_source_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn target(&self) -> Option<LikeTarget> {
        match (self.event_id, self.crowd_source_id) {
            (Some(id), None) => Some(LikeTarget::Event(id)),
            (None, Some(id)) => Some(LikeTarget::CrowdSource(id)),
            _ => None,
        }
    }
}

/// What a like points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    Event(Uuid),
    CrowdSource(Uuid),
}

impl LikeTarget {
    /// Column values as `(event_id, crowd_source_id)`
    pub fn columns(&self) -> (Option<Uuid>, Option<Uuid>) {
        match *self {
            LikeTarget::Event(id) => (Some(id), None),
            LikeTarget::CrowdSource(id) => (None, Some(id)),
        }
    }
}

/// Like request; `event_id` names an event or a crowd-sourced event
/// depending on the endpoint
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateLike {
    pub event_id: Uuid,
}

/// Like listing response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LikesResponse {
    pub message: String,
    pub likes: Vec<Like>,
}
