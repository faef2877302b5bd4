//! Likes endpoints

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::like::{CreateLike, Like, LikesResponse},
};

use super::{AuthenticatedUser, Path, ValidatedJson};

/// Like an event
#[utoipa::path(
    post,
    path = "/likes/event",
    tag = "likes",
    security(("bearer_auth" = [])),
    request_body = CreateLike,
    responses(
        (status = 201, description = "Event liked", body = Like),
        (status = 400, description = "Unknown event")
    )
)]
pub async fn like_event(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(dto): ValidatedJson<CreateLike>,
) -> AppResult<(StatusCode, Json<Like>)> {
    let like = state.services.likes.like_event(claims.account_id(), &dto).await?;
    Ok((StatusCode::CREATED, Json(like)))
}

/// Like a crowd-sourced event; `event_id` carries the crowd-sourced event ID
#[utoipa::path(
    post,
    path = "/likes/crowdsource",
    tag = "likes",
    security(("bearer_auth" = [])),
    request_body = CreateLike,
    responses(
        (status = 201, description = "Crowd-sourced event liked", body = Like),
        (status = 400, description = "Unknown crowd-sourced event")
    )
)]
pub async fn like_crowd_sourced_event(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(dto): ValidatedJson<CreateLike>,
) -> AppResult<(StatusCode, Json<Like>)> {
    let like = state
        .services
        .likes
        .like_crowd_sourced_event(claims.account_id(), &dto)
        .await?;
    Ok((StatusCode::CREATED, Json(like)))
}

#[utoipa::path(
    get,
    path = "/likes/event/{id}",
    tag = "likes",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Likes found", body = LikesResponse),
        (status = 404, description = "Event has no likes")
    )
)]
pub async fn list_likes_by_event(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<LikesResponse>> {
    let likes = state.services.likes.view_likes_by_event(id).await?;
    Ok(Json(likes))
}

#[utoipa::path(
    get,
    path = "/likes/crowdsource/{id}",
    tag = "likes",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Crowd-sourced event ID")),
    responses(
        (status = 200, description = "Likes found", body = LikesResponse),
        (status = 404, description = "Crowd-sourced event has no likes")
    )
)]
pub async fn list_likes_by_crowd_source(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<LikesResponse>> {
    let likes = state
        .services
        .likes
        .view_likes_by_crowd_source_event(id)
        .await?;
    Ok(Json(likes))
}

/// Remove one of the caller's likes
#[utoipa::path(
    delete,
    path = "/likes/{id}",
    tag = "likes",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Like ID")),
    responses(
        (status = 204, description = "Like removed"),
        (status = 404, description = "Like not found")
    )
)]
pub async fn delete_like(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.likes.delete_like(claims.account_id(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    use super::Like;
    use crate::{
        api::test_support::{app, send, token},
        models::{account::Role, like::LikeTarget},
        repository::mock::MockStores,
    };

    #[tokio::test]
    async fn event_without_likes_is_not_found() {
        let mut stores = MockStores::default();
        stores.likes.expect_list_by_event().returning(|_| Ok(Vec::new()));

        let customer = token(Uuid::new_v4(), Role::Customer);
        let uri = format!("/api/v1/likes/event/{}", Uuid::new_v4());
        let (status, body) = send(app(stores), Method::GET, &uri, Some(&customer), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Likes not found");
    }

    #[tokio::test]
    async fn crowd_source_like_targets_only_crowd_source() {
        let customer_id = Uuid::new_v4();
        let crowd_source_id = Uuid::new_v4();
        let mut stores = MockStores::default();
        stores
            .likes
            .expect_create()
            .withf(move |account_id, target| {
                *account_id == customer_id && *target == LikeTarget::CrowdSource(crowd_source_id)
            })
            .times(1)
            .returning(|account_id, target| {
                let (event_id, crowd_source_id) = target.columns();
                Ok(Like {
                    id: Uuid::new_v4(),
                    account_id,
                    event_id,
                    crowd_source_id,
                    created_at: Utc::now(),
                })
            });

        let customer = token(customer_id, Role::Customer);
        let (status, body) = send(
            app(stores),
            Method::POST,
            "/api/v1/likes/crowdsource",
            Some(&customer),
            Some(json!({ "event_id": crowd_source_id })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(body["event_id"].is_null());
        assert_eq!(body["crowd_source_id"], crowd_source_id.to_string());
    }
}
