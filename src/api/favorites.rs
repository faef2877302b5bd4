//! Favorites (wishlist) endpoints, scoped to the calling account

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::favorite::{CreateFavorite, Favorite, UpdateFavorite},
};

use super::{AuthenticatedUser, Path, ValidatedJson};

/// Add an event to the caller's wishlist
#[utoipa::path(
    post,
    path = "/favorites",
    tag = "favorites",
    security(("bearer_auth" = [])),
    request_body = CreateFavorite,
    responses(
        (status = 201, description = "Favorite created", body = Favorite),
        (status = 400, description = "Unknown event")
    )
)]
pub async fn create_favorite(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<CreateFavorite>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    let favorite = state
        .services
        .favorites
        .create(claims.account_id(), &data)
        .await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// List the caller's favorites
#[utoipa::path(
    get,
    path = "/favorites",
    tag = "favorites",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Favorites", body = Vec<Favorite>)
    )
)]
pub async fn list_favorites(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Favorite>>> {
    let favorites = state.services.favorites.view_all(claims.account_id()).await?;
    Ok(Json(favorites))
}

#[utoipa::path(
    get,
    path = "/favorites/{id}",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Favorite ID")),
    responses(
        (status = 200, description = "Favorite", body = Favorite),
        (status = 404, description = "Favorite not found")
    )
)]
pub async fn get_favorite(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Favorite>> {
    let favorite = state
        .services
        .favorites
        .view_one(id, claims.account_id())
        .await?;
    Ok(Json(favorite))
}

#[utoipa::path(
    patch,
    path = "/favorites/{id}",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Favorite ID")),
    request_body = UpdateFavorite,
    responses(
        (status = 202, description = "Favorite updated", body = Favorite),
        (status = 404, description = "Favorite not found")
    )
)]
pub async fn update_favorite(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    ValidatedJson(data): ValidatedJson<UpdateFavorite>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    let favorite = state
        .services
        .favorites
        .update(id, claims.account_id(), &data)
        .await?;
    Ok((StatusCode::ACCEPTED, Json(favorite)))
}

#[utoipa::path(
    delete,
    path = "/favorites/{id}",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Favorite ID")),
    responses(
        (status = 204, description = "Favorite deleted"),
        (status = 404, description = "Favorite not found")
    )
)]
pub async fn delete_favorite(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state
        .services
        .favorites
        .delete(id, claims.account_id())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
