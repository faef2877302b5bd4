//! Admin ("host") endpoints

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::account::{Account, CreateAdmin, SaveFcmToken, UpdatePassword, UpdateProfile},
};

use super::{AdminOnly, AuthenticatedUser, Authorized, Path, ValidatedJson};

/// Create another admin account
#[utoipa::path(
    post,
    path = "/host/create",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = CreateAdmin,
    responses(
        (status = 201, description = "Admin created", body = Account),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Admin role required"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_admin(
    State(state): State<crate::AppState>,
    _admin: Authorized<AdminOnly>,
    ValidatedJson(dto): ValidatedJson<CreateAdmin>,
) -> AppResult<(StatusCode, Json<Account>)> {
    let admin = state.services.accounts.create_admin(dto).await?;
    Ok((StatusCode::CREATED, Json(admin)))
}

/// List all admins
#[utoipa::path(
    get,
    path = "/host/all",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Admins", body = Vec<Account>),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn view_all_admins(
    State(state): State<crate::AppState>,
    _admin: Authorized<AdminOnly>,
) -> AppResult<Json<Vec<Account>>> {
    let admins = state.services.accounts.view_all_admins().await?;
    Ok(Json(admins))
}

/// View the logged-in admin's details
#[utoipa::path(
    get,
    path = "/host/me",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Admin details", body = Account),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn view_me(
    State(state): State<crate::AppState>,
    Authorized(claims, _): Authorized<AdminOnly>,
) -> AppResult<Json<Account>> {
    let admin = state.services.accounts.view_me(claims.account_id()).await?;
    Ok(Json(admin))
}

/// Save the caller's push-notification token (any role)
#[utoipa::path(
    post,
    path = "/host/me",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = SaveFcmToken,
    responses(
        (status = 200, description = "Token saved", body = Account)
    )
)]
pub async fn save_fcm_token(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(dto): ValidatedJson<SaveFcmToken>,
) -> AppResult<Json<Account>> {
    let account = state
        .services
        .accounts
        .save_fcm_token(claims.account_id(), &dto.token)
        .await?;
    Ok(Json(account))
}

/// Update the logged-in admin's profile
#[utoipa::path(
    patch,
    path = "/host/me",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = UpdateProfile,
    responses(
        (status = 202, description = "Profile updated", body = Account),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn update_profile(
    State(state): State<crate::AppState>,
    Authorized(claims, _): Authorized<AdminOnly>,
    ValidatedJson(dto): ValidatedJson<UpdateProfile>,
) -> AppResult<(StatusCode, Json<Account>)> {
    let admin = state
        .services
        .accounts
        .update_profile(claims.account_id(), &dto)
        .await?;
    Ok((StatusCode::ACCEPTED, Json(admin)))
}

/// Change the logged-in admin's password
#[utoipa::path(
    patch,
    path = "/host/me/password",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = UpdatePassword,
    responses(
        (status = 202, description = "Password updated", body = Account),
        (status = 401, description = "Current password is incorrect"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn update_password(
    State(state): State<crate::AppState>,
    Authorized(claims, _): Authorized<AdminOnly>,
    ValidatedJson(dto): ValidatedJson<UpdatePassword>,
) -> AppResult<(StatusCode, Json<Account>)> {
    let admin = state
        .services
        .accounts
        .update_password(claims.account_id(), &dto)
        .await?;
    Ok((StatusCode::ACCEPTED, Json(admin)))
}

/// Delete an admin by id
#[utoipa::path(
    delete,
    path = "/host/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Admin account ID")),
    responses(
        (status = 204, description = "Admin deleted"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Admin not found")
    )
)]
pub async fn delete_admin(
    State(state): State<crate::AppState>,
    _admin: Authorized<AdminOnly>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.accounts.delete_admin(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
