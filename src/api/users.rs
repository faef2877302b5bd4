//! Self-service endpoints for customers and organisers

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::account::{Account, UpdatePassword, UpdateProfile},
};

use super::{Authorized, Members, ValidatedJson};

/// Get the current account
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Account details", body = Account),
        (status = 403, description = "Customer or organiser role required")
    )
)]
pub async fn view_me(
    State(state): State<crate::AppState>,
    Authorized(claims, _): Authorized<Members>,
) -> AppResult<Json<Account>> {
    let account = state.services.accounts.view_me(claims.account_id()).await?;
    Ok(Json(account))
}

/// Update the current account's profile
#[utoipa::path(
    patch,
    path = "/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UpdateProfile,
    responses(
        (status = 202, description = "Profile updated", body = Account),
        (status = 403, description = "Customer or organiser role required")
    )
)]
pub async fn update_profile(
    State(state): State<crate::AppState>,
    Authorized(claims, _): Authorized<Members>,
    ValidatedJson(dto): ValidatedJson<UpdateProfile>,
) -> AppResult<(StatusCode, Json<Account>)> {
    let account = state
        .services
        .accounts
        .update_profile(claims.account_id(), &dto)
        .await?;
    Ok((StatusCode::ACCEPTED, Json(account)))
}

/// Change the current account's password
#[utoipa::path(
    patch,
    path = "/users/me/password",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UpdatePassword,
    responses(
        (status = 202, description = "Password updated", body = Account),
        (status = 401, description = "Current password is incorrect")
    )
)]
pub async fn update_password(
    State(state): State<crate::AppState>,
    Authorized(claims, _): Authorized<Members>,
    ValidatedJson(dto): ValidatedJson<UpdatePassword>,
) -> AppResult<(StatusCode, Json<Account>)> {
    let account = state
        .services
        .accounts
        .update_password(claims.account_id(), &dto)
        .await?;
    Ok((StatusCode::ACCEPTED, Json(account)))
}
